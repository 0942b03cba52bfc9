#![cfg(feature = "multi_thread")]

use axon::Signal;

#[test]
fn trigger_without_slots() {
	let signal = Signal::<()>::default();
	assert!(signal.is_empty());
	signal.trigger(&());
	assert_eq!(signal.slot_count(), 0);
}

#[test]
fn all_disconnected_settles_to_zero() {
	let signal = Signal::<()>::new();
	let mut connections: Vec<_> = (0..5).map(|_| signal.connect(|_| ())).collect();

	// Front to back leaves tombstones until the last one goes.
	for (i, connection) in connections.iter_mut().enumerate() {
		assert_eq!(signal.slot_count(), 5);
		assert!(!signal.is_empty(), "{i}");
		connection.disconnect();
	}
	assert_eq!(signal.slot_count(), 0);
	assert!(signal.is_empty());
	signal.trigger(&());
}

#[test]
fn back_to_front_trims_each_time() {
	let signal = Signal::<()>::new();
	let connections: Vec<_> = (0..5).map(|_| signal.connect(|_| ())).collect();

	for (remaining, mut connection) in connections.into_iter().enumerate().rev() {
		connection.disconnect();
		assert_eq!(signal.slot_count(), remaining);
	}
	assert!(signal.is_empty());
}

#[test]
fn drop_without_connections() {
	drop(Signal::<(), u8>::new());
}
