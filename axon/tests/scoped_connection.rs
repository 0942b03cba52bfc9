#![cfg(feature = "multi_thread")]

use axon::{ScopedConnection, Signal};
use _validator::Validator;

#[test]
fn disconnects_on_drop() {
	static V: Validator<&str> = Validator::new();

	let signal = Signal::<()>::new();
	{
		let _scoped = ScopedConnection::new(signal.connect(|_| V.push("a")));
		signal.trigger(&());
		V.expect(["a"]);
	}

	signal.trigger(&());
	V.expect([]);
	assert!(signal.is_empty());
}

#[test]
fn connect_scoped() {
	static V: Validator<&str> = Validator::new();

	let signal = Signal::<()>::new();
	let scoped = signal.connect_scoped(|_| V.push("a"));
	assert!(scoped.connected());

	drop(scoped);
	signal.trigger(&());
	V.expect([]);
}

#[test]
fn release_prevents_disconnection() {
	static V: Validator<&str> = Validator::new();

	let signal = Signal::<()>::new();
	let mut scoped = signal.connect_scoped(|_| V.push("a"));

	let mut connection = scoped.release();
	assert!(!scoped.connected());
	assert!(connection.connected());
	drop(scoped);

	signal.trigger(&());
	V.expect(["a"]);

	connection.disconnect();
	signal.trigger(&());
	V.expect([]);
}

#[test]
fn reset_disconnects_previous() {
	static V: Validator<&str> = Validator::new();

	let signal = Signal::<()>::new();
	let mut scoped = signal.connect_scoped(|_| V.push("a"));

	scoped.reset(signal.connect(|_| V.push("b")));
	signal.trigger(&());
	V.expect(["b"]);

	scoped.clear();
	assert!(!scoped.connected());
	signal.trigger(&());
	V.expect([]);
	assert!(signal.is_empty());
}

#[test]
fn from_connection() {
	let signal = Signal::<()>::new();
	let scoped: ScopedConnection = signal.connect(|_| ()).into();
	assert!(scoped.connected());
	drop(scoped);
	assert!(signal.is_empty());
}

#[test]
fn outliving_the_signal() {
	let signal = Signal::<()>::new();
	let mut scoped = signal.connect_scoped(|_| ());

	drop(signal);
	assert!(!scoped.connected());
	scoped.disconnect();
	// The implicit drop is a no-op, too.
}

#[test]
fn default_is_disconnected() {
	let scoped = ScopedConnection::default();
	assert!(!scoped.connected());
}
