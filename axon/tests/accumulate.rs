#![cfg(feature = "multi_thread")]

use axon::Signal;

fn one_two_three() -> Signal<(), i32> {
	let signal = Signal::new();
	drop(signal.connect(|_| 1));
	drop(signal.connect(|_| 2));
	drop(signal.connect(|_| 3));
	signal
}

#[test]
fn sum() {
	let signal = one_two_three();
	assert_eq!(signal.accumulate(0, |a, b| a + b).trigger(&()), 6);
}

#[test]
fn max() {
	let signal = one_two_three();
	assert_eq!(signal.accumulate(0, i32::max).trigger(&()), 3);
}

#[test]
fn left_fold_in_connection_order() {
	let signal = one_two_three();
	let digits = signal.accumulate(String::from(">"), |mut acc, b| {
		acc.push_str(&b.to_string());
		acc
	});
	assert_eq!(digits.trigger(&()), ">123");

	// Not commutative: ((100 - 1) - 2) - 3
	assert_eq!(signal.accumulate(100, |a, b| a - b).trigger(&()), 94);
}

#[test]
fn init_is_reused_per_trigger() {
	let signal = one_two_three();
	let sum = signal.accumulate(10, |a, b| a + b);
	assert_eq!(sum.trigger(&()), 16);
	assert_eq!(sum.trigger(&()), 16);
}

#[test]
fn without_slots_returns_init() {
	let signal = Signal::<(), i32>::new();
	assert_eq!(signal.accumulate(42, |a, b| a + b).trigger(&()), 42);
}

#[test]
fn skips_disconnected_slots() {
	let signal = Signal::<i32, i32>::new();
	let _double = signal.connect(|x| x * 2);
	let mut square = signal.connect(|x| x * x);
	let _negate = signal.connect(|x| -x);

	let collect = signal.accumulate(Vec::new(), |mut acc, b| {
		acc.push(b);
		acc
	});
	assert_eq!(collect.trigger(&3), [6, 9, -3]);

	square.disconnect();
	assert_eq!(collect.trigger(&3), [6, -3]);
}

#[test]
fn different_accumulator_type() {
	let signal = Signal::<str, bool>::new();
	let _empty = signal.connect(str::is_empty);
	let _ascii = signal.connect(|s| s.is_ascii());

	let count_true = signal.accumulate(0_usize, |count, b| count + usize::from(b));
	assert_eq!(count_true.trigger("abc"), 1);
	assert_eq!(count_true.trigger(""), 2);
}
