use core::fmt::{self, Debug, Formatter};

use synapse::policy::ThreadingPolicy;

use crate::SignalTP;

/// A proxy that triggers a signal and folds the return values of its slots.
///
/// Created by [`SignalTP::accumulate`].
#[must_use = "Accumulators do nothing unless triggered."]
pub struct Accumulator<'a, A: ?Sized, R, TP: ThreadingPolicy, T, F> {
	signal: &'a SignalTP<A, R, TP>,
	init: T,
	op: F,
}

impl<A: ?Sized, R, TP: ThreadingPolicy, T: Debug, F> Debug for Accumulator<'_, A, R, TP, T, F> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Accumulator")
			.field("signal", self.signal)
			.field("init", &self.init)
			.finish_non_exhaustive()
	}
}

impl<'a, A: ?Sized, R, TP: ThreadingPolicy, T: Clone, F: Fn(T, R) -> T>
	Accumulator<'a, A, R, TP, T, F>
{
	pub(crate) fn new(signal: &'a SignalTP<A, R, TP>, init: T, op: F) -> Self {
		Self { signal, init, op }
	}

	/// Triggers the signal with `args` and returns
	/// `op(…op(op(init, slot_0(args)), slot_1(args))…, slot_n(args))`,
	/// over connected slots in connection order.
	///
	/// Each call starts over from a clone of `init`. Without connected slots, that clone is returned.
	pub fn trigger(&self, args: &A) -> T {
		self.signal.fold(self.init.clone(), &self.op, args)
	}
}
