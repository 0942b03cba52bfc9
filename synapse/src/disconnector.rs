//! Type-erased disconnection, and waiting out in-flight disconnections during teardown.
//!
//! A signal hands out [`Weak`](`std::sync::Weak`) references to one shared [`Disconnector`].
//! Upgrading such a reference is what makes a disconnection "in flight".

use core::sync::atomic::{fence, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::policy::ThreadingPolicy;

/// Disconnects slots of one specific signal by index, without exposing the signal's type.
///
/// # Logic
///
/// Implementations **must** tolerate being called concurrently with the signal's teardown
/// as long as the calling thread holds a strong reference to the [`Disconnector`],
/// and **must not** be reachable through a strong reference once [`release_and_wait`]
/// returned for that signal.
pub trait Disconnector {
	/// Clears the slot at `index`.
	///
	/// # Panics
	///
	/// Iff `index` is out of bounds for the bound signal. This is a logic error in the caller.
	fn disconnect(&self, index: usize);
}

/// Drops `strong`, then blocks until no strong reference to its pointee remains anywhere.
///
/// Between checks, the current thread yields according to `TP`.
///
/// **Returns** the number of yields that were necessary.
///
/// # Threading
///
/// After this function returns, all memory accesses made by other threads while they held
/// a strong reference happen-before the caller's subsequent accesses.
///
/// This function hangs if another thread never releases its strong reference.
pub fn release_and_wait<TP: ThreadingPolicy, T: ?Sized>(strong: Arc<T>) -> usize {
	let weak = Arc::downgrade(&strong);
	drop(strong);

	let mut yields = 0_usize;
	while weak.strong_count() > 0 {
		TP::yield_now();
		yields += 1;
	}
	// Pairs with the `Release` decrement in `Arc::drop`.
	fence(Ordering::Acquire);

	if yields > 0 {
		debug!(yields, "waited for in-flight disconnections");
	}
	yields
}
