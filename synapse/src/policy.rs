//! Threading policies select how a signal synchronises access to its slots.
//!
//! [`MultiThread`] provides a usable default.

use core::{cell::Cell, marker::PhantomData};

use lock_api::{GuardNoSend, RawMutex};

/// A configuration bundle consisting of a raw mutex type and a cooperative yield operation.
///
/// The scoped lock type is [`lock_api::MutexGuard`] over [`ThreadingPolicy::RawMutex`].
///
/// # Threading
///
/// Types parameterised by a policy are [`Send`] and [`Sync`] **iff** its
/// [`RawMutex`](`ThreadingPolicy::RawMutex`) is both [`Send`] and [`Sync`].
pub trait ThreadingPolicy: 'static {
	/// The mutex guarding a signal's slot sequence.
	type RawMutex: RawMutex;

	/// Yields the current thread while waiting for another to release a resource.
	fn yield_now();
}

/// Thread-safe [`ThreadingPolicy`] backed by [`parking_lot::RawMutex`].
///
/// This is the recommended policy, even for programs that happen to be single-threaded.
#[cfg(feature = "multi_thread")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MultiThread;

#[cfg(feature = "multi_thread")]
impl ThreadingPolicy for MultiThread {
	type RawMutex = parking_lot::RawMutex;

	fn yield_now() {
		std::thread::yield_now();
	}
}

/// Unsynchronised [`ThreadingPolicy`].
///
/// Only use this if all access to a signal provably happens on one thread and the
/// atomic operations of [`MultiThread`] are measurable. The compiler enforces the former,
/// as everything parameterised by [`SingleThread`] is neither [`Send`] nor [`Sync`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SingleThread;

impl ThreadingPolicy for SingleThread {
	type RawMutex = UnsyncRawMutex;

	fn yield_now() {}
}

/// [`RawMutex`] for use on a single thread.
///
/// Locking is a plain flag check with no atomic operations.
///
/// # Panics
///
/// [`.lock()`](`RawMutex::lock`) panics if the mutex is already locked. On a single thread
/// that can only mean reentrant access, which would otherwise deadlock.
pub struct UnsyncRawMutex {
	locked: Cell<bool>,
	_not_send: PhantomData<*const ()>,
}

unsafe impl RawMutex for UnsyncRawMutex {
	#[allow(clippy::declare_interior_mutable_const)]
	const INIT: Self = Self {
		locked: Cell::new(false),
		_not_send: PhantomData,
	};

	type GuardMarker = GuardNoSend;

	#[track_caller]
	fn lock(&self) {
		assert!(
			self.try_lock(),
			"Reentrant lock of an `UnsyncRawMutex`. Slots must not connect to, disconnect from or trigger the signal that is calling them."
		);
	}

	fn try_lock(&self) -> bool {
		!self.locked.replace(true)
	}

	unsafe fn unlock(&self) {
		debug_assert!(self.locked.get(), "Unlocked an unlocked `UnsyncRawMutex`.");
		self.locked.set(false);
	}

	fn is_locked(&self) -> bool {
		self.locked.get()
	}
}
