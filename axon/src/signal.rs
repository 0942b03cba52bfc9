use core::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
	mem,
	ptr::NonNull,
};
use std::sync::Arc;

use lock_api::Mutex;
use synapse::{
	disconnector::{release_and_wait, Disconnector},
	policy::ThreadingPolicy,
};
use tracing::trace;

use crate::{Accumulator, ConnectionTP, ScopedConnectionTP};

type Slot<A, R> = Box<dyn FnMut(&A) -> R + Send>;

type Inner<A, R, TP> = Mutex<<TP as ThreadingPolicy>::RawMutex, State<A, R>>;

struct State<A: ?Sized, R> {
	/// `None` entries are tombstones. The last entry, if any, is never a tombstone.
	slots: Vec<Option<Slot<A, R>>>,
	/// Created on first connect. Taken only by [`SignalTP`]'s [`Drop`] implementation.
	disconnector: Option<Arc<dyn Disconnector>>,
}

impl<A: ?Sized, R> State<A, R> {
	const fn new() -> Self {
		Self {
			slots: Vec::new(),
			disconnector: None,
		}
	}

	/// Returns the removed slot, which must be dropped only after unlocking.
	/// (Its captures may disconnect other slots of this signal.)
	///
	/// Trimmed entries are all tombstones.
	fn disconnect(&mut self, index: usize) -> Option<Slot<A, R>> {
		assert!(
			index < self.slots.len(),
			"Tried to disconnect slot {index} of {}. Connections should never outlive their slot index.",
			self.slots.len()
		);
		let removed = self.slots[index].take();

		let len = self.slots.len();
		while matches!(self.slots.last(), Some(None)) {
			self.slots.pop();
		}
		trace!(index, trimmed = len - self.slots.len(), "disconnected slot");
		removed
	}
}

/// The [`Disconnector`] shared by all connections of one signal.
///
/// Its [`Arc`] never owns `inner`.
struct SignalDisconnector<A: ?Sized, R, TP: ThreadingPolicy> {
	inner: NonNull<Inner<A, R, TP>>,
}

impl<A: ?Sized, R, TP: ThreadingPolicy> Disconnector for SignalDisconnector<A, R, TP> {
	fn disconnect(&self, index: usize) {
		//SAFETY: `SignalTP::drop` frees `inner` only once no strong reference to `self` remains.
		let inner = unsafe { self.inner.as_ref() };
		let removed = inner.lock().disconnect(index);
		drop(removed);
	}
}

/// An ordered multicast emitter.
///
/// Slots are called with `&A` in the order they were connected and may return `R`.
/// `A` can be unsized, so `SignalTP<str, _, _>` passes `&str` to its slots.
///
/// Use the [`Signal`](`crate::Signal`) or [`UnsyncSignal`](`crate::UnsyncSignal`) aliases
/// unless you need to be generic over the [`ThreadingPolicy`].
///
/// # Threading
///
/// [`.connect`](`SignalTP::connect`), [`.trigger`](`SignalTP::trigger`), triggering an
/// [`Accumulator`] and disconnecting are mutually exclusive on one signal. Slots run while the
/// signal is locked, so a slot **must not** connect to, disconnect from or trigger the signal
/// that called it. (This deadlocks with [`MultiThread`](`crate::MultiThread`) and panics with
/// [`SingleThread`](`crate::SingleThread`).)
///
/// Dropping a signal blocks until disconnections that are in progress on other threads finish.
pub struct SignalTP<A: ?Sized, R, TP: ThreadingPolicy> {
	inner: NonNull<Inner<A, R, TP>>,
	_owned: PhantomData<Box<Inner<A, R, TP>>>,
}

//SAFETY: All access to `inner` is serialised by `TP::RawMutex` and slots are `Send`.
unsafe impl<A: ?Sized, R, TP: ThreadingPolicy> Send for SignalTP<A, R, TP> where
	TP::RawMutex: Send + Sync
{
}
unsafe impl<A: ?Sized, R, TP: ThreadingPolicy> Sync for SignalTP<A, R, TP> where
	TP::RawMutex: Send + Sync
{
}

impl<A: ?Sized, R, TP: ThreadingPolicy> Default for SignalTP<A, R, TP> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: ?Sized, R, TP: ThreadingPolicy> Debug for SignalTP<A, R, TP> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut debug = f.debug_struct("SignalTP");
		// Don't block (or panic) when formatted from within a slot.
		match self.inner().try_lock() {
			Some(state) => debug.field("slot_count", &state.slots.len()),
			None => debug.field("slot_count", &format_args!("<locked>")),
		};
		debug.finish_non_exhaustive()
	}
}

impl<A: ?Sized, R, TP: ThreadingPolicy> SignalTP<A, R, TP> {
	/// Creates a new [`SignalTP`] without any slots.
	#[must_use]
	pub fn new() -> Self {
		Self {
			inner: NonNull::from(Box::leak(Box::new(Mutex::new(State::new())))),
			_owned: PhantomData,
		}
	}

	fn inner(&self) -> &Inner<A, R, TP> {
		//SAFETY: Freed only in `drop`.
		unsafe { self.inner.as_ref() }
	}

	/// Connects a new slot, which will be called each time this signal is triggered.
	///
	/// **Dropping the returned [`ConnectionTP`] does not disconnect the slot.**
	/// Use [`.connect_scoped`](`SignalTP::connect_scoped`) for that.
	pub fn connect(&self, slot: impl 'static + Send + FnMut(&A) -> R) -> ConnectionTP<TP>
	where
		A: 'static,
		R: 'static,
	{
		let slot: Slot<A, R> = Box::new(slot);
		let mut state = self.inner().lock();
		state.slots.push(Some(slot));
		let index = state.slots.len() - 1;

		let inner = self.inner;
		let disconnector = state.disconnector.get_or_insert_with(|| {
			Arc::new(SignalDisconnector::<A, R, TP> { inner }) as Arc<dyn Disconnector>
		});
		trace!(index, "connected slot");
		ConnectionTP::new(Arc::downgrade(disconnector), index)
	}

	/// Like [`.connect`](`SignalTP::connect`), but the slot is disconnected when the returned
	/// [`ScopedConnectionTP`] is dropped.
	pub fn connect_scoped(
		&self,
		slot: impl 'static + Send + FnMut(&A) -> R,
	) -> ScopedConnectionTP<TP>
	where
		A: 'static,
		R: 'static,
	{
		ScopedConnectionTP::new(self.connect(slot))
	}

	/// Calls each connected slot with `args`, in connection order.
	///
	/// Return values of the slots are discarded.
	/// Triggering a signal without slots does nothing.
	///
	/// # Panics
	///
	/// Iff a slot panics. The signal remains usable afterwards.
	pub fn trigger(&self, args: &A) {
		let mut state = self.inner().lock();
		for slot in state.slots.iter_mut().flatten() {
			slot(args);
		}
	}

	/// Creates an [`Accumulator`] that triggers this signal and left-folds the slot return
	/// values into `init` using `op`.
	///
	/// This is rejected at compile time if `R` is zero-sized (like `()`), as there would be
	/// nothing to accumulate:
	///
	/// ```compile_fail
	/// use axon::Signal;
	///
	/// let signal = Signal::<()>::new();
	/// signal.accumulate(0, |acc: i32, (): ()| acc).trigger(&());
	/// ```
	///
	/// # Threading
	///
	/// `op` runs while this signal is locked, with the same restrictions as slots.
	pub fn accumulate<T: Clone, F: Fn(T, R) -> T>(
		&self,
		init: T,
		op: F,
	) -> Accumulator<'_, A, R, TP, T, F> {
		const {
			assert!(
				mem::size_of::<R>() != 0,
				"Unable to accumulate slots with a zero-sized return type."
			);
		}
		Accumulator::new(self, init, op)
	}

	pub(crate) fn fold<T>(&self, init: T, mut op: impl FnMut(T, R) -> T, args: &A) -> T {
		let mut state = self.inner().lock();
		state
			.slots
			.iter_mut()
			.flatten()
			.fold(init, |acc, slot| op(acc, slot(args)))
	}

	/// The length of the internal slot sequence, including tombstones of disconnected slots
	/// that are still followed by a connected one.
	#[must_use]
	pub fn slot_count(&self) -> usize {
		self.inner().lock().slots.len()
	}

	/// Whether no slots are connected.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		// Trailing tombstones are always trimmed.
		self.inner().lock().slots.is_empty()
	}
}

impl<A: ?Sized, R, TP: ThreadingPolicy> Drop for SignalTP<A, R, TP> {
	fn drop(&mut self) {
		// Don't wait while locked: In-flight disconnections need the lock to finish.
		let disconnector = self.inner().lock().disconnector.take();
		if let Some(disconnector) = disconnector {
			release_and_wait::<TP, _>(disconnector);
		}

		//SAFETY: No strong reference to the `SignalDisconnector` remains and none can be created,
		//        so nothing else can reach `inner` anymore.
		drop(unsafe { Box::from_raw(self.inner.as_ptr()) });
	}
}
