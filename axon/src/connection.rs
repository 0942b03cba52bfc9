use core::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
};
use std::sync::Weak;

use synapse::{disconnector::Disconnector, policy::ThreadingPolicy};

/// A handle to one connected slot, which can disconnect it later.
///
/// Only [`SignalTP::connect`](`crate::SignalTP::connect`) creates connected [`ConnectionTP`]s.
/// [`ConnectionTP::default()`] is never connected.
///
/// Dropping a [`ConnectionTP`] does **not** disconnect the slot.
/// Wrap it in a [`ScopedConnectionTP`](`crate::ScopedConnectionTP`) for that.
///
/// Connections can outlive their signal, after which they are simply disconnected.
pub struct ConnectionTP<TP: ThreadingPolicy> {
	disconnector: Option<Weak<dyn Disconnector>>,
	index: usize,
	_policy: PhantomData<TP>,
}

//SAFETY: The disconnector only reaches its signal through `TP::RawMutex`.
unsafe impl<TP: ThreadingPolicy> Send for ConnectionTP<TP> where TP::RawMutex: Send + Sync {}
unsafe impl<TP: ThreadingPolicy> Sync for ConnectionTP<TP> where TP::RawMutex: Send + Sync {}

impl<TP: ThreadingPolicy> Default for ConnectionTP<TP> {
	fn default() -> Self {
		Self {
			disconnector: None,
			index: 0,
			_policy: PhantomData,
		}
	}
}

impl<TP: ThreadingPolicy> Debug for ConnectionTP<TP> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConnectionTP")
			.field("index", &self.index)
			.field("connected", &self.connected())
			.finish()
	}
}

impl<TP: ThreadingPolicy> ConnectionTP<TP> {
	pub(crate) fn new(disconnector: Weak<dyn Disconnector>, index: usize) -> Self {
		Self {
			disconnector: Some(disconnector),
			index,
			_policy: PhantomData,
		}
	}

	/// Whether the slot is still connected, i.e. neither this connection was disconnected nor
	/// the signal dropped.
	#[must_use]
	pub fn connected(&self) -> bool {
		self.disconnector
			.as_ref()
			.is_some_and(|disconnector| disconnector.strong_count() > 0)
	}

	/// Disconnects the slot, so that it isn't called anymore when the signal is triggered.
	///
	/// **Idempotent.** Does nothing if the signal was already dropped.
	///
	/// # Threading
	///
	/// This blocks while the signal is being triggered, and **must not** be called from within a
	/// slot of the same signal. A concurrent drop of the signal waits for this call to finish.
	pub fn disconnect(&mut self) {
		if let Some(disconnector) = self.disconnector.take().and_then(|weak| weak.upgrade()) {
			disconnector.disconnect(self.index);
		}
	}
}
