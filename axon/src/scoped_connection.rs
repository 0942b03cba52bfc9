use core::{
	fmt::{self, Debug, Formatter},
	mem,
};

use synapse::policy::ThreadingPolicy;

use crate::ConnectionTP;

/// Owns a [`ConnectionTP`] and disconnects it when dropped.
#[must_use = "Scoped connections disconnect when dropped."]
pub struct ScopedConnectionTP<TP: ThreadingPolicy> {
	connection: ConnectionTP<TP>,
}

impl<TP: ThreadingPolicy> Default for ScopedConnectionTP<TP> {
	fn default() -> Self {
		Self::new(ConnectionTP::default())
	}
}

impl<TP: ThreadingPolicy> Debug for ScopedConnectionTP<TP> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ScopedConnectionTP")
			.field(&self.connection)
			.finish()
	}
}

impl<TP: ThreadingPolicy> From<ConnectionTP<TP>> for ScopedConnectionTP<TP> {
	fn from(connection: ConnectionTP<TP>) -> Self {
		Self::new(connection)
	}
}

impl<TP: ThreadingPolicy> Drop for ScopedConnectionTP<TP> {
	fn drop(&mut self) {
		self.connection.disconnect();
	}
}

impl<TP: ThreadingPolicy> ScopedConnectionTP<TP> {
	/// Takes ownership of `connection`.
	pub fn new(connection: ConnectionTP<TP>) -> Self {
		Self { connection }
	}

	/// Disconnects the currently held connection, then holds `connection` instead.
	pub fn reset(&mut self, connection: ConnectionTP<TP>) {
		self.connection.disconnect();
		self.connection = connection;
	}

	/// Disconnects the currently held connection and holds nothing afterwards.
	pub fn clear(&mut self) {
		self.reset(ConnectionTP::default());
	}

	/// Gives up ownership of the held connection **without** disconnecting it.
	///
	/// Afterwards, this [`ScopedConnectionTP`] holds nothing.
	#[must_use = "The slot can't be disconnected anymore if the released connection is dropped."]
	pub fn release(&mut self) -> ConnectionTP<TP> {
		mem::take(&mut self.connection)
	}

	/// Whether the held connection is still connected.
	#[must_use]
	pub fn connected(&self) -> bool {
		self.connection.connected()
	}

	/// Disconnects the held connection early.
	///
	/// **Idempotent.**
	pub fn disconnect(&mut self) {
		self.connection.disconnect();
	}
}
