#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![cfg_attr(feature = "_doc", doc = include_str!("../README.md"))]
//! Signals and slots with safe disconnection across threads.
//!
//! ```
//! use axon::Signal;
//!
//! let signal = Signal::<str, usize>::new();
//! let _len = signal.connect(|text| text.len());
//! let words = signal.connect_scoped(|text| text.split_whitespace().count());
//!
//! assert_eq!(signal.accumulate(0, |a, b| a + b).trigger("hello signals"), 15);
//!
//! drop(words);
//! assert_eq!(signal.accumulate(0, |a, b| a + b).trigger("hello signals"), 13);
//! ```

mod accumulator;
pub use accumulator::Accumulator;

mod connection;
pub use connection::ConnectionTP;

mod scoped_connection;
pub use scoped_connection::ScopedConnectionTP;

mod signal;
pub use signal::SignalTP;

#[cfg(feature = "multi_thread")]
pub use synapse::policy::MultiThread;
pub use synapse::policy::{SingleThread, ThreadingPolicy};

/// Type inference helper alias for [`SignalTP`] (using [`MultiThread`]).
///
/// This is the recommended signal type, even in single-threaded programs.
#[cfg(feature = "multi_thread")]
pub type Signal<A, R = ()> = SignalTP<A, R, MultiThread>;

/// Type inference helper alias for [`ConnectionTP`] (using [`MultiThread`]).
#[cfg(feature = "multi_thread")]
pub type Connection = ConnectionTP<MultiThread>;

/// Type inference helper alias for [`ScopedConnectionTP`] (using [`MultiThread`]).
#[cfg(feature = "multi_thread")]
pub type ScopedConnection = ScopedConnectionTP<MultiThread>;

/// Type inference helper alias for [`SignalTP`] (using [`SingleThread`]).
///
/// Neither [`Send`] nor [`Sync`]. Only use this where [`Signal`]'s locking is measurably too slow.
pub type UnsyncSignal<A, R = ()> = SignalTP<A, R, SingleThread>;

/// Type inference helper alias for [`ConnectionTP`] (using [`SingleThread`]).
pub type UnsyncConnection = ConnectionTP<SingleThread>;

/// Type inference helper alias for [`ScopedConnectionTP`] (using [`SingleThread`]).
pub type UnsyncScopedConnection = ScopedConnectionTP<SingleThread>;
