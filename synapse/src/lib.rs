#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![cfg_attr(feature = "_doc", doc = include_str!("../README.md"))]
//! Threading policies and type-erased disconnection backing `axon`.
//!
//! # Threading Notes
//!
//! Synchronisation is entirely delegated to [`ThreadingPolicy::RawMutex`](`policy::ThreadingPolicy::RawMutex`).
//! Types built on [`SingleThread`](`policy::SingleThread`) are neither [`Send`] nor [`Sync`].

pub mod disconnector;
pub mod policy;
