//! Adapter utilities for the `lazyload` crate.
//!
//! The `lazyload` crate is UI-agnostic and only scans and reveals. This crate provides the
//! event plumbing around it:
//!
//! - Namespaced per-instance scroll/resize bindings ([`EventBinding`], [`EventHost`])
//! - A [`Controller`] that subscribes, scans on every signal and unsubscribes once drained
//! - Browser bindings over `web-sys` (`feature = "web"`)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod error;
mod events;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use error::{Error, Result};
pub use events::{EventBinding, EventHost, Signal};
