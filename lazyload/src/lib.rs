//! A headless viewport lazy loader.
//!
//! Defers images (real source parked in a placeholder attribute) and held markup fragments
//! until they scroll near the viewport, then reveals them and drops them from the pending set.
//!
//! For listener bookkeeping and browser bindings, see the `lazyload-adapter` crate.
//!
//! It is UI-agnostic. A host layer is expected to provide, through [`Document`]:
//! - element offsets (offset-top and offset-parent chain)
//! - scroll position and viewport height
//! - the handful of DOM mutations a reveal performs
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod document;
pub mod geometry;
mod loader;
mod options;
mod state;
mod types;

#[cfg(any(test, feature = "sim"))]
pub mod sim;


pub use document::Document;
pub use loader::LazyLoader;
pub use options::{
    DEFAULT_EVENT_NAMESPACE, DEFAULT_FRAGMENT_CLASS, DEFAULT_PLACEHOLDER_ATTR, LoaderOptions,
    LoaderSettings, Mode, OnRevealCallback, RevealFilter,
};
pub use state::{LoaderState, ScanReport};
pub use types::{Candidate, CandidateKind, InstanceId, ScrollMetrics, Viewport};
