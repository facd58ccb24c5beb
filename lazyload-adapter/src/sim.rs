//! A recording [`EventHost`] for examples and tests.

use std::collections::BTreeSet;

use crate::{Error, EventBinding, EventHost, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Listen(String),
    Unlisten(String),
}

/// Keeps the set of live namespaced listeners and a log of every call.
#[derive(Clone, Debug, Default)]
pub struct SimEventHost {
    active: BTreeSet<String>,
    calls: Vec<HostCall>,
    reject: Option<String>,
}

impl SimEventHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `listen` fail with `message`.
    pub fn reject_next_listen(&mut self, message: impl Into<String>) {
        self.reject = Some(message.into());
    }

    /// Live event names, e.g. `resize.lazyload-1`.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn is_listening(&self, binding: &EventBinding) -> bool {
        binding.event_names().all(|name| self.active.contains(&name))
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn unlisten_count(&self, binding: &EventBinding) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Unlisten(ns) if ns == binding.namespace()))
            .count()
    }
}

impl EventHost for SimEventHost {
    fn listen(&mut self, binding: &EventBinding) -> Result<()> {
        if let Some(message) = self.reject.take() {
            return Err(Error::Listen {
                event: binding.event_name(crate::Signal::Scroll),
                message,
            });
        }
        self.calls.push(HostCall::Listen(binding.namespace().to_string()));
        self.active.extend(binding.event_names());
        Ok(())
    }

    fn unlisten(&mut self, binding: &EventBinding) {
        self.calls.push(HostCall::Unlisten(binding.namespace().to_string()));
        for name in binding.event_names() {
            self.active.remove(&name);
        }
    }
}
