use core::fmt;

use crate::Result;

/// The single inbound signal a loader reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Scroll,
    Resize,
}

impl Signal {
    pub const ALL: [Signal; 2] = [Signal::Scroll, Signal::Resize];

    /// The DOM event type, e.g. `scroll`.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// A per-instance pair of namespaced scroll/resize listener registrations.
///
/// Two bindings with different namespaces can be added and removed independently, even though
/// they listen for the same window events.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventBinding {
    namespace: String,
}

impl EventBinding {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The namespaced event name for `signal`, e.g. `scroll.lazyload-3`.
    pub fn event_name(&self, signal: Signal) -> String {
        format!("{}.{}", signal.event_type(), self.namespace)
    }

    pub fn event_names(&self) -> impl Iterator<Item = String> + '_ {
        Signal::ALL.into_iter().map(|s| self.event_name(s))
    }
}

impl fmt::Display for EventBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.namespace)
    }
}

/// Where loaders subscribe for scroll/resize signals (typically the window).
///
/// `listen` subscribes every signal in [`Signal::ALL`] under the binding; `unlisten` removes
/// exactly the listeners added under that binding and leaves other bindings alone.
pub trait EventHost {
    fn listen(&mut self, binding: &EventBinding) -> Result<()>;

    fn unlisten(&mut self, binding: &EventBinding);
}
