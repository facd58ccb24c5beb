use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identity of a loader instance.
///
/// Ids are unique within the process and are used to scope event bindings, so that several
/// loaders on one page can subscribe and unsubscribe independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CandidateKind {
    /// An image whose real source sits in the placeholder attribute.
    Image,
    /// A container holding raw markup that replaces it on reveal.
    Fragment,
}

/// An element registered for deferred reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<E> {
    pub element: E,
    /// Offset from the document top, computed once at registration.
    pub target_y: i64,
    pub kind: CandidateKind,
}

/// The visible vertical band used by the membership test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_y: i64,
    pub height: u32,
}

/// Raw scroll geometry as reported by the host.
///
/// Browsers disagree on which of these is populated, so every field is optional and
/// [`ScrollMetrics::viewport`] reconciles them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub body_scroll_top: Option<i64>,
    pub document_scroll_top: Option<i64>,
    pub page_y_offset: Option<i64>,
    pub inner_height: Option<u32>,
    pub client_height: Option<u32>,
}

impl ScrollMetrics {
    /// Resolves the scroll position (maximum of the reported values, 0 if none) and the
    /// viewport height (inner height, else client height, else 0).
    pub fn viewport(&self) -> Viewport {
        let scroll_y = [
            self.body_scroll_top,
            self.document_scroll_top,
            self.page_y_offset,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);
        let height = self
            .inner_height
            .filter(|h| *h > 0)
            .or(self.client_height)
            .unwrap_or(0);
        Viewport { scroll_y, height }
    }
}
