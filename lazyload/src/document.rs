use alloc::string::String;

use crate::ScrollMetrics;

/// The host document a loader reads geometry from and reveals into.
///
/// The loader never holds UI objects of its own: adapters implement this trait over a real DOM
/// (see `lazyload-adapter`'s `web` feature) or a simulation ([`crate::sim::SimDocument`] with
/// `feature = "sim"`).
///
/// Mutations are infallible from the loader's point of view. An implementation that can fail
/// (e.g. a JS exception) is expected to log and carry on.
pub trait Document {
    type Element: Clone;

    /// Current scroll position and viewport size.
    fn metrics(&self) -> ScrollMetrics;

    /// Offset of `el` from the top of its offset parent.
    fn offset_top(&self, el: &Self::Element) -> i64;

    /// The nearest positioned ancestor, or `None` at the top of the chain.
    fn offset_parent(&self, el: &Self::Element) -> Option<Self::Element>;

    /// Whether `el` is of element type `tag` (ASCII case-insensitive).
    fn has_tag(&self, el: &Self::Element, tag: &str) -> bool;

    fn has_class(&self, el: &Self::Element, class: &str) -> bool;

    fn remove_class(&mut self, el: &Self::Element, class: &str);

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, el: &Self::Element, name: &str, value: &str);

    fn remove_attribute(&mut self, el: &Self::Element, name: &str);

    /// The raw markup held by a fragment container (e.g. a textarea's value).
    fn raw_markup(&self, el: &Self::Element) -> String;

    fn hide(&mut self, el: &Self::Element);

    /// Inserts `markup` as a new sibling immediately before `el`.
    fn insert_markup_before(&mut self, el: &Self::Element, markup: &str);

    /// Detaches `el` from the document.
    fn remove(&mut self, el: &Self::Element);

    fn is_attached(&self, el: &Self::Element) -> bool;
}
