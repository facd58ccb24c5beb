use crate::{Document, Viewport};

/// Cumulative offset of `el` from the top of the document.
///
/// Walks the offset-parent chain and sums each step's offset within its parent.
pub fn target_y<D: Document + ?Sized>(doc: &D, el: &D::Element) -> i64 {
    let mut y = doc.offset_top(el);
    let mut cur = doc.offset_parent(el);
    while let Some(parent) = cur {
        y = y.saturating_add(doc.offset_top(&parent));
        cur = doc.offset_parent(&parent);
    }
    y
}

/// Coarse "near or within the viewport" test.
///
/// True iff the distance between `target_y` and the scroll position is less than the viewport
/// height. The element's own height is not considered, so a tall element starting well above
/// the fold is reported as outside.
pub fn is_within_viewport(target_y: i64, viewport: Viewport) -> bool {
    target_y.abs_diff(viewport.scroll_y) < viewport.height as u64
}
