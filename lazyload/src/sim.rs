//! An in-memory [`Document`] for examples and tests.
//!
//! Elements live in an arena and are addressed by [`SimElement`] handles. Attached elements
//! form a single flat list in document order, which is enough to observe where revealed
//! markup lands.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{Document, ScrollMetrics};

/// A handle to an element of a [`SimDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimElement(usize);

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    value: String,
    inner_html: String,
    offset_top: i64,
    offset_parent: Option<SimElement>,
    hidden: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SimDocument {
    nodes: Vec<Node>,
    order: Vec<SimElement>,
    metrics: ScrollMetrics,
}

impl SimDocument {
    /// Creates an empty document with the given viewport height, scrolled to the top.
    pub fn new(viewport_height: u32) -> Self {
        Self {
            nodes: Vec::new(),
            order: Vec::new(),
            metrics: ScrollMetrics {
                page_y_offset: Some(0),
                inner_height: Some(viewport_height),
                ..ScrollMetrics::default()
            },
        }
    }

    /// Appends a new element with `tag` at the end of the document.
    pub fn append(&mut self, tag: &str) -> SimElement {
        let el = SimElement(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        self.order.push(el);
        el
    }

    /// Appends an `img` at `offset_top` carrying `attr="value"`.
    pub fn append_image(&mut self, offset_top: i64, attr: &str, value: &str) -> SimElement {
        let el = self.append("img");
        self.set_offset_top(el, offset_top);
        self.set_attribute(&el, attr, value);
        el
    }

    /// Appends a `textarea` at `offset_top` holding `markup`, with optional `class`.
    pub fn append_fragment(
        &mut self,
        offset_top: i64,
        class: Option<&str>,
        markup: &str,
    ) -> SimElement {
        let el = self.append("textarea");
        self.set_offset_top(el, offset_top);
        if let Some(class) = class {
            self.add_class(el, class);
        }
        self.nodes[el.0].value = markup.to_string();
        el
    }

    pub fn set_offset_top(&mut self, el: SimElement, offset_top: i64) {
        self.nodes[el.0].offset_top = offset_top;
    }

    pub fn set_offset_parent(&mut self, el: SimElement, parent: Option<SimElement>) {
        self.nodes[el.0].offset_parent = parent;
    }

    pub fn add_class(&mut self, el: SimElement, class: &str) {
        let classes = &mut self.nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    /// Scrolls the window to `y`.
    pub fn scroll_to(&mut self, y: i64) {
        self.metrics.page_y_offset = Some(y);
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        self.metrics.inner_height = Some(height);
    }

    /// Detaches `el` without revealing it.
    pub fn detach(&mut self, el: SimElement) {
        self.order.retain(|e| *e != el);
    }

    /// Attached elements in document order.
    pub fn children(&self) -> &[SimElement] {
        &self.order
    }

    pub fn previous_sibling(&self, el: SimElement) -> Option<SimElement> {
        let pos = self.order.iter().position(|e| *e == el)?;
        pos.checked_sub(1).map(|p| self.order[p])
    }

    pub fn tag(&self, el: SimElement) -> &str {
        &self.nodes[el.0].tag
    }

    pub fn inner_html(&self, el: SimElement) -> &str {
        &self.nodes[el.0].inner_html
    }

    pub fn is_hidden(&self, el: SimElement) -> bool {
        self.nodes[el.0].hidden
    }
}

impl Document for SimDocument {
    type Element = SimElement;

    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn offset_top(&self, el: &SimElement) -> i64 {
        self.nodes[el.0].offset_top
    }

    fn offset_parent(&self, el: &SimElement) -> Option<SimElement> {
        self.nodes[el.0].offset_parent
    }

    fn has_tag(&self, el: &SimElement, tag: &str) -> bool {
        self.nodes[el.0].tag.eq_ignore_ascii_case(tag)
    }

    fn has_class(&self, el: &SimElement, class: &str) -> bool {
        self.nodes[el.0].classes.iter().any(|c| c == class)
    }

    fn remove_class(&mut self, el: &SimElement, class: &str) {
        self.nodes[el.0].classes.retain(|c| c != class);
    }

    fn attribute(&self, el: &SimElement, name: &str) -> Option<String> {
        self.nodes[el.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, el: &SimElement, name: &str, value: &str) {
        self.nodes[el.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, el: &SimElement, name: &str) {
        self.nodes[el.0].attributes.remove(name);
    }

    fn raw_markup(&self, el: &SimElement) -> String {
        self.nodes[el.0].value.clone()
    }

    fn hide(&mut self, el: &SimElement) {
        self.nodes[el.0].hidden = true;
    }

    fn insert_markup_before(&mut self, el: &SimElement, markup: &str) {
        let Some(pos) = self.order.iter().position(|e| e == el) else {
            return;
        };
        let div = SimElement(self.nodes.len());
        self.nodes.push(Node {
            tag: "div".to_string(),
            inner_html: markup.to_string(),
            ..Node::default()
        });
        self.order.insert(pos, div);
    }

    fn remove(&mut self, el: &SimElement) {
        self.detach(*el);
    }

    fn is_attached(&self, el: &SimElement) -> bool {
        self.order.contains(el)
    }
}
