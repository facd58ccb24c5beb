//! Browser bindings built on `web-sys`.
//!
//! [`lazyload`] is the one-call entry point: it enumerates the scope, registers a loader,
//! subscribes window `scroll`/`resize` listeners for it and reveals whatever is already in
//! view. Listeners are removed once the loader drains, or when the returned [`WebLoader`] is
//! dropped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use lazyload::{Document, LoaderOptions, LoaderState, ScrollMetrics};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, HtmlTextAreaElement, Window};

use crate::{Controller, Error, EventBinding, EventHost, Result, Signal};

type Listener = Closure<dyn FnMut()>;

/// A [`Document`] over the live page.
#[derive(Clone, Debug)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(window: Window) -> Result<Self> {
        let document = window.document().ok_or(Error::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|err| Error::Selector {
                selector: selector.to_string(),
                message: format!("{err:?}"),
            })?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn metrics(&self) -> ScrollMetrics {
        let root = self.document.document_element();
        ScrollMetrics {
            body_scroll_top: self.document.body().map(|b| b.scroll_top() as i64),
            document_scroll_top: root.as_ref().map(|r| r.scroll_top() as i64),
            page_y_offset: self.window.page_y_offset().ok().map(|y| y as i64),
            inner_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .map(|h| h.max(0.0) as u32),
            client_height: root.map(|r| r.client_height().max(0) as u32),
        }
    }

    fn offset_top(&self, el: &Element) -> i64 {
        el.dyn_ref::<HtmlElement>().map_or(0, |h| h.offset_top() as i64)
    }

    fn offset_parent(&self, el: &Element) -> Option<Element> {
        el.dyn_ref::<HtmlElement>()?.offset_parent()
    }

    fn has_tag(&self, el: &Element, tag: &str) -> bool {
        el.tag_name().eq_ignore_ascii_case(tag)
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn remove_class(&mut self, el: &Element, class: &str) {
        if let Err(err) = el.class_list().remove_1(class) {
            awarn!(class, ?err, "remove_class failed");
        }
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&mut self, el: &Element, name: &str, value: &str) {
        if let Err(err) = el.set_attribute(name, value) {
            awarn!(name, ?err, "set_attribute failed");
        }
    }

    fn remove_attribute(&mut self, el: &Element, name: &str) {
        if let Err(err) = el.remove_attribute(name) {
            awarn!(name, ?err, "remove_attribute failed");
        }
    }

    fn raw_markup(&self, el: &Element) -> String {
        match el.dyn_ref::<HtmlTextAreaElement>() {
            Some(area) => area.value(),
            None => el.inner_html(),
        }
    }

    fn hide(&mut self, el: &Element) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property("display", "none") {
            awarn!(?err, "hide failed");
        }
    }

    fn insert_markup_before(&mut self, el: &Element, markup: &str) {
        let div = match self.document.create_element("div") {
            Ok(div) => div,
            Err(err) => {
                awarn!(?err, "create_element failed");
                return;
            }
        };
        div.set_inner_html(markup);
        if let Err(err) = el.before_with_node_1(&div) {
            awarn!(?err, "insert_markup_before failed");
        }
    }

    fn remove(&mut self, el: &Element) {
        el.remove();
    }

    fn is_attached(&self, el: &Element) -> bool {
        el.is_connected()
    }
}

/// An [`EventHost`] over the window.
///
/// Each binding owns its own pair of closures, so removing one binding never touches another.
pub struct WebEventHost {
    window: Window,
    dispatch: Rc<dyn Fn(Signal)>,
    listeners: HashMap<String, Vec<(Signal, Listener)>>,
    // Closures removed from the window while one of them may still be on the stack.
    retired: Vec<Listener>,
}

impl WebEventHost {
    /// `dispatch` is called for every window event delivered under any live binding.
    pub fn new(window: Window, dispatch: Rc<dyn Fn(Signal)>) -> Self {
        Self {
            window,
            dispatch,
            listeners: HashMap::new(),
            retired: Vec::new(),
        }
    }

    fn detach(&mut self, listeners: Vec<(Signal, Listener)>) {
        for (signal, closure) in listeners {
            if let Err(err) = self.window.remove_event_listener_with_callback(
                signal.event_type(),
                closure.as_ref().unchecked_ref(),
            ) {
                awarn!(event = signal.event_type(), ?err, "remove listener failed");
            }
            self.retired.push(closure);
        }
    }
}

impl EventHost for WebEventHost {
    fn listen(&mut self, binding: &EventBinding) -> Result<()> {
        let mut added = Vec::with_capacity(Signal::ALL.len());
        for signal in Signal::ALL {
            let dispatch = Rc::clone(&self.dispatch);
            let closure = Listener::new(move || dispatch(signal));
            if let Err(err) = self.window.add_event_listener_with_callback(
                signal.event_type(),
                closure.as_ref().unchecked_ref(),
            ) {
                self.detach(added);
                return Err(Error::Listen {
                    event: binding.event_name(signal),
                    message: format!("{err:?}"),
                });
            }
            added.push((signal, closure));
        }
        self.listeners.insert(binding.namespace().to_string(), added);
        Ok(())
    }

    fn unlisten(&mut self, binding: &EventBinding) {
        if let Some(listeners) = self.listeners.remove(binding.namespace()) {
            self.detach(listeners);
        }
    }
}

impl Drop for WebEventHost {
    fn drop(&mut self) {
        let live: Vec<_> = self.listeners.drain().flat_map(|(_, l)| l).collect();
        self.detach(live);
    }
}

struct WebState {
    controller: Controller<Element>,
    document: WebDocument,
    host: WebEventHost,
}

/// A running loader bound to the page.
///
/// Dropping it removes any listeners still attached. Call [`WebLoader::forget`] to keep it
/// running for the lifetime of the page instead.
pub struct WebLoader {
    state: Rc<RefCell<WebState>>,
}

impl WebLoader {
    pub fn state(&self) -> LoaderState {
        self.state.borrow().controller.loader().state()
    }

    pub fn is_listening(&self) -> bool {
        self.state.borrow().controller.is_listening()
    }

    /// Leaks the loader so it keeps reacting to events without an owner.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Lazy-loads every candidate among the elements matching `selector`.
///
/// ```ignore
/// let options = LoaderOptions::new().with_placeholder_attr("data-src");
/// lazyload_adapter::web::lazyload("img, textarea", options)?.forget();
/// ```
pub fn lazyload(selector: &str, options: LoaderOptions<Element>) -> Result<WebLoader> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let mut document = WebDocument::new(window.clone())?;
    let scope = document.query(selector)?;
    let controller = Controller::new(&mut document, scope, options);

    let state = Rc::new_cyclic(|weak: &Weak<RefCell<WebState>>| {
        let weak = weak.clone();
        let dispatch: Rc<dyn Fn(Signal)> = Rc::new(move |signal| dispatch_signal(&weak, signal));
        RefCell::new(WebState {
            controller,
            document,
            host: WebEventHost::new(window, dispatch),
        })
    });

    {
        let mut guard = state.borrow_mut();
        let WebState {
            controller,
            document,
            host,
        } = &mut *guard;
        controller.start(document, host)?;
    }

    Ok(WebLoader { state })
}

fn dispatch_signal(weak: &Weak<RefCell<WebState>>, signal: Signal) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        awarn!(?signal, "loader busy, dropping signal");
        return;
    };
    let WebState {
        controller,
        document,
        host,
    } = &mut *guard;
    controller.on_signal(signal, document, host);
}
