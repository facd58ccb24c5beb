use crate::sim::{HostCall, SimEventHost};
use crate::*;

use lazyload::sim::{SimDocument, SimElement};
use lazyload::{Document, LoaderOptions};

fn options() -> LoaderOptions<SimElement> {
    LoaderOptions::new().with_placeholder_attr("data-src")
}

#[test]
fn binding_names_are_namespaced() {
    let b = EventBinding::new("lazyload-7");
    assert_eq!(b.event_name(Signal::Scroll), "scroll.lazyload-7");
    assert_eq!(
        b.event_names().collect::<Vec<_>>(),
        ["scroll.lazyload-7", "resize.lazyload-7"]
    );
    assert_eq!(b.to_string(), "lazyload-7");
}

#[test]
fn controller_binding_follows_loader_namespace() {
    let mut doc = SimDocument::new(800);
    let c = Controller::new(&mut doc, Vec::new(), options().with_event_namespace("gallery"));
    assert_eq!(c.binding().namespace(), c.loader().namespace());
    assert!(c.binding().namespace().starts_with("gallery-"));
    assert!(!c.is_listening());
}

#[test]
fn eager_scan_reveals_above_the_fold_and_keeps_listening() {
    let mut doc = SimDocument::new(800);
    let top = doc.append_image(0, "data-src", "top.png");
    doc.append_image(5000, "data-src", "below.png");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    let mut c = Controller::new(&mut doc, scope, options());

    let report = c.start(&mut doc, &mut host).unwrap();

    assert_eq!(report.images_revealed, 1);
    assert_eq!(doc.attribute(&top, "src").as_deref(), Some("top.png"));
    assert!(c.is_listening());
    assert!(host.is_listening(c.binding()));
    assert_eq!(host.unlisten_count(c.binding()), 0);
}

#[test]
fn draining_unlistens_exactly_once() {
    let mut doc = SimDocument::new(800);
    let img = doc.append_image(2000, "data-src", "a.png");
    doc.append_fragment(2100, Some(lazyload::DEFAULT_FRAGMENT_CLASS), "<p>x</p>");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    let mut c = Controller::new(&mut doc, scope, options());
    c.start(&mut doc, &mut host).unwrap();
    assert!(c.is_listening());

    doc.scroll_to(2000);
    let report = c.on_signal(Signal::Scroll, &mut doc, &mut host);
    assert!(report.drained);
    assert_eq!(doc.attribute(&img, "src").as_deref(), Some("a.png"));
    assert!(!c.is_listening());
    assert_eq!(host.active().count(), 0);

    // Stray signals after draining must not unlisten again.
    c.on_signal(Signal::Resize, &mut doc, &mut host);
    c.on_signal(Signal::Scroll, &mut doc, &mut host);
    assert_eq!(host.unlisten_count(c.binding()), 1);
    assert_eq!(
        host.calls(),
        [
            HostCall::Listen(c.binding().namespace().to_string()),
            HostCall::Unlisten(c.binding().namespace().to_string()),
        ]
    );
}

#[test]
fn start_that_drains_immediately_unlistens() {
    let mut doc = SimDocument::new(800);
    doc.append_image(10, "data-src", "a.png");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    let mut c = Controller::new(&mut doc, scope, options());

    let report = c.start(&mut doc, &mut host).unwrap();

    assert!(report.drained);
    assert!(!c.is_listening());
    assert_eq!(host.unlisten_count(c.binding()), 1);
}

#[test]
fn detached_candidates_do_not_block_unlisten() {
    let mut doc = SimDocument::new(800);
    let a = doc.append_image(0, "data-src", "a.png");
    let b = doc.append_image(3000, "data-src", "b.png");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    let mut c = Controller::new(&mut doc, scope, options());
    c.start(&mut doc, &mut host).unwrap();
    assert_eq!(doc.attribute(&a, "src").as_deref(), Some("a.png"));
    assert!(c.is_listening());

    doc.detach(b);
    for y in (0..=10_000).step_by(500) {
        doc.scroll_to(y);
        c.on_signal(Signal::Scroll, &mut doc, &mut host);
    }

    assert!(!c.is_listening());
    assert_eq!(c.loader().pending_len(), 0);
    assert_eq!(host.unlisten_count(c.binding()), 1);
    assert_eq!(host.active().count(), 0);
    assert_eq!(doc.attribute(&b, "src"), None);
}

#[test]
fn resize_brings_candidates_into_view() {
    let mut doc = SimDocument::new(400);
    let img = doc.append_image(600, "data-src", "a.png");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    let mut c = Controller::new(&mut doc, scope, options());
    c.start(&mut doc, &mut host).unwrap();
    assert_eq!(doc.attribute(&img, "src"), None);

    doc.set_viewport_height(1000);
    let report = c.on_signal(Signal::Resize, &mut doc, &mut host);

    assert_eq!(report.images_revealed, 1);
    assert!(!c.is_listening());
}

#[test]
fn independent_instances_do_not_interfere() {
    let mut doc = SimDocument::new(800);
    let a = doc.append_image(0, "data-src", "a.png");
    let b = doc.append_image(3000, "data-src", "b.png");
    let mut host = SimEventHost::new();
    let mut first = Controller::new(&mut doc, [a], options());
    let mut second = Controller::new(&mut doc, [b], options());
    assert_ne!(first.binding(), second.binding());

    first.start(&mut doc, &mut host).unwrap();
    second.start(&mut doc, &mut host).unwrap();

    assert!(!first.is_listening());
    assert!(second.is_listening());
    assert!(host.is_listening(second.binding()));
    assert_eq!(host.unlisten_count(second.binding()), 0);
    assert_eq!(second.loader().pending_images().len(), 1);
    assert_eq!(doc.attribute(&b, "data-src").as_deref(), Some("b.png"));

    doc.scroll_to(3000);
    second.on_signal(Signal::Scroll, &mut doc, &mut host);
    assert!(!second.is_listening());
    assert_eq!(host.unlisten_count(first.binding()), 1);
    assert_eq!(host.unlisten_count(second.binding()), 1);
}

#[test]
fn starting_twice_is_rejected() {
    let mut doc = SimDocument::new(800);
    doc.append_image(5000, "data-src", "a.png");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    let mut c = Controller::new(&mut doc, scope, options());
    c.start(&mut doc, &mut host).unwrap();

    let err = c.start(&mut doc, &mut host).unwrap_err();

    assert_eq!(
        err,
        Error::AlreadyListening {
            namespace: c.binding().namespace().to_string()
        }
    );
    assert_eq!(host.calls().len(), 1);
}

#[test]
fn listen_failure_is_reported_and_nothing_is_revealed() {
    let mut doc = SimDocument::new(800);
    let img = doc.append_image(0, "data-src", "a.png");
    let scope = doc.children().to_vec();
    let mut host = SimEventHost::new();
    host.reject_next_listen("blocked");
    let mut c = Controller::new(&mut doc, scope, options());

    let err = c.start(&mut doc, &mut host).unwrap_err();

    assert!(matches!(err, Error::Listen { ref message, .. } if message == "blocked"));
    assert!(err.to_string().contains("scroll."));
    assert!(!c.is_listening());
    assert_eq!(doc.attribute(&img, "src"), None);
}
