use alloc::format;
use alloc::vec::Vec;

use crate::geometry::{is_within_viewport, target_y};
use crate::{
    Candidate, CandidateKind, Document, InstanceId, LoaderOptions, LoaderState, Mode, ScanReport,
};

/// A viewport lazy loader instance.
///
/// The loader is headless:
/// - It holds element handles, never UI objects of its own.
/// - The host drives it by calling [`LazyLoader::scan_and_reveal`] on every scroll/resize
///   signal (and once right after registration).
/// - Geometry and DOM mutation go through a [`Document`].
///
/// Offsets are computed once at registration and never invalidated. If earlier reveals reflow
/// the page, later candidates keep their stale offsets.
///
/// For listener bookkeeping and self-deregistration, see the `lazyload-adapter` crate.
#[derive(Clone, Debug)]
pub struct LazyLoader<E> {
    id: InstanceId,
    options: LoaderOptions<E>,
    pending_images: Vec<Candidate<E>>,
    pending_fragments: Vec<Candidate<E>>,
}

impl<E: Clone> LazyLoader<E> {
    /// Filters `scope` into image and fragment candidates and caches their offsets.
    ///
    /// `scope` is enumerated once, in the order given. Elements matching neither predicate are
    /// ignored. In [`Mode::Auto`] this may move image sources into the placeholder attribute.
    pub fn register<D>(
        doc: &mut D,
        scope: impl IntoIterator<Item = E>,
        options: LoaderOptions<E>,
    ) -> Self
    where
        D: Document<Element = E> + ?Sized,
    {
        let mut pending_images = Vec::new();
        let mut pending_fragments = Vec::new();

        for el in scope {
            if is_image_candidate(doc, &el, &options) {
                let target_y = target_y(doc, &el);
                pending_images.push(Candidate {
                    element: el,
                    target_y,
                    kind: CandidateKind::Image,
                });
            } else if is_fragment_candidate(doc, &el, &options) {
                let target_y = target_y(doc, &el);
                pending_fragments.push(Candidate {
                    element: el,
                    target_y,
                    kind: CandidateKind::Fragment,
                });
            }
        }

        let id = InstanceId::next();
        ldebug!(
            instance = id.get(),
            images = pending_images.len(),
            fragments = pending_fragments.len(),
            "LazyLoader::register"
        );

        Self {
            id,
            options,
            pending_images,
            pending_fragments,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The binding name for this instance, e.g. `lazyload-3`.
    pub fn namespace(&self) -> alloc::string::String {
        format!("{}-{}", self.options.settings.event_namespace, self.id)
    }

    pub fn options(&self) -> &LoaderOptions<E> {
        &self.options
    }

    pub fn pending_images(&self) -> &[Candidate<E>] {
        &self.pending_images
    }

    pub fn pending_fragments(&self) -> &[Candidate<E>] {
        &self.pending_fragments
    }

    pub fn pending_len(&self) -> usize {
        self.pending_images.len() + self.pending_fragments.len()
    }

    pub fn is_drained(&self) -> bool {
        self.pending_images.is_empty() && self.pending_fragments.is_empty()
    }

    pub fn state(&self) -> LoaderState {
        LoaderState {
            instance: self.id,
            pending_images: self.pending_images.len(),
            pending_fragments: self.pending_fragments.len(),
        }
    }

    /// Reveals every pending candidate inside the current viewport.
    ///
    /// Images and fragments are scanned independently. A revealed candidate is removed from
    /// its pending sequence, so calling this again never re-processes it. Detached elements
    /// are dropped from the pending sequences without being revealed.
    pub fn scan_and_reveal<D>(&mut self, doc: &mut D) -> ScanReport
    where
        D: Document<Element = E> + ?Sized,
    {
        let viewport = doc.metrics().viewport();
        ltrace!(
            instance = self.id.get(),
            scroll_y = viewport.scroll_y,
            height = viewport.height,
            "scan_and_reveal"
        );
        let mut report = ScanReport::default();

        let mut i = 0;
        while i < self.pending_images.len() {
            let c = &self.pending_images[i];
            if !doc.is_attached(&c.element) {
                // Nothing left to reveal into; retire it so the loader can still drain.
                self.pending_images.swap_remove(i);
                report.skipped_detached += 1;
                continue;
            }
            if !is_within_viewport(c.target_y, viewport) {
                i += 1;
                continue;
            }
            // Order is not meaningful, so the vacated slot takes the last candidate and is
            // examined next.
            let c = self.pending_images.swap_remove(i);
            self.reveal_image(doc, &c.element);
            report.images_revealed += 1;
        }

        let mut i = 0;
        while i < self.pending_fragments.len() {
            let c = &self.pending_fragments[i];
            if !doc.is_attached(&c.element) {
                // Nothing left to reveal into; retire it so the loader can still drain.
                self.pending_fragments.swap_remove(i);
                report.skipped_detached += 1;
                continue;
            }
            if !is_within_viewport(c.target_y, viewport) {
                i += 1;
                continue;
            }
            let c = self.pending_fragments.swap_remove(i);
            self.reveal_fragment(doc, &c.element);
            report.fragments_revealed += 1;
        }

        report.drained = self.is_drained();
        if report.drained {
            ldebug!(instance = self.id.get(), "LazyLoader drained");
        }
        report
    }

    fn reveal_image<D>(&self, doc: &mut D, el: &E)
    where
        D: Document<Element = E> + ?Sized,
    {
        let settings = &self.options.settings;
        if let Some(src) = doc.attribute(el, &settings.placeholder_attr) {
            doc.set_attribute(el, &settings.source_attr, &src);
        }
        doc.remove_attribute(el, &settings.placeholder_attr);
        ltrace!(instance = self.id.get(), "reveal image");

        let Some(cb) = &self.options.on_reveal else {
            return;
        };
        if self.options.reveal_filter.as_ref().is_none_or(|f| f(el)) {
            cb(el);
        }
    }

    fn reveal_fragment<D>(&self, doc: &mut D, el: &E)
    where
        D: Document<Element = E> + ?Sized,
    {
        doc.hide(el);
        if let Some(class) = &self.options.settings.fragment_class {
            doc.remove_class(el, class);
        }
        let markup = doc.raw_markup(el);
        doc.insert_markup_before(el, &markup);
        doc.remove(el);
        ltrace!(instance = self.id.get(), "reveal fragment");
    }
}

fn is_image_candidate<D>(
    doc: &mut D,
    el: &D::Element,
    options: &LoaderOptions<D::Element>,
) -> bool
where
    D: Document + ?Sized,
{
    let settings = &options.settings;
    if !doc.has_tag(el, &settings.image_tag) {
        return false;
    }
    let has_placeholder = doc
        .attribute(el, &settings.placeholder_attr)
        .is_some_and(|v| !v.is_empty());
    match settings.mode {
        Mode::Manual => has_placeholder,
        Mode::Auto if has_placeholder => true,
        Mode::Auto => {
            // Park the live source so the host stops loading it until reveal.
            let Some(src) = doc
                .attribute(el, &settings.source_attr)
                .filter(|v| !v.is_empty())
            else {
                return false;
            };
            doc.set_attribute(el, &settings.placeholder_attr, &src);
            doc.remove_attribute(el, &settings.source_attr);
            true
        }
    }
}

fn is_fragment_candidate<D>(
    doc: &D,
    el: &D::Element,
    options: &LoaderOptions<D::Element>,
) -> bool
where
    D: Document + ?Sized,
{
    let settings = &options.settings;
    doc.has_tag(el, &settings.fragment_tag)
        && settings
            .fragment_class
            .as_deref()
            .is_none_or(|class| doc.has_class(el, class))
}
