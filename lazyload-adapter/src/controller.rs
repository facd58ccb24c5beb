use lazyload::{Document, LazyLoader, LoaderOptions, ScanReport};

use crate::{Error, EventBinding, EventHost, Result, Signal};

/// A framework-neutral controller that wires a [`LazyLoader`] to an [`EventHost`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `start` once, which subscribes the binding and reveals whatever is already in view
/// - `on_signal` for every scroll/resize event delivered under the binding
///
/// Once the loader drains, the controller unsubscribes its binding, exactly once. There is no
/// other way to stop it short of dropping it.
#[derive(Clone, Debug)]
pub struct Controller<E> {
    loader: LazyLoader<E>,
    binding: EventBinding,
    listening: bool,
}

impl<E: Clone> Controller<E> {
    /// Registers the candidates of `scope`. Nothing is subscribed until [`Controller::start`].
    pub fn new<D>(
        doc: &mut D,
        scope: impl IntoIterator<Item = E>,
        options: LoaderOptions<E>,
    ) -> Self
    where
        D: Document<Element = E> + ?Sized,
    {
        Self::from_loader(LazyLoader::register(doc, scope, options))
    }

    pub fn from_loader(loader: LazyLoader<E>) -> Self {
        let binding = EventBinding::new(loader.namespace());
        Self {
            loader,
            binding,
            listening: false,
        }
    }

    pub fn loader(&self) -> &LazyLoader<E> {
        &self.loader
    }

    pub fn into_loader(self) -> LazyLoader<E> {
        self.loader
    }

    pub fn binding(&self) -> &EventBinding {
        &self.binding
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Subscribes the binding and runs the eager scan.
    ///
    /// The eager scan may drain the loader right away, in which case the binding is removed
    /// again before this returns.
    pub fn start<D, H>(&mut self, doc: &mut D, host: &mut H) -> Result<ScanReport>
    where
        D: Document<Element = E> + ?Sized,
        H: EventHost + ?Sized,
    {
        if self.listening {
            return Err(Error::AlreadyListening {
                namespace: self.binding.namespace().to_string(),
            });
        }
        host.listen(&self.binding)?;
        self.listening = true;
        adebug!(
            namespace = self.binding.namespace(),
            pending = self.loader.pending_len(),
            "Controller::start"
        );
        Ok(self.on_signal(Signal::Scroll, doc, host))
    }

    /// Handles one scroll/resize signal.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn on_signal<D, H>(&mut self, signal: Signal, doc: &mut D, host: &mut H) -> ScanReport
    where
        D: Document<Element = E> + ?Sized,
        H: EventHost + ?Sized,
    {
        atrace!(namespace = self.binding.namespace(), ?signal, "on_signal");
        let report = self.loader.scan_and_reveal(doc);
        if report.drained && self.listening {
            host.unlisten(&self.binding);
            self.listening = false;
            adebug!(namespace = self.binding.namespace(), "Controller drained");
        }
        report
    }
}
