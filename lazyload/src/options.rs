use alloc::rc::Rc;
use alloc::string::{String, ToString};

/// A callback fired once for every revealed image.
pub type OnRevealCallback<E> = Rc<dyn Fn(&E)>;

/// Restricts which revealed images fire [`OnRevealCallback`].
pub type RevealFilter<E> = Rc<dyn Fn(&E) -> bool>;

pub const DEFAULT_PLACEHOLDER_ATTR: &str = "img-lazyload";
pub const DEFAULT_FRAGMENT_CLASS: &str = "area-lazyload";
pub const DEFAULT_EVENT_NAMESPACE: &str = "lazyload";

/// How image candidates are picked at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Only images that already carry the placeholder attribute are deferred.
    #[default]
    Manual,
    /// Every image is deferred. A live source is moved into the placeholder attribute at
    /// registration so the host stops loading it.
    Auto,
}

/// Plain-data loader configuration.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` and missing fields
/// fall back to their defaults, so a partial config can be layered over the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoaderSettings {
    pub mode: Mode,
    /// Attribute holding the deferred source URL of an image.
    pub placeholder_attr: String,
    /// Attribute the source URL is copied into on reveal.
    pub source_attr: String,
    pub image_tag: String,
    pub fragment_tag: String,
    /// When set, fragment containers must also carry this class.
    pub fragment_class: Option<String>,
    /// Prefix of the per-instance event binding names.
    pub event_namespace: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Manual,
            placeholder_attr: DEFAULT_PLACEHOLDER_ATTR.to_string(),
            source_attr: "src".to_string(),
            image_tag: "img".to_string(),
            fragment_tag: "textarea".to_string(),
            fragment_class: Some(DEFAULT_FRAGMENT_CLASS.to_string()),
            event_namespace: DEFAULT_EVENT_NAMESPACE.to_string(),
        }
    }
}

/// Configuration for [`crate::LazyLoader`].
///
/// Cheap to clone: callbacks are stored in `Rc`s.
pub struct LoaderOptions<E> {
    pub settings: LoaderSettings,
    /// Fired after each individual image reveal, never once per batch.
    pub on_reveal: Option<OnRevealCallback<E>>,
    /// When set, `on_reveal` only fires for images this filter accepts. Reveals themselves are
    /// unaffected.
    pub reveal_filter: Option<RevealFilter<E>>,
}

impl<E> Clone for LoaderOptions<E> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            on_reveal: self.on_reveal.clone(),
            reveal_filter: self.reveal_filter.clone(),
        }
    }
}

impl<E> Default for LoaderOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<LoaderSettings> for LoaderOptions<E> {
    fn from(settings: LoaderSettings) -> Self {
        Self {
            settings,
            on_reveal: None,
            reveal_filter: None,
        }
    }
}

impl<E> LoaderOptions<E> {
    pub fn new() -> Self {
        Self::from(LoaderSettings::default())
    }

    pub fn with_settings(mut self, settings: LoaderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.settings.mode = mode;
        self
    }

    pub fn with_placeholder_attr(mut self, name: impl Into<String>) -> Self {
        self.settings.placeholder_attr = name.into();
        self
    }

    pub fn with_source_attr(mut self, name: impl Into<String>) -> Self {
        self.settings.source_attr = name.into();
        self
    }

    pub fn with_image_tag(mut self, tag: impl Into<String>) -> Self {
        self.settings.image_tag = tag.into();
        self
    }

    pub fn with_fragment_tag(mut self, tag: impl Into<String>) -> Self {
        self.settings.fragment_tag = tag.into();
        self
    }

    /// Sets (or with `None`, drops) the class a fragment container must carry.
    pub fn with_fragment_class(mut self, class: Option<impl Into<String>>) -> Self {
        self.settings.fragment_class = class.map(Into::into);
        self
    }

    pub fn with_event_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.settings.event_namespace = namespace.into();
        self
    }

    pub fn with_on_reveal(mut self, on_reveal: Option<impl Fn(&E) + 'static>) -> Self {
        self.on_reveal = on_reveal.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_reveal_filter(mut self, filter: Option<impl Fn(&E) -> bool + 'static>) -> Self {
        self.reveal_filter = filter.map(|f| Rc::new(f) as _);
        self
    }
}

impl<E> core::fmt::Debug for LoaderOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoaderOptions")
            .field("settings", &self.settings)
            .field("on_reveal", &self.on_reveal.is_some())
            .field("reveal_filter", &self.reveal_filter.is_some())
            .finish()
    }
}
