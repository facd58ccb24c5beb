/// Errors raised while wiring a loader to its host.
///
/// Revealing itself never fails; these only cover listener registration and page lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no global `window` is available")]
    NoWindow,

    #[error("the window has no `document`")]
    NoDocument,

    #[error("invalid scope selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("failed to listen for `{event}`: {message}")]
    Listen { event: String, message: String },

    #[error("loader `{namespace}` is already listening")]
    AlreadyListening { namespace: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
