#[cfg(feature = "tracing")]
macro_rules! adebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "lazyload_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! adebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[cfg_attr(not(feature = "web"), allow(unused_macros))]
macro_rules! awarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "lazyload_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[cfg_attr(not(feature = "web"), allow(unused_macros))]
macro_rules! awarn {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! atrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "lazyload_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! atrace {
    ($($tt:tt)*) => {};
}
