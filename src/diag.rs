//! Diagnostics routed through the `log` facade when the `log` feature is on.
//!
//! Without the feature these expand to nothing, so call sites stay free of
//! `cfg` attributes.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "zendds", $($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "zendds", $($arg)*);
    };
}
