//! Internal logging shim.
//!
//! With the `log` feature these forward to the `log` crate; without it they
//! expand to nothing, so diagnostics cost nothing in `no_std` builds.

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::debug!($($arg)+);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::trace!($($arg)+);
        }
    };
}

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::warn!($($arg)+);
        }
    };
}

pub(crate) use {debug, trace};
pub(crate) use log_warn as warn;
