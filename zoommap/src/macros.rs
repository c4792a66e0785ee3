#[cfg(feature = "tracing")]
macro_rules! ztrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "zoommap", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ztrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! zdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "zoommap", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! zdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! zwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "zoommap", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! zwarn {
    ($($tt:tt)*) => {};
}
