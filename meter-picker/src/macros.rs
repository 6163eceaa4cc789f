#[cfg(feature = "tracing")]
macro_rules! ptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "meter_picker", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "meter_picker", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "meter_picker", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pwarn {
    ($($tt:tt)*) => {};
}
