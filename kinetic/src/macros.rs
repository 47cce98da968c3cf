// Internal logging: `klog!(level, ...)` forwards to `tracing::<level>!` under the crate's target,
// or expands to nothing without the `tracing` feature. Arguments are not evaluated in that case.

#[cfg(feature = "tracing")]
macro_rules! klog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "kinetic", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! klog {
    ($level:ident, $($tt:tt)*) => {};
}
