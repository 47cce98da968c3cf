// Same shape as the core crate's `klog!`, under this crate's target.

#[cfg(feature = "tracing")]
macro_rules! klog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "kinetic_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! klog {
    ($level:ident, $($tt:tt)*) => {};
}
