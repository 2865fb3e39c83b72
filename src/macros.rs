// gl-nullify/src/macros.rs
//
//! Macros shared by the stand-ins.

/// Counts an intercepted call against its class and echoes it to the diagnostic stream.
///
/// The message is only formatted when a logger is installed and the class is enabled.
macro_rules! trace_call {
    ($class:expr, $($arg:tt)+) => {{
        let class: $crate::config::CallClass = $class;
        $crate::stats::record(class);
        debug!(target: class.target(), $($arg)+);
    }};
}
