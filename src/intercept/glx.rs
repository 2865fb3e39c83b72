// gl-nullify/src/intercept/glx.rs
//
//! The buffer swap.
//!
//! This is the only windowing entry point the shim touches. The display connection and drawable
//! are never looked at, so nothing is ever presented.

use crate::config::CallClass;

use std::os::raw::{c_ulong, c_void};

/// `GLXDrawable` is an X resource ID.
pub type GLXDrawable = c_ulong;

#[no_mangle]
pub extern "C" fn glXSwapBuffers(_display: *mut c_void, _drawable: GLXDrawable) {
    trace_call!(CallClass::SWAP, "glXSwapBuffers");
}
