// gl-nullify/src/intercept/state.rs
//
//! Render state. Nothing is remembered, so a later `glIsEnabled` (which isn't intercepted)
//! would still go to the real implementation.

use crate::config::CallClass;
use crate::gl::types::{GLenum, GLint, GLsizei};

#[no_mangle]
pub extern "system" fn glEnable(cap: GLenum) {
    trace_call!(CallClass::STATE, "glEnable(0x{:x})", cap);
}

#[no_mangle]
pub extern "system" fn glDisable(cap: GLenum) {
    trace_call!(CallClass::STATE, "glDisable(0x{:x})", cap);
}

#[no_mangle]
pub extern "system" fn glBlendFunc(source_factor: GLenum, destination_factor: GLenum) {
    trace_call!(
        CallClass::STATE,
        "glBlendFunc(0x{:x}, 0x{:x})",
        source_factor,
        destination_factor
    );
}

#[no_mangle]
pub extern "system" fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
    trace_call!(CallClass::STATE, "glViewport({}, {}, {}, {})", x, y, width, height);
}

#[no_mangle]
pub extern "system" fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
    trace_call!(CallClass::STATE, "glScissor({}, {}, {}, {})", x, y, width, height);
}
