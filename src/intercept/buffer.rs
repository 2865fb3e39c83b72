// gl-nullify/src/intercept/buffer.rs
//
//! Buffer objects.
//!
//! Uploads are dropped on the floor; the caller's data pointer is never read.

use crate::config::CallClass;
use crate::gl::types::{GLenum, GLintptr, GLsizei, GLsizeiptr, GLuint};
use crate::ids::OBJECT_NAMES;

use std::os::raw::c_void;

/// # Safety
///
/// A non-null `buffers` must be valid for `n` writes.
#[no_mangle]
pub unsafe extern "system" fn glGenBuffers(n: GLsizei, buffers: *mut GLuint) {
    trace_call!(CallClass::BUFFER, "glGenBuffers(n={})", n);
    OBJECT_NAMES.fill(n, buffers);
}

#[no_mangle]
pub extern "system" fn glDeleteBuffers(n: GLsizei, _buffers: *const GLuint) {
    trace_call!(CallClass::BUFFER, "glDeleteBuffers(n={})", n);
}

#[no_mangle]
pub extern "system" fn glBindBuffer(target: GLenum, buffer: GLuint) {
    trace_call!(CallClass::BUFFER, "glBindBuffer(target=0x{:x}, buffer={})", target, buffer);
}

#[no_mangle]
pub extern "system" fn glBufferData(
    _target: GLenum,
    size: GLsizeiptr,
    _data: *const c_void,
    _usage: GLenum,
) {
    trace_call!(CallClass::BUFFER, "glBufferData(size={})", size);
}

#[no_mangle]
pub extern "system" fn glBufferSubData(
    _target: GLenum,
    _offset: GLintptr,
    size: GLsizeiptr,
    _data: *const c_void,
) {
    trace_call!(CallClass::BUFFER, "glBufferSubData(size={})", size);
}
