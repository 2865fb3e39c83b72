// gl-nullify/src/intercept/draw.rs
//
//! Draw calls and clears.
//!
//! These are where a software rasterizer spends nearly all of its time, and none of them
//! return anything, so they simply vanish.

use crate::config::CallClass;
use crate::gl::types::{GLbitfield, GLenum, GLfloat, GLint, GLsizei};

use std::os::raw::c_void;

#[no_mangle]
pub extern "system" fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei) {
    trace_call!(
        CallClass::DRAW,
        "glDrawArrays(mode={}, first={}, count={})",
        mode,
        first,
        count
    );
}

#[no_mangle]
pub extern "system" fn glDrawElements(
    mode: GLenum,
    count: GLsizei,
    _type: GLenum,
    _indices: *const c_void,
) {
    trace_call!(CallClass::DRAW, "glDrawElements(mode={}, count={})", mode, count);
}

#[no_mangle]
pub extern "system" fn glDrawArraysInstanced(
    _mode: GLenum,
    _first: GLint,
    count: GLsizei,
    instance_count: GLsizei,
) {
    trace_call!(
        CallClass::DRAW,
        "glDrawArraysInstanced(count={}, instances={})",
        count,
        instance_count
    );
}

#[no_mangle]
pub extern "system" fn glDrawElementsInstanced(
    _mode: GLenum,
    count: GLsizei,
    _type: GLenum,
    _indices: *const c_void,
    instance_count: GLsizei,
) {
    trace_call!(
        CallClass::DRAW,
        "glDrawElementsInstanced(count={}, instances={})",
        count,
        instance_count
    );
}

#[no_mangle]
pub extern "system" fn glFlush() {
    trace_call!(CallClass::DRAW, "glFlush");
}

#[no_mangle]
pub extern "system" fn glFinish() {
    trace_call!(CallClass::DRAW, "glFinish");
}

#[no_mangle]
pub extern "system" fn glClear(mask: GLbitfield) {
    trace_call!(CallClass::CLEAR, "glClear(mask=0x{:x})", mask);
}

#[no_mangle]
pub extern "system" fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
    trace_call!(
        CallClass::CLEAR,
        "glClearColor({:.2}, {:.2}, {:.2}, {:.2})",
        red,
        green,
        blue,
        alpha
    );
}
