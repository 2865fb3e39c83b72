// gl-nullify/src/intercept/query.rs
//
//! Getters and status checks.
//!
//! These are the calls whose answers the application actually looks at, so each one returns
//! whatever keeps it on its success path: no errors, every shader compiled, every program
//! linked, and a plausible set of strings. Null output pointers are skipped rather than
//! written through.

use crate::config::CallClass;
use crate::gl;
use crate::gl::types::{GLchar, GLenum, GLint, GLsizei, GLubyte, GLuint};
use crate::info;
use crate::stats;

/// The value `glGetIntegerv` reports for every parameter.
pub const DEFAULT_INTEGER: GLint = 1;

/// # Safety
///
/// A non-null `params` must be valid for one write.
#[no_mangle]
pub unsafe extern "system" fn glGetIntegerv(pname: GLenum, params: *mut GLint) {
    trace_call!(CallClass::QUERY, "glGetIntegerv(pname=0x{:x})", pname);
    if !params.is_null() {
        *params = DEFAULT_INTEGER;
    }
}

#[no_mangle]
pub extern "system" fn glGetString(name: GLenum) -> *const GLubyte {
    trace_call!(CallClass::QUERY, "glGetString(name=0x{:x})", name);
    info::string_ptr(name)
}

// Applications poll this constantly, so it's counted but never echoed.
#[no_mangle]
pub extern "system" fn glGetError() -> GLenum {
    stats::record(CallClass::QUERY);
    gl::NO_ERROR
}

/// # Safety
///
/// A non-null `params` must be valid for one write.
#[no_mangle]
pub unsafe extern "system" fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
    trace_call!(CallClass::QUERY, "glGetShaderiv(shader={}, pname=0x{:x})", shader, pname);
    if !params.is_null() {
        *params = shader_parameter(pname);
    }
}

/// # Safety
///
/// A non-null `params` must be valid for one write.
#[no_mangle]
pub unsafe extern "system" fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) {
    trace_call!(CallClass::QUERY, "glGetProgramiv(prog={}, pname=0x{:x})", program, pname);
    if !params.is_null() {
        *params = program_parameter(pname);
    }
}

/// # Safety
///
/// Non-null `length` must be valid for one write; non-null `info_log` must be valid for
/// `buffer_size` writes.
#[no_mangle]
pub unsafe extern "system" fn glGetShaderInfoLog(
    shader: GLuint,
    buffer_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    trace_call!(CallClass::QUERY, "glGetShaderInfoLog(shader={})", shader);
    write_empty_log(buffer_size, length, info_log);
}

/// # Safety
///
/// Non-null `length` must be valid for one write; non-null `info_log` must be valid for
/// `buffer_size` writes.
#[no_mangle]
pub unsafe extern "system" fn glGetProgramInfoLog(
    program: GLuint,
    buffer_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    trace_call!(CallClass::QUERY, "glGetProgramInfoLog(prog={})", program);
    write_empty_log(buffer_size, length, info_log);
}

fn shader_parameter(pname: GLenum) -> GLint {
    match pname {
        gl::COMPILE_STATUS => gl::TRUE as GLint,
        _ => 0,
    }
}

fn program_parameter(pname: GLenum) -> GLint {
    match pname {
        gl::LINK_STATUS | gl::VALIDATE_STATUS => gl::TRUE as GLint,
        _ => 0,
    }
}

unsafe fn write_empty_log(buffer_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar) {
    if !length.is_null() {
        *length = 0;
    }
    if buffer_size > 0 && !info_log.is_null() {
        *info_log = 0;
    }
}
