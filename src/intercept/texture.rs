// gl-nullify/src/intercept/texture.rs
//
//! Texture objects.

use crate::config::CallClass;
use crate::gl::types::{GLenum, GLint, GLsizei, GLuint};
use crate::ids::OBJECT_NAMES;

use std::os::raw::c_void;

/// # Safety
///
/// A non-null `textures` must be valid for `n` writes.
#[no_mangle]
pub unsafe extern "system" fn glGenTextures(n: GLsizei, textures: *mut GLuint) {
    trace_call!(CallClass::TEXTURE, "glGenTextures(n={})", n);
    OBJECT_NAMES.fill(n, textures);
}

#[no_mangle]
pub extern "system" fn glDeleteTextures(n: GLsizei, _textures: *const GLuint) {
    trace_call!(CallClass::TEXTURE, "glDeleteTextures(n={})", n);
}

#[no_mangle]
pub extern "system" fn glBindTexture(target: GLenum, texture: GLuint) {
    trace_call!(CallClass::TEXTURE, "glBindTexture(target=0x{:x}, texture={})", target, texture);
}

#[no_mangle]
pub extern "system" fn glTexImage2D(
    _target: GLenum,
    _level: GLint,
    _internal_format: GLint,
    width: GLsizei,
    height: GLsizei,
    _border: GLint,
    _format: GLenum,
    _type: GLenum,
    _pixels: *const c_void,
) {
    trace_call!(CallClass::TEXTURE, "glTexImage2D({}x{})", width, height);
}

#[no_mangle]
pub extern "system" fn glTexSubImage2D(
    _target: GLenum,
    _level: GLint,
    _x_offset: GLint,
    _y_offset: GLint,
    width: GLsizei,
    height: GLsizei,
    _format: GLenum,
    _type: GLenum,
    _pixels: *const c_void,
) {
    trace_call!(CallClass::TEXTURE, "glTexSubImage2D({}x{})", width, height);
}
