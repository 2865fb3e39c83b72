// gl-nullify/src/info.rs
//
//! What the stand-in implementation says about itself.

use crate::gl;
use crate::gl::types::{GLenum, GLubyte};

// NUL-terminated so the pointers can be handed straight back to C.
const VENDOR: &[u8] = b"GL Nullify\0";
const RENDERER: &[u8] = b"Null Renderer\0";
const VERSION: &[u8] = b"4.5\0";
const EXTENSIONS: &[u8] = b"\0";
const EMPTY: &[u8] = b"\0";

/// The answer to `glGetString(name)`, including the trailing NUL.
///
/// Unknown names get an empty string rather than null so that callers which feed the result
/// straight into `strstr` or `strlen` keep working.
pub(crate) fn string(name: GLenum) -> &'static [u8] {
    match name {
        gl::VENDOR => VENDOR,
        gl::RENDERER => RENDERER,
        gl::VERSION => VERSION,
        gl::EXTENSIONS => EXTENSIONS,
        _ => EMPTY,
    }
}

#[inline]
pub(crate) fn string_ptr(name: GLenum) -> *const GLubyte {
    string(name).as_ptr()
}
