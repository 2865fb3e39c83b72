// gl-nullify/src/intercept/vertex_array.rs
//
//! Vertex array objects.

use crate::config::CallClass;
use crate::gl::types::{GLsizei, GLuint};
use crate::ids::OBJECT_NAMES;

/// # Safety
///
/// A non-null `arrays` must be valid for `n` writes.
#[no_mangle]
pub unsafe extern "system" fn glGenVertexArrays(n: GLsizei, arrays: *mut GLuint) {
    trace_call!(CallClass::VERTEX_ARRAY, "glGenVertexArrays(n={})", n);
    OBJECT_NAMES.fill(n, arrays);
}

#[no_mangle]
pub extern "system" fn glDeleteVertexArrays(n: GLsizei, _arrays: *const GLuint) {
    trace_call!(CallClass::VERTEX_ARRAY, "glDeleteVertexArrays(n={})", n);
}

#[no_mangle]
pub extern "system" fn glBindVertexArray(array: GLuint) {
    trace_call!(CallClass::VERTEX_ARRAY, "glBindVertexArray({})", array);
}
