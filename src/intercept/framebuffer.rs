// gl-nullify/src/intercept/framebuffer.rs
//
//! Framebuffer and renderbuffer objects.

use crate::config::CallClass;
use crate::gl;
use crate::gl::types::{GLenum, GLsizei, GLuint};
use crate::ids::OBJECT_NAMES;

/// # Safety
///
/// A non-null `framebuffers` must be valid for `n` writes.
#[no_mangle]
pub unsafe extern "system" fn glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) {
    trace_call!(CallClass::FRAMEBUFFER, "glGenFramebuffers(n={})", n);
    OBJECT_NAMES.fill(n, framebuffers);
}

#[no_mangle]
pub extern "system" fn glDeleteFramebuffers(n: GLsizei, _framebuffers: *const GLuint) {
    trace_call!(CallClass::FRAMEBUFFER, "glDeleteFramebuffers(n={})", n);
}

#[no_mangle]
pub extern "system" fn glBindFramebuffer(target: GLenum, framebuffer: GLuint) {
    trace_call!(
        CallClass::FRAMEBUFFER,
        "glBindFramebuffer(target=0x{:x}, fb={})",
        target,
        framebuffer
    );
}

/// Every framebuffer is complete, whatever the target.
#[no_mangle]
pub extern "system" fn glCheckFramebufferStatus(_target: GLenum) -> GLenum {
    trace_call!(CallClass::FRAMEBUFFER, "glCheckFramebufferStatus -> GL_FRAMEBUFFER_COMPLETE");
    gl::FRAMEBUFFER_COMPLETE
}

/// # Safety
///
/// A non-null `renderbuffers` must be valid for `n` writes.
#[no_mangle]
pub unsafe extern "system" fn glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) {
    trace_call!(CallClass::FRAMEBUFFER, "glGenRenderbuffers(n={})", n);
    OBJECT_NAMES.fill(n, renderbuffers);
}

#[no_mangle]
pub extern "system" fn glDeleteRenderbuffers(n: GLsizei, _renderbuffers: *const GLuint) {
    trace_call!(CallClass::FRAMEBUFFER, "glDeleteRenderbuffers(n={})", n);
}

#[no_mangle]
pub extern "system" fn glBindRenderbuffer(target: GLenum, renderbuffer: GLuint) {
    trace_call!(
        CallClass::FRAMEBUFFER,
        "glBindRenderbuffer(target=0x{:x}, rb={})",
        target,
        renderbuffer
    );
}
