// gl-nullify/src/intercept/shader.rs
//
//! Shader and program objects.
//!
//! Sources are never read and nothing is compiled or linked. The status queries in `query`
//! report success regardless.

use crate::config::CallClass;
use crate::gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use crate::ids;

#[no_mangle]
pub extern "system" fn glCreateShader(shader_type: GLenum) -> GLuint {
    let shader = ids::create_one();
    trace_call!(CallClass::SHADER, "glCreateShader(type=0x{:x}) -> {}", shader_type, shader);
    shader
}

#[no_mangle]
pub extern "system" fn glDeleteShader(shader: GLuint) {
    trace_call!(CallClass::SHADER, "glDeleteShader({})", shader);
}

#[no_mangle]
pub extern "system" fn glShaderSource(
    shader: GLuint,
    _count: GLsizei,
    _strings: *const *const GLchar,
    _lengths: *const GLint,
) {
    trace_call!(CallClass::SHADER, "glShaderSource(shader={})", shader);
}

#[no_mangle]
pub extern "system" fn glCompileShader(shader: GLuint) {
    trace_call!(CallClass::SHADER, "glCompileShader({})", shader);
}

#[no_mangle]
pub extern "system" fn glCreateProgram() -> GLuint {
    let program = ids::create_one();
    trace_call!(CallClass::SHADER, "glCreateProgram() -> {}", program);
    program
}

#[no_mangle]
pub extern "system" fn glDeleteProgram(program: GLuint) {
    trace_call!(CallClass::SHADER, "glDeleteProgram({})", program);
}

#[no_mangle]
pub extern "system" fn glAttachShader(program: GLuint, shader: GLuint) {
    trace_call!(CallClass::SHADER, "glAttachShader(prog={}, shader={})", program, shader);
}

#[no_mangle]
pub extern "system" fn glLinkProgram(program: GLuint) {
    trace_call!(CallClass::SHADER, "glLinkProgram({})", program);
}

#[no_mangle]
pub extern "system" fn glUseProgram(program: GLuint) {
    trace_call!(CallClass::SHADER, "glUseProgram({})", program);
}
