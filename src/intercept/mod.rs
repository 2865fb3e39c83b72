// gl-nullify/src/intercept/mod.rs
//
//! The stand-in entry points.
//!
//! Every function here is exported under the exact name and calling convention of the real
//! OpenGL (or GLX) entry point, so that once this library is preloaded the dynamic linker binds
//! the application's calls to it. The stand-ins fall into four groups:
//!
//! * No-ops: draws, clears, binds, uploads, state changes, deletes and the buffer swap.
//!
//! * Allocators: `glGen*` and `glCreate*` hand out fresh, never-reused names.
//!
//! * Status checks: compiles, links and framebuffers always succeed; `glGetError` always
//!   reports `GL_NO_ERROR`.
//!
//! * Property queries: fixed strings for `glGetString`, and 1 for every `glGetIntegerv`.
//!
//! None of them can fail, and none keep any state beyond the shared name counter.

#![allow(non_snake_case)]

use std::os::raw::c_void;

mod buffer;
mod draw;
mod framebuffer;
mod glx;
#[cfg(proc_address)]
mod proc_address;
mod query;
mod shader;
mod state;
mod texture;
mod vertex_array;

pub use self::buffer::*;
pub use self::draw::*;
pub use self::framebuffer::*;
pub use self::glx::*;
#[cfg(proc_address)]
pub use self::proc_address::*;
pub use self::query::*;
pub use self::shader::*;
pub use self::state::*;
pub use self::texture::*;
pub use self::vertex_array::*;

macro_rules! interception_table {
    ($($symbol:ident),* $(,)?) => {
        /// The names of every entry point this library stands in for.
        pub const SYMBOLS: &[&str] = &[$(stringify!($symbol)),*];

        /// Returns the address of the stand-in for `symbol`, if there is one.
        pub fn lookup(symbol: &str) -> Option<*const c_void> {
            $(
                if symbol == stringify!($symbol) {
                    return Some($symbol as *const c_void);
                }
            )*
            None
        }
    };
}

interception_table! {
    // Draw
    glDrawArrays,
    glDrawElements,
    glDrawArraysInstanced,
    glDrawElementsInstanced,
    glFlush,
    glFinish,
    // Swap
    glXSwapBuffers,
    // Clear
    glClear,
    glClearColor,
    // Texture
    glGenTextures,
    glDeleteTextures,
    glBindTexture,
    glTexImage2D,
    glTexSubImage2D,
    // Buffer object
    glGenBuffers,
    glDeleteBuffers,
    glBindBuffer,
    glBufferData,
    glBufferSubData,
    // Shader and program
    glCreateShader,
    glDeleteShader,
    glShaderSource,
    glCompileShader,
    glCreateProgram,
    glDeleteProgram,
    glAttachShader,
    glLinkProgram,
    glUseProgram,
    // Vertex array object
    glGenVertexArrays,
    glDeleteVertexArrays,
    glBindVertexArray,
    // Render state
    glEnable,
    glDisable,
    glBlendFunc,
    glViewport,
    glScissor,
    // Framebuffer and renderbuffer
    glGenFramebuffers,
    glDeleteFramebuffers,
    glBindFramebuffer,
    glCheckFramebufferStatus,
    glGenRenderbuffers,
    glDeleteRenderbuffers,
    glBindRenderbuffer,
    // Queries
    glGetIntegerv,
    glGetString,
    glGetError,
    glGetShaderiv,
    glGetProgramiv,
    glGetShaderInfoLog,
    glGetProgramInfoLog,
}
