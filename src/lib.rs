// gl-nullify/src/lib.rs
//
//! An OpenGL stand-in for headless runs.
//!
//! Preload the built library ahead of the system OpenGL implementation:
//!
//! ```text
//! LD_PRELOAD=./libgl_nullify.so ./game.x86_64
//! ```
//!
//! The dynamic linker then resolves the entry points in [`intercept`] to this library instead of
//! `libGL`. Draw calls, uploads, binds and state changes do nothing; object generation hands out
//! fresh names; status queries always report success. An application running under a virtual
//! framebuffer without a GPU keeps working without spending CPU time on software rendering.
//!
//! Every intercepted call can be echoed to a diagnostic stream. See [`Config`] for the
//! environment variables that control it.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod config;
pub use crate::config::{CallClass, Config};

pub mod error;
pub use crate::error::Error;

mod ids;
pub use crate::ids::{ObjectID, ObjectNames};

mod info;

pub mod intercept;

mod logger;

pub mod stats;

#[allow(dead_code)]
mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

#[cfg(not(test))]
#[ctor::ctor]
fn attach() {
    if let Err(err) = logger::init(&config::CONFIG) {
        logger::emit(format_args!("diagnostics disabled: {}", err));
    }
    info!(
        target: logger::LIFECYCLE_TARGET,
        "loaded; intercepting {} entry points",
        intercept::SYMBOLS.len()
    );
}

#[cfg(not(test))]
#[ctor::dtor]
fn detach() {
    stats::report();
    log::logger().flush();
}
