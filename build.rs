// gl-nullify/build.rs
//
//! The `gl-nullify` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android))) },

        // Features that only make sense where GLX does.
        proc_address: { all(linux, feature = "proc-address") },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate GL bindings. The stand-ins take their types and enumerants from here, so the
    // registry version must cover every intercepted entry point.
    let mut file = File::create(dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Gl, (4, 5), Profile::Core, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
