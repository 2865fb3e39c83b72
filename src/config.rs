// gl-nullify/src/config.rs
//
//! Runtime configuration.
//!
//! The shim has no configuration file and no API surface of its own, so everything is read from
//! the environment of the host process, once, the first time it's needed:
//!
//! * `GL_NULLIFY_LOG`: `0`, `off` or `none` silences the diagnostic stream; `1`, `on` or `all`
//!   echoes every intercepted call; anything else is a comma-separated list of call classes
//!   (`draw,texture,query`, ...). Defaults to everything.
//!
//! * `GL_NULLIFY_LOG_FILE`: append diagnostics to this file instead of standard error.
//!
//! * `GL_NULLIFY_PROC_ADDRESS`: whether `glXGetProcAddress` hands out stand-ins. Defaults to on.
//!
//! A variable with an invalid value is reported and left at its default; the others still apply.

use crate::error::Error;
use crate::logger;

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const LOG_VAR: &str = "GL_NULLIFY_LOG";
pub const LOG_FILE_VAR: &str = "GL_NULLIFY_LOG_FILE";
pub const PROC_ADDRESS_VAR: &str = "GL_NULLIFY_PROC_ADDRESS";

bitflags! {
    /// Groups of intercepted entry points, used to account for calls and to narrow the
    /// diagnostic stream.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CallClass: u16 {
        /// Draw calls, plus `glFlush` and `glFinish`.
        const DRAW         = 0x0001;
        const SWAP         = 0x0002;
        const CLEAR        = 0x0004;
        const TEXTURE      = 0x0008;
        const BUFFER       = 0x0010;
        /// Shader and program objects.
        const SHADER       = 0x0020;
        const VERTEX_ARRAY = 0x0040;
        /// Capabilities, blending, viewport and scissor.
        const STATE        = 0x0080;
        /// Framebuffer and renderbuffer objects.
        const FRAMEBUFFER  = 0x0100;
        /// Getters, status checks and entry point lookups.
        const QUERY        = 0x0200;
    }
}

struct ClassInfo {
    class: CallClass,
    name: &'static str,
    target: &'static str,
}

static CLASSES: [ClassInfo; 10] = [
    ClassInfo { class: CallClass::DRAW, name: "draw", target: "gl_nullify::draw" },
    ClassInfo { class: CallClass::SWAP, name: "swap", target: "gl_nullify::swap" },
    ClassInfo { class: CallClass::CLEAR, name: "clear", target: "gl_nullify::clear" },
    ClassInfo { class: CallClass::TEXTURE, name: "texture", target: "gl_nullify::texture" },
    ClassInfo { class: CallClass::BUFFER, name: "buffer", target: "gl_nullify::buffer" },
    ClassInfo { class: CallClass::SHADER, name: "shader", target: "gl_nullify::shader" },
    ClassInfo {
        class: CallClass::VERTEX_ARRAY,
        name: "vertex_array",
        target: "gl_nullify::vertex_array",
    },
    ClassInfo { class: CallClass::STATE, name: "state", target: "gl_nullify::state" },
    ClassInfo {
        class: CallClass::FRAMEBUFFER,
        name: "framebuffer",
        target: "gl_nullify::framebuffer",
    },
    ClassInfo { class: CallClass::QUERY, name: "query", target: "gl_nullify::query" },
];

impl CallClass {
    fn info(self) -> Option<&'static ClassInfo> {
        CLASSES.iter().find(|info| info.class == self)
    }

    /// The `log` target calls of this class are recorded under.
    ///
    /// Only meaningful for a single class; a combination maps to the crate's root target.
    pub fn target(self) -> &'static str {
        self.info().map_or(logger::LIFECYCLE_TARGET, |info| info.target)
    }

    /// The lowercase name used in `GL_NULLIFY_LOG` and in the call summary.
    pub fn name(self) -> &'static str {
        self.info().map_or("", |info| info.name)
    }

    /// Maps a `log` target back to the class that produced it.
    pub fn from_target(target: &str) -> Option<CallClass> {
        CLASSES.iter().find(|info| info.target == target).map(|info| info.class)
    }

    /// Looks up a class by its lowercase name, ignoring case.
    pub fn from_class_name(name: &str) -> Option<CallClass> {
        CLASSES.iter().find(|info| info.name.eq_ignore_ascii_case(name)).map(|info| info.class)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.bits().trailing_zeros() as usize
    }
}

/// Settings for the shim, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The call classes echoed to the diagnostic stream. Empty means no diagnostics at all.
    pub log_classes: CallClass,
    /// Where diagnostics go. `None` means standard error.
    pub log_file: Option<PathBuf>,
    /// Whether `glXGetProcAddress` resolves intercepted names to their stand-ins.
    pub proc_address: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config { log_classes: CallClass::all(), log_file: None, proc_address: true }
    }
}

lazy_static! {
    /// The configuration in effect for this process.
    pub static ref CONFIG: Config = {
        let (config, errors) = Config::from_lookup_lossy(|name| env::var_os(name));
        for (variable, err) in errors {
            logger::emit(format_args!("ignoring {}: {}", variable, err));
        }
        config
    };
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|name| env::var_os(name))
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Fails on the first variable holding an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        let (config, errors) = Config::from_lookup_lossy(lookup);
        match errors.into_iter().next() {
            None => Ok(config),
            Some((_, err)) => Err(err),
        }
    }

    /// Like `from_lookup`, but a variable with an invalid value keeps its default instead of
    /// failing the whole read. Each rejected variable is returned with the reason.
    pub fn from_lookup_lossy<F>(mut lookup: F) -> (Config, Vec<(&'static str, Error)>)
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        let mut config = Config::default();
        let mut errors = vec![];
        if let Some(value) = lookup(LOG_VAR) {
            match parse_classes(&value.to_string_lossy()) {
                Ok(classes) => config.log_classes = classes,
                Err(err) => errors.push((LOG_VAR, err)),
            }
        }
        if let Some(path) = lookup(LOG_FILE_VAR) {
            if !path.is_empty() {
                config.log_file = Some(PathBuf::from(path));
            }
        }
        if let Some(value) = lookup(PROC_ADDRESS_VAR) {
            match parse_switch(PROC_ADDRESS_VAR, &value.to_string_lossy()) {
                Ok(enabled) => config.proc_address = enabled,
                Err(err) => errors.push((PROC_ADDRESS_VAR, err)),
            }
        }
        (config, errors)
    }
}

fn parse_classes(value: &str) -> Result<CallClass, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "on" | "all" | "true" | "yes" => return Ok(CallClass::all()),
        "0" | "off" | "none" | "false" | "no" => return Ok(CallClass::empty()),
        _ => {}
    }

    let mut classes = CallClass::empty();
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        match CallClass::from_class_name(name) {
            Some(class) => classes |= class,
            None => return Err(Error::UnknownCallClass(name.to_owned())),
        }
    }
    Ok(classes)
}

fn parse_switch(variable: &'static str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(Error::InvalidSwitch { variable, value: value.to_owned() }),
    }
}
