// gl-nullify/src/ids.rs
//
//! Object names.
//!
//! Every object the stand-ins "create" (textures, buffers, shaders, programs, vertex arrays,
//! framebuffers and renderbuffers) gets its name from one process-wide counter. Nothing backs a
//! name; it only has to be nonzero and never handed out twice, because applications use names
//! as keys in their own tables.

use crate::gl::types::{GLsizei, GLuint};

use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use std::slice;
use std::sync::atomic::{AtomicU32, Ordering};

/// The name of an object handed out by a stand-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectID(pub GLuint);

impl Display for ObjectID {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monotonic source of object names.
///
/// Names start at 1, since GL reserves 0 for "no object". Deleting an object doesn't return its
/// name, so a name is never reused for the lifetime of the allocator.
pub struct ObjectNames {
    next: AtomicU32,
}

impl Default for ObjectNames {
    #[inline]
    fn default() -> ObjectNames {
        ObjectNames::new()
    }
}

/// The allocator every stand-in draws from.
pub(crate) static OBJECT_NAMES: ObjectNames = ObjectNames::new();

impl ObjectNames {
    /// Creates an allocator whose first name is 1.
    pub const fn new() -> ObjectNames {
        ObjectNames::starting_at(1)
    }

    pub(crate) const fn starting_at(first: GLuint) -> ObjectNames {
        ObjectNames { next: AtomicU32::new(first) }
    }

    /// The name the next allocation will start at.
    #[inline]
    pub fn peek(&self) -> GLuint {
        self.next.load(Ordering::SeqCst)
    }

    /// Reserves `count` consecutive names.
    ///
    /// The whole block is claimed with a single atomic update, so concurrent callers never see
    /// overlapping ranges. Returns `None`, reserving nothing, once the name space is exhausted.
    pub fn allocate(&self, count: usize) -> Option<Range<GLuint>> {
        let count = GLuint::try_from(count).ok()?;
        let start = self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(count))
            .ok()?;
        Some(start..(start + count))
    }

    /// Reserves a single name.
    #[inline]
    pub fn allocate_one(&self) -> Option<ObjectID> {
        self.allocate(1).map(|names| ObjectID(names.start))
    }

    /// Fills the caller's array of `count` names, as the `glGen*` entry points do.
    ///
    /// A non-positive count or a null array writes nothing and reserves nothing. If the name
    /// space is exhausted the array is filled with zeros.
    ///
    /// # Safety
    ///
    /// A non-null `names` must be valid for `count` writes.
    pub unsafe fn fill(&self, count: GLsizei, names: *mut GLuint) {
        if count <= 0 || names.is_null() {
            return;
        }

        let names = slice::from_raw_parts_mut(names, count as usize);
        match self.allocate(names.len()) {
            Some(range) => {
                for (slot, name) in names.iter_mut().zip(range) {
                    *slot = name;
                }
            }
            None => {
                warn!(target: crate::logger::LIFECYCLE_TARGET, "object names exhausted");
                for slot in names.iter_mut() {
                    *slot = 0;
                }
            }
        }
    }
}

/// Returns one fresh name for the single-object `glCreate*` entry points, or 0 once the name
/// space is exhausted.
pub(crate) fn create_one() -> GLuint {
    match OBJECT_NAMES.allocate_one() {
        Some(ObjectID(name)) => name,
        None => {
            warn!(target: crate::logger::LIFECYCLE_TARGET, "object names exhausted");
            0
        }
    }
}
