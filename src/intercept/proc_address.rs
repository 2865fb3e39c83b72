// gl-nullify/src/intercept/proc_address.rs
//
//! `glXGetProcAddress`.
//!
//! Many applications don't link against GL entry points at all; they fetch them at runtime
//! through `glXGetProcAddress`, which symbol interposition alone never sees. These overrides hand
//! out the stand-in for any intercepted name and pass every other name on to the next
//! `glXGetProcAddressARB` in the lookup order, normally the one in `libGL`.

use crate::config::{CallClass, CONFIG};
use crate::gl::types::GLubyte;
use crate::intercept;

use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_void};
use std::ptr;

type GetProcAddressFn = unsafe extern "C" fn(*const GLubyte) -> *mut c_void;

lazy_static! {
    static ref NEXT_GET_PROC_ADDRESS: Option<GetProcAddressFn> = unsafe {
        next_symbol(b"glXGetProcAddressARB\0").or_else(|| next_symbol(b"glXGetProcAddress\0"))
    };
}

unsafe fn next_symbol(name: &[u8]) -> Option<GetProcAddressFn> {
    let symbol = libc::dlsym(libc::RTLD_NEXT, name.as_ptr() as *const c_char);
    if symbol.is_null() {
        None
    } else {
        Some(mem::transmute::<*mut c_void, GetProcAddressFn>(symbol))
    }
}

/// # Safety
///
/// A non-null `proc_name` must point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn glXGetProcAddress(proc_name: *const GLubyte) -> *mut c_void {
    get_proc_address(proc_name)
}

/// # Safety
///
/// A non-null `proc_name` must point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn glXGetProcAddressARB(proc_name: *const GLubyte) -> *mut c_void {
    get_proc_address(proc_name)
}

unsafe fn get_proc_address(proc_name: *const GLubyte) -> *mut c_void {
    if proc_name.is_null() {
        return ptr::null_mut();
    }

    let name = CStr::from_ptr(proc_name as *const c_char);
    if CONFIG.proc_address {
        if let Some(stand_in) = name.to_str().ok().and_then(intercept::lookup) {
            trace_call!(
                CallClass::QUERY,
                "glXGetProcAddress({}) -> stand-in",
                name.to_string_lossy()
            );
            return stand_in as *mut c_void;
        }
    }

    trace_call!(CallClass::QUERY, "glXGetProcAddress({}) -> forwarded", name.to_string_lossy());
    match *NEXT_GET_PROC_ADDRESS {
        Some(next) => next(proc_name),
        None => ptr::null_mut(),
    }
}
