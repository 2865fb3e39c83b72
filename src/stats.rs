// gl-nullify/src/stats.rs
//
//! Call-volume accounting.
//!
//! Each intercepted call bumps a counter for its class. The totals are reported on the
//! diagnostic stream when the process exits, which is usually all an operator needs to confirm
//! that interception is active and see where the application spends its GL calls.

use crate::config::CallClass;
use crate::logger;

use std::sync::atomic::{AtomicU64, Ordering};

const CLASS_COUNT: usize = 10;

#[allow(clippy::declare_interior_mutable_const)]
const ZERO: AtomicU64 = AtomicU64::new(0);

static CALLS: [AtomicU64; CLASS_COUNT] = [ZERO; CLASS_COUNT];

/// Counts one call of `class`.
#[inline]
pub fn record(class: CallClass) {
    if let Some(counter) = CALLS.get(class.index()) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// The number of calls seen so far for each class, in declaration order.
pub fn snapshot() -> Vec<(CallClass, u64)> {
    CallClass::all()
        .iter()
        .map(|class| (class, CALLS[class.index()].load(Ordering::Relaxed)))
        .collect()
}

/// Logs the call summary.
pub(crate) fn report() {
    let counts = snapshot();
    let total: u64 = counts.iter().map(|&(_, count)| count).sum();
    let breakdown: Vec<String> =
        counts.iter().map(|&(class, count)| format!("{}={}", class.name(), count)).collect();
    info!(
        target: logger::LIFECYCLE_TARGET,
        "intercepted {} calls ({})",
        total,
        breakdown.join(", ")
    );
}
