//! Process-wide toggle for reporting malformed log lines to stderr.

use std::sync::atomic::{AtomicBool, Ordering};

static LINE_DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_line_debug(enabled: bool) {
    LINE_DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn line_debug_enabled() -> bool {
    LINE_DEBUG.load(Ordering::Relaxed)
}
