pub(crate) mod debug;

pub(crate) use debug::{line_debug_enabled, set_line_debug};
