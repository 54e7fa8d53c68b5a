//! Shared crate-wide constants.

/// Smallest width or height a modal may be reconciled down to.
///
/// Units match whatever the viewport is measured in. For the terminal demo
/// this is far too large, so `ModalConfig` carries its own copy that callers
/// can lower.
pub const MIN_SIZE: i32 = 200;

/// Width a freshly mounted modal starts with.
pub const DEFAULT_WIDTH: i32 = 500;

/// Height a freshly mounted modal starts with.
pub const DEFAULT_HEIGHT: i32 = 300;
