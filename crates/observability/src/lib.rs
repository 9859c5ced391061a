//! Tracing/logging setup shared by the binaries.
//!
//! Domain crates only emit `tracing` events; installing a subscriber is left
//! to whatever process embeds them.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
