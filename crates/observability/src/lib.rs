//! Tracing/logging setup shared by medrec binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

/// Initialize with human-readable output instead of JSON.
pub fn init_pretty() {
    tracing::init(LogFormat::Pretty);
}

pub use self::tracing::LogFormat;

/// Tracing configuration (filters, layers).
pub mod tracing;
