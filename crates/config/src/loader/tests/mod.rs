//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `TOURS_*` variable unset, for use with `temp_env::with_vars`.
pub fn cleared_tours_env() -> [(&'static str, Option<&'static str>); 3] {
    [
        ("TOURS_URL", None),
        ("TOURS_TIMEOUT", None),
        ("TOURS_THEME", None),
    ]
}
