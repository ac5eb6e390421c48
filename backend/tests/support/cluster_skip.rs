//! Policy for embedded cluster failures.
//!
//! Embedded PostgreSQL needs downloadable binaries and a writable runtime
//! directory. Where neither is available the Diesel suites skip, unless
//! `WARBLER_REQUIRE_TEST_CLUSTER` is truthy, in which case they fail loudly.

/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn cluster_is_required() -> bool {
    std::env::var("WARBLER_REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip (returning `None`) or panic, depending on [`cluster_is_required`].
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_is_required() {
        panic!("Test cluster setup failed: {reason}. Unset WARBLER_REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
