// Shared helpers for integration tests. Each aggregator pulls this in via
// `#[path = "common/mod.rs"] mod common;`.
#![allow(dead_code)]

pub mod fixtures;

/// Route `log` output through env_logger; `RUST_LOG=libtt3=trace` shows
/// every frame.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
