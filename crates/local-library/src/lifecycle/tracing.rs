//! Process-wide `tracing` setup.
//!
//! Collections log with an `entity_type` field (`Author`, `Book`, ...) and clients wrap
//! each call in an `#[instrument]` span, so a request reads like:
//!
//! ```text
//! INFO book_detail{id=BookId(3)}: Aggregation started branches=2
//! INFO Get entity_type="Book" id=3
//! ```
//!
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=info` or `RUST_LOG=local_library=debug`.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
