//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that hides
//! the module prefix (`with_target(false)`).
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, and final store size
//! - **Store operations**: Create, Get, List, Update, Delete
//! - **Service calls**: one span per `ClientService` method
//! - **View events**: snapshots, searches, creates, navigation, notifications
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run          # payloads and view events
//! RUST_LOG=client_admin::framework=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info` when it is unset or invalid. Calling it
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
