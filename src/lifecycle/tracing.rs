//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity is controlled by the `RUST_LOG` environment variable. The compact
//! format hides the crate/module prefix (`with_target(false)`) and shows spans inline.
//!
//! ```bash
//! # Registrations, removals and service lifecycle
//! RUST_LOG=info cargo run
//!
//! # Every lookup and clone, with full prototype payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the registry internals
//! RUST_LOG=prototype_registry::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Service lifecycle**: start and shutdown, with the final registry size
//! - **Registrations**: category, whether a prototype was replaced, registry size
//! - **Lookups and clones**: category and hit/miss (`debug`)
//! - **Misses on clone**: logged at `warn` before the error is returned
//!
//! ## Example Output
//!
//! The demo binary with **`RUST_LOG=info`** (timestamps elided):
//!
//! ```text
//! INFO Starting prototype registry demo
//! INFO Starting registry system
//! INFO Registry service started entity_type="User"
//! INFO Prototype registered key=ADMIN replaced=false size=1
//! INFO Prototype registered key=READER replaced=false size=2
//! INFO cloning: Cloned prototype category=ADMIN username="admin"
//! INFO cloning: Cloned prototype category=READER username="reader"
//! WARN Not registered key=WRITER
//! INFO cloning: No prototype for category category=WRITER
//! INFO cloning: Derived new admin user_id=3 username="second_admin"
//! INFO Shutting down system...
//! INFO Shutdown entity_type="User" size=2
//! INFO System shutdown complete.
//! INFO Demo completed successfully
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
