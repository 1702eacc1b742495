//! Mock REST server for the prospector provider API.
//!
//! Serves the same endpoints, payload shapes, and auth behavior as the real
//! provider, backed by an in-memory fixture list, so the client and CLI can
//! be exercised without external access.

pub mod api;
pub mod fixtures;
pub mod middleware;

pub use api::{build_app, AppState};
pub use fixtures::{builtin_fixtures, load_fixtures};
pub use middleware::BasicAuthState;
