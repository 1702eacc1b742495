//! Client for the prospector company-search provider.
//!
//! Layers, bottom-up:
//!
//! - [`client`]: the authenticated HTTP transport (direct or proxied mode).
//! - [`normalize`]: raw provider records → canonical [`Company`] values.
//! - [`search`]: one-page fetch chaining clause building, transport, and
//!   normalization.
//! - [`session`]: the search-session state machine with the selection/lead
//!   store.
//!
//! [`Company`]: prospector_core::types::Company

pub mod client;
pub mod error;
pub mod normalize;
pub mod search;
pub mod session;
pub mod types;

pub use client::{Credentials, ProspectorClient};
pub use error::ProspectorError;
pub use normalize::normalize;
pub use search::{fetch_page, PageState, ProspectPage};
pub use session::{SearchPhase, SearchSession, SelectionSet};
