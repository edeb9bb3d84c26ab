//! Abocado Client - HTTP client for the Abocado server
//!
//! - [`http`] - transport ([`HttpClient`] trait, reqwest implementation)
//! - [`api`] - typed calls per resource
//! - [`session`] - explicit login session with file persistence
//! - [`station`] - snapshot fetch and derived per-station views
//! - [`cart`] - order composition before submission
//! - [`nav`] - role-gated navigation

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod nav;
pub mod session;
pub mod station;

pub use api::AbocadoClient;
pub use cart::{Cart, CartLine};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use http::{HttpClient, NetworkHttpClient};
pub use nav::{Access, Route, authorize};
pub use session::{Session, SessionError, SessionStore};
pub use station::{Snapshot, Station};

// Re-export shared types for convenience
pub use shared::client::{CurrentUserResponse, LoginResponse, UserInfo};
