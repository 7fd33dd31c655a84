//! # Snaplink
//!
//! A small URL shortener with click analytics, built with Axum. The whole link
//! registry, click logs included, lives in a single JSON document.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link records, click events, the registry and analytics rollups
//! - **Application Layer** ([`application`]) - Link and analytics services
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file storage and user-agent parsing
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Generated or custom short identifiers
//! - Click log per link with browser, OS and device classification
//! - Per-day, top-browser and recent-click analytics
//! - Atomic whole-document saves, serialized by a single writer lock
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_FILE="data/urls.json"
//! export BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, LinkService};
    pub use crate::domain::entities::{ClickEvent, LinkRecord, LinkSummary};
    pub use crate::domain::registry::Registry;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
