//! Application layer services implementing business logic.
//!
//! Services coordinate validation, registry mutation and storage. HTTP
//! handlers and the admin CLI call into this layer and never touch storage
//! directly.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and click recording
//! - [`services::analytics_service::AnalyticsService`] - Per-link and registry-wide analytics

pub mod services;
