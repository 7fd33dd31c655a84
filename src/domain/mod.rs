//! Domain layer containing business entities and logic.
//!
//! Independent of HTTP and storage details.
//!
//! # Architecture
//!
//! - [`entities`] - Link records and click events
//! - [`registry`] - The insertion-ordered registry document
//! - [`analytics`] - Pure rollups over a click log
//! - [`repositories`] - Storage trait definitions
//! - [`client_metadata`] - Request metadata captured on redirect
//! - [`user_agent`] - User-agent classification contract
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler receives redirect request
//! 2. [`client_metadata::ClientMetadata`] is built from the request
//! 3. The [`user_agent::UserAgentClassifier`] classifies the user agent
//! 4. A [`entities::ClickEvent`] is appended to the link's log and the
//!    registry is saved

pub mod analytics;
pub mod client_metadata;
pub mod entities;
pub mod registry;
pub mod repositories;
pub mod user_agent;
