//! Core domain entities.
//!
//! - [`LinkRecord`] - A short identifier, its target URL and click history
//! - [`LinkSummary`] - A link without its click log, for listings
//! - [`ClickEvent`] - One recorded redirect

pub mod click;
pub mod link;

pub use click::{ClickEvent, DIRECT_REFERER, UNKNOWN};
pub use link::{LinkRecord, LinkSummary};
