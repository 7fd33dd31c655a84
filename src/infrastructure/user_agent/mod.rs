//! User-agent classification backends.

pub mod woothee_classifier;

pub use woothee_classifier::WootheeClassifier;
