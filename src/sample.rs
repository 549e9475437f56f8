//! Struct `AnchorSample` represents a batch of labels
//! together with their anchor variables.

// Provides the anchor sample struct.
pub(crate) mod anchor_sample;


pub use anchor_sample::AnchorSample;
