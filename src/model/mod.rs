//! Frequency and probability model.
//!
//! The model maps every distinct training word to a pair of conditional
//! likelihoods, one per discourse label, estimated by relative frequency
//! over distinct labeled sentences with Ng (1997) smoothing for the label a
//! word was never seen under.
//!
//! - [`ModelBuilder`] folds a training table into a model
//! - [`DiscourseModel`] is the immutable fitted result
//! - [`LabelPair`] carries per-label values throughout the crate

pub mod builder;
#[allow(clippy::module_inception)]
pub mod model;
pub mod pair;

// Re-export commonly used types
pub use builder::{ModelBuilder, ng_fallback};
pub use model::{DiscourseModel, FrequencyReport};
pub use pair::LabelPair;
