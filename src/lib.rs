//! Per-contig quality features for de-novo genome assemblies.
//!
//! A [`contig::ContigSet`] goes in, [`stats::AssemblyStatistics`] are computed
//! once, and [`features::FeatureBuilder`] turns every contig into a
//! [`features::FeatureVector`] of length deviations, N50/L50 ratios and an
//! optional dot-plot repeat count.

pub mod config;
pub mod contig;
pub mod error;
pub mod features;
pub mod io;
pub mod repeat;
pub mod stats;

pub use config::FeatureConfig;
pub use contig::{Contig, ContigSet};
pub use error::{FeatureError, Result};
pub use features::{build_features, FeatureBuilder, FeatureTable, FeatureVector};
pub use stats::AssemblyStatistics;
