pub mod features;
pub mod stats;
