pub mod advice;
pub mod analyzer;
pub mod bucket;
pub mod classifier;
pub mod frame;
pub mod simulator;
pub mod utils;
