// Utility functions

pub mod filename;
pub mod logger;

pub use filename::*;
pub use logger::*;
