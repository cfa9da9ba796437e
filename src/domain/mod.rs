//! Core data model: call descriptors, result paths, output assembly

pub mod call;
pub mod output;
pub mod path;

pub use call::{Call, FunctionId};
pub use output::OutputNode;
