#![doc = include_str!("../README.md")]

pub mod builder;
pub mod error;
pub mod fmt;
pub mod node;
pub mod options;
pub mod random;
pub mod simplify;
pub mod step;
pub mod tree;

pub use builder::{generate, Generator};
pub use error::Error;
pub use node::Node;
pub use simplify::simplify;
pub use tree::FunctionTree;
