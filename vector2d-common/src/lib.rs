pub mod error;
pub mod value;
pub mod vecmath;

// Re-export key types for easier use by dependent crates
pub use error::ArgumentError;
pub use value::{Product, Value};
pub use vecmath::Vector2D;
