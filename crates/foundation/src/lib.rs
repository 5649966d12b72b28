pub mod bounds;
pub mod text;

// Foundation crate: small, well-tested primitives only.
pub use bounds::*;
