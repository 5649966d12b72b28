pub mod layer;
pub mod symbology;

pub use layer::*;
pub use symbology::{CategoryStyle, category_style};
