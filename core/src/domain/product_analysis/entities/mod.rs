pub mod analysis_result;
pub mod captured_image;
pub mod product_analysis;

pub use analysis_result::*;
pub use captured_image::*;
pub use product_analysis::*;
