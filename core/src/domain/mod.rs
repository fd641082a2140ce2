pub mod capture;
pub mod common;
pub mod export;
pub mod product_analysis;
pub mod session;
