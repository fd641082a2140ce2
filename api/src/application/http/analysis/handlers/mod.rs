pub mod analyze_product_image;
pub mod export_report;
