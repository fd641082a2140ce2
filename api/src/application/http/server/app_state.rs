use std::sync::Arc;

use productscan_core::application::ProductScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ProductScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ProductScanService) -> Self {
        Self { args, service }
    }
}
