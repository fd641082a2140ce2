use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, product_analysis::entities::CapturedImage,
};

/// Port for the device camera and photo library
#[cfg_attr(test, mockall::automock)]
pub trait ImageCapture: Send + Sync {
    /// Fails with `CoreError::PermissionDenied` when access is not granted.
    fn request_permission(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Captures a still frame.
    fn capture(&self) -> impl Future<Output = Result<CapturedImage, CoreError>> + Send;

    /// Returns `None` when the user cancels or the library is empty.
    fn pick_from_library(
        &self,
    ) -> impl Future<Output = Result<Option<CapturedImage>, CoreError>> + Send;
}
