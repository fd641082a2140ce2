use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    export::value_objects::ExportReportInput,
    product_analysis::{
        entities::{AnalysisResult, CapturedImage, ProductAnalysis},
        ports::ProductAnalysisService,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Cannot {action} while in {state} state")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("No analysis data to export")]
    NoAnalysis,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Camera,
    Preview {
        image: CapturedImage,
    },
    Analyzing {
        image: CapturedImage,
    },
    Results {
        image: CapturedImage,
        analysis: ProductAnalysis,
    },
}

impl ScanState {
    pub fn name(&self) -> &'static str {
        match self {
            ScanState::Camera => "camera",
            ScanState::Preview { .. } => "preview",
            ScanState::Analyzing { .. } => "analyzing",
            ScanState::Results { .. } => "results",
        }
    }
}

/// One foreground scan: capture, preview, analyze, then view results.
///
/// At most one analysis is in flight; the analysis is discarded when a new scan starts.
#[derive(Debug, Clone)]
pub struct ScanSession {
    pub id: Uuid,
    state: ScanState,
    notice: Option<String>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            id: generate_uuid_v7(),
            state: ScanState::Camera,
            notice: None,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn image(&self) -> Option<&CapturedImage> {
        match &self.state {
            ScanState::Camera => None,
            ScanState::Preview { image }
            | ScanState::Analyzing { image }
            | ScanState::Results { image, .. } => Some(image),
        }
    }

    pub fn analysis(&self) -> Option<&ProductAnalysis> {
        match &self.state {
            ScanState::Results { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub fn image_captured(&mut self, image: CapturedImage) -> Result<(), SessionError> {
        self.expect_state("accept an image", |s| matches!(s, ScanState::Camera))?;
        self.state = ScanState::Preview { image };
        Ok(())
    }

    pub fn retake(&mut self) -> Result<(), SessionError> {
        self.expect_state("retake", |s| matches!(s, ScanState::Preview { .. }))?;
        self.state = ScanState::Camera;
        Ok(())
    }

    /// Moves to `Analyzing` and returns the image to analyze.
    pub fn begin_analysis(&mut self) -> Result<CapturedImage, SessionError> {
        let ScanState::Preview { image } = &self.state else {
            return Err(self.invalid("start analysis"));
        };
        let image = image.clone();

        self.notice = None;
        self.state = ScanState::Analyzing {
            image: image.clone(),
        };
        Ok(image)
    }

    /// Applies the analysis outcome. Failures return to `Preview` with a notice.
    pub fn complete_analysis(&mut self, result: AnalysisResult) -> Result<(), SessionError> {
        let ScanState::Analyzing { image } = &self.state else {
            return Err(self.invalid("complete analysis"));
        };
        let image = image.clone();

        match result.into_result() {
            Ok(analysis) => {
                info!(session = %self.id, product = %analysis.product_name, "Scan results ready");
                self.state = ScanState::Results { image, analysis };
            }
            Err(error) => {
                warn!(session = %self.id, "Scan analysis failed: {}", error);
                self.notice = Some(format!(
                    "Analysis failed: {error}. Please try again with a clearer image."
                ));
                self.state = ScanState::Preview { image };
            }
        }
        Ok(())
    }

    /// Runs one analysis through `service`, driving the session through `Analyzing`.
    pub async fn analyze_with<S>(&mut self, service: &S) -> Result<(), SessionError>
    where
        S: ProductAnalysisService,
    {
        let image = self.begin_analysis()?;
        let result = service.analyze(image).await;
        self.complete_analysis(result)
    }

    pub fn export_input(&self) -> Result<ExportReportInput, SessionError> {
        let ScanState::Results { image, analysis } = &self.state else {
            return Err(SessionError::NoAnalysis);
        };

        Ok(ExportReportInput {
            analysis: analysis.clone(),
            image_uri: Some(image.uri.clone()),
        })
    }

    /// Discards the current image and analysis.
    pub fn new_scan(&mut self) -> Result<(), SessionError> {
        self.expect_state("start a new scan", |s| {
            !matches!(s, ScanState::Analyzing { .. })
        })?;
        self.state = ScanState::Camera;
        self.notice = None;
        Ok(())
    }

    fn expect_state(
        &self,
        action: &'static str,
        allowed: impl Fn(&ScanState) -> bool,
    ) -> Result<(), SessionError> {
        if allowed(&self.state) {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product_analysis::{fallback::demo_analysis, ports::MockProductAnalysisService};

    fn image() -> CapturedImage {
        CapturedImage::from_uri("file:///tmp/photo.jpg")
    }

    #[test]
    fn test_happy_path_reaches_results() {
        let mut session = ScanSession::new();
        session.image_captured(image()).unwrap();
        session.begin_analysis().unwrap();
        session
            .complete_analysis(AnalysisResult::success(demo_analysis()))
            .unwrap();

        assert_eq!(session.state().name(), "results");
        assert_eq!(
            session.analysis().map(|a| a.product_name.as_str()),
            Some("Organic Whole Grain Cereal")
        );
        let export = session.export_input().unwrap();
        assert_eq!(export.image_uri.as_deref(), Some("file:///tmp/photo.jpg"));
    }

    #[test]
    fn test_failure_returns_to_preview_with_notice() {
        let mut session = ScanSession::new();
        session.image_captured(image()).unwrap();
        session.begin_analysis().unwrap();
        session
            .complete_analysis(AnalysisResult::failure("Model service error 429: quota"))
            .unwrap();

        assert_eq!(session.state().name(), "preview");
        assert!(session.analysis().is_none());
        assert!(session.notice().unwrap().contains("429"));

        session.dismiss_notice();
        assert!(session.notice().is_none());
        assert_eq!(session.export_input(), Err(SessionError::NoAnalysis));
    }

    #[test]
    fn test_only_one_analysis_in_flight() {
        let mut session = ScanSession::new();
        session.image_captured(image()).unwrap();
        session.begin_analysis().unwrap();

        assert_eq!(
            session.begin_analysis(),
            Err(SessionError::InvalidTransition {
                state: "analyzing",
                action: "start analysis",
            })
        );
        assert!(session.new_scan().is_err());
    }

    #[test]
    fn test_new_scan_discards_analysis() {
        let mut session = ScanSession::new();
        session.image_captured(image()).unwrap();
        session.begin_analysis().unwrap();
        session
            .complete_analysis(AnalysisResult::success(demo_analysis()))
            .unwrap();

        session.new_scan().unwrap();

        assert_eq!(session.state(), &ScanState::Camera);
        assert!(session.analysis().is_none());
        assert!(session.image().is_none());
    }

    #[test]
    fn test_retake_only_from_preview() {
        let mut session = ScanSession::new();
        assert!(session.retake().is_err());
        session.image_captured(image()).unwrap();
        session.retake().unwrap();
        assert_eq!(session.state(), &ScanState::Camera);
    }

    #[tokio::test]
    async fn test_analyze_with_service() {
        let mut service = MockProductAnalysisService::new();
        service
            .expect_analyze()
            .times(1)
            .returning(|_| Box::pin(async { AnalysisResult::success(demo_analysis()) }));

        let mut session = ScanSession::new();
        session.image_captured(image()).unwrap();
        session.analyze_with(&service).await.unwrap();

        assert!(session.analysis().is_some());
    }
}
