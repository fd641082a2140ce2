use anyhow::{Context, anyhow};
use productscan_core::{
    application::{create_image_capture, create_service},
    domain::{
        capture::ports::ImageCapture,
        common::ProductScanConfig,
        export::ports::ReportExportService,
        product_analysis::entities::CapturedImage,
        session::ScanSession,
    },
    infrastructure::capture::FilesystemImageCapture,
};
use tracing::info;

use crate::args::{Args, ScanArgs};

/// Runs one scan from the command line and prints the analysis as JSON.
pub async fn run_scan(args: Args, scan: ScanArgs) -> Result<(), anyhow::Error> {
    let config = ProductScanConfig::from(args);
    let capture = create_image_capture(&config);
    let service = create_service(config)?;

    let image = acquire_image(capture, &scan).await?;

    let mut session = ScanSession::new();
    session.image_captured(image)?;
    session.analyze_with(&service).await?;

    if let Some(notice) = session.notice() {
        return Err(anyhow!(notice.to_string()));
    }

    let analysis = session
        .analysis()
        .context("analysis finished without results")?;
    let rating = analysis.rating();
    info!(
        product = %analysis.product_name,
        score = rating.score,
        band = ?rating.band(),
        "Analysis complete"
    );
    println!("{}", serde_json::to_string_pretty(analysis)?);

    if scan.export {
        let report = service.export_report(session.export_input()?).await?;
        println!("Report written to {}", report.path);
    }

    Ok(())
}

async fn acquire_image(
    capture: FilesystemImageCapture,
    scan: &ScanArgs,
) -> Result<CapturedImage, anyhow::Error> {
    if let Some(path) = &scan.image {
        return Ok(capture.with_camera_source(path).capture().await?);
    }

    capture
        .pick_from_library()
        .await?
        .context("no supported images in the photo library")
}
