use std::path::PathBuf;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::domain::{
    common::{ExportConfig, entities::app_errors::CoreError},
    export::{
        entities::ExportedReport, ports::DocumentExporter, report::render_report_html,
        value_objects::ExportReportInput,
    },
};

const REPORT_MIME_TYPE: &str = "text/html";
const MAX_SLUG_LEN: usize = 48;

/// Writes analysis reports as standalone HTML files into a directory.
#[derive(Debug, Clone)]
pub struct HtmlReportExporter {
    output_dir: PathBuf,
}

impl HtmlReportExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
        }
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "product".to_string()
    } else {
        slug.to_string()
    }
}

impl DocumentExporter for HtmlReportExporter {
    #[instrument(skip(self, input), fields(dir = %self.output_dir.display()))]
    async fn render(&self, input: ExportReportInput) -> Result<ExportedReport, CoreError> {
        let html = render_report_html(
            &input.analysis,
            input.image_uri.as_deref(),
            Utc::now().date_naive(),
        );
        let checksum = hex::encode(Sha256::digest(html.as_bytes()));
        let file_name = format!(
            "product-analysis-{}-{}.html",
            slugify(&input.analysis.product_name),
            &checksum[..12]
        );
        let path = self.output_dir.join(&file_name);

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                CoreError::Export(format!(
                    "cannot create {}: {}",
                    self.output_dir.display(),
                    e
                ))
            })?;
        tokio::fs::write(&path, html.as_bytes())
            .await
            .map_err(|e| CoreError::Export(format!("cannot write {}: {}", path.display(), e)))?;

        Ok(ExportedReport {
            path: path.display().to_string(),
            file_name,
            mime_type: REPORT_MIME_TYPE.to_string(),
            size_bytes: html.len() as u64,
            checksum_sha256: checksum,
            created_at: Utc::now(),
        })
    }
}
