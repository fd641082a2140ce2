use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use productscan_core::domain::common::{
    CaptureConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_MAX_IMAGE_SIZE,
    ExportConfig, LLMConfig, ModeSelection, ProductScanConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "productscan", version, about = "Analyze packaged products from a photo")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Analyze one image from the command line
    Scan(ScanArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Still image to analyze
    #[arg(long, conflicts_with = "pick")]
    pub image: Option<PathBuf>,

    /// Use the most recent image in the photo library
    #[arg(long)]
    pub pick: bool,

    /// Also write the HTML report
    #[arg(long)]
    pub export: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ModeArg {
    /// Live if a credential is configured, demo otherwise
    #[default]
    Auto,
    Live,
    Demo,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: Url,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 30)]
    pub gemini_timeout_secs: u64,

    #[arg(long, env = "ANALYSIS_MODE", value_enum, default_value_t = ModeArg::Auto)]
    pub mode: ModeArg,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "PHOTO_LIBRARY_DIR", default_value = "./photos")]
    pub library_dir: PathBuf,

    #[arg(long, env = "EXPORT_DIR", default_value = "./reports")]
    pub export_dir: PathBuf,

    #[arg(long, env = "MAX_IMAGE_SIZE", default_value_t = DEFAULT_MAX_IMAGE_SIZE)]
    pub max_image_size: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<ModeArg> for ModeSelection {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => ModeSelection::Auto,
            ModeArg::Live => ModeSelection::Live,
            ModeArg::Demo => ModeSelection::Demo,
        }
    }
}

impl From<Args> for ProductScanConfig {
    fn from(args: Args) -> Self {
        ProductScanConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_base_url: args.llm.gemini_base_url.to_string(),
                gemini_model: args.llm.gemini_model,
                request_timeout: Duration::from_secs(args.llm.gemini_timeout_secs),
                mode: args.llm.mode.into(),
            },
            capture: CaptureConfig {
                library_dir: args.storage.library_dir,
                max_image_size: args.storage.max_image_size,
            },
            export: ExportConfig {
                output_dir: args.storage.export_dir,
            },
        }
    }
}
