use crate::infrastructure::DEFAULT_ENDPOINT;
use clap::Parser;
use std::path::PathBuf;

/// Command-line and environment configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "resume-tailor", version, about = "Tailor a resume to a job description")]
pub struct Config {
    /// Analysis service URL the form is posted to
    #[arg(long, env = "RESUME_TAILOR_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Resume (.pdf or .docx) to preselect
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// File whose contents prefill the job description
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "RESUME_TAILOR_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Loads `.env` if present, then parses arguments with env fallbacks.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}
