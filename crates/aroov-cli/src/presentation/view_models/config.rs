use aroov_runtime::Config;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: PathBuf,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigSetUrlViewModel {
    pub config_path: PathBuf,
    pub base_url: String,
}

/// Shown when `aroov` runs without a command.
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: PathBuf,
    pub config_exists: bool,
    pub base_url: String,
}
