use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unsupported config version {0}")]
    UnsupportedVersion(u32),

    #[error("Temperature must be between 0.0 and 2.0, got {0}")]
    Temperature(f32),

    #[error("max_output_tokens must be positive")]
    ZeroOutputTokens,
}

/// Transport-level faults of an external generation capability.
///
/// Runners fold these into `Generation::Failure`; they never reach the
/// orchestrator's caller.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Execution timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Process failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("Environment variable {0} not set")]
    MissingApiKey(String),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Could not locate a JSON object in the response")]
    NoJsonObject,

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Response missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{0}' must be an array")]
    NotAnArray(&'static str),
}

/// Recoverable fault on the external generation path; always answered by
/// the template fallback when it is enabled.
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("{message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to generate plan: {cause}")]
    Exhausted { cause: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read plan store '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write plan store '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Plan store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Plan '{0}' not found")]
    PlanNotFound(String),

    #[error("Plan '{plan}' has no task {task}")]
    TaskNotFound { plan: String, task: u32 },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
