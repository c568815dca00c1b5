use super::{Generation, GenerationParams, TextGenerator};
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;

pub struct ClaudeRunner {
    pub binary: PathBuf,
    pub model: String,
    pub timeout: Duration,
}

impl ClaudeRunner {
    async fn run(&self, prompt: &str) -> Result<String, ProviderError> {
        // Build command - use string for PATH lookup if not an absolute/relative path
        let binary_str = self.binary.to_string_lossy();
        let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
            Command::new(&self.binary)
        } else {
            Command::new(binary_str.as_ref())
        };

        // The CLI exposes no sampling parameters; temperature is left to the model
        cmd.arg("-p")
            .arg(prompt)
            .arg("--model")
            .arg(&self.model)
            .arg("--output-format")
            .arg("json");

        let output = tokio_timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(ProviderError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Claude wraps its answer in {"result": "...", ...}
fn unwrap_result(stdout: &str) -> String {
    #[derive(Deserialize)]
    struct ClaudeOutput {
        result: String,
    }

    match serde_json::from_str::<ClaudeOutput>(stdout) {
        Ok(out) => out.result,
        Err(_) => stdout.to_string(),
    }
}

#[async_trait]
impl TextGenerator for ClaudeRunner {
    fn name(&self) -> &'static str {
        "claude_cli"
    }

    async fn generate(&self, prompt: &str, _params: &GenerationParams) -> Generation {
        match self.run(prompt).await {
            Ok(stdout) if stdout.trim().is_empty() => Generation::failure("Empty output from claude"),
            Ok(stdout) => Generation::Success {
                text: unwrap_result(&stdout),
            },
            Err(e) => e.into(),
        }
    }
}
