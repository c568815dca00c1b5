mod claude;
mod gemini;

pub use claude::ClaudeRunner;
pub use gemini::GeminiRunner;

use crate::config::{Config, Provider};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Sampling parameters forwarded to the external model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Outcome of one external generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Success {
        text: String,
    },
    Failure {
        /// HTTP status when the provider answered at all
        status: Option<u16>,
        message: String,
    },
}

impl Generation {
    pub fn failure(message: impl Into<String>) -> Self {
        Generation::Failure {
            status: None,
            message: message.into(),
        }
    }
}

impl From<ProviderError> for Generation {
    fn from(e: ProviderError) -> Self {
        Generation::failure(e.to_string())
    }
}

/// An opaque "generate text from a prompt" capability.
///
/// Implementations never return errors: transport faults, bad statuses and
/// empty responses are all reported as `Generation::Failure`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Generation;
}

/// Create the configured generator, or `None` for offline generation
pub fn create_runner(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    let timeout = Duration::from_secs(config.generation.timeout_sec);
    match config.provider {
        Provider::Gemini => {
            let gemini = &config.providers.gemini;
            Some(Arc::new(GeminiRunner::new(
                gemini.api_url.clone(),
                gemini.model.clone(),
                std::env::var(&gemini.api_key_env).ok(),
                gemini.api_key_env.clone(),
                timeout,
            )))
        }
        Provider::ClaudeCli => Some(Arc::new(ClaudeRunner {
            binary: config.providers.claude_cli.binary.clone(),
            model: config.providers.claude_cli.model.clone(),
            timeout,
        })),
        Provider::Offline => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_has_no_runner() {
        let config = Config {
            provider: Provider::Offline,
            ..Config::default()
        };
        assert!(create_runner(&config).is_none());
    }

    #[test]
    fn test_provider_error_becomes_failure() {
        let generation: Generation =
            ProviderError::MissingApiKey("GEMINI_API_KEY".to_string()).into();
        assert_eq!(
            generation,
            Generation::Failure {
                status: None,
                message: "Environment variable GEMINI_API_KEY not set".to_string(),
            }
        );
    }

    #[test]
    fn test_claude_runner_name() {
        let config = Config {
            provider: Provider::ClaudeCli,
            ..Config::default()
        };
        let runner = create_runner(&config).unwrap();
        assert_eq!(runner.name(), "claude_cli");
    }
}
