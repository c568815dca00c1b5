//! Two-tier plan generation: one external attempt, then the template generator.
//!
//! Any fault on the external path (transport, bad status, empty response,
//! unparsable or incomplete JSON) is recoverable. There is no retry loop:
//! a second external attempt is not expected to change the outcome.

use crate::config::GenerationConfig;
use crate::error::{ExternalError, GenerationError};
use crate::parser::parse_plan;
use crate::provider::{Generation, GenerationParams, TextGenerator};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{generate_plan, PlanPayload, SelfAssessment};

const GENERATE_PROMPT: &str = include_str!("../../prompts/generate.md");

/// Where a generated payload came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    External { provider: &'static str },
    /// Template generator after the external attempt failed
    Fallback { cause: String },
    /// Template generator with no external provider configured
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub payload: PlanPayload,
    pub source: PlanSource,
}

pub struct PlanOrchestrator {
    runner: Option<Arc<dyn TextGenerator>>,
    params: GenerationParams,
    fallback: bool,
}

impl PlanOrchestrator {
    pub fn new(config: &GenerationConfig, runner: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            runner,
            params: GenerationParams {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
            fallback: config.fallback,
        }
    }

    pub async fn generate(
        &self,
        assessment: &SelfAssessment,
        goal: &str,
        category: &str,
    ) -> Result<GeneratedPlan, GenerationError> {
        let Some(runner) = &self.runner else {
            info!("No external provider configured, generating plan locally");
            return Ok(GeneratedPlan {
                payload: generate_plan(assessment, goal, category),
                source: PlanSource::Offline,
            });
        };

        let prompt = build_prompt(assessment, goal, category);
        info!("Generating plan with {}", runner.name());

        match self.try_external(runner.as_ref(), &prompt).await {
            Ok(payload) => {
                info!(
                    "Plan generated with {}: {} tasks, {} kpis, {} tips",
                    runner.name(),
                    payload.tasks.len(),
                    payload.kpis.len(),
                    payload.tips.len()
                );
                Ok(GeneratedPlan {
                    payload,
                    source: PlanSource::External {
                        provider: runner.name(),
                    },
                })
            }
            Err(e) => {
                if let ExternalError::Provider {
                    status: Some(code), ..
                } = &e
                {
                    debug!("{} answered with HTTP {}", runner.name(), code);
                }

                if !self.fallback {
                    warn!("{} generation failed and fallback is disabled: {}", runner.name(), e);
                    return Err(GenerationError::Exhausted {
                        cause: e.to_string(),
                    });
                }

                warn!("{} generation failed: {}. Falling back to local plan", runner.name(), e);
                Ok(GeneratedPlan {
                    payload: generate_plan(assessment, goal, category),
                    source: PlanSource::Fallback {
                        cause: e.to_string(),
                    },
                })
            }
        }
    }

    async fn try_external(
        &self,
        runner: &dyn TextGenerator,
        prompt: &str,
    ) -> Result<PlanPayload, ExternalError> {
        match runner.generate(prompt, &self.params).await {
            Generation::Success { text } => Ok(parse_plan(&text)?),
            Generation::Failure { status, message } => {
                Err(ExternalError::Provider { status, message })
            }
        }
    }
}

/// Fill the fixed prompt template in one pass, so placeholder-looking text
/// inside user input is never expanded
pub fn build_prompt(assessment: &SelfAssessment, goal: &str, category: &str) -> String {
    let Ok(re) = regex::Regex::new(r"\{\{([A-Z]+)\}\}") else {
        return GENERATE_PROMPT.to_string();
    };

    re.replace_all(GENERATE_PROMPT, |caps: &regex::Captures| {
        match &caps[1] {
            "GOAL" => goal,
            "CATEGORY" => category,
            "STRENGTHS" => assessment.strengths.as_str(),
            "WEAKNESSES" => assessment.weaknesses.as_str(),
            "OPPORTUNITIES" => assessment.opportunities.as_str(),
            "THREATS" => assessment.threats.as_str(),
            _ => "",
        }
        .to_string()
    })
    .into_owned()
}
