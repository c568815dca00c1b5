//! CLI handler for the `generate` subcommand

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::output::render_plan;
use crate::planner::{Plan, PlanOrchestrator, PlanSource, SelfAssessment};
use crate::provider::create_runner;
use crate::store::PlanStore;
use anyhow::{bail, Context};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

pub async fn execute(config_path: &Path, args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(config_path)?;

    // Apply CLI overrides
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if args.no_fallback {
        config.generation.fallback = false;
    }
    config.validate()?;

    if args.goal.trim().is_empty() {
        bail!("--goal must not be empty");
    }

    let assessment = match &args.swot {
        Some(path) => load_assessment(path)?,
        None => SelfAssessment {
            strengths: args.strengths.clone(),
            weaknesses: args.weaknesses.clone(),
            opportunities: args.opportunities.clone(),
            threats: args.threats.clone(),
        },
    };

    if assessment.strengths.trim().is_empty() {
        warn!("No strengths given; KPIs and tips will use generic targets");
    }

    info!("Using provider {}", config.provider);
    let orchestrator = PlanOrchestrator::new(&config.generation, create_runner(&config));
    let generated = orchestrator
        .generate(&assessment, &args.goal, &args.category)
        .await?;

    match &generated.source {
        PlanSource::External { provider } => info!("Plan generated by {}", provider),
        PlanSource::Fallback { cause } => {
            eprintln!("Note: using built-in templates ({})", cause)
        }
        PlanSource::Offline => info!("Plan generated from built-in templates"),
    }

    let rendered = render_plan(&args.goal, &generated.payload);
    let plan = Plan::from_payload(
        generated.payload,
        &args.goal,
        &args.category,
        &args.duration,
        Utc::now(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", rendered);
    }

    if args.dry_run {
        info!("DRY RUN - plan not saved");
        return Ok(());
    }

    let mut store = PlanStore::load(&config.store)?;
    let plan_id = plan.id.clone();
    store.add(plan);
    store.save(&config.store)?;
    eprintln!("Saved plan {} to {}", plan_id, config.store.display());

    Ok(())
}

/// serde_yaml also accepts JSON documents
fn load_assessment(path: &Path) -> anyhow::Result<SelfAssessment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read self-assessment {:?}", path))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse self-assessment {:?}", path))
}
