//! CLI handler for the `complete` subcommand

use crate::analysis::analyze_plan;
use crate::cli::CompleteArgs;
use crate::config::Config;
use crate::store::PlanStore;
use chrono::Utc;
use std::path::Path;

pub fn execute(config_path: &Path, args: CompleteArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let mut store = PlanStore::load(&config.store)?;

    let changed = store.set_completed(&args.plan, args.task, !args.undo)?;
    if changed {
        store.save(&config.store)?;
    }

    let analysis = analyze_plan(store.get(&args.plan)?, Utc::now());
    println!(
        "Task {} {}. {}/{} tasks done ({}%).",
        args.task,
        if args.undo { "reopened" } else { "completed" },
        analysis.tasks_completed,
        analysis.total_tasks,
        analysis.completion_rate
    );

    Ok(())
}
