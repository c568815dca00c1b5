//! CLI handler for the `analyze` subcommand

use crate::analysis::{analyze_overall, analyze_plan};
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::output::{build_summary_markdown, render_analysis, write_summary};
use crate::store::PlanStore;
use chrono::{Local, Utc};
use std::path::Path;
use tracing::info;

pub fn execute(config_path: &Path, args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }

    let store = PlanStore::load(&config.store)?;
    let now = Utc::now();
    info!("Analyzing {} plans from {:?}", store.plans.len(), config.store);

    if let Some(plan_id) = &args.plan {
        let plan = store.get(plan_id)?;
        let analysis = analyze_plan(plan, now);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            println!("{}", render_analysis(plan, &analysis));
        }
        return Ok(());
    }

    let overall = analyze_overall(&store.plans, now);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&overall)?);
    } else {
        println!("{}", build_summary_markdown(&overall, &store.plans, now));
    }

    if args.write {
        // Dated report directory (reports/YYYY-MM-DD/)
        let date_str = Local::now().format("%Y-%m-%d").to_string();
        let report_dir = config.report_dir.join(&date_str);
        write_summary(&report_dir, &overall, &store.plans, now)?;
        eprintln!("Summary written to {}", report_dir.display());
    }

    Ok(())
}
