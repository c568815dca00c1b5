//! Plan generation: SWOT self-assessment in, tasks/KPIs/tips out.
//!
//! 1. `orchestrator` asks the configured external provider for a plan
//! 2. Its output is parsed and normalized (see `crate::parser`)
//! 3. On any failure, `generator` builds the plan from category templates

pub mod generator;
pub mod orchestrator;
pub mod templates;
pub mod types;

pub use generator::generate_plan;
pub use orchestrator::{PlanOrchestrator, PlanSource};
pub use types::{Category, Frequency, Kpi, Plan, PlanPayload, SelfAssessment, Task};
