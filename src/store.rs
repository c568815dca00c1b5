//! JSON file of generated plans and their completion state.
//!
//! Persistence sits outside the planning and analysis code; only the CLI
//! reads and writes this file.

use crate::error::StoreError;
use crate::planner::Plan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlanStore {
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl PlanStore {
    /// Load the store, or an empty one if the file does not exist yet
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(write_err)
    }

    pub fn add(&mut self, plan: Plan) {
        self.plans.push(plan);
    }

    pub fn get(&self, plan_id: &str) -> Result<&Plan, StoreError> {
        self.plans
            .iter()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| StoreError::PlanNotFound(plan_id.to_string()))
    }

    /// Mark a task done (or not done). Returns whether anything changed.
    pub fn set_completed(
        &mut self,
        plan_id: &str,
        task_id: u32,
        completed: bool,
    ) -> Result<bool, StoreError> {
        let plan = self
            .plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| StoreError::PlanNotFound(plan_id.to_string()))?;

        if !plan.has_task(task_id) {
            return Err(StoreError::TaskNotFound {
                plan: plan_id.to_string(),
                task: task_id,
            });
        }

        Ok(if completed {
            plan.completed_task_ids.insert(task_id)
        } else {
            plan.completed_task_ids.remove(&task_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{generate_plan, SelfAssessment};
    use chrono::Utc;

    fn sample_plan() -> Plan {
        let payload = generate_plan(&SelfAssessment::default(), "Save money", "Finance");
        Plan::from_payload(payload, "Save money", "Finance", "Long term (6-12 months)", Utc::now())
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlanStore::load(&dir.path().join("plans.json")).unwrap();
        assert!(store.plans.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/plans.json");

        let mut store = PlanStore::default();
        let plan = sample_plan();
        let id = plan.id.clone();
        store.add(plan);
        store.save(&path).unwrap();

        let reloaded = PlanStore::load(&path).unwrap();
        let plan = reloaded.get(&id).unwrap();
        assert_eq!(plan.tasks.len(), 4);
        assert!(plan.completed_task_ids.is_empty());
        assert_eq!(plan.duration, "Long term (6-12 months)");
    }

    #[test]
    fn test_toggle_completion() {
        let mut store = PlanStore::default();
        let plan = sample_plan();
        let id = plan.id.clone();
        store.add(plan);

        assert!(store.set_completed(&id, 2, true).unwrap());
        assert!(!store.set_completed(&id, 2, true).unwrap());
        assert!(store.get(&id).unwrap().completed_task_ids.contains(&2));
        assert!(store.set_completed(&id, 2, false).unwrap());
        assert!(store.get(&id).unwrap().completed_task_ids.is_empty());
    }

    #[test]
    fn test_unknown_plan_or_task() {
        let mut store = PlanStore::default();
        let plan = sample_plan();
        let id = plan.id.clone();
        store.add(plan);

        assert!(matches!(
            store.set_completed("nope", 1, true),
            Err(StoreError::PlanNotFound(_))
        ));
        assert!(matches!(
            store.set_completed(&id, 99, true),
            Err(StoreError::TaskNotFound { task: 99, .. })
        ));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plans.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(PlanStore::load(&path), Err(StoreError::Corrupt(_))));
    }
}
