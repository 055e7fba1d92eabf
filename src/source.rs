use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use mealwheel_shared::MealPlan;
use serde::Deserialize;

/// Where meal plan snapshots come from.
///
/// `token` identifies the caller to backends that need it.
#[async_trait]
pub trait MealPlanSource: Send + Sync {
    async fn active_meal_plan(&self, token: &str) -> anyhow::Result<Option<MealPlan>>;

    async fn meal_plan(&self, id: &str, token: &str) -> anyhow::Result<MealPlan>;

    async fn list_meal_plans(&self, token: &str) -> anyhow::Result<Vec<MealPlan>>;
}

#[derive(Deserialize)]
struct MealPlanList {
    meal_plans: Vec<MealPlan>,
}

/// Reads plans from a JSON document shaped like the backend's list response
/// (`{"meal_plans": [...]}`). The file is read again on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> anyhow::Result<Vec<MealPlan>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read meal plans from {}", self.path.display()))?;

        let list: MealPlanList = serde_json::from_str(&raw)
            .with_context(|| format!("invalid meal plan document {}", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            count = list.meal_plans.len(),
            "meal plans loaded"
        );

        Ok(list.meal_plans)
    }
}

#[async_trait]
impl MealPlanSource for JsonFileSource {
    async fn active_meal_plan(&self, _token: &str) -> anyhow::Result<Option<MealPlan>> {
        let plans = self.read().await?;
        let mut active = plans.into_iter().filter(|plan| plan.is_active);
        let first = active.next();

        if let Some(other) = active.next() {
            tracing::warn!(
                plan_id = %other.id,
                "more than one active meal plan, using the first"
            );
        }

        Ok(first)
    }

    async fn meal_plan(&self, id: &str, _token: &str) -> anyhow::Result<MealPlan> {
        self.read()
            .await?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| anyhow::anyhow!("meal plan {id} not found"))
    }

    async fn list_meal_plans(&self, _token: &str) -> anyhow::Result<Vec<MealPlan>> {
        self.read().await
    }
}
