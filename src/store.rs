use std::sync::Arc;

use mealwheel_shared::MealPlan;
use tokio::sync::watch;

use crate::source::MealPlanSource;

pub type Snapshot = Option<Arc<MealPlan>>;

/// Holds the meal plan the scheduler works on.
///
/// Every change publishes a new immutable snapshot; subscribers always see a
/// whole plan, never a partially applied edit.
pub struct PlanStore {
    tx: watch::Sender<Snapshot>,
}

impl PlanStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn replace(&self, plan: MealPlan) -> Arc<MealPlan> {
        let plan = Arc::new(plan);
        tracing::debug!(
            plan_id = %plan.id,
            entries = plan.entries.len(),
            "meal plan snapshot replaced"
        );
        self.tx.send_replace(Some(plan.clone()));
        plan
    }

    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Fetches a plan from `source` and publishes it. Without an id the
    /// active plan is used.
    pub async fn load(
        &self,
        source: &dyn MealPlanSource,
        id: Option<&str>,
        token: &str,
    ) -> anyhow::Result<Arc<MealPlan>> {
        let plan = match id {
            Some(id) => source.meal_plan(id, token).await?,
            None => source
                .active_meal_plan(token)
                .await?
                .ok_or_else(|| anyhow::anyhow!("no active meal plan"))?,
        };

        Ok(self.replace(plan))
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
