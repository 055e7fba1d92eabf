use std::sync::Arc;

use mealwheel_shared::MealPlan;
use time::Date;
use time::macros::format_description;

use crate::{JsonFileSource, PlanStore};

mod day;
mod render;
mod summary;
mod today;
mod week;

pub use day::day;
pub use render::*;
pub use summary::summary;
pub use today::today;
pub use week::week;

/// Everything a command needs to resolve and display a plan.
pub struct Context {
    pub source: JsonFileSource,
    pub store: PlanStore,
    pub plan_id: Option<String>,
    pub token: String,
    pub today: Date,
    pub max_weeks: u32,
}

impl Context {
    pub async fn load_plan(&self) -> anyhow::Result<Arc<MealPlan>> {
        self.store
            .load(&self.source, self.plan_id.as_deref(), &self.token)
            .await
    }
}

/// Parses a `YYYY-MM-DD` command line date.
pub fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("invalid date '{value}': {err}"))
}
