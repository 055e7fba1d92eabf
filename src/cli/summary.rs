use crate::MealPlanSource;

use super::{Context, render_summary};

pub async fn summary(ctx: &Context) -> anyhow::Result<String> {
    let plans = ctx.source.list_meal_plans(&ctx.token).await?;

    Ok(render_summary(&plans))
}
