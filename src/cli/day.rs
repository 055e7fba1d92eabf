use mealwheel_mealplan::DayCursor;

use super::{Context, render_day};

/// Walks `steps` days away from today, wrapping around the rotation.
pub async fn day(ctx: &Context, steps: i64) -> anyhow::Result<String> {
    let plan = ctx.load_plan().await?;
    let mut cursor = DayCursor::new(&plan, ctx.today);
    cursor.step(steps);

    Ok(render_day(&plan, &cursor, cursor.is_today(&plan, ctx.today)))
}
