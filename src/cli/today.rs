use mealwheel_mealplan::{DayCursor, rotation_summary};

use super::{Context, render_day};

pub async fn today(ctx: &Context) -> anyhow::Result<String> {
    let plan = ctx.load_plan().await?;
    let cursor = DayCursor::new(&plan, ctx.today);

    tracing::info!(
        plan_id = %plan.id,
        week = cursor.week(),
        day = cursor.day(),
        "showing today's meals"
    );

    Ok(format!(
        "{}: {}\n{}",
        plan.name,
        rotation_summary(&plan),
        render_day(&plan, &cursor, true)
    ))
}
