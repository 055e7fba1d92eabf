use mealwheel_mealplan::{WeekCursor, current_day_of_week, current_week, week_plan};

use super::{Context, render_week};

pub async fn week(ctx: &Context, week: Option<u32>) -> anyhow::Result<String> {
    let plan = ctx.load_plan().await?;
    let this_week = current_week(&plan, ctx.today);

    let mut cursor = WeekCursor::from_plan(&plan, ctx.max_weeks);
    cursor.go_to(week.unwrap_or(this_week))?;

    let today = (cursor.current() == this_week).then(|| current_day_of_week(ctx.today));

    Ok(render_week(
        &week_plan(&plan, cursor.current()),
        &cursor,
        today,
    ))
}
