//! Tests for CLI commands against the demo meal plans

use mealwheel::cli::{self, Context};
use mealwheel::{JsonFileSource, PlanStore};
use time::Date;
use time::macros::date;

fn context(today: Date, plan_id: Option<&str>) -> Context {
    Context {
        source: JsonFileSource::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/demos/meal_plans.json"
        )),
        store: PlanStore::new(),
        plan_id: plan_id.map(str::to_owned),
        token: String::new(),
        today,
        max_weeks: 12,
    }
}

#[tokio::test]
async fn test_today_on_rotation_start() -> anyhow::Result<()> {
    let output = cli::today(&context(date!(2026 - 03 - 02), None)).await?;

    assert!(output.starts_with("Spring rotation: 3 week rotation\n"));
    assert!(output.contains("Week 1 of 3, Monday (today)\n"));
    assert!(output.contains("Breakfast  Overnight oats (2 servings)"));
    assert!(output.contains("Snack 2    Apple slices"));
    Ok(())
}

#[tokio::test]
async fn test_today_wraps_after_full_rotation() -> anyhow::Result<()> {
    let ctx = context(date!(2026 - 03 - 25), None);
    let output = cli::today(&ctx).await?;

    assert!(output.contains("Week 1 of 3, Wednesday (today)\n"));
    assert!(output.contains("Breakfast  Shakshuka"));
    assert_eq!(
        ctx.store.snapshot().map(|plan| plan.id.clone()),
        Some("spring-rotation".to_owned())
    );
    Ok(())
}

#[tokio::test]
async fn test_day_steps_wrap_backwards() -> anyhow::Result<()> {
    let ctx = context(date!(2026 - 03 - 02), None);

    let output = cli::day(&ctx, -1).await?;
    assert!(output.starts_with("Week 3 of 3, Sunday\n"));

    let output = cli::day(&ctx, 13).await?;
    assert!(output.starts_with("Week 2 of 3, Sunday\n"));

    let output = cli::day(&ctx, 21).await?;
    assert!(output.starts_with("Week 1 of 3, Monday (today)\n"));
    Ok(())
}

#[tokio::test]
async fn test_week_view() -> anyhow::Result<()> {
    let ctx = context(date!(2026 - 03 - 11), None);

    let output = cli::week(&ctx, None).await?;
    assert!(output.starts_with("Week 2 of 3 (2 meals planned)\n"));
    assert!(output.contains("\nWednesday (today)\n"));

    let output = cli::week(&ctx, Some(1)).await?;
    assert!(output.starts_with("Week 1 of 3 (8 meals planned)\n"));
    assert!(!output.contains("(today)"));

    assert!(cli::week(&ctx, Some(4)).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_explicit_plan() -> anyhow::Result<()> {
    let output = cli::today(&context(date!(2026 - 03 - 07), Some("winter-rotation"))).await?;

    assert!(output.starts_with("Winter rotation: Single week rotation\n"));
    assert!(output.contains("Dinner     Beef stew"));
    Ok(())
}

#[tokio::test]
async fn test_summary_lists_all_plans() -> anyhow::Result<()> {
    let output = cli::summary(&context(date!(2026 - 03 - 02), None)).await?;

    assert_eq!(
        output,
        "spring-rotation  Spring rotation  3 week rotation, 11 meals [active]\n\
         winter-rotation  Winter rotation  Single week rotation, 1 meals\n"
    );
    Ok(())
}

#[test]
fn test_parse_date() {
    assert_eq!(cli::parse_date("2026-03-02"), Ok(date!(2026 - 03 - 02)));
    assert!(cli::parse_date("03/02/2026").is_err());
}
