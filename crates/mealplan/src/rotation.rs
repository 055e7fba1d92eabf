use mealwheel_shared::MealPlan;
use time::{Date, OffsetDateTime};

use crate::{Coordinate, MealPlanError, codec};

/// Today's date on the local wall clock, or in UTC when the local offset is
/// unavailable.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Number of weeks in the rotation, derived from the highest week referenced
/// by a decodable entry.
pub fn rotation_length(plan: &MealPlan) -> Result<u32, MealPlanError> {
    plan.entries
        .iter()
        .filter_map(|entry| codec::decode(&entry.date).ok())
        .map(|coordinate| coordinate.week)
        .max()
        .ok_or(MealPlanError::EmptyRotation)
}

/// Rotation week (1-based) that `today` falls in.
///
/// Only whole weeks elapsed since the plan's start date count, so the real
/// weekday always lines up with the same day index in every rotation week.
/// Plans that have not started yet, have no start date or have no entries
/// report week 1.
pub fn current_week(plan: &MealPlan, today: Date) -> u32 {
    let total_weeks = match rotation_length(plan) {
        Ok(total) => total,
        Err(_) => {
            tracing::debug!(plan_id = %plan.id, "empty rotation, showing week 1");
            return 1;
        }
    };

    let Some(start_date) = plan.start_date else {
        return 1;
    };

    let days_since_start = (today - start_date).whole_days().max(0);
    let weeks_since_start = days_since_start / 7;

    (weeks_since_start % i64::from(total_weeks)) as u32 + 1
}

/// Day index of `today` in the rotation week, 0 for Monday.
pub fn current_day_of_week(today: Date) -> u8 {
    today.weekday().number_days_from_monday()
}

pub fn current_coordinate(plan: &MealPlan, today: Date) -> Coordinate {
    Coordinate {
        week: current_week(plan, today),
        day: current_day_of_week(today),
    }
}

pub fn is_today(plan: &MealPlan, week: u32, day: u8, today: Date) -> bool {
    current_coordinate(plan, today) == Coordinate { week, day }
}
