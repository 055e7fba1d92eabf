use mealwheel_shared::MealPlan;
use time::Date;

use crate::codec::DAYS_PER_WEEK;
use crate::slot::{DaySlots, slots_for};
use crate::{Coordinate, rotation};

const LAST_DAY: u8 = DAYS_PER_WEEK - 1;

/// Day-by-day navigation through the rotation.
///
/// Moving past Sunday lands on Monday of the next week, and moving past the
/// last week wraps back to week 1 (and the reverse for `prev`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    week: u32,
    day: u8,
    total_weeks: u32,
}

impl DayCursor {
    /// Starts on today's position in the plan's rotation.
    pub fn new(plan: &MealPlan, today: Date) -> Self {
        let current = rotation::current_coordinate(plan, today);

        Self {
            week: current.week,
            day: current.day,
            total_weeks: total_weeks(plan),
        }
    }

    /// Starts on an explicit position, clamped into the rotation.
    pub fn at(week: u32, day: u8, total_weeks: u32) -> Self {
        let total_weeks = total_weeks.max(1);

        Self {
            week: week.clamp(1, total_weeks),
            day: day.min(LAST_DAY),
            total_weeks,
        }
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            week: self.week,
            day: self.day,
        }
    }

    /// Flattened index of the current day, as used by paged day views.
    pub fn position(&self) -> usize {
        (self.week as usize - 1) * usize::from(DAYS_PER_WEEK) + usize::from(self.day)
    }

    /// Number of days in one full cycle of the rotation.
    pub fn day_count(&self) -> usize {
        self.total_weeks as usize * usize::from(DAYS_PER_WEEK)
    }

    pub fn next(&mut self) -> Coordinate {
        if self.day < LAST_DAY {
            self.day += 1;
        } else {
            self.day = 0;
            self.week = if self.week >= self.total_weeks {
                1
            } else {
                self.week + 1
            };
        }

        tracing::debug!(week = self.week, day = self.day, "day cursor moved forward");
        self.coordinate()
    }

    pub fn prev(&mut self) -> Coordinate {
        if self.day > 0 {
            self.day -= 1;
        } else {
            self.day = LAST_DAY;
            self.week = if self.week <= 1 {
                self.total_weeks
            } else {
                self.week - 1
            };
        }

        tracing::debug!(week = self.week, day = self.day, "day cursor moved backward");
        self.coordinate()
    }

    /// Moves `steps` days, backwards when negative. Whole cycles are skipped,
    /// so the cost does not depend on `steps`.
    pub fn step(&mut self, steps: i64) -> Coordinate {
        let days_per_week = i64::from(DAYS_PER_WEEK);
        let cycle = i64::from(self.total_weeks) * days_per_week;
        let position = i64::from(self.week - 1) * days_per_week + i64::from(self.day);
        let target = (position + steps.rem_euclid(cycle)) % cycle;

        self.week = (target / days_per_week) as u32 + 1;
        self.day = (target % days_per_week) as u8;

        tracing::debug!(steps, week = self.week, day = self.day, "day cursor stepped");
        self.coordinate()
    }

    /// Picks up a new snapshot of the plan. The rotation length is recomputed
    /// and the week is clamped when the rotation got shorter.
    pub fn sync(&mut self, plan: &MealPlan) {
        self.total_weeks = total_weeks(plan);

        if self.week > self.total_weeks {
            tracing::debug!(
                plan_id = %plan.id,
                week = self.week,
                total_weeks = self.total_weeks,
                "rotation shrank, clamping day cursor"
            );
            self.week = self.total_weeks;
        }
    }

    pub fn slots<'a>(&self, plan: &'a MealPlan) -> DaySlots<'a> {
        slots_for(plan, self.week, self.day)
    }

    pub fn is_today(&self, plan: &MealPlan, today: Date) -> bool {
        rotation::is_today(plan, self.week, self.day, today)
    }
}

fn total_weeks(plan: &MealPlan) -> u32 {
    rotation::rotation_length(plan).unwrap_or(1)
}
