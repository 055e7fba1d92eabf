use mealwheel_shared::{MealPlan, MealPlanEntry};

use crate::{MealPlanError, codec, rotation};

pub const DEFAULT_MAX_WEEKS: u32 = 12;

/// Week selector state for browsing and editing a rotation.
///
/// Unlike [`crate::DayCursor`] it never wraps: `next` stops at the last week
/// and `prev` at week 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    current: u32,
    total_weeks: u32,
    max_weeks: u32,
}

impl WeekCursor {
    pub fn new(total_weeks: u32, max_weeks: u32) -> Self {
        Self {
            current: 1,
            total_weeks: total_weeks.max(1),
            max_weeks: max_weeks.max(1),
        }
    }

    /// One week per week referenced by the plan, at least one.
    pub fn from_plan(plan: &MealPlan, max_weeks: u32) -> Self {
        Self::new(rotation::rotation_length(plan).unwrap_or(1), max_weeks)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    pub fn max_weeks(&self) -> u32 {
        self.max_weeks
    }

    pub fn can_prev(&self) -> bool {
        self.current > 1
    }

    pub fn can_next(&self) -> bool {
        self.current < self.total_weeks
    }

    pub fn can_add_week(&self) -> bool {
        self.total_weeks < self.max_weeks
    }

    pub fn can_remove_week(&self) -> bool {
        self.total_weeks > 1
    }

    pub fn next(&mut self) -> u32 {
        if self.can_next() {
            self.current += 1;
        }

        self.current
    }

    pub fn prev(&mut self) -> u32 {
        if self.can_prev() {
            self.current -= 1;
        }

        self.current
    }

    pub fn go_to(&mut self, week: u32) -> Result<u32, MealPlanError> {
        if week < 1 || week > self.total_weeks {
            return Err(MealPlanError::WeekOutOfRange {
                week,
                total: self.total_weeks,
            });
        }

        self.current = week;
        Ok(self.current)
    }

    /// Appends an empty week and returns the new number of weeks.
    pub fn add_week(&mut self) -> Result<u32, MealPlanError> {
        if !self.can_add_week() {
            return Err(MealPlanError::LimitExceeded {
                max: self.max_weeks,
            });
        }

        self.total_weeks += 1;
        tracing::debug!(total_weeks = self.total_weeks, "week added to rotation");

        Ok(self.total_weeks)
    }

    /// Drops the last week along with every entry planned in it.
    ///
    /// Returns the discarded entries, or `None` when the rotation is down to
    /// a single week and nothing was removed. Entries whose key does not
    /// decode are left alone.
    pub fn remove_week(&mut self, entries: &mut Vec<MealPlanEntry>) -> Option<Vec<MealPlanEntry>> {
        if !self.can_remove_week() {
            tracing::debug!("refusing to remove the only week of the rotation");
            return None;
        }

        self.total_weeks -= 1;
        self.current = self.current.min(self.total_weeks);

        let total_weeks = self.total_weeks;
        let (kept, removed): (Vec<_>, Vec<_>) = entries.drain(..).partition(|entry| {
            !matches!(codec::decode(&entry.date), Ok(coordinate) if coordinate.week > total_weeks)
        });
        *entries = kept;

        tracing::debug!(
            total_weeks,
            removed = removed.len(),
            "week removed from rotation"
        );

        Some(removed)
    }
}

impl Default for WeekCursor {
    fn default() -> Self {
        Self::new(1, DEFAULT_MAX_WEEKS)
    }
}
