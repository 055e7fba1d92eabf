use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use mealwheel_shared::MealPlan;

use crate::codec::{self, DAYS_PER_WEEK};
use crate::slot::{DaySlots, slots_for};

#[derive(Debug, Clone, PartialEq)]
pub struct DayMeals<'a> {
    pub day_of_week: u8,
    pub day_name: &'static str,
    pub slots: DaySlots<'a>,
}

/// One week of the rotation, Monday first.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan<'a> {
    pub week_number: u32,
    pub days: Vec<DayMeals<'a>>,
    pub total_meals: usize,
}

pub fn week_plan(plan: &MealPlan, week: u32) -> WeekPlan<'_> {
    let days: Vec<_> = (0..DAYS_PER_WEEK)
        .map(|day| DayMeals {
            day_of_week: day,
            day_name: codec::day_name(day),
            slots: slots_for(plan, week, day),
        })
        .collect();

    let total_meals = days.iter().map(|day| day.slots.meal_count()).sum();

    WeekPlan {
        week_number: week,
        days,
        total_meals,
    }
}

/// Number of entries planned in each week that has any.
pub fn week_meal_counts(plan: &MealPlan) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();

    for coordinate in plan
        .entries
        .iter()
        .filter_map(|entry| codec::decode(&entry.date).ok())
    {
        *counts.entry(coordinate.week).or_insert(0) += 1;
    }

    counts
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationSummary {
    pub week_count: usize,
    pub day_count: usize,
    pub meal_count: usize,
}

impl fmt::Display for RotationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.week_count {
            0 => f.write_str("No meals planned"),
            1 => f.write_str("Single week rotation"),
            n => write!(f, "{n} week rotation"),
        }
    }
}

pub fn rotation_summary(plan: &MealPlan) -> RotationSummary {
    let coordinates: Vec<_> = plan
        .entries
        .iter()
        .filter_map(|entry| codec::decode(&entry.date).ok())
        .collect();

    let weeks: BTreeSet<_> = coordinates.iter().map(|c| c.week).collect();
    let days: BTreeSet<_> = coordinates.iter().collect();

    RotationSummary {
        week_count: weeks.len(),
        day_count: days.len(),
        meal_count: coordinates.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwheel_shared::{MealPlanEntry, MealType};

    fn entry(week: u32, day: u8, meal_type: MealType) -> MealPlanEntry {
        MealPlanEntry::new("recipe", codec::encode(week, day).unwrap().to_string(), meal_type)
    }

    fn plan() -> MealPlan {
        MealPlan::new("plan", None).with_entries([
            entry(1, 0, MealType::Breakfast),
            entry(1, 0, MealType::Dinner),
            entry(1, 4, MealType::Snack),
            entry(3, 6, MealType::Lunch),
            MealPlanEntry::new("broken", "bad", MealType::Lunch),
        ])
    }

    #[test]
    fn test_week_plan_has_seven_days() {
        let plan = plan();
        let week = week_plan(&plan, 1);

        assert_eq!(week.week_number, 1);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].day_name, "Monday");
        assert_eq!(week.days[6].day_name, "Sunday");
        assert_eq!(week.days[0].slots.meal_count(), 2);
        assert_eq!(week.days[4].slots.snacks.len(), 1);
        assert_eq!(week.total_meals, 3);
    }

    #[test]
    fn test_week_plan_for_empty_week() {
        let plan = plan();
        let week = week_plan(&plan, 2);

        assert_eq!(week.total_meals, 0);
        assert!(week.days.iter().all(|day| day.slots.is_empty()));
    }

    #[test]
    fn test_week_meal_counts_skip_gaps() {
        let counts = week_meal_counts(&plan());
        assert_eq!(counts, BTreeMap::from([(1, 3), (3, 1)]));
    }

    #[test]
    fn test_rotation_summary() {
        let summary = rotation_summary(&plan());

        assert_eq!(
            summary,
            RotationSummary {
                week_count: 2,
                day_count: 3,
                meal_count: 4,
            }
        );
        assert_eq!(summary.to_string(), "2 week rotation");
    }

    #[test]
    fn test_rotation_summary_labels() {
        assert_eq!(
            rotation_summary(&MealPlan::default()).to_string(),
            "No meals planned"
        );

        let single = MealPlan::default().with_entries([entry(1, 2, MealType::Dinner)]);
        assert_eq!(rotation_summary(&single).to_string(), "Single week rotation");
    }
}
