use mealwheel_shared::{MealPlan, MealPlanEntry, MealType};

use crate::{Coordinate, codec};

/// Meals planned for one day of the rotation.
///
/// Borrowed from the plan snapshot it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySlots<'a> {
    pub breakfast: Option<&'a MealPlanEntry>,
    pub lunch: Option<&'a MealPlanEntry>,
    pub dinner: Option<&'a MealPlanEntry>,
    pub snacks: Vec<&'a MealPlanEntry>,
}

impl<'a> DaySlots<'a> {
    /// First entry for `meal_type`. Snacks return the first snack.
    pub fn get(&self, meal_type: MealType) -> Option<&'a MealPlanEntry> {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snacks.first().copied(),
        }
    }

    pub fn meal_count(&self) -> usize {
        [self.breakfast, self.lunch, self.dinner]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
            + self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0
    }

    fn slot_mut(&mut self, meal_type: MealType) -> Option<&mut Option<&'a MealPlanEntry>> {
        match meal_type {
            MealType::Breakfast => Some(&mut self.breakfast),
            MealType::Lunch => Some(&mut self.lunch),
            MealType::Dinner => Some(&mut self.dinner),
            MealType::Snack => None,
        }
    }
}

/// Display label of the snack at `index` ("Snack 1", "Snack 2", ...).
pub fn snack_label(index: usize) -> String {
    format!("Snack {}", index + 1)
}

/// Groups the entries planned for `(week, day)` by meal type.
///
/// Entries whose key does not decode are skipped. When several breakfasts,
/// lunches or dinners share a day the first one wins and the others are
/// reported.
pub fn slots_for(plan: &MealPlan, week: u32, day: u8) -> DaySlots<'_> {
    let target = Coordinate { week, day };
    let mut slots = DaySlots::default();

    for entry in &plan.entries {
        let coordinate = match codec::decode(&entry.date) {
            Ok(coordinate) => coordinate,
            Err(err) => {
                tracing::warn!(
                    plan_id = %plan.id,
                    recipe_id = %entry.recipe_id,
                    err = %err,
                    "skipping meal plan entry with undecodable date"
                );
                continue;
            }
        };

        if coordinate != target {
            continue;
        }

        let Some(slot) = slots.slot_mut(entry.meal_type) else {
            slots.snacks.push(entry);
            continue;
        };

        match *slot {
            None => *slot = Some(entry),
            Some(kept) => {
                tracing::warn!(
                    plan_id = %plan.id,
                    week,
                    day,
                    meal_type = %entry.meal_type,
                    kept = %kept.recipe_id,
                    ignored = %entry.recipe_id,
                    "duplicate meal plan entry for single-recipe slot"
                );
            }
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(recipe_id: &str, week: u32, day: u8, meal_type: MealType) -> MealPlanEntry {
        MealPlanEntry::new(recipe_id, codec::encode(week, day).unwrap().to_string(), meal_type)
    }

    #[test]
    fn test_slots_partition_by_meal_type() {
        let plan = MealPlan::new("plan", None).with_entries([
            entry("eggs", 1, 0, MealType::Breakfast),
            entry("salad", 1, 0, MealType::Lunch),
            entry("stew", 1, 0, MealType::Dinner),
            entry("apple", 1, 0, MealType::Snack),
            entry("other-day", 1, 1, MealType::Lunch),
        ]);

        let slots = slots_for(&plan, 1, 0);
        assert_eq!(slots.breakfast.map(|e| e.recipe_id.as_str()), Some("eggs"));
        assert_eq!(slots.lunch.map(|e| e.recipe_id.as_str()), Some("salad"));
        assert_eq!(slots.dinner.map(|e| e.recipe_id.as_str()), Some("stew"));
        assert_eq!(slots.snacks.len(), 1);
        assert_eq!(slots.meal_count(), 4);
        assert_eq!(slots.get(MealType::Snack).map(|e| e.recipe_id.as_str()), Some("apple"));
    }

    #[test]
    fn test_duplicate_singleton_keeps_first() {
        let plan = MealPlan::new("plan", None).with_entries([
            entry("first", 2, 4, MealType::Dinner),
            entry("second", 2, 4, MealType::Dinner),
        ]);

        let slots = slots_for(&plan, 2, 4);
        assert_eq!(slots.dinner.map(|e| e.recipe_id.as_str()), Some("first"));
        assert_eq!(slots.meal_count(), 1);
    }

    #[test]
    fn test_undecodable_entries_are_skipped() {
        let plan = MealPlan::new("plan", None).with_entries([
            MealPlanEntry::new("broken", "not-a-date", MealType::Breakfast),
            entry("toast", 1, 0, MealType::Breakfast),
        ]);

        let slots = slots_for(&plan, 1, 0);
        assert_eq!(slots.breakfast.map(|e| e.recipe_id.as_str()), Some("toast"));
    }

    #[test]
    fn test_empty_day() {
        let plan = MealPlan::new("plan", None);
        let slots = slots_for(&plan, 1, 3);

        assert!(slots.is_empty());
        assert_eq!(slots, DaySlots::default());
    }

    #[test]
    fn test_snack_labels() {
        assert_eq!(snack_label(0), "Snack 1");
        assert_eq!(snack_label(1), "Snack 2");
        assert_eq!(snack_label(2), "Snack 3");
    }
}
