use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

fn default_servings() -> u16 {
    1
}

/// A recipe assigned to one slot of the rotation.
///
/// `date` is the encoded rotation coordinate as it was persisted, not a
/// calendar date. It is kept raw so that entries with corrupted keys still
/// load and can be skipped at display time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan_id: Option<String>,
    pub recipe_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_thumbnail: Option<String>,
    pub date: String,
    pub meal_type: MealType,
    #[serde(default = "default_servings")]
    pub servings: u16,
}

impl MealPlanEntry {
    pub fn new(recipe_id: impl Into<String>, date: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            id: None,
            meal_plan_id: None,
            recipe_id: recipe_id.into(),
            recipe_title: None,
            recipe_thumbnail: None,
            date: date.into(),
            meal_type,
            servings: default_servings(),
        }
    }

    pub fn title(&self) -> &str {
        self.recipe_title.as_deref().unwrap_or(&self.recipe_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub entries: Vec<MealPlanEntry>,
}

impl MealPlan {
    pub fn new(id: impl Into<String>, start_date: Option<Date>) -> Self {
        Self {
            id: id.into(),
            start_date,
            ..Default::default()
        }
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = MealPlanEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use time::macros::date;

    #[test]
    fn test_meal_type_lowercase_wire_names() {
        assert_eq!(MealType::Breakfast.to_string(), "breakfast");
        assert_eq!(MealType::from_str("snack").unwrap(), MealType::Snack);
        assert_eq!(
            serde_json::to_string(&MealType::Dinner).unwrap(),
            "\"dinner\""
        );
    }

    #[test]
    fn test_entry_servings_default_to_one() {
        let entry: MealPlanEntry = serde_json::from_str(
            r#"{"recipe_id":"r1","date":"2001-01-01","meal_type":"lunch"}"#,
        )
        .unwrap();

        assert_eq!(entry.servings, 1);
        assert_eq!(entry.meal_type, MealType::Lunch);
        assert_eq!(entry.title(), "r1");
    }

    #[test]
    fn test_plan_start_date_is_plain_calendar_date() {
        let plan: MealPlan = serde_json::from_str(
            r#"{"id":"p1","start_date":"2024-01-01","is_active":true,"entries":[]}"#,
        )
        .unwrap();

        assert_eq!(plan.start_date, Some(date!(2024 - 01 - 01)));
        assert!(plan.is_active);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_without_start_date() {
        let plan: MealPlan = serde_json::from_str(r#"{"id":"p2"}"#).unwrap();

        assert_eq!(plan.start_date, None);
        assert!(!plan.is_active);
    }
}
