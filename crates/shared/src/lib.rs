pub mod mealplan;

pub use mealplan::{MealPlan, MealPlanEntry, MealType};
