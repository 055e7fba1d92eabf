pub mod cli;
pub mod config;
pub mod observability;
pub mod source;
pub mod store;

pub use config::Config;
pub use source::{JsonFileSource, MealPlanSource};
pub use store::PlanStore;
