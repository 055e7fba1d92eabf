use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealPlanError {
    #[error("Invalid rotation coordinate: week {week}, day {day}")]
    InvalidCoordinate { week: u32, day: u8 },

    #[error("Invalid meal plan date key: {0}")]
    Decode(String),

    #[error("Rotation already has the maximum of {max} weeks")]
    LimitExceeded { max: u32 },

    #[error("Meal plan has no entries")]
    EmptyRotation,

    #[error("Week {week} is outside the rotation (1..={total})")]
    WeekOutOfRange { week: u32, total: u32 },
}
