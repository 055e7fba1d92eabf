use mealwheel_mealplan::{
    DayCursor, DaySlots, WeekCursor, WeekPlan, day_name, rotation_summary, snack_label,
};
use mealwheel_shared::{MealPlan, MealPlanEntry, MealType};

pub fn meal_label(meal_type: MealType) -> &'static str {
    match meal_type {
        MealType::Breakfast => "Breakfast",
        MealType::Lunch => "Lunch",
        MealType::Dinner => "Dinner",
        MealType::Snack => "Snack",
    }
}

fn describe(entry: &MealPlanEntry) -> String {
    if entry.servings > 1 {
        format!("{} ({} servings)", entry.title(), entry.servings)
    } else {
        entry.title().to_owned()
    }
}

fn slot_line(label: &str, entry: Option<&MealPlanEntry>) -> String {
    let meal = entry.map(describe).unwrap_or_else(|| "-".to_owned());
    format!("  {label:<10} {meal}\n")
}

fn render_slots(slots: &DaySlots<'_>) -> String {
    let mut out = String::new();

    for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
        out.push_str(&slot_line(meal_label(meal_type), slots.get(meal_type)));
    }

    if slots.snacks.is_empty() {
        out.push_str(&slot_line(meal_label(MealType::Snack), None));
    }

    for (index, snack) in slots.snacks.iter().enumerate() {
        out.push_str(&slot_line(&snack_label(index), Some(snack)));
    }

    out
}

pub fn render_day(plan: &MealPlan, cursor: &DayCursor, is_today: bool) -> String {
    let marker = if is_today { " (today)" } else { "" };
    let mut out = format!(
        "Week {} of {}, {}{marker}\n",
        cursor.week(),
        cursor.total_weeks(),
        day_name(cursor.day())
    );

    out.push_str(&render_slots(&cursor.slots(plan)));
    out
}

pub fn render_week(week: &WeekPlan<'_>, cursor: &WeekCursor, today: Option<u8>) -> String {
    let mut out = format!(
        "Week {} of {} ({} meals planned)\n",
        week.week_number,
        cursor.total_weeks(),
        week.total_meals
    );

    for day in &week.days {
        let marker = if today == Some(day.day_of_week) {
            " (today)"
        } else {
            ""
        };
        out.push_str(&format!("\n{}{marker}\n", day.day_name));
        out.push_str(&render_slots(&day.slots));
    }

    out
}

pub fn render_summary(plans: &[MealPlan]) -> String {
    if plans.is_empty() {
        return "No meal plans\n".to_owned();
    }

    let mut out = String::new();

    for plan in plans {
        let summary = rotation_summary(plan);
        let active = if plan.is_active { " [active]" } else { "" };
        out.push_str(&format!(
            "{}  {}  {}, {} meals{active}\n",
            plan.id, plan.name, summary, summary.meal_count
        ));
    }

    out
}
