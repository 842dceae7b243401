use crate::models::{DietPlan, Meal};

/// Display a generated diet plan in a formatted table.
pub fn display_diet_plan(plan: &DietPlan, target_calories: i64) {
    println!();
    println!("=== Diet Plan (target: {} kcal) ===", target_calories);
    println!();

    let max_name_len = plan
        .meals()
        .iter()
        .map(|(_, m)| m.name.len())
        .max()
        .unwrap_or(10);

    for (slot, meal) in plan.meals() {
        println!(
            "{:>9}: {:<width$} {:>5.0} kcal | P:{:>4.0}g C:{:>4.0}g F:{:>4.0}g",
            slot.to_string(),
            meal.name,
            meal.calories,
            meal.protein,
            meal.carbs,
            meal.fats,
            width = max_name_len
        );
        if !meal.description.is_empty() {
            println!("{:>9}  {}", "", meal.description);
        }
    }

    println!();
    println!("--- Totals ---");
    println!("Calories: {:.0} kcal", plan.total_calories);
    println!("Protein:  {:.0} g", plan.total_protein);
    println!("Carbs:    {:.0} g", plan.total_carbs);
    println!("Fats:     {:.0} g", plan.total_fats);
    println!();
}

/// Display a simple list of catalog meals.
pub fn display_meal_list(meals: &[Meal], title: &str) {
    if meals.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, meals.len());
    println!();

    for meal in meals {
        println!(
            "  [{:>9}] {} - {:.0} kcal, P:{:.0} C:{:.0} F:{:.0}, for {}",
            meal.slot, meal.name, meal.calories, meal.protein, meal.carbs, meal.fats,
            meal.suitable_for
        );
    }

    println!();
}
