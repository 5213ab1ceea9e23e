//! Rule-based recipe composition from a food's category and the meal it is
//! served at.

use uuid::Uuid;

use crate::domain::{
    diet_chart::entities::MealType,
    food::entities::Food,
    recipe::entities::{
        CookingTime, Difficulty, Ingredient, Recipe, RecipeConfig, ServingNutrition,
    },
};

pub const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";
pub const TEMPLATE_SERVINGS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    pub cooking_time: CookingTime,
    pub difficulty: Difficulty,
    pub best_time: &'static str,
    pub tips: &'static str,
}

pub fn meal_template(meal_type: MealType) -> MealTemplate {
    match meal_type {
        MealType::Breakfast => MealTemplate {
            cooking_time: CookingTime::Quick,
            difficulty: Difficulty::Easy,
            best_time: "Morning (6-9 AM)",
            tips: "Best consumed warm for better digestion",
        },
        MealType::Lunch => MealTemplate {
            cooking_time: CookingTime::Moderate,
            difficulty: Difficulty::Medium,
            best_time: "Midday (12-2 PM)",
            tips: "Include all six tastes for balanced nutrition",
        },
        MealType::Dinner => MealTemplate {
            cooking_time: CookingTime::Moderate,
            difficulty: Difficulty::Medium,
            best_time: "Evening (6-8 PM)",
            tips: "Keep it light and easily digestible",
        },
        MealType::Snack => MealTemplate {
            cooking_time: CookingTime::Quick,
            difficulty: Difficulty::Easy,
            best_time: "Afternoon (3-5 PM)",
            tips: "Choose fresh, seasonal ingredients",
        },
    }
}

pub fn recipe_name(food: &Food) -> String {
    format!("Ayurvedic {} Recipe", food.name)
}

pub fn ingredients(food: &Food) -> Vec<Ingredient> {
    let mut ingredients = vec![Ingredient::new(food.name.clone(), "1 cup", "Main ingredient")];

    let extras: &[(&str, &str, &str)] = match food.category.as_str() {
        "grains" => &[
            ("Ghee", "1 tbsp", "For cooking"),
            ("Cumin seeds", "1 tsp", "For tempering"),
            ("Salt", "to taste", "Seasoning"),
        ],
        "vegetables" => &[
            ("Turmeric powder", "1/2 tsp", "Anti-inflammatory"),
            ("Cumin powder", "1/2 tsp", "Digestive aid"),
            ("Coriander powder", "1/2 tsp", "Cooling effect"),
            ("Ginger", "1 inch", "Fresh, grated"),
        ],
        "fruits" => &[
            ("Honey", "1 tbsp", "Natural sweetener"),
            ("Cardamom powder", "1/4 tsp", "Aromatic spice"),
            ("Saffron", "few strands", "Optional, for garnish"),
        ],
        "dairy" => &[
            ("Cardamom powder", "1/2 tsp", "Digestive aid"),
            ("Saffron", "few strands", "Aromatic"),
            ("Nuts", "1 tbsp", "Almonds or cashews, chopped"),
        ],
        _ => &[],
    };

    ingredients.extend(
        extras
            .iter()
            .map(|(name, quantity, notes)| Ingredient::new(*name, *quantity, *notes)),
    );
    ingredients
}

pub fn instructions(food: &Food) -> Vec<String> {
    let steps: &[&str] = match food.category.as_str() {
        "grains" => &[
            "Wash the grains thoroughly until water runs clear",
            "Heat ghee in a pan and add cumin seeds",
            "When seeds crackle, add the grains and stir for 2 minutes",
            "Add water (2:1 ratio) and bring to boil",
            "Reduce heat, cover and simmer for 15-20 minutes",
            "Let it rest for 5 minutes before serving",
        ],
        "vegetables" => &[
            "Clean and chop the vegetables into bite-sized pieces",
            "Heat ghee in a pan and add cumin seeds",
            "Add ginger and sauté for 30 seconds",
            "Add vegetables and stir-fry for 2-3 minutes",
            "Add turmeric, cumin, and coriander powder",
            "Add salt and cook covered for 5-7 minutes",
            "Garnish with fresh herbs and serve",
        ],
        "fruits" => &[
            "Wash and prepare the fruits",
            "Mix honey and cardamom powder in a bowl",
            "Add fruits and gently toss to coat",
            "Let it marinate for 10-15 minutes",
            "Garnish with saffron and nuts if desired",
            "Serve fresh",
        ],
        "dairy" => &[
            "Heat the dairy product gently in a pan",
            "Add cardamom powder and stir well",
            "Add saffron and let it infuse for 5 minutes",
            "Sweeten with honey if needed",
            "Garnish with chopped nuts",
            "Serve warm or chilled as preferred",
        ],
        _ => &[
            "Prepare the main ingredient as needed",
            "Follow traditional Ayurvedic cooking methods",
            "Add appropriate spices for your dosha",
            "Cook with love and mindfulness",
            "Serve at the appropriate time for your constitution",
        ],
    };

    steps.iter().map(|step| step.to_string()).collect()
}

/// Search terms are joined with `+`.
pub fn youtube_search_url(terms: &str) -> String {
    let query = terms.split_whitespace().collect::<Vec<_>>().join("+");
    format!("{YOUTUBE_SEARCH_URL}{query}")
}

pub fn ayurvedic_benefits(food: &Food) -> String {
    let name = &food.name;
    match food.category.as_str() {
        "grains" => format!(
            "{name} provides grounding energy and supports digestive fire (Agni). Rich in complex carbohydrates, it offers sustained energy and promotes satiety."
        ),
        "vegetables" => format!(
            "{name} offers cooling and cleansing properties. High in fiber and phytonutrients, it supports detoxification and overall health."
        ),
        "fruits" => format!(
            "{name} provides natural sweetness and cooling energy. Rich in vitamins and antioxidants, it supports immune function and skin health."
        ),
        "dairy" => format!(
            "{name} offers nourishing and cooling properties. Rich in calcium and protein, it supports bone health and provides grounding energy."
        ),
        "spices" => format!(
            "{name} enhances digestive fire and adds therapeutic value. Each spice has specific healing properties for different doshas."
        ),
        "nuts" => format!(
            "{name} provides healthy fats and grounding energy. Rich in protein and minerals, it supports brain health and overall vitality."
        ),
        _ => format!("{name} offers various health benefits according to Ayurvedic principles."),
    }
}

pub fn dosha_considerations(food: &Food) -> String {
    let name = &food.name;
    [
        format!(
            "Vata: Vata types should consume {name} warm and well-cooked with digestive spices like ginger and cumin."
        ),
        format!(
            "Pitta: Pitta types can enjoy {name} in moderation, preferably with cooling herbs like coriander and mint."
        ),
        format!(
            "Kapha: Kapha types should have {name} in smaller portions with warming spices like black pepper and turmeric."
        ),
    ]
    .join(" • ")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Half of the 100 g values plus a fixed allowance for cooking additions.
pub fn serving_nutrition(food: &Food) -> ServingNutrition {
    ServingNutrition {
        calories: round1(food.calories as f64 * 0.5 + 50.0),
        protein: round1(food.protein * 0.5 + 2.0),
        carbs: round1(food.carbohydrates * 0.5 + 10.0),
        fat: round1(food.fat * 0.5 + 5.0),
    }
}

pub fn compose_recipe(food: &Food, meal_type: MealType, created_by: Uuid) -> Recipe {
    let template = meal_template(meal_type);
    let name = &food.name;

    Recipe::new(RecipeConfig {
        food_id: food.id,
        name: recipe_name(food),
        description: format!("Traditional Ayurvedic preparation of {name} perfect for {meal_type}"),
        ingredients: ingredients(food),
        instructions: instructions(food),
        cooking_time: template.cooking_time,
        difficulty: template.difficulty,
        servings: TEMPLATE_SERVINGS,
        nutrition: serving_nutrition(food),
        ayurvedic_benefits: ayurvedic_benefits(food),
        best_time_to_eat: template.best_time.to_string(),
        seasonal_notes: format!(
            "Best consumed during appropriate seasons. {name} can be enjoyed year-round with seasonal adjustments in preparation and spices."
        ),
        dosha_considerations: dosha_considerations(food),
        cooking_tips: template.tips.to_string(),
        variations: "Try different cooking methods: steamed, sautéed, or slow-cooked. Adjust spices according to your dosha and seasonal needs.".to_string(),
        storage_instructions: format!(
            "Store {name} in a cool, dry place. Prepared dishes can be refrigerated for 2-3 days. Reheat gently before serving."
        ),
        video_url: youtube_search_url(&format!("ayurvedic {name} recipe {meal_type} cooking")),
        created_by,
    })
}
