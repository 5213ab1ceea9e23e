use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    food::value_objects::UpdateFoodInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Taste {
    Sweet,
    Sour,
    Salty,
    Pungent,
    Bitter,
    Astringent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Heating,
    Cooling,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DoshaEffect {
    Pacifies,
    Aggravates,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

macro_rules! string_enum {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    other => Err(CoreError::Invalid(format!(
                        "unknown {} '{}'",
                        stringify!($ty).to_lowercase(),
                        other
                    ))),
                }
            }
        }
    };
}

string_enum!(Taste {
    Sweet => "sweet",
    Sour => "sour",
    Salty => "salty",
    Pungent => "pungent",
    Bitter => "bitter",
    Astringent => "astringent",
});

string_enum!(Energy {
    Heating => "heating",
    Cooling => "cooling",
    Neutral => "neutral",
});

string_enum!(DoshaEffect {
    Pacifies => "pacifies",
    Aggravates => "aggravates",
    Neutral => "neutral",
});

string_enum!(Dosha {
    Vata => "vata",
    Pitta => "pitta",
    Kapha => "kapha",
});

impl DoshaEffect {
    pub fn is_compatible(&self) -> bool {
        !matches!(self, DoshaEffect::Aggravates)
    }
}

impl Dosha {
    pub fn label(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

/// Dietary suitability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryFlags {
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
}

impl Default for DietaryFlags {
    fn default() -> Self {
        Self {
            is_vegetarian: true,
            is_vegan: true,
            is_gluten_free: true,
            is_dairy_free: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct AllergenFlags {
    pub contains_nuts: bool,
    pub contains_soy: bool,
    pub contains_eggs: bool,
    pub contains_fish: bool,
    pub contains_shellfish: bool,
}

/// Catalog entry. Nutrients are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub calories: i32,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub primary_taste: Taste,
    pub secondary_taste: Option<Taste>,
    pub energy: Energy,
    pub vata_effect: DoshaEffect,
    pub pitta_effect: DoshaEffect,
    pub kapha_effect: DoshaEffect,
    pub dietary: DietaryFlags,
    pub allergens: AllergenFlags,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub calories: i32,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub primary_taste: Taste,
    pub secondary_taste: Option<Taste>,
    pub energy: Energy,
    pub vata_effect: DoshaEffect,
    pub pitta_effect: DoshaEffect,
    pub kapha_effect: DoshaEffect,
    pub dietary: DietaryFlags,
    pub allergens: AllergenFlags,
}

impl Food {
    pub fn new(config: FoodConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            category: config.category,
            subcategory: config.subcategory,
            calories: config.calories,
            protein: config.protein,
            carbohydrates: config.carbohydrates,
            fat: config.fat,
            fiber: config.fiber,
            primary_taste: config.primary_taste,
            secondary_taste: config.secondary_taste,
            energy: config.energy,
            vata_effect: config.vata_effect,
            pitta_effect: config.pitta_effect,
            kapha_effect: config.kapha_effect,
            dietary: config.dietary,
            allergens: config.allergens,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn effect_on(&self, dosha: Dosha) -> DoshaEffect {
        match dosha {
            Dosha::Vata => self.vata_effect,
            Dosha::Pitta => self.pitta_effect,
            Dosha::Kapha => self.kapha_effect,
        }
    }

    /// (calories, protein, carbohydrates, fat, fiber)
    pub fn nutrient_vector(&self) -> [f64; 5] {
        [
            self.calories as f64,
            self.protein,
            self.carbohydrates,
            self.fat,
            self.fiber,
        ]
    }

    pub fn update(&mut self, input: UpdateFoodInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if input.subcategory.is_some() {
            self.subcategory = input.subcategory;
        }
        if let Some(calories) = input.calories {
            self.calories = calories;
        }
        if let Some(protein) = input.protein {
            self.protein = protein;
        }
        if let Some(carbohydrates) = input.carbohydrates {
            self.carbohydrates = carbohydrates;
        }
        if let Some(fat) = input.fat {
            self.fat = fat;
        }
        if let Some(fiber) = input.fiber {
            self.fiber = fiber;
        }
        if let Some(primary_taste) = input.primary_taste {
            self.primary_taste = primary_taste;
        }
        if input.secondary_taste.is_some() {
            self.secondary_taste = input.secondary_taste;
        }
        if let Some(energy) = input.energy {
            self.energy = energy;
        }
        if let Some(effect) = input.vata_effect {
            self.vata_effect = effect;
        }
        if let Some(effect) = input.pitta_effect {
            self.pitta_effect = effect;
        }
        if let Some(effect) = input.kapha_effect {
            self.kapha_effect = effect;
        }
        if let Some(dietary) = input.dietary {
            self.dietary = dietary;
        }
        if let Some(allergens) = input.allergens {
            self.allergens = allergens;
        }
        if let Some(is_active) = input.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}
