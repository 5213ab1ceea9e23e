use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::Food;

/// What to do when every food is excluded by the patient's restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CandidateFallback {
    /// Serve the unfiltered catalog and flag the result.
    #[default]
    Unfiltered,
    /// Fail with `CoreError::NoCompatibleFoods`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePolicy {
    pub max_candidates: usize,
    pub fallback: CandidateFallback,
}

impl Default for CandidatePolicy {
    fn default() -> Self {
        Self {
            max_candidates: 50,
            fallback: CandidateFallback::Unfiltered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateSet {
    pub foods: Vec<Food>,
    /// The constitution stage would have emptied the set and was skipped.
    pub constitution_relaxed: bool,
    /// Every stage was discarded; allergy and preference exclusions do not hold.
    pub fallback_used: bool,
}

impl CandidateSet {
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }
}

/// Allergy vocabulary and the food property each term excludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allergen {
    Nuts,
    Soy,
    Eggs,
    Fish,
    Shellfish,
    Dairy,
    Gluten,
}

impl Allergen {
    pub const ALL: [Allergen; 7] = [
        Allergen::Nuts,
        Allergen::Soy,
        Allergen::Eggs,
        Allergen::Fish,
        Allergen::Shellfish,
        Allergen::Dairy,
        Allergen::Gluten,
    ];

    pub fn term(&self) -> &'static str {
        match self {
            Allergen::Nuts => "nuts",
            Allergen::Soy => "soy",
            Allergen::Eggs => "eggs",
            Allergen::Fish => "fish",
            Allergen::Shellfish => "shellfish",
            Allergen::Dairy => "dairy",
            Allergen::Gluten => "gluten",
        }
    }

    pub fn present_in(&self, food: &Food) -> bool {
        match self {
            Allergen::Nuts => food.allergens.contains_nuts,
            Allergen::Soy => food.allergens.contains_soy,
            Allergen::Eggs => food.allergens.contains_eggs,
            Allergen::Fish => food.allergens.contains_fish,
            Allergen::Shellfish => food.allergens.contains_shellfish,
            Allergen::Dairy => !food.dietary.is_dairy_free,
            Allergen::Gluten => !food.dietary.is_gluten_free,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryRequirement {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryRequirement {
    pub const ALL: [DietaryRequirement; 4] = [
        DietaryRequirement::Vegetarian,
        DietaryRequirement::Vegan,
        DietaryRequirement::GlutenFree,
        DietaryRequirement::DairyFree,
    ];

    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            DietaryRequirement::Vegetarian => &["vegetarian"],
            DietaryRequirement::Vegan => &["vegan"],
            DietaryRequirement::GlutenFree => &["gluten_free", "gluten-free"],
            DietaryRequirement::DairyFree => &["dairy_free", "dairy-free"],
        }
    }

    pub fn satisfied_by(&self, food: &Food) -> bool {
        match self {
            DietaryRequirement::Vegetarian => food.dietary.is_vegetarian,
            DietaryRequirement::Vegan => food.dietary.is_vegan,
            DietaryRequirement::GlutenFree => food.dietary.is_gluten_free,
            DietaryRequirement::DairyFree => food.dietary.is_dairy_free,
        }
    }
}
