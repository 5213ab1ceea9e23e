use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::entities::{AllergenFlags, DietaryFlags, Food},
    },
    entity::foods,
};

impl TryFrom<&foods::Model> for Food {
    type Error = CoreError;

    fn try_from(model: &foods::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
            subcategory: model.subcategory.clone(),
            calories: model.calories,
            protein: model.protein,
            carbohydrates: model.carbohydrates,
            fat: model.fat,
            fiber: model.fiber,
            primary_taste: model.primary_taste.parse()?,
            secondary_taste: model
                .secondary_taste
                .as_deref()
                .map(str::parse)
                .transpose()?,
            energy: model.energy.parse()?,
            vata_effect: model.vata_effect.parse()?,
            pitta_effect: model.pitta_effect.parse()?,
            kapha_effect: model.kapha_effect.parse()?,
            dietary: DietaryFlags {
                is_vegetarian: model.is_vegetarian,
                is_vegan: model.is_vegan,
                is_gluten_free: model.is_gluten_free,
                is_dairy_free: model.is_dairy_free,
            },
            allergens: AllergenFlags {
                contains_nuts: model.contains_nuts,
                contains_soy: model.contains_soy,
                contains_eggs: model.contains_eggs,
                contains_fish: model.contains_fish,
                contains_shellfish: model.contains_shellfish,
            },
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<foods::Model> for Food {
    type Error = CoreError;

    fn try_from(model: foods::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

pub fn map_foods(models: Vec<foods::Model>) -> Result<Vec<Food>, CoreError> {
    models.iter().map(Food::try_from).collect()
}
