use serde_json::json;

/// Response schema for recipe suggestions from the language model.
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipe_name": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "quantity": { "type": "string" },
                        "notes": { "type": "string" }
                    },
                    "required": ["name", "quantity"]
                }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "cooking_time": { "type": "string" },
            "difficulty": {
                "type": "string",
                "enum": ["Easy", "Medium", "Hard"]
            },
            "servings": { "type": "integer" },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "number" },
                    "protein": { "type": "number" },
                    "carbs": { "type": "number" },
                    "fat": { "type": "number" }
                },
                "required": ["calories", "protein", "carbs", "fat"]
            },
            "ayurvedic_benefits": { "type": "string" },
            "best_time_to_consume": { "type": "string" },
            "cooking_tips": { "type": "string" },
            "storage_instructions": { "type": "string" },
            "youtube_search": { "type": "string" }
        },
        "required": [
            "recipe_name", "description", "ingredients", "instructions",
            "cooking_time", "difficulty", "servings", "nutrition",
            "ayurvedic_benefits", "best_time_to_consume", "cooking_tips",
            "storage_instructions"
        ]
    })
}
