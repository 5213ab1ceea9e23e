use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{AllergenFlags, DietaryFlags, DoshaEffect, Energy, FoodConfig, Taste},
};

/// Header row plus a handful of foods, served as a template for imports.
pub const SAMPLE_FOOD_CSV: &str = "\
name,category,subcategory,calories,protein,carbohydrates,fat,fiber,primary_taste,secondary_taste,energy,vata_effect,pitta_effect,kapha_effect,is_vegetarian,is_vegan,is_gluten_free,is_dairy_free,contains_nuts,contains_soy,contains_eggs,contains_fish,contains_shellfish
Basmati Rice,grains,white_rice,130,2.7,28.0,0.3,0.4,sweet,,cooling,pacifies,pacifies,aggravates,True,True,True,True,False,False,False,False,False
Quinoa,grains,pseudo_grains,120,4.4,22.0,1.9,2.8,sweet,astringent,cooling,pacifies,pacifies,neutral,True,True,True,True,False,False,False,False,False
Spinach,vegetables,leafy_greens,23,2.9,3.6,0.4,2.2,bitter,astringent,cooling,aggravates,pacifies,pacifies,True,True,True,True,False,False,False,False,False
Sweet Potato,vegetables,root_vegetables,86,1.6,20.1,0.1,3.0,sweet,,heating,pacifies,aggravates,aggravates,True,True,True,True,False,False,False,False,False
Lentils (Red),proteins,legumes,116,9.0,20.1,0.4,7.9,sweet,astringent,heating,pacifies,aggravates,neutral,True,True,True,True,False,False,False,False,False
Almonds,proteins,nuts,579,21.2,21.6,49.9,12.5,sweet,,heating,pacifies,aggravates,aggravates,True,True,True,True,True,False,False,False,False
Ghee,dairy,fats,900,0.0,0.0,100.0,0.0,sweet,,heating,pacifies,aggravates,aggravates,True,False,True,False,False,False,False,False,False
Ginger,spices,roots,80,1.8,17.8,0.8,2.0,pungent,sweet,heating,pacifies,aggravates,pacifies,True,True,True,True,False,False,False,False,False
";

/// A CSV row that was not imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportSkip {
    /// 1-based line number, the header being line 1.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodImportReport {
    pub created: u32,
    pub updated: u32,
    pub skipped: Vec<ImportSkip>,
}

/// One line of a food import. Blank cells fall back to catalog defaults.
#[derive(Debug, Deserialize)]
struct FoodCsvRow {
    name: String,
    category: Option<String>,
    subcategory: Option<String>,
    calories: Option<f64>,
    protein: Option<f64>,
    carbohydrates: Option<f64>,
    fat: Option<f64>,
    fiber: Option<f64>,
    primary_taste: Option<String>,
    secondary_taste: Option<String>,
    energy: Option<String>,
    vata_effect: Option<String>,
    pitta_effect: Option<String>,
    kapha_effect: Option<String>,
    is_vegetarian: Option<String>,
    is_vegan: Option<String>,
    is_gluten_free: Option<String>,
    is_dairy_free: Option<String>,
    contains_nuts: Option<String>,
    contains_soy: Option<String>,
    contains_eggs: Option<String>,
    contains_fish: Option<String>,
    contains_shellfish: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn enum_or<T: FromStr<Err = CoreError>>(value: Option<String>, default: T) -> Result<T, CoreError> {
    non_blank(value).map_or(Ok(default), |v| v.parse())
}

fn flag_or(value: Option<String>, column: &str, default: bool) -> Result<bool, CoreError> {
    let Some(value) = non_blank(value) else {
        return Ok(default);
    };

    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CoreError::Invalid(format!(
            "{column} must be true or false, got '{other}'"
        ))),
    }
}

impl TryFrom<FoodCsvRow> for FoodConfig {
    type Error = CoreError;

    fn try_from(row: FoodCsvRow) -> Result<Self, Self::Error> {
        let name = row.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }

        let defaults = DietaryFlags::default();

        Ok(FoodConfig {
            name,
            category: non_blank(row.category).unwrap_or_else(|| "other".to_string()),
            subcategory: non_blank(row.subcategory),
            calories: row.calories.unwrap_or_default().round() as i32,
            protein: row.protein.unwrap_or_default(),
            carbohydrates: row.carbohydrates.unwrap_or_default(),
            fat: row.fat.unwrap_or_default(),
            fiber: row.fiber.unwrap_or_default(),
            primary_taste: enum_or(row.primary_taste, Taste::Sweet)?,
            secondary_taste: non_blank(row.secondary_taste)
                .map(|v| v.parse())
                .transpose()?,
            energy: enum_or(row.energy, Energy::Neutral)?,
            vata_effect: enum_or(row.vata_effect, DoshaEffect::Neutral)?,
            pitta_effect: enum_or(row.pitta_effect, DoshaEffect::Neutral)?,
            kapha_effect: enum_or(row.kapha_effect, DoshaEffect::Neutral)?,
            dietary: DietaryFlags {
                is_vegetarian: flag_or(row.is_vegetarian, "is_vegetarian", defaults.is_vegetarian)?,
                is_vegan: flag_or(row.is_vegan, "is_vegan", defaults.is_vegan)?,
                is_gluten_free: flag_or(row.is_gluten_free, "is_gluten_free", defaults.is_gluten_free)?,
                is_dairy_free: flag_or(row.is_dairy_free, "is_dairy_free", defaults.is_dairy_free)?,
            },
            allergens: AllergenFlags {
                contains_nuts: flag_or(row.contains_nuts, "contains_nuts", false)?,
                contains_soy: flag_or(row.contains_soy, "contains_soy", false)?,
                contains_eggs: flag_or(row.contains_eggs, "contains_eggs", false)?,
                contains_fish: flag_or(row.contains_fish, "contains_fish", false)?,
                contains_shellfish: flag_or(row.contains_shellfish, "contains_shellfish", false)?,
            },
        })
    }
}

/// Parses a food CSV with a header row. Rows that cannot be read come back
/// as skips next to the parsed ones, keyed by line number.
pub fn parse_food_csv(data: &str) -> (Vec<(usize, FoodConfig)>, Vec<ImportSkip>) {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut parsed = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in reader.deserialize::<FoodCsvRow>().enumerate() {
        let row = index + 2;
        let config = record
            .map_err(|e| CoreError::Invalid(e.to_string()))
            .and_then(FoodConfig::try_from);

        match config {
            Ok(config) => parsed.push((row, config)),
            Err(e) => skipped.push(ImportSkip {
                row,
                reason: e.to_string(),
            }),
        }
    }

    (parsed, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_csv_parses_without_skips() {
        let (parsed, skipped) = parse_food_csv(SAMPLE_FOOD_CSV);

        assert!(skipped.is_empty(), "{skipped:?}");
        assert_eq!(parsed.len(), 8);

        let (row, almonds) = parsed
            .iter()
            .find(|(_, config)| config.name == "Almonds")
            .unwrap();
        assert_eq!(*row, 7);
        assert_eq!(almonds.calories, 579);
        assert_eq!(almonds.energy, Energy::Heating);
        assert_eq!(almonds.kapha_effect, DoshaEffect::Aggravates);
        assert!(almonds.allergens.contains_nuts);

        let ghee = parsed.iter().find(|(_, c)| c.name == "Ghee").unwrap();
        assert!(!ghee.1.dietary.is_vegan);
        assert_eq!(ghee.1.secondary_taste, None);
    }

    #[test]
    fn blank_cells_take_catalog_defaults() {
        let csv = "name,category,calories,primary_taste,energy,is_vegan\nMung Dal,,,,,\n";

        let (parsed, skipped) = parse_food_csv(csv);

        assert!(skipped.is_empty());
        let config = &parsed[0].1;
        assert_eq!(config.category, "other");
        assert_eq!(config.calories, 0);
        assert_eq!(config.primary_taste, Taste::Sweet);
        assert_eq!(config.energy, Energy::Neutral);
        assert_eq!(config.vata_effect, DoshaEffect::Neutral);
        assert!(config.dietary.is_vegan);
    }

    #[test]
    fn bad_rows_are_reported_by_line() {
        let csv = "\
name,category,calories,primary_taste,contains_nuts
Millet,grains,119,sweet,false
,grains,100,sweet,false
Barley,grains,lots,sweet,false
Oats,grains,389,umami,false
Cashew,nuts,553,sweet,sometimes
";

        let (parsed, skipped) = parse_food_csv(csv);

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].0, 2);
        let rows: Vec<usize> = skipped.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![3, 4, 5, 6]);
        assert!(skipped[0].reason.contains("name is required"));
        assert!(skipped[2].reason.contains("umami"));
        assert!(skipped[3].reason.contains("contains_nuts"));
    }
}
