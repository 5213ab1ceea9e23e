use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, round2},
    food::entities::Dosha,
    patient::value_objects::UpdatePatientInput,
};

/// Daily need assumed when a patient has no computed calorie requirement.
pub const DEFAULT_DAILY_CALORIES: i32 = 2000;

/// Prakriti, possibly compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Constitution {
    Vata,
    Pitta,
    Kapha,
    VataPitta,
    VataKapha,
    PittaKapha,
    Tridosha,
}

impl Constitution {
    /// Doshas that gate food compatibility. A balanced constitution gates nothing.
    pub fn doshas(&self) -> &'static [Dosha] {
        match self {
            Constitution::Vata => &[Dosha::Vata],
            Constitution::Pitta => &[Dosha::Pitta],
            Constitution::Kapha => &[Dosha::Kapha],
            Constitution::VataPitta => &[Dosha::Vata, Dosha::Pitta],
            Constitution::VataKapha => &[Dosha::Vata, Dosha::Kapha],
            Constitution::PittaKapha => &[Dosha::Pitta, Dosha::Kapha],
            Constitution::Tridosha => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Constitution::Vata => "vata",
            Constitution::Pitta => "pitta",
            Constitution::Kapha => "kapha",
            Constitution::VataPitta => "vata_pitta",
            Constitution::VataKapha => "vata_kapha",
            Constitution::PittaKapha => "pitta_kapha",
            Constitution::Tridosha => "tridosha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Constitution::Vata => "Vata",
            Constitution::Pitta => "Pitta",
            Constitution::Kapha => "Kapha",
            Constitution::VataPitta => "Vata-Pitta",
            Constitution::VataKapha => "Vata-Kapha",
            Constitution::PittaKapha => "Pitta-Kapha",
            Constitution::Tridosha => "Tridosha (Balanced)",
        }
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Constitution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "vata" => Ok(Constitution::Vata),
            "pitta" => Ok(Constitution::Pitta),
            "kapha" => Ok(Constitution::Kapha),
            "vata_pitta" | "pitta_vata" => Ok(Constitution::VataPitta),
            "vata_kapha" | "kapha_vata" => Ok(Constitution::VataKapha),
            "pitta_kapha" | "kapha_pitta" => Ok(Constitution::PittaKapha),
            "tridosha" | "tridoshic" => Ok(Constitution::Tridosha),
            other => Err(CoreError::Invalid(format!("unknown constitution '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(CoreError::Invalid(format!("unknown gender '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(CoreError::Invalid(format!("unknown activity level '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub id: Uuid,
    pub practitioner_id: Uuid,
    pub name: String,
    pub constitution: Constitution,
    pub age: Option<i32>,
    /// Centimetres.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub allergies: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub food_dislikes: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub primary_goal: String,
    pub target_weight: Option<f64>,
    pub bmi: Option<f64>,
    pub daily_calorie_needs: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PatientConfig {
    pub practitioner_id: Uuid,
    pub name: String,
    pub constitution: Constitution,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub allergies: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub food_dislikes: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub primary_goal: Option<String>,
    pub target_weight: Option<f64>,
}

impl Patient {
    pub fn new(config: PatientConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        let mut patient = Self {
            id: Uuid::new_v7(timestamp),
            practitioner_id: config.practitioner_id,
            name: config.name,
            constitution: config.constitution,
            age: config.age,
            height: config.height,
            weight: config.weight,
            gender: config.gender,
            activity_level: config.activity_level,
            allergies: config.allergies,
            dietary_preferences: config.dietary_preferences,
            food_dislikes: config.food_dislikes,
            medical_conditions: config.medical_conditions,
            primary_goal: config
                .primary_goal
                .unwrap_or_else(|| "general_wellness".to_string()),
            target_weight: config.target_weight,
            bmi: None,
            daily_calorie_needs: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        patient.recompute_derived();
        patient
    }

    pub fn update(&mut self, input: UpdatePatientInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(constitution) = input.constitution {
            self.constitution = constitution;
        }
        if input.age.is_some() {
            self.age = input.age;
        }
        if input.height.is_some() {
            self.height = input.height;
        }
        if input.weight.is_some() {
            self.weight = input.weight;
        }
        if let Some(gender) = input.gender {
            self.gender = gender;
        }
        if let Some(activity_level) = input.activity_level {
            self.activity_level = activity_level;
        }
        if let Some(allergies) = input.allergies {
            self.allergies = allergies;
        }
        if let Some(preferences) = input.dietary_preferences {
            self.dietary_preferences = preferences;
        }
        if let Some(dislikes) = input.food_dislikes {
            self.food_dislikes = dislikes;
        }
        if let Some(conditions) = input.medical_conditions {
            self.medical_conditions = conditions;
        }
        if let Some(goal) = input.primary_goal {
            self.primary_goal = goal;
        }
        if input.target_weight.is_some() {
            self.target_weight = input.target_weight;
        }
        if let Some(is_active) = input.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        self.recompute_derived();
    }

    /// Refreshes BMI and daily calorie needs from the body measurements.
    /// Values are only replaced when every input they depend on is present.
    /// A non-positive calorie estimate is discarded so the default target applies.
    pub fn recompute_derived(&mut self) {
        if let (Some(height), Some(weight)) = (self.height, self.weight)
            && height > 0.0
        {
            let height_m = height / 100.0;
            self.bmi = Some(round2(weight / (height_m * height_m)));
        }

        if let Some(calories) = self.harris_benedict_calories() {
            self.daily_calorie_needs = (calories > 0).then_some(calories);
        }
    }

    fn harris_benedict_calories(&self) -> Option<i32> {
        let (age, height, weight) = (self.age?, self.height?, self.weight?);
        let (age, height, weight) = (age as f64, height, weight);

        let bmr = match self.gender {
            Gender::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
            Gender::Female | Gender::Other => {
                447.593 + 9.247 * weight + 3.098 * height - 4.330 * age
            }
        };

        Some((bmr * self.activity_level.multiplier()) as i32)
    }

    pub fn daily_calorie_target(&self) -> i32 {
        self.daily_calorie_needs.unwrap_or(DEFAULT_DAILY_CALORIES)
    }

    /// Fields that must be set before a diet chart can be generated.
    pub fn missing_generation_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.height.is_none() {
            missing.push("height".to_string());
        }
        if self.weight.is_none() {
            missing.push("weight".to_string());
        }
        if self.age.is_none() {
            missing.push("age".to_string());
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PatientConfig {
        PatientConfig {
            practitioner_id: Uuid::new_v4(),
            name: "Asha".to_string(),
            constitution: Constitution::Pitta,
            age: Some(30),
            height: Some(170.0),
            weight: Some(70.0),
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            allergies: vec![],
            dietary_preferences: vec![],
            food_dislikes: vec![],
            medical_conditions: vec![],
            primary_goal: None,
            target_weight: None,
        }
    }

    #[test]
    fn derives_bmi_and_calories_on_creation() {
        let patient = Patient::new(config());

        assert_eq!(patient.bmi, Some(24.22));
        // (88.362 + 937.79 + 815.83 - 170.31) * 1.55 = 2591.3...
        assert_eq!(patient.daily_calorie_needs, Some(2591));
        assert_eq!(patient.primary_goal, "general_wellness");
    }

    #[test]
    fn non_male_patients_use_the_female_equation() {
        let patient = Patient::new(PatientConfig {
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
            ..config()
        });

        // (447.593 + 647.29 + 526.66 - 129.9) * 1.2 = 1789.97...
        assert_eq!(patient.daily_calorie_needs, Some(1789));
    }

    #[test]
    fn calories_are_left_unset_without_age() {
        let patient = Patient::new(PatientConfig {
            age: None,
            ..config()
        });

        assert!(patient.bmi.is_some());
        assert_eq!(patient.daily_calorie_needs, None);
        assert_eq!(patient.daily_calorie_target(), DEFAULT_DAILY_CALORIES);
        assert_eq!(patient.missing_generation_fields(), vec!["age".to_string()]);
    }

    #[test]
    fn implausible_measurements_fall_back_to_default_calories() {
        let mut patient = Patient::new(config());
        assert!(patient.daily_calorie_needs.is_some());

        patient.update(UpdatePatientInput {
            age: Some(120),
            height: Some(30.0),
            weight: Some(2.0),
            ..Default::default()
        });

        // 88.362 + 26.79 + 143.97 - 681.24 < 0
        assert_eq!(patient.daily_calorie_needs, None);
        assert_eq!(patient.daily_calorie_target(), DEFAULT_DAILY_CALORIES);
    }

    #[test]
    fn update_recomputes_derived_fields() {
        let mut patient = Patient::new(config());

        patient.update(UpdatePatientInput {
            weight: Some(80.0),
            ..Default::default()
        });

        assert_eq!(patient.bmi, Some(27.68));
        assert!(patient.daily_calorie_needs.unwrap() > 2591);
    }

    #[test]
    fn constitution_doshas_follow_compound_tokens() {
        assert_eq!(
            Constitution::VataPitta.doshas(),
            &[Dosha::Vata, Dosha::Pitta]
        );
        assert!(Constitution::Tridosha.doshas().is_empty());
        assert_eq!(
            "Pitta-Kapha".parse::<Constitution>().unwrap(),
            Constitution::PittaKapha
        );
    }
}
