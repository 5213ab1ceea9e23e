//! Weighted similarity between two foods for a given patient.

use crate::domain::{
    food::entities::{DoshaEffect, Food},
    patient::entities::Patient,
    specialist::entities::{SimilarFood, SimilarityConfig, SimilarityWeights},
};

/// Cosine similarity of the nutrient vectors, 0 when either is all zeros.
pub fn nutritional_similarity(a: &Food, b: &Food) -> f64 {
    let (x, y) = (a.nutrient_vector(), b.nutrient_vector());

    let dot: f64 = x.iter().zip(y.iter()).map(|(p, q)| p * q).sum();
    let x_sq: f64 = x.iter().map(|v| v * v).sum();
    let y_sq: f64 = y.iter().map(|v| v * v).sum();

    if x_sq == 0.0 || y_sq == 0.0 {
        return 0.0;
    }

    (dot / (x_sq * y_sq).sqrt()).clamp(0.0, 1.0)
}

/// Taste, energy and dosha-effect agreement, counted in tenths and capped at 1.
pub fn ayurvedic_similarity(a: &Food, b: &Food) -> f64 {
    let mut tenths = 0u32;

    if a.primary_taste == b.primary_taste {
        tenths += 4;
    } else if a.secondary_taste == Some(b.primary_taste) || b.secondary_taste == Some(a.primary_taste)
    {
        tenths += 2;
    }

    if a.energy == b.energy {
        tenths += 3;
    }

    for (left, right) in [
        (a.vata_effect, b.vata_effect),
        (a.pitta_effect, b.pitta_effect),
        (a.kapha_effect, b.kapha_effect),
    ] {
        if left == right {
            tenths += 1;
        }
    }

    f64::from(tenths.min(10)) / 10.0
}

pub fn category_similarity(a: &Food, b: &Food) -> f64 {
    if a.category == b.category { 1.0 } else { 0.5 }
}

/// 1.0 minus 0.3 per constitution dosha the food aggravates.
pub fn patient_compatibility(food: &Food, patient: &Patient) -> f64 {
    let aggravated = patient
        .constitution
        .doshas()
        .iter()
        .filter(|dosha| food.effect_on(**dosha) == DoshaEffect::Aggravates)
        .count() as i32;

    f64::from((10 - 3 * aggravated).max(0)) / 10.0
}

pub fn score(a: &Food, b: &Food, patient: &Patient, weights: &SimilarityWeights) -> f64 {
    let weighted = [
        (ayurvedic_similarity(a, b), weights.ayurvedic),
        (nutritional_similarity(a, b), weights.nutritional),
        (category_similarity(a, b), weights.category),
        (patient_compatibility(b, patient), weights.compatibility),
    ];

    let total_weight: f64 = weighted.iter().map(|(_, weight)| weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let sum: f64 = weighted.iter().map(|(value, weight)| value * weight).sum();
    (sum / total_weight).clamp(0.0, 1.0)
}

pub fn reason(a: &Food, b: &Food) -> String {
    let mut clauses = Vec::new();

    if a.primary_taste == b.primary_taste {
        clauses.push(format!("both have {} taste", a.primary_taste));
    }
    if a.energy == b.energy {
        clauses.push(format!("both are {}", a.energy));
    }
    if a.category == b.category {
        clauses.push(format!("both are {}", a.category));
    }
    if a.vata_effect == b.vata_effect {
        clauses.push(format!("both {} Vata", a.vata_effect));
    }

    if clauses.is_empty() {
        return "nutritionally similar".to_string();
    }
    clauses.join(", ")
}

/// Scores every candidate against `original`, keeps those above the
/// threshold and returns the best `limit`, highest first.
pub fn rank_similar(
    original: &Food,
    candidates: Vec<Food>,
    patient: &Patient,
    config: &SimilarityConfig,
    limit: usize,
) -> Vec<SimilarFood> {
    let mut ranked: Vec<SimilarFood> = candidates
        .into_iter()
        .filter(|food| food.id != original.id)
        .filter_map(|food| {
            let similarity_score = score(original, &food, patient, &config.weights);
            (similarity_score > config.threshold).then(|| SimilarFood {
                reason: reason(original, &food),
                food,
                similarity_score,
            })
        })
        .collect();

    ranked.sort_by(|left, right| right.similarity_score.total_cmp(&left.similarity_score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_utils::{sample_food, sample_patient},
        food::entities::{Energy, Taste},
        patient::entities::Constitution,
    };
    use uuid::Uuid;

    fn with_nutrients(mut food: Food, values: [f64; 5]) -> Food {
        food.calories = values[0] as i32;
        food.protein = values[1];
        food.carbohydrates = values[2];
        food.fat = values[3];
        food.fiber = values[4];
        food
    }

    #[test]
    fn a_food_is_fully_similar_to_itself() {
        let food = with_nutrients(sample_food("Basmati Rice", "grains"), [130.0, 2.7, 28.0, 0.3, 0.4]);
        let patient = sample_patient(Uuid::new_v4());

        assert_eq!(score(&food, &food, &patient, &SimilarityWeights::default()), 1.0);
    }

    #[test]
    fn identical_profiles_score_exactly_one() {
        let a = with_nutrients(sample_food("Rice", "grains"), [130.0, 2.7, 28.0, 0.3, 0.4]);
        let b = with_nutrients(sample_food("Rice Flakes", "grains"), [130.0, 2.7, 28.0, 0.3, 0.4]);
        let patient = sample_patient(Uuid::new_v4());

        assert_eq!(score(&a, &b, &patient, &SimilarityWeights::default()), 1.0);
    }

    #[test]
    fn cosine_is_symmetric_and_bounded() {
        let a = with_nutrients(sample_food("Almond", "nuts"), [579.0, 21.0, 22.0, 50.0, 12.5]);
        let b = with_nutrients(sample_food("Apple", "fruits"), [52.0, 0.3, 14.0, 0.2, 2.4]);

        let ab = nutritional_similarity(&a, &b);
        let ba = nutritional_similarity(&b, &a);

        assert_eq!(ab, ba);
        assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn zero_vector_has_no_nutritional_similarity() {
        let a = with_nutrients(sample_food("Water", "beverages"), [0.0; 5]);
        let b = with_nutrients(sample_food("Apple", "fruits"), [52.0, 0.3, 14.0, 0.2, 2.4]);

        assert_eq!(nutritional_similarity(&a, &b), 0.0);
    }

    #[test]
    fn secondary_taste_cross_match_counts_half() {
        let mut a = sample_food("Lemon", "fruits");
        a.primary_taste = Taste::Sour;
        a.secondary_taste = Some(Taste::Sweet);
        a.energy = Energy::Heating;
        let mut b = sample_food("Mango", "fruits");
        b.primary_taste = Taste::Sweet;
        b.energy = Energy::Cooling;

        // 0.2 taste + 0.3 for three matching dosha effects
        assert_eq!(ayurvedic_similarity(&a, &b), 0.5);
    }

    #[test]
    fn compatibility_drops_per_aggravated_dosha() {
        let mut patient = sample_patient(Uuid::new_v4());
        patient.constitution = Constitution::VataPitta;
        let mut food = sample_food("Chili", "spices");
        food.vata_effect = DoshaEffect::Aggravates;
        food.pitta_effect = DoshaEffect::Aggravates;
        food.kapha_effect = DoshaEffect::Aggravates;

        assert_eq!(patient_compatibility(&food, &patient), 0.4);

        patient.constitution = Constitution::Tridosha;
        assert_eq!(patient_compatibility(&food, &patient), 1.0);
    }

    #[test]
    fn reason_lists_shared_traits() {
        let a = sample_food("Rice", "grains");
        let mut b = sample_food("Quinoa", "grains");
        b.energy = Energy::Heating;
        b.vata_effect = DoshaEffect::Aggravates;

        assert_eq!(reason(&a, &b), format!("both have {} taste, both are grains", a.primary_taste));
    }

    #[test]
    fn reason_falls_back_when_nothing_is_shared() {
        let mut a = sample_food("Rice", "grains");
        a.primary_taste = Taste::Sweet;
        a.energy = Energy::Cooling;
        a.vata_effect = DoshaEffect::Pacifies;
        let mut b = sample_food("Chili", "spices");
        b.primary_taste = Taste::Pungent;
        b.energy = Energy::Heating;
        b.vata_effect = DoshaEffect::Aggravates;

        assert_eq!(reason(&a, &b), "nutritionally similar");
    }

    #[test]
    fn ranking_applies_threshold_order_and_limit() {
        let patient = sample_patient(Uuid::new_v4());
        let original = with_nutrients(sample_food("Rice", "grains"), [130.0, 2.7, 28.0, 0.3, 0.4]);
        let close = with_nutrients(sample_food("Millet", "grains"), [119.0, 3.5, 23.0, 1.0, 1.3]);
        let closer = with_nutrients(sample_food("Rice Flakes", "grains"), [130.0, 2.7, 28.0, 0.3, 0.4]);
        let mut far = with_nutrients(sample_food("Zero", "grains"), [0.0; 5]);
        far.primary_taste = Taste::Bitter;
        far.energy = Energy::Heating;
        far.vata_effect = DoshaEffect::Aggravates;
        far.pitta_effect = DoshaEffect::Aggravates;
        far.kapha_effect = DoshaEffect::Aggravates;

        let config = SimilarityConfig::default();
        let ranked = rank_similar(
            &original,
            vec![close.clone(), far, closer.clone(), original.clone()],
            &patient,
            &config,
            5,
        );

        let names: Vec<&str> = ranked.iter().map(|s| s.food.name.as_str()).collect();
        assert_eq!(names, vec!["Rice Flakes", "Millet"]);
        assert!(ranked.iter().all(|s| s.similarity_score > 0.3));

        let top_one = rank_similar(&original, vec![close, closer], &patient, &config, 1);
        assert_eq!(top_one.len(), 1);
        assert_eq!(top_one[0].food.name, "Rice Flakes");
    }
}
