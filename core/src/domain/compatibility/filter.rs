use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    compatibility::entities::{
        Allergen, CandidateFallback, CandidatePolicy, CandidateSet, DietaryRequirement,
    },
    food::entities::Food,
    patient::entities::Patient,
};

/// Allergens named by the patient's free-text allergy list. Every vocabulary
/// term found in an entry counts, so "shellfish" also excludes fish.
pub fn allergens_for(allergies: &[String]) -> Vec<Allergen> {
    let lowered: Vec<String> = allergies.iter().map(|a| a.to_lowercase()).collect();
    Allergen::ALL
        .into_iter()
        .filter(|allergen| lowered.iter().any(|a| a.contains(allergen.term())))
        .collect()
}

pub fn requirements_for(preferences: &[String]) -> Vec<DietaryRequirement> {
    let lowered: Vec<String> = preferences.iter().map(|p| p.to_lowercase()).collect();
    DietaryRequirement::ALL
        .into_iter()
        .filter(|req| {
            lowered
                .iter()
                .any(|p| req.terms().iter().any(|term| p.contains(term)))
        })
        .collect()
}

/// Whether `food` suits every dosha of the patient's constitution.
pub fn suits_constitution(food: &Food, patient: &Patient) -> bool {
    patient
        .constitution
        .doshas()
        .iter()
        .all(|dosha| food.effect_on(*dosha).is_compatible())
}

/// Narrows `foods` to what the patient may be served.
///
/// Stages run in order: constitution, allergies, dietary preferences, and
/// dislikes. The constitution stage is skipped when it alone would leave
/// nothing. When the full pipeline leaves nothing, `policy.fallback` decides
/// between the unfiltered set and an error.
pub fn filter_candidates(
    foods: &[Food],
    patient: &Patient,
    exclude_food: Option<Uuid>,
    policy: &CandidatePolicy,
) -> Result<CandidateSet, CoreError> {
    let base: Vec<&Food> = foods
        .iter()
        .filter(|food| food.is_active && Some(food.id) != exclude_food)
        .collect();

    if base.is_empty() {
        return Ok(CandidateSet::default());
    }

    let mut constitution_relaxed = false;
    let mut candidates: Vec<&Food> = base
        .iter()
        .copied()
        .filter(|food| suits_constitution(food, patient))
        .collect();

    if candidates.is_empty() {
        debug!(
            "constitution {} excludes every candidate, skipping stage",
            patient.constitution
        );
        constitution_relaxed = true;
        candidates = base.clone();
    }

    let allergens = allergens_for(&patient.allergies);
    let requirements = requirements_for(&patient.dietary_preferences);

    candidates.retain(|food| {
        !allergens.iter().any(|allergen| allergen.present_in(food))
            && requirements.iter().all(|req| req.satisfied_by(food))
            && !patient.food_dislikes.iter().any(|name| name == &food.name)
    });

    let fallback_used = candidates.is_empty();
    if fallback_used {
        match policy.fallback {
            CandidateFallback::Unfiltered => {
                warn!(
                    patient_id = %patient.id,
                    "no food passes the patient's restrictions, serving unfiltered catalog"
                );
                candidates = base;
            }
            CandidateFallback::Reject => return Err(CoreError::NoCompatibleFoods),
        }
    }

    Ok(CandidateSet {
        foods: candidates
            .into_iter()
            .take(policy.max_candidates)
            .cloned()
            .collect(),
        constitution_relaxed,
        fallback_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_utils::{sample_food, sample_patient},
        food::entities::DoshaEffect,
        patient::entities::Constitution,
    };

    fn with_effects(name: &str, vata: DoshaEffect, pitta: DoshaEffect, kapha: DoshaEffect) -> Food {
        let mut food = sample_food(name, "vegetables");
        food.vata_effect = vata;
        food.pitta_effect = pitta;
        food.kapha_effect = kapha;
        food
    }

    fn patient(constitution: Constitution) -> Patient {
        let mut patient = sample_patient(Uuid::new_v4());
        patient.constitution = constitution;
        patient
    }

    fn names(set: &CandidateSet) -> Vec<&str> {
        set.foods.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn compound_constitution_excludes_any_aggravating_dosha() {
        use DoshaEffect::*;
        let foods = vec![
            with_effects("Rice", Pacifies, Pacifies, Aggravates),
            with_effects("Chili", Aggravates, Neutral, Pacifies),
            with_effects("Tomato", Neutral, Aggravates, Neutral),
            with_effects("Zucchini", Neutral, Neutral, Neutral),
        ];

        let set = filter_candidates(
            &foods,
            &patient(Constitution::VataPitta),
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert!(!set.fallback_used);
        assert_eq!(names(&set), vec!["Rice", "Zucchini"]);
        for food in &set.foods {
            assert_ne!(food.vata_effect, Aggravates);
            assert_ne!(food.pitta_effect, Aggravates);
        }
    }

    #[test]
    fn tridosha_does_not_gate_on_effects() {
        use DoshaEffect::*;
        let foods = vec![with_effects("Chili", Aggravates, Aggravates, Aggravates)];

        let set = filter_candidates(
            &foods,
            &patient(Constitution::Tridosha),
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert_eq!(names(&set), vec!["Chili"]);
        assert!(!set.constitution_relaxed);
    }

    #[test]
    fn constitution_stage_is_skipped_when_it_empties_the_set() {
        use DoshaEffect::*;
        let foods = vec![
            with_effects("Chili", Neutral, Aggravates, Neutral),
            with_effects("Pickle", Neutral, Aggravates, Neutral),
        ];
        let mut patient = patient(Constitution::Pitta);
        patient.food_dislikes = vec!["Pickle".to_string()];

        let set = filter_candidates(&foods, &patient, None, &CandidatePolicy::default()).unwrap();

        assert!(set.constitution_relaxed);
        assert!(!set.fallback_used);
        assert_eq!(names(&set), vec!["Chili"]);
    }

    #[test]
    fn allergies_match_every_vocabulary_term() {
        let mut prawns = sample_food("Prawns", "seafood");
        prawns.allergens.contains_shellfish = true;
        let mut salmon = sample_food("Salmon", "seafood");
        salmon.allergens.contains_fish = true;
        let mut paneer = sample_food("Paneer", "dairy");
        paneer.dietary.is_dairy_free = false;
        let apple = sample_food("Apple", "fruits");

        let mut patient = patient(Constitution::Tridosha);
        patient.allergies = vec!["Shellfish".to_string(), "DAIRY products".to_string()];

        let set = filter_candidates(
            &[prawns, salmon, paneer, apple],
            &patient,
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert_eq!(names(&set), vec!["Apple"]);
    }

    #[test]
    fn preferences_require_matching_flags() {
        let mut ghee = sample_food("Ghee", "dairy");
        ghee.dietary.is_vegan = false;
        let mut wheat = sample_food("Wheat", "grains");
        wheat.dietary.is_gluten_free = false;
        let millet = sample_food("Millet", "grains");

        let mut patient = patient(Constitution::Tridosha);
        patient.dietary_preferences = vec!["Vegan".to_string(), "gluten-free".to_string()];

        let set = filter_candidates(
            &[ghee, wheat, millet],
            &patient,
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert_eq!(names(&set), vec!["Millet"]);
    }

    #[test]
    fn excluded_and_inactive_foods_never_appear() {
        let rice = sample_food("Rice", "grains");
        let mut barley = sample_food("Barley", "grains");
        barley.is_active = false;
        let oats = sample_food("Oats", "grains");

        let set = filter_candidates(
            &[rice.clone(), barley, oats],
            &patient(Constitution::Kapha),
            Some(rice.id),
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert_eq!(names(&set), vec!["Oats"]);
    }

    #[test]
    fn empty_result_falls_back_to_unfiltered_and_is_flagged() {
        let mut peanut = sample_food("Peanut", "nuts");
        peanut.allergens.contains_nuts = true;
        let mut patient = patient(Constitution::Vata);
        patient.allergies = vec!["tree nuts".to_string()];

        let set = filter_candidates(
            &[peanut],
            &patient,
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert!(set.fallback_used);
        assert_eq!(names(&set), vec!["Peanut"]);
    }

    #[test]
    fn strict_policy_rejects_instead_of_falling_back() {
        let mut peanut = sample_food("Peanut", "nuts");
        peanut.allergens.contains_nuts = true;
        let mut patient = patient(Constitution::Vata);
        patient.allergies = vec!["nuts".to_string()];
        let policy = CandidatePolicy {
            fallback: CandidateFallback::Reject,
            ..Default::default()
        };

        let result = filter_candidates(&[peanut], &patient, None, &policy);

        assert_eq!(result.unwrap_err(), CoreError::NoCompatibleFoods);
    }

    #[test]
    fn result_is_capped() {
        let foods: Vec<Food> = (0..60)
            .map(|i| sample_food(&format!("Food {i}"), "grains"))
            .collect();

        let set = filter_candidates(
            &foods,
            &patient(Constitution::Tridosha),
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert_eq!(set.len(), 50);
        assert_eq!(set.foods[0].name, "Food 0");
    }

    #[test]
    fn empty_catalog_yields_empty_set() {
        let set = filter_candidates(
            &[],
            &patient(Constitution::Pitta),
            None,
            &CandidatePolicy::default(),
        )
        .unwrap();

        assert!(set.is_empty());
        assert!(!set.fallback_used);
    }
}
