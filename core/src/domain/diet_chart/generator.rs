use std::collections::HashMap;

use rand::{Rng, seq::SliceRandom};
use uuid::Uuid;

use crate::domain::{
    diet_chart::entities::{MealItem, MealPlan, MealSlot, MealTargets, MealType, PlannerConfig},
    food::entities::Food,
};

/// Picks the foods for one meal: all candidates when there are at most
/// `count`, otherwise `count` sampled uniformly without replacement.
pub fn select_foods<'a, R>(candidates: &'a [Food], count: usize, rng: &mut R) -> Vec<&'a Food>
where
    R: Rng + ?Sized,
{
    if candidates.len() <= count {
        return candidates.iter().collect();
    }
    candidates.choose_multiple(rng, count).collect()
}

pub fn plan_meal<R>(
    diet_chart_id: Uuid,
    day_number: i32,
    slot: &MealSlot,
    daily_calories: i32,
    candidates: &[Food],
    config: &PlannerConfig,
    rng: &mut R,
) -> MealPlan
where
    R: Rng + ?Sized,
{
    let targets = MealTargets::from_daily(daily_calories, slot.calorie_percent);
    let mut plan = MealPlan::new(diet_chart_id, day_number, slot, targets);

    plan.items = select_foods(candidates, config.foods_per_meal, rng)
        .into_iter()
        .enumerate()
        .map(|(position, food)| {
            let quantity = if position == 0 {
                config.main_portion_grams
            } else {
                config.side_portion_grams
            };
            MealItem::new(plan.id, food, quantity, Some(config.rule_confidence))
        })
        .collect();

    plan
}

/// Every meal of one day, in slot order.
pub fn plan_day<R>(
    diet_chart_id: Uuid,
    day_number: i32,
    daily_calories: i32,
    candidates: &[Food],
    config: &PlannerConfig,
    rng: &mut R,
) -> Vec<MealPlan>
where
    R: Rng + ?Sized,
{
    config
        .slots
        .iter()
        .map(|slot| {
            plan_meal(
                diet_chart_id,
                day_number,
                slot,
                daily_calories,
                candidates,
                config,
                rng,
            )
        })
        .collect()
}

/// For each food served in `plans`, the meal type it appears in most often.
/// Ties go to the meal type seen first. Foods are returned in first-seen order.
pub fn dominant_meal_types(plans: &[MealPlan]) -> Vec<(Uuid, MealType)> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut counts: HashMap<Uuid, Vec<(MealType, usize)>> = HashMap::new();

    for plan in plans {
        for item in plan.items.iter().filter(|item| item.is_current) {
            let per_type = counts.entry(item.food_id).or_insert_with(|| {
                order.push(item.food_id);
                Vec::new()
            });
            match per_type.iter_mut().find(|(meal, _)| *meal == plan.meal_type) {
                Some((_, count)) => *count += 1,
                None => per_type.push((plan.meal_type, 1)),
            }
        }
    }

    order
        .into_iter()
        .map(|food_id| {
            let meal_type = counts
                .get(&food_id)
                .and_then(|per_type| {
                    per_type
                        .iter()
                        .fold(None, |best: Option<(MealType, usize)>, &(meal, count)| {
                            match best {
                                Some((_, best_count)) if best_count >= count => best,
                                _ => Some((meal, count)),
                            }
                        })
                })
                .map(|(meal, _)| meal)
                .unwrap_or(MealType::Lunch);
            (food_id, meal_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::domain::common::test_utils::sample_food;

    fn catalog(size: usize) -> Vec<Food> {
        (0..size)
            .map(|i| sample_food(&format!("Food {i}"), "grains"))
            .collect()
    }

    #[test]
    fn small_candidate_sets_are_used_whole_and_in_order() {
        let foods = catalog(2);
        let mut rng = StdRng::seed_from_u64(7);

        let picked = select_foods(&foods, 3, &mut rng);

        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].name, "Food 0");
        assert_eq!(picked[1].name, "Food 1");
    }

    #[test]
    fn sampling_is_without_replacement() {
        let foods = catalog(10);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let picked = select_foods(&foods, 3, &mut rng);
            assert_eq!(picked.len(), 3);
            assert_ne!(picked[0].id, picked[1].id);
            assert_ne!(picked[0].id, picked[2].id);
            assert_ne!(picked[1].id, picked[2].id);
        }
    }

    #[test]
    fn same_seed_gives_same_day() {
        let foods = catalog(12);
        let config = PlannerConfig::default();
        let chart_id = Uuid::new_v4();

        let first = plan_day(chart_id, 1, 2000, &foods, &config, &mut StdRng::seed_from_u64(3));
        let second = plan_day(chart_id, 1, 2000, &foods, &config, &mut StdRng::seed_from_u64(3));

        let ids = |plans: &[MealPlan]| -> Vec<Uuid> {
            plans
                .iter()
                .flat_map(|p| p.items.iter().map(|i| i.food_id))
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn a_2000_kcal_day_splits_into_fixed_targets() {
        let foods = catalog(5);
        let mut rng = StdRng::seed_from_u64(1);

        let plans = plan_day(
            Uuid::new_v4(),
            1,
            2000,
            &foods,
            &PlannerConfig::default(),
            &mut rng,
        );

        let targets: Vec<(MealType, i32)> = plans
            .iter()
            .map(|p| (p.meal_type, p.target_calories))
            .collect();
        assert_eq!(
            targets,
            vec![
                (MealType::Breakfast, 500),
                (MealType::Lunch, 800),
                (MealType::Dinner, 600),
                (MealType::Snack, 100),
            ]
        );
    }

    #[test]
    fn first_pick_gets_the_main_portion() {
        let foods = catalog(6);
        let mut rng = StdRng::seed_from_u64(9);
        let config = PlannerConfig::default();

        let plan = plan_meal(
            Uuid::new_v4(),
            1,
            &config.slots[0],
            2000,
            &foods,
            &config,
            &mut rng,
        );

        let quantities: Vec<f64> = plan.items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![150.0, 100.0, 100.0]);
        assert!(plan.items.iter().all(|i| i.meal_plan_id == plan.id));
        assert!(plan.items.iter().all(|i| i.ai_confidence_score == Some(0.8)));
    }

    #[test]
    fn daily_targets_sum_to_need_within_rounding() {
        let foods = catalog(4);
        let config = PlannerConfig::default();
        let mut rng = StdRng::seed_from_u64(11);

        for daily in [1234, 1789, 2591, 3333] {
            let plans = plan_day(Uuid::new_v4(), 1, daily, &foods, &config, &mut rng);
            let total: i32 = plans.iter().map(|p| p.target_calories).sum();
            assert!(daily - total >= 0 && daily - total < plans.len() as i32);
        }
    }

    #[test]
    fn dominant_meal_type_prefers_most_frequent_then_first_seen() {
        let foods = catalog(3);
        let config = PlannerConfig::default();
        let chart_id = Uuid::new_v4();
        let slot = |meal: MealType| {
            *config
                .slots
                .iter()
                .find(|s| s.meal_type == meal)
                .unwrap()
        };
        let plan_with = |meal: MealType, picks: &[&Food]| {
            let mut plan = MealPlan::new(
                chart_id,
                1,
                &slot(meal),
                MealTargets::from_daily(2000, 25),
            );
            plan.items = picks
                .iter()
                .map(|f| MealItem::new(plan.id, f, 100.0, None))
                .collect();
            plan
        };

        let plans = vec![
            plan_with(MealType::Breakfast, &[&foods[0], &foods[1]]),
            plan_with(MealType::Dinner, &[&foods[0]]),
            plan_with(MealType::Dinner, &[&foods[0], &foods[2]]),
            plan_with(MealType::Snack, &[&foods[1]]),
        ];

        let dominant = dominant_meal_types(&plans);

        assert_eq!(
            dominant,
            vec![
                (foods[0].id, MealType::Dinner),
                (foods[1].id, MealType::Breakfast),
                (foods[2].id, MealType::Dinner),
            ]
        );
    }
}
