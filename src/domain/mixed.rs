//! Mixed pricing: several egg types blended into one carton with a fixed
//! internal composition, sold at a single price.

use super::entities::{BusinessConfig, TypeRoster, CARTONS_PER_BOX, EGGS_PER_BOX, EGGS_PER_CARTON};
use super::money::round2;

#[derive(Clone, Debug, PartialEq)]
pub struct MixedTypeBreakdown {
    pub id: String,
    pub display_name: String,
    /// Eggs of this type inside one blended carton.
    pub eggs_per_mixed_carton: u32,
    pub purchase_cost: f64,
    pub available_eggs: f64,
    /// Production cap imposed by this type's supply.
    pub max_cartons: u64,
    pub eggs_used: u64,
    pub cartons_used: u64,
    pub boxes_used: u64,
    pub eggs_leftover: f64,
    pub unit_cost_per_egg: f64,
    pub cost_of_eggs_used: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MixedResult {
    pub total_purchase_cost: f64,
    pub total_weekly_expenses: f64,
    pub weekly_cost: f64,
    pub required_revenue: f64,
    /// Capped by the scarcest type.
    pub total_mixed_cartons: u64,
    pub price_per_mixed_carton: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub meets_minimum: bool,
    pub types: Vec<MixedTypeBreakdown>,
}

/// Splits the 30 eggs of a blended carton evenly across `type_count` types.
///
/// Division remainders go to the earliest types in insertion order, which
/// makes the split deterministic and order-stable. Recomputed from scratch
/// whenever the roster changes; never cached.
pub fn egg_distribution(type_count: usize) -> Vec<u32> {
    let count = type_count as u32;
    let base = EGGS_PER_CARTON / count;
    let remainder = EGGS_PER_CARTON % count;
    (0..count)
        .map(|index| if index < remainder { base + 1 } else { base })
        .collect()
}

/// Computes the blended-carton price for a roster of at least two types.
///
/// Intermediate figures stay unrounded; only the carton price is rounded to
/// cents before the verification pass. That mirrors how the figures are
/// quoted to the customer (one rounded price, exact internal accounting).
pub fn compute_mixed(roster: &TypeRoster, config: &BusinessConfig) -> Option<MixedResult> {
    let types = roster.types();
    if types.len() < 2 {
        return None;
    }
    for egg_type in types {
        let price = egg_type.purchase_price_per_box;
        let boxes = egg_type.expected_weekly_boxes;
        if !price.is_finite() || price <= 0.0 || !boxes.is_finite() || boxes <= 0.0 {
            return None;
        }
    }

    let distribution = egg_distribution(types.len());

    let mut total_purchase_cost = 0.0;
    let mut available = Vec::with_capacity(types.len());
    for egg_type in types {
        total_purchase_cost += egg_type.purchase_price_per_box * egg_type.expected_weekly_boxes;
        available.push(
            egg_type.expected_weekly_boxes * CARTONS_PER_BOX as f64 * EGGS_PER_CARTON as f64,
        );
    }

    let total_weekly_expenses = config.total_weekly_expenses();
    let weekly_cost = total_purchase_cost + total_weekly_expenses;
    let required_revenue = weekly_cost + config.min_weekly_profit;

    // The scarcest type caps how many blended cartons can be assembled.
    let total_mixed_cartons = types
        .iter()
        .enumerate()
        .map(|(index, _)| (available[index] / distribution[index] as f64).floor() as u64)
        .min()?;
    if total_mixed_cartons == 0 {
        return None;
    }

    let price_per_mixed_carton = round2(required_revenue / total_mixed_cartons as f64);
    let total_revenue = total_mixed_cartons as f64 * price_per_mixed_carton;
    let total_profit = total_revenue - weekly_cost;
    let meets_minimum = total_profit >= config.min_weekly_profit;

    let breakdown = types
        .iter()
        .enumerate()
        .map(|(index, egg_type)| {
            let eggs_per_mixed_carton = distribution[index];
            let eggs_used = total_mixed_cartons * eggs_per_mixed_carton as u64;
            let cartons_used = eggs_used.div_ceil(EGGS_PER_CARTON as u64);
            let boxes_used = cartons_used.div_ceil(CARTONS_PER_BOX as u64);
            let unit_cost_per_egg = egg_type.purchase_price_per_box / EGGS_PER_BOX as f64;
            MixedTypeBreakdown {
                id: egg_type.id.clone(),
                display_name: egg_type.display_name.clone(),
                eggs_per_mixed_carton,
                purchase_cost: egg_type.purchase_price_per_box * egg_type.expected_weekly_boxes,
                available_eggs: available[index],
                max_cartons: (available[index] / eggs_per_mixed_carton as f64).floor() as u64,
                eggs_used,
                cartons_used,
                boxes_used,
                eggs_leftover: available[index] - eggs_used as f64,
                unit_cost_per_egg,
                cost_of_eggs_used: eggs_used as f64 * unit_cost_per_egg,
            }
        })
        .collect();

    Some(MixedResult {
        total_purchase_cost,
        total_weekly_expenses,
        weekly_cost,
        required_revenue,
        total_mixed_cartons,
        price_per_mixed_carton,
        total_revenue,
        total_profit,
        meets_minimum,
        types: breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn distribution_sums_to_thirty_for_any_roster_size() {
        for count in 2..=10 {
            let split = egg_distribution(count);
            assert_eq!(split.iter().sum::<u32>(), 30, "count {count}");
            assert_eq!(split.len(), count);
        }
    }

    #[test]
    fn distribution_gives_remainder_to_earliest_types() {
        assert_eq!(egg_distribution(2), vec![15, 15]);
        assert_eq!(egg_distribution(3), vec![10, 10, 10]);
        assert_eq!(egg_distribution(4), vec![8, 8, 7, 7]);
        assert_eq!(egg_distribution(7), vec![5, 5, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn default_roster_scenario() {
        // Type 1 @ 41.00 x 9 boxes, Type 2 @ 45.00 x 9 boxes, expenses 15,
        // minimum profit 90.
        let roster = TypeRoster::default_mixed();
        let config = BusinessConfig::default_config();
        let result = compute_mixed(&roster, &config).expect("valid roster");

        assert_eq!(result.total_purchase_cost, 774.0);
        assert_eq!(result.weekly_cost, 789.0);
        assert_eq!(result.required_revenue, 879.0);
        assert_eq!(result.total_mixed_cartons, 216);
        assert_eq!(result.price_per_mixed_carton, 4.07);
        assert!(result.meets_minimum);
        assert!(close(
            result.total_revenue - result.weekly_cost,
            result.total_profit
        ));
    }

    #[test]
    fn per_type_breakdown_accounts_for_usage() {
        let roster = TypeRoster::default_mixed();
        let config = BusinessConfig::default_config();
        let result = compute_mixed(&roster, &config).expect("valid roster");

        let first = &result.types[0];
        assert_eq!(first.eggs_per_mixed_carton, 15);
        assert_eq!(first.eggs_used, 3240);
        assert_eq!(first.cartons_used, 108);
        assert_eq!(first.boxes_used, 9);
        assert_eq!(first.eggs_leftover, 0.0);
        assert!(close(first.cost_of_eggs_used, 369.0));
    }

    #[test]
    fn scarcest_type_caps_production() {
        let mut roster = TypeRoster::default_mixed();
        roster
            .update("type_02", "Type 2", 45.0, 1.0)
            .expect("valid update");
        let config = BusinessConfig::default_config();
        let result = compute_mixed(&roster, &config).expect("valid roster");

        // Type 2 has 1 box = 360 eggs, 15 per carton -> 24 cartons max.
        assert_eq!(result.total_mixed_cartons, 24);
        assert_eq!(result.types[1].max_cartons, 24);
        assert!(result.types[0].eggs_leftover > 0.0);
    }

    #[test]
    fn distribution_follows_roster_changes() {
        let mut roster = TypeRoster::default_mixed();
        let config = BusinessConfig::default_config();
        let before = compute_mixed(&roster, &config).expect("valid roster");
        assert_eq!(before.types[0].eggs_per_mixed_carton, 15);

        roster.add("Type 3", 39.0, 9.0).expect("valid type");
        let after = compute_mixed(&roster, &config).expect("valid roster");
        let split: Vec<u32> = after
            .types
            .iter()
            .map(|t| t.eggs_per_mixed_carton)
            .collect();
        assert_eq!(split, vec![10, 10, 10]);
    }

    #[test]
    fn single_type_roster_is_rejected() {
        let roster = TypeRoster::new(
            2,
            vec![super::super::entities::EggType {
                id: "type_01".to_string(),
                display_name: "Lonely".to_string(),
                purchase_price_per_box: 40.0,
                expected_weekly_boxes: 5.0,
            }],
        );
        let config = BusinessConfig::default_config();
        assert_eq!(compute_mixed(&roster, &config), None);
    }

    #[test]
    fn non_positive_figures_yield_no_result() {
        let mut roster = TypeRoster::default_mixed();
        // Bypass the boundary validation by building the roster directly.
        let mut types = roster.types().to_vec();
        types[0].expected_weekly_boxes = 0.0;
        roster = TypeRoster::new(2, types);
        let config = BusinessConfig::default_config();
        assert_eq!(compute_mixed(&roster, &config), None);
    }

    #[test]
    fn compute_is_idempotent() {
        let roster = TypeRoster::default_mixed();
        let config = BusinessConfig::default_config();
        assert_eq!(
            compute_mixed(&roster, &config),
            compute_mixed(&roster, &config)
        );
    }
}
