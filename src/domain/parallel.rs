//! Parallel pricing: each egg type keeps its own carton price, built from
//! its own cost plus a flat margin shared across the whole roster.

use super::entities::{BusinessConfig, TypeRoster, CARTONS_PER_BOX};
use super::money::round2;
use super::stable::PriceBreak;

/// Quantities each type's price is quoted for, in cartons.
pub const PARALLEL_QUOTE_CARTONS: [u32; 4] = [1, 6, 12, 24];

#[derive(Clone, Debug, PartialEq)]
pub struct ParallelTypeBreakdown {
    pub id: String,
    pub purchase_price_per_box: f64,
    pub expected_weekly_boxes: f64,
    pub purchase_cost: f64,
    pub total_cartons: f64,
    pub cost_per_carton: f64,
    pub min_price_per_carton: f64,
    pub projected_revenue: f64,
    /// Nets against this type's purchase cost only; shared expenses are
    /// settled once in the aggregate.
    pub projected_profit: f64,
    /// This type's price quoted at the order quantities customers ask for.
    pub price_breaks: Vec<PriceBreak>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallelResult {
    pub total_purchase_cost: f64,
    pub total_weekly_expenses: f64,
    pub weekly_cost: f64,
    pub total_cartons: f64,
    /// Flat surcharge applied to every carton of every type, sized to cover
    /// expenses plus the profit target over the whole volume. Low-volume
    /// types carry the same margin as high-volume ones.
    pub margin_per_carton: f64,
    pub total_revenue: f64,
    pub net_profit: f64,
    pub meets_minimum: bool,
    pub types: Vec<ParallelTypeBreakdown>,
}

/// Prices each type independently against a shared per-carton margin.
///
/// `net_profit` subtracts the weekly expenses from the summed per-type
/// profits, which only net out purchase costs. That is the historical
/// formula and the figure the minimum-profit check runs against.
pub fn compute_parallel(roster: &TypeRoster, config: &BusinessConfig) -> Option<ParallelResult> {
    let types = roster.types();
    if types.is_empty() {
        return None;
    }
    for egg_type in types {
        let price = egg_type.purchase_price_per_box;
        let boxes = egg_type.expected_weekly_boxes;
        if !price.is_finite() || price <= 0.0 || !boxes.is_finite() || boxes <= 0.0 {
            return None;
        }
    }

    let mut total_purchase_cost = 0.0;
    let mut total_cartons = 0.0;
    for egg_type in types {
        total_purchase_cost += egg_type.purchase_price_per_box * egg_type.expected_weekly_boxes;
        total_cartons += egg_type.expected_weekly_boxes * CARTONS_PER_BOX as f64;
    }
    if total_cartons <= 0.0 {
        return None;
    }

    let total_weekly_expenses = config.total_weekly_expenses();
    let weekly_cost = total_purchase_cost + total_weekly_expenses;
    let margin_per_carton =
        round2((total_weekly_expenses + config.min_weekly_profit) / total_cartons);

    let mut breakdown = Vec::with_capacity(types.len());
    let mut profit_sum = 0.0;
    let mut revenue_sum = 0.0;
    for egg_type in types {
        let purchase_cost = egg_type.purchase_price_per_box * egg_type.expected_weekly_boxes;
        let cartons = egg_type.expected_weekly_boxes * CARTONS_PER_BOX as f64;
        let cost_per_carton = round2(egg_type.purchase_price_per_box / CARTONS_PER_BOX as f64);
        let min_price_per_carton = round2(cost_per_carton + margin_per_carton);
        let projected_revenue = round2(min_price_per_carton * cartons);
        let projected_profit = round2(projected_revenue - purchase_cost);
        profit_sum += projected_profit;
        revenue_sum += projected_revenue;
        let price_breaks = PARALLEL_QUOTE_CARTONS
            .iter()
            .map(|&quote_cartons| PriceBreak {
                cartons: quote_cartons,
                price: round2(min_price_per_carton * quote_cartons as f64),
            })
            .collect();
        breakdown.push(ParallelTypeBreakdown {
            id: egg_type.id.clone(),
            purchase_price_per_box: egg_type.purchase_price_per_box,
            expected_weekly_boxes: egg_type.expected_weekly_boxes,
            purchase_cost,
            total_cartons: cartons,
            cost_per_carton,
            min_price_per_carton,
            projected_revenue,
            projected_profit,
            price_breaks,
        });
    }

    let net_profit = round2(profit_sum - total_weekly_expenses);
    let meets_minimum = net_profit >= config.min_weekly_profit;

    Some(ParallelResult {
        total_purchase_cost: round2(total_purchase_cost),
        total_weekly_expenses,
        weekly_cost: round2(weekly_cost),
        total_cartons,
        margin_per_carton,
        total_revenue: round2(revenue_sum),
        net_profit,
        meets_minimum,
        types: breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EggType;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn default_roster_scenario() {
        // Type 1 @ 41.00 x 9, Type 2 @ 45.00 x 9, expenses 15, target 90.
        let roster = TypeRoster::default_parallel();
        let config = BusinessConfig::default_config();
        let result = compute_parallel(&roster, &config).expect("valid roster");

        assert_eq!(result.total_purchase_cost, 774.0);
        assert_eq!(result.weekly_cost, 789.0);
        assert_eq!(result.total_cartons, 216.0);
        // (15 + 90) / 216 cartons.
        assert_eq!(result.margin_per_carton, 0.49);

        let first = &result.types[0];
        assert_eq!(first.cost_per_carton, 3.42);
        assert_eq!(first.min_price_per_carton, 3.91);
        assert_eq!(first.projected_revenue, 422.28);
        assert_eq!(first.projected_profit, 53.28);

        let second = &result.types[1];
        assert_eq!(second.cost_per_carton, 3.75);
        assert_eq!(second.min_price_per_carton, 4.24);

        assert_eq!(result.net_profit, 91.2);
        assert!(result.meets_minimum);
    }

    #[test]
    fn margin_is_uniform_across_types() {
        let mut roster = TypeRoster::default_parallel();
        roster.add("Type 3", 30.0, 1.0).expect("valid type");
        let config = BusinessConfig::default_config();
        let result = compute_parallel(&roster, &config).expect("valid roster");

        // Every type pays the same flat margin regardless of volume.
        for breakdown in &result.types {
            assert_eq!(
                breakdown.min_price_per_carton,
                round2(breakdown.cost_per_carton + result.margin_per_carton)
            );
        }
    }

    #[test]
    fn each_type_quotes_its_own_quantity_prices() {
        let roster = TypeRoster::default_parallel();
        let config = BusinessConfig::default_config();
        let result = compute_parallel(&roster, &config).expect("valid roster");

        for breakdown in &result.types {
            assert_eq!(breakdown.price_breaks.len(), 4);
            for (break_row, &quote_cartons) in
                breakdown.price_breaks.iter().zip(&PARALLEL_QUOTE_CARTONS)
            {
                assert_eq!(break_row.cartons, quote_cartons);
                assert_eq!(
                    break_row.price,
                    round2(breakdown.min_price_per_carton * quote_cartons as f64)
                );
            }
        }

        // Type 1 at 3.91 per carton.
        let quotes: Vec<f64> = result.types[0]
            .price_breaks
            .iter()
            .map(|b| b.price)
            .collect();
        assert_eq!(quotes, vec![3.91, 23.46, 46.92, 93.84]);
    }

    #[test]
    fn net_profit_matches_revenue_minus_weekly_cost() {
        let roster = TypeRoster::default_parallel();
        let config = BusinessConfig::default_config();
        let result = compute_parallel(&roster, &config).expect("valid roster");
        assert!(close(
            result.total_revenue - result.weekly_cost,
            result.net_profit
        ));
    }

    #[test]
    fn single_type_roster_is_priced() {
        let roster = TypeRoster::new(
            1,
            vec![EggType {
                id: "type_01".to_string(),
                display_name: "Type 1".to_string(),
                purchase_price_per_box: 45.0,
                expected_weekly_boxes: 18.0,
            }],
        );
        let config = BusinessConfig::default_config();
        let result = compute_parallel(&roster, &config).expect("valid roster");
        assert_eq!(result.total_cartons, 216.0);
        assert_eq!(result.margin_per_carton, 0.49);
    }

    #[test]
    fn empty_or_invalid_rosters_yield_no_result() {
        let config = BusinessConfig::default_config();
        assert_eq!(
            compute_parallel(&TypeRoster::new(1, Vec::new()), &config),
            None
        );

        let broken = TypeRoster::new(
            1,
            vec![EggType {
                id: "type_01".to_string(),
                display_name: "Type 1".to_string(),
                purchase_price_per_box: 45.0,
                expected_weekly_boxes: 0.0,
            }],
        );
        assert_eq!(compute_parallel(&broken, &config), None);
    }

    #[test]
    fn compute_is_idempotent() {
        let roster = TypeRoster::default_parallel();
        let config = BusinessConfig::default_config();
        assert_eq!(
            compute_parallel(&roster, &config),
            compute_parallel(&roster, &config)
        );
    }
}
