//! Pricing engines and business state for the egg reselling planner.

pub mod app_state;
pub mod entities;
pub mod mixed;
pub mod money;
pub mod parallel;
pub mod stable;

#[allow(unused_imports)]
pub use app_state::{AppState, Mode, StableParams};
#[allow(unused_imports)]
pub use entities::{
    roster_label, BusinessConfig, ConfigError, EggType, ExpenseEntry, RosterError, TypeRoster,
    CARTONS_PER_BOX, EGGS_PER_BOX, EGGS_PER_CARTON,
};
#[allow(unused_imports)]
pub use mixed::{compute_mixed, egg_distribution, MixedResult, MixedTypeBreakdown};
#[allow(unused_imports)]
pub use money::{format_money, format_pct, format_quantity, round2};
#[allow(unused_imports)]
pub use parallel::{
    compute_parallel, ParallelResult, ParallelTypeBreakdown, PARALLEL_QUOTE_CARTONS,
};
#[allow(unused_imports)]
pub use stable::{compute_stable, PriceBreak, StableResult, PRICE_BREAK_CARTONS};
