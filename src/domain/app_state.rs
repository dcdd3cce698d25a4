use super::entities::{BusinessConfig, TypeRoster};

/// Pricing strategy currently displayed. Engines never share state; the
/// mode only selects which result the shell renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Stable,
    Mixed,
    Parallel,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Stable => "Stable Carton",
            Mode::Mixed => "Mixed Carton",
            Mode::Parallel => "Parallel Types",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mode::Stable => "📦",
            Mode::Mixed => "🥚",
            Mode::Parallel => "🔀",
        }
    }
}

/// Inputs for the stable (single type) mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StableParams {
    pub price_per_box: f64,
    pub weekly_boxes: u32,
}

impl Default for StableParams {
    fn default() -> Self {
        Self {
            price_per_box: 45.0,
            weekly_boxes: 18,
        }
    }
}

/// Session-local application state. Nothing here is persisted; a restart
/// returns to the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Live configuration shared by all engines. Replaced wholesale when the
    /// settings editor commits a draft.
    pub config: BusinessConfig,
    pub stable: StableParams,
    pub mixed_types: TypeRoster,
    pub parallel_types: TypeRoster,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: BusinessConfig::default_config(),
            stable: StableParams::default(),
            mixed_types: TypeRoster::default_mixed(),
            parallel_types: TypeRoster::default_parallel(),
        }
    }
}

impl AppState {
    /// Commits a finished configuration draft, replacing the live value in
    /// one step so no engine sees a partial edit.
    pub fn commit_config(&mut self, draft: BusinessConfig) {
        self.config = draft;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_out_of_box_setup() {
        let state = AppState::default();
        assert_eq!(state.stable.price_per_box, 45.0);
        assert_eq!(state.stable.weekly_boxes, 18);
        assert_eq!(state.mixed_types.len(), 2);
        assert_eq!(state.parallel_types.len(), 2);
        assert_eq!(state.config.min_weekly_profit, 90.0);
    }

    #[test]
    fn draft_commit_replaces_config_wholesale() {
        let mut state = AppState::default();
        let mut draft = state.config.clone();
        draft.set_expense("Market stall", 25.0).expect("valid");
        draft.min_weekly_profit = 120.0;

        // The live config is untouched while the draft is edited.
        assert_eq!(state.config, BusinessConfig::default_config());

        state.commit_config(draft.clone());
        assert_eq!(state.config, draft);
    }
}
