use thiserror::Error;

/// One supplier box yields 12 resale cartons.
pub const CARTONS_PER_BOX: u32 = 12;
/// One resale carton holds 30 eggs.
pub const EGGS_PER_CARTON: u32 = 30;
/// Eggs contained in a full supplier box.
pub const EGGS_PER_BOX: u32 = CARTONS_PER_BOX * EGGS_PER_CARTON;

/// A named fixed weekly cost, e.g. vehicle fuel.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseEntry {
    pub name: String,
    pub amount: f64,
}

/// Shared business configuration consumed by all three pricing engines.
///
/// The settings editor works on a cloned draft and commits by replacing the
/// whole value, so engines never observe a half-edited config.
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessConfig {
    /// Insertion-ordered; order only matters for display.
    pub weekly_expenses: Vec<ExpenseEntry>,
    pub min_weekly_profit: f64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expense name must not be empty")]
    EmptyName,
    #[error("expense amount must be greater than zero")]
    InvalidAmount,
}

impl BusinessConfig {
    /// Fresh default configuration. Always a new value, never a shared
    /// singleton.
    pub fn default_config() -> Self {
        Self {
            weekly_expenses: vec![
                ExpenseEntry {
                    name: "Weekly vehicle maintenance".to_string(),
                    amount: 10.00,
                },
                ExpenseEntry {
                    name: "Weekly vehicle fuel".to_string(),
                    amount: 5.00,
                },
            ],
            min_weekly_profit: 90.00,
        }
    }

    /// Sum of all expense amounts. Malformed entries (negative or
    /// non-finite) count as zero instead of poisoning the total.
    pub fn total_weekly_expenses(&self) -> f64 {
        self.weekly_expenses
            .iter()
            .map(|entry| {
                if entry.amount.is_finite() && entry.amount > 0.0 {
                    entry.amount
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Inserts or overwrites an expense by name. Duplicate names overwrite
    /// in place rather than adding a second row.
    pub fn set_expense(&mut self, name: &str, amount: f64) -> Result<(), ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConfigError::InvalidAmount);
        }
        if let Some(entry) = self
            .weekly_expenses
            .iter_mut()
            .find(|entry| entry.name == name)
        {
            entry.amount = amount;
        } else {
            self.weekly_expenses.push(ExpenseEntry {
                name: name.to_string(),
                amount,
            });
        }
        Ok(())
    }

    /// Removes an expense by name. Returns whether an entry was removed.
    pub fn remove_expense(&mut self, name: &str) -> bool {
        let before = self.weekly_expenses.len();
        self.weekly_expenses.retain(|entry| entry.name != name);
        self.weekly_expenses.len() != before
    }
}

/// One egg type the business buys in bulk.
#[derive(Clone, Debug, PartialEq)]
pub struct EggType {
    /// Stable generated key, e.g. `type_01`.
    pub id: String,
    /// User-facing label. The parallel mode ignores it and derives a label
    /// from the id instead.
    pub display_name: String,
    pub purchase_price_per_box: f64,
    pub expected_weekly_boxes: f64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("at least {0} egg type(s) must remain")]
    MinimumTypes(usize),
    #[error("unknown egg type id: {0}")]
    UnknownType(String),
    #[error("type name must not be empty")]
    EmptyName,
    #[error("purchase price per box must be greater than zero")]
    InvalidPrice,
    #[error("expected weekly boxes must be greater than zero")]
    InvalidVolume,
}

/// Insertion-ordered collection of egg types with a mode-specific minimum
/// size (mixed cartons need two types, parallel pricing needs one).
///
/// Iteration order is the order types were added; the mixed engine relies on
/// it as the tie-break rule when 30 eggs do not divide evenly.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRoster {
    types: Vec<EggType>,
    min_types: usize,
}

impl TypeRoster {
    pub fn new(min_types: usize, types: Vec<EggType>) -> Self {
        Self { types, min_types }
    }

    /// Default roster for the mixed-carton mode: two types.
    pub fn default_mixed() -> Self {
        Self::new(2, default_types())
    }

    /// Default roster for the parallel mode: same two types, minimum of one.
    pub fn default_parallel() -> Self {
        Self::new(1, default_types())
    }

    pub fn types(&self) -> &[EggType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn min_types(&self) -> usize {
        self.min_types
    }

    pub fn get(&self, id: &str) -> Option<&EggType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Validates and appends a new type with a generated id. Returns the id.
    pub fn add(
        &mut self,
        display_name: &str,
        purchase_price_per_box: f64,
        expected_weekly_boxes: f64,
    ) -> Result<String, RosterError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        validate_figures(purchase_price_per_box, expected_weekly_boxes)?;

        let id = self.next_type_id();
        self.types.push(EggType {
            id: id.clone(),
            display_name: display_name.to_string(),
            purchase_price_per_box,
            expected_weekly_boxes,
        });
        Ok(id)
    }

    /// Updates an existing type in place. The submission is applied whole or
    /// not at all.
    pub fn update(
        &mut self,
        id: &str,
        display_name: &str,
        purchase_price_per_box: f64,
        expected_weekly_boxes: f64,
    ) -> Result<(), RosterError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        validate_figures(purchase_price_per_box, expected_weekly_boxes)?;

        let entry = self
            .types
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RosterError::UnknownType(id.to_string()))?;
        entry.display_name = display_name.to_string();
        entry.purchase_price_per_box = purchase_price_per_box;
        entry.expected_weekly_boxes = expected_weekly_boxes;
        Ok(())
    }

    /// Removes a type by id, refusing to drop below the configured minimum.
    /// On failure the roster is left untouched.
    pub fn remove(&mut self, id: &str) -> Result<(), RosterError> {
        if self.types.len() <= self.min_types {
            return Err(RosterError::MinimumTypes(self.min_types));
        }
        let index = self
            .types
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| RosterError::UnknownType(id.to_string()))?;
        self.types.remove(index);
        Ok(())
    }

    /// Next sequential zero-padded id: one past the highest existing numeric
    /// suffix, so removed ids are never reused within a session.
    fn next_type_id(&self) -> String {
        let highest = self
            .types
            .iter()
            .filter_map(|t| t.id.rsplit('_').next())
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("type_{:02}", highest + 1)
    }
}

/// Display label the parallel mode derives from a generated id:
/// `type_01` becomes `TYPE 01`.
pub fn roster_label(id: &str) -> String {
    id.replace('_', " ").to_uppercase()
}

fn validate_figures(price: f64, boxes: f64) -> Result<(), RosterError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(RosterError::InvalidPrice);
    }
    if !boxes.is_finite() || boxes <= 0.0 {
        return Err(RosterError::InvalidVolume);
    }
    Ok(())
}

fn default_types() -> Vec<EggType> {
    vec![
        EggType {
            id: "type_01".to_string(),
            display_name: "Type 1".to_string(),
            purchase_price_per_box: 41.00,
            expected_weekly_boxes: 9.0,
        },
        EggType {
            id: "type_02".to_string(),
            display_name: "Type 2".to_string(),
            purchase_price_per_box: 45.00,
            expected_weekly_boxes: 9.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_totals_fifteen() {
        let config = BusinessConfig::default_config();
        assert_eq!(config.total_weekly_expenses(), 15.0);
        assert_eq!(config.min_weekly_profit, 90.0);
    }

    #[test]
    fn malformed_expense_amounts_count_as_zero() {
        let config = BusinessConfig {
            weekly_expenses: vec![
                ExpenseEntry {
                    name: "rent".to_string(),
                    amount: 20.0,
                },
                ExpenseEntry {
                    name: "bogus".to_string(),
                    amount: f64::NAN,
                },
                ExpenseEntry {
                    name: "negative".to_string(),
                    amount: -5.0,
                },
            ],
            min_weekly_profit: 0.0,
        };
        assert_eq!(config.total_weekly_expenses(), 20.0);
    }

    #[test]
    fn set_expense_overwrites_duplicates() {
        let mut config = BusinessConfig::default_config();
        let before = config.weekly_expenses.len();
        config
            .set_expense("Weekly vehicle fuel", 7.50)
            .expect("valid expense");
        assert_eq!(config.weekly_expenses.len(), before);
        assert_eq!(config.weekly_expenses[1].amount, 7.50);
    }

    #[test]
    fn set_expense_rejects_bad_input() {
        let mut config = BusinessConfig::default_config();
        assert_eq!(config.set_expense("  ", 5.0), Err(ConfigError::EmptyName));
        assert_eq!(
            config.set_expense("ice", 0.0),
            Err(ConfigError::InvalidAmount)
        );
        assert_eq!(config, BusinessConfig::default_config());
    }

    #[test]
    fn remove_expense_by_name() {
        let mut config = BusinessConfig::default_config();
        assert!(config.remove_expense("Weekly vehicle fuel"));
        assert!(!config.remove_expense("Weekly vehicle fuel"));
        assert_eq!(config.weekly_expenses.len(), 1);
    }

    #[test]
    fn roster_generates_sequential_ids() {
        let mut roster = TypeRoster::default_mixed();
        let id = roster.add("Type 3", 39.0, 4.0).expect("valid type");
        assert_eq!(id, "type_03");
        let id = roster.add("Type 4", 38.0, 4.0).expect("valid type");
        assert_eq!(id, "type_04");
    }

    #[test]
    fn roster_does_not_reuse_removed_ids() {
        let mut roster = TypeRoster::default_mixed();
        roster.add("Type 3", 39.0, 4.0).expect("valid type");
        roster.remove("type_02").expect("above minimum");
        let id = roster.add("Type 4", 38.0, 4.0).expect("valid type");
        assert_eq!(id, "type_04");
    }

    #[test]
    fn mixed_roster_keeps_two_types() {
        let mut roster = TypeRoster::default_mixed();
        assert_eq!(roster.remove("type_01"), Err(RosterError::MinimumTypes(2)));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn parallel_roster_keeps_one_type() {
        let mut roster = TypeRoster::default_parallel();
        roster.remove("type_01").expect("two types present");
        assert_eq!(roster.remove("type_02"), Err(RosterError::MinimumTypes(1)));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn invalid_submissions_leave_roster_unchanged() {
        let mut roster = TypeRoster::default_mixed();
        let snapshot = roster.clone();
        assert_eq!(roster.add("", 40.0, 5.0), Err(RosterError::EmptyName));
        assert_eq!(
            roster.add("Cheap", 0.0, 5.0),
            Err(RosterError::InvalidPrice)
        );
        assert_eq!(
            roster.update("type_01", "Type 1", 40.0, -1.0),
            Err(RosterError::InvalidVolume)
        );
        assert_eq!(
            roster.update("type_99", "Ghost", 40.0, 5.0),
            Err(RosterError::UnknownType("type_99".to_string()))
        );
        assert_eq!(roster, snapshot);
    }

    #[test]
    fn labels_derive_from_ids() {
        assert_eq!(roster_label("type_01"), "TYPE 01");
    }
}
