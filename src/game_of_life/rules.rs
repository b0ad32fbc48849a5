//! Game of Life transition rules

use super::Status;

/// A single transition rule.
///
/// A rule returns `Some(next)` only for the situations it governs and `None`
/// otherwise, so a set of rules composes into one decision table.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, status: Status, alive_neighbours: u8) -> Option<Status>;
}

/// An alive cell with 2 or 3 alive neighbours stays alive
#[derive(Debug, Clone, Copy)]
pub struct Survival;

impl Rule for Survival {
    fn name(&self) -> &'static str {
        "survival"
    }

    fn apply(&self, status: Status, alive_neighbours: u8) -> Option<Status> {
        match (status, alive_neighbours) {
            (Status::Alive, 2 | 3) => Some(Status::Alive),
            _ => None,
        }
    }
}

/// An alive cell with fewer than 2 alive neighbours dies
#[derive(Debug, Clone, Copy)]
pub struct Isolation;

impl Rule for Isolation {
    fn name(&self) -> &'static str {
        "isolation"
    }

    fn apply(&self, status: Status, alive_neighbours: u8) -> Option<Status> {
        match (status, alive_neighbours) {
            (Status::Alive, 0 | 1) => Some(Status::Dead),
            _ => None,
        }
    }
}

/// An alive cell with more than 3 alive neighbours dies
#[derive(Debug, Clone, Copy)]
pub struct Overcrowding;

impl Rule for Overcrowding {
    fn name(&self) -> &'static str {
        "overcrowding"
    }

    fn apply(&self, status: Status, alive_neighbours: u8) -> Option<Status> {
        match (status, alive_neighbours) {
            (Status::Alive, n) if n > 3 => Some(Status::Dead),
            _ => None,
        }
    }
}

/// A dead or empty coordinate with exactly 3 alive neighbours comes alive
#[derive(Debug, Clone, Copy)]
pub struct Birth;

impl Rule for Birth {
    fn name(&self) -> &'static str {
        "birth"
    }

    fn apply(&self, status: Status, alive_neighbours: u8) -> Option<Status> {
        match (status, alive_neighbours) {
            (Status::Dead, 3) => Some(Status::Alive),
            _ => None,
        }
    }
}

/// Rules evaluated together against one generation.
///
/// The first rule that governs a situation decides it; when none does, the
/// status carries over unchanged.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Conway's B3/S23 rules
    pub fn conway() -> Self {
        Self::new(vec![
            Box::new(Survival),
            Box::new(Isolation),
            Box::new(Overcrowding),
            Box::new(Birth),
        ])
    }

    /// Next status of a cell given its current status and alive neighbour count
    pub fn next_status(&self, status: Status, alive_neighbours: u8) -> Status {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(status, alive_neighbours))
            .unwrap_or(status)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        let rules = RuleSet::conway();
        assert_eq!(rules.next_status(Status::Alive, 2), Status::Alive);
        assert_eq!(rules.next_status(Status::Alive, 3), Status::Alive);
        assert_eq!(rules.next_status(Status::Dead, 3), Status::Alive);
        assert_eq!(rules.next_status(Status::Alive, 1), Status::Dead);
        assert_eq!(rules.next_status(Status::Alive, 4), Status::Dead);
        assert_eq!(rules.next_status(Status::Dead, 2), Status::Dead);
    }

    #[test]
    fn test_full_decision_table() {
        let rules = RuleSet::conway();
        for count in 0..=8 {
            let expected_alive = match count {
                2 | 3 => Status::Alive,
                _ => Status::Dead,
            };
            assert_eq!(rules.next_status(Status::Alive, count), expected_alive, "alive with {}", count);

            let expected_dead = if count == 3 { Status::Alive } else { Status::Dead };
            assert_eq!(rules.next_status(Status::Dead, count), expected_dead, "dead with {}", count);
        }
    }

    #[test]
    fn test_rules_only_govern_their_cases() {
        assert_eq!(Survival.apply(Status::Dead, 3), None);
        assert_eq!(Isolation.apply(Status::Alive, 2), None);
        assert_eq!(Overcrowding.apply(Status::Alive, 3), None);
        assert_eq!(Overcrowding.apply(Status::Alive, 8), Some(Status::Dead));
        assert_eq!(Birth.apply(Status::Alive, 3), None);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(
            RuleSet::default().names(),
            vec!["survival", "isolation", "overcrowding", "birth"]
        );
    }
}
