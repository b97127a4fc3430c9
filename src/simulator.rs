//! Five-year election cost and turnout projection for a single state.
//!
//! This is a fixed linear multiplier, not a model: separate elections cost
//! 1.5x the base estimate over five years, a synchronised cycle 1.1x.

use serde::{Deserialize, Serialize};

pub const CURRENT_SYSTEM_MULTIPLIER: f64 = 1.5;
pub const ONOE_MULTIPLIER: f64 = 1.1;

pub const TURNOUT_CHANGE_MIN: i32 = -10;
pub const TURNOUT_CHANGE_MAX: i32 = 20;
pub const DEFAULT_TURNOUT_CHANGE: i32 = 5;

/// Representative election statistics for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateStats {
    pub name: String,
    pub voters_crore: f64,
    pub election_cost_crore: f64,
    pub turnout_percent: f64,
    pub polling_stations: u32,
}

/// Projected five-year figures for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub state: String,
    pub turnout_change: i32,
    pub current_cost_crore: f64,
    pub onoe_cost_crore: f64,
    pub savings_crore: f64,
    pub projected_turnout_percent: f64,
}

impl Simulation {
    /// Savings rounded to whole crores, as displayed.
    pub fn savings_display(&self) -> i64 {
        self.savings_crore.round() as i64
    }
}

/// Clamp a turnout change to the supported slider range.
pub fn clamp_turnout_change(change: i32) -> i32 {
    change.clamp(TURNOUT_CHANGE_MIN, TURNOUT_CHANGE_MAX)
}

pub fn simulate(state: &StateStats, turnout_change: i32) -> Simulation {
    let turnout_change = clamp_turnout_change(turnout_change);
    let current_cost_crore = state.election_cost_crore * CURRENT_SYSTEM_MULTIPLIER;
    let onoe_cost_crore = state.election_cost_crore * ONOE_MULTIPLIER;

    Simulation {
        state: state.name.clone(),
        turnout_change,
        current_cost_crore,
        onoe_cost_crore,
        savings_crore: current_cost_crore - onoe_cost_crore,
        projected_turnout_percent: state.turnout_percent + f64::from(turnout_change),
    }
}

/// Find a state by name, ignoring case and surrounding whitespace.
pub fn find_state<'a>(states: &'a [StateStats], name: &str) -> Option<&'a StateStats> {
    let name = name.trim();
    states.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::states;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_simulate_uttar_pradesh() {
        let states = states().unwrap();
        let up = find_state(&states, "uttar pradesh").unwrap();
        let sim = simulate(up, 5);

        assert!(approx(sim.current_cost_crore, 6750.0));
        assert!(approx(sim.onoe_cost_crore, 4950.0));
        assert!(approx(sim.savings_crore, 1800.0));
        assert_eq!(sim.savings_display(), 1800);
        assert!(approx(sim.projected_turnout_percent, 64.2));
    }

    #[test]
    fn test_turnout_change_is_clamped() {
        let states = states().unwrap();
        let delhi = find_state(&states, "NCT of Delhi").unwrap();

        let high = simulate(delhi, 50);
        assert_eq!(high.turnout_change, TURNOUT_CHANGE_MAX);
        assert!(approx(high.projected_turnout_percent, 78.8));

        let low = simulate(delhi, -50);
        assert_eq!(low.turnout_change, TURNOUT_CHANGE_MIN);
        assert!(approx(low.projected_turnout_percent, 48.8));
    }

    #[test]
    fn test_find_state_unknown() {
        let states = states().unwrap();
        assert!(find_state(&states, "Atlantis").is_none());
        assert!(find_state(&states, "  bihar ").is_some());
    }
}
