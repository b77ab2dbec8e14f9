use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use super::types::GameResult;
use crate::config::settings::SimulationSettings;

/// Decides the result of a game from the first participant's perspective.
///
/// Implementations must return `Win`, `Lose` or `Draw`; an `Undetermined`
/// result is rejected when the game is decided.
pub trait OutcomePolicy {
    fn decide(&mut self) -> GameResult;
}

impl<F> OutcomePolicy for F
where
    F: FnMut() -> GameResult,
{
    fn decide(&mut self) -> GameResult {
        self()
    }
}

/// Two independent draws: first whether the game is drawn, then who wins
pub struct RandomOutcome<R: Rng> {
    rng: R,
    draw_probability: f64,
    win_probability: f64,
}

impl<R: Rng> RandomOutcome<R> {
    pub fn new(rng: R, settings: &SimulationSettings) -> Self {
        Self {
            rng,
            draw_probability: clamp_probability(settings.draw_probability),
            win_probability: clamp_probability(settings.win_probability),
        }
    }
}

impl RandomOutcome<StdRng> {
    pub fn seeded(seed: u64, settings: &SimulationSettings) -> Self {
        Self::new(StdRng::seed_from_u64(seed), settings)
    }

    pub fn from_entropy(settings: &SimulationSettings) -> Self {
        Self::new(StdRng::from_entropy(), settings)
    }
}

impl<R: Rng> OutcomePolicy for RandomOutcome<R> {
    fn decide(&mut self) -> GameResult {
        if self.rng.gen_bool(self.draw_probability) {
            return GameResult::Draw;
        }

        if self.rng.gen_bool(self.win_probability) {
            GameResult::Win
        } else {
            GameResult::Lose
        }
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Always produces the same result
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub GameResult);

impl OutcomePolicy for FixedOutcome {
    fn decide(&mut self) -> GameResult {
        self.0
    }
}

/// Replays a queue of results, falling back to a draw once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcome {
    results: VecDeque<GameResult>,
}

impl ScriptedOutcome {
    pub fn new(results: impl IntoIterator<Item = GameResult>) -> Self {
        Self {
            results: results.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.results.len()
    }
}

impl OutcomePolicy for ScriptedOutcome {
    fn decide(&mut self) -> GameResult {
        self.results.pop_front().unwrap_or(GameResult::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(draw: f64, win: f64) -> SimulationSettings {
        SimulationSettings {
            draw_probability: draw,
            win_probability: win,
            ..SimulationSettings::default()
        }
    }

    #[test]
    fn test_random_outcome_never_undetermined() {
        let mut policy = RandomOutcome::seeded(7, &SimulationSettings::default());

        for _ in 0..500 {
            assert!(policy.decide().is_decided());
        }
    }

    #[test]
    fn test_random_outcome_respects_certain_probabilities() {
        let mut always_draw = RandomOutcome::seeded(1, &settings(1.0, 0.5));
        let mut always_win = RandomOutcome::seeded(1, &settings(0.0, 1.0));
        let mut always_lose = RandomOutcome::seeded(1, &settings(0.0, 0.0));

        for _ in 0..50 {
            assert_eq!(always_draw.decide(), GameResult::Draw);
            assert_eq!(always_win.decide(), GameResult::Win);
            assert_eq!(always_lose.decide(), GameResult::Lose);
        }
    }

    #[test]
    fn test_random_outcome_clamps_out_of_range_probabilities() {
        let mut policy = RandomOutcome::seeded(3, &settings(4.0, -1.0));
        assert_eq!(policy.decide(), GameResult::Draw);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomOutcome::seeded(42, &SimulationSettings::default());
        let mut b = RandomOutcome::seeded(42, &SimulationSettings::default());

        let first: Vec<_> = (0..20).map(|_| a.decide()).collect();
        let second: Vec<_> = (0..20).map(|_| b.decide()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scripted_outcome_falls_back_to_draw() {
        let mut policy = ScriptedOutcome::new([GameResult::Win, GameResult::Lose]);

        assert_eq!(policy.decide(), GameResult::Win);
        assert_eq!(policy.decide(), GameResult::Lose);
        assert_eq!(policy.remaining(), 0);
        assert_eq!(policy.decide(), GameResult::Draw);
    }

    #[test]
    fn test_closure_is_a_policy() {
        let mut calls = 0;
        let mut policy = || {
            calls += 1;
            GameResult::Win
        };

        assert_eq!(policy.decide(), GameResult::Win);
        assert_eq!(policy.decide(), GameResult::Win);
        drop(policy);
        assert_eq!(calls, 2);
    }
}
