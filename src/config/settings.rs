use crate::rating::{DEFAULT_MULTIPLIER, RatingValue};

pub struct LedgerSettings {
    pub starting_rating: RatingValue,
    pub default_multiplier: u32,
    pub default_stake: u32,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            starting_rating: 100,
            default_multiplier: DEFAULT_MULTIPLIER,
            default_stake: 10,
        }
    }
}

pub struct SimulationSettings {
    pub draw_probability: f64,
    pub win_probability: f64, // evaluated only when the game is not drawn
    pub games_per_run: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            draw_probability: 0.5,
            win_probability: 0.5,
            games_per_run: 20,
        }
    }
}

pub struct AppConfig {
    pub ledger: LedgerSettings,
    pub simulation: SimulationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ledger: LedgerSettings::default(),
            simulation: SimulationSettings::default(),
        }
    }
}
