use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable account identifier (the account name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AccountId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Sequential game identifier, issued by `GameFactory`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(u64);

impl GameId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Game result, always stored from the first participant's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Lose,
    Draw,
    #[default]
    Undetermined,
}

impl GameResult {
    /// The same result seen from the other side of the board
    pub fn inverse(self) -> Self {
        match self {
            GameResult::Win => GameResult::Lose,
            GameResult::Lose => GameResult::Win,
            other => other,
        }
    }

    pub fn is_decided(self) -> bool {
        self != GameResult::Undetermined
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameResult::Win => "win",
            GameResult::Lose => "lose",
            GameResult::Draw => "draw",
            GameResult::Undetermined => "undetermined",
        }
    }
}

/// Controls how the second participant's rating responds to the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVariant {
    Symmetric,
    NoStake,
    OneSided,
}

impl GameVariant {
    pub const ALL: [GameVariant; 3] = [
        GameVariant::Symmetric,
        GameVariant::NoStake,
        GameVariant::OneSided,
    ];

    /// Stake actually carried by a game of this variant
    pub fn effective_stake(self, requested: u32) -> u32 {
        match self {
            GameVariant::NoStake => 0,
            _ => requested,
        }
    }

    pub fn moves_second_rating(self) -> bool {
        self != GameVariant::OneSided
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameVariant::Symmetric => "symmetric",
            GameVariant::NoStake => "no-stake",
            GameVariant::OneSided => "one-sided",
        }
    }
}

/// Which participant slot an account occupies in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants {
    pub first: AccountId,
    pub second: AccountId,
}

impl Participants {
    pub fn get(&self, side: Side) -> &AccountId {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn side_of(&self, account: &AccountId) -> Option<Side> {
        if &self.first == account {
            Some(Side::First)
        } else if &self.second == account {
            Some(Side::Second)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_swaps_win_and_lose_only() {
        assert_eq!(GameResult::Win.inverse(), GameResult::Lose);
        assert_eq!(GameResult::Lose.inverse(), GameResult::Win);
        assert_eq!(GameResult::Draw.inverse(), GameResult::Draw);
        assert_eq!(GameResult::Undetermined.inverse(), GameResult::Undetermined);
    }

    #[test]
    fn test_no_stake_variant_zeroes_stake() {
        assert_eq!(GameVariant::NoStake.effective_stake(25), 0);
        assert_eq!(GameVariant::Symmetric.effective_stake(25), 25);
        assert_eq!(GameVariant::OneSided.effective_stake(25), 25);
    }

    #[test]
    fn test_side_lookup_by_account_name() {
        let participants = Participants {
            first: AccountId::from("alice"),
            second: AccountId::from("bob"),
        };

        assert_eq!(participants.side_of(&"alice".into()), Some(Side::First));
        assert_eq!(participants.side_of(&"bob".into()), Some(Side::Second));
        assert_eq!(participants.side_of(&"carol".into()), None);
        assert_eq!(participants.get(Side::Second).as_str(), "bob");
    }
}
