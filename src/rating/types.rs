use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub type RatingValue = u32;
pub type RatingDelta = i64;

pub const DEFAULT_MULTIPLIER: u32 = 2;

/// Account category, selects the rating adjustment curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountTier {
    #[default]
    Standard,
    Premium,
    PremiumPlus,
}

impl AccountTier {
    pub const ALL: [AccountTier; 3] = [
        AccountTier::Standard,
        AccountTier::Premium,
        AccountTier::PremiumPlus,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AccountTier::Standard => "standard",
            AccountTier::Premium => "premium",
            AccountTier::PremiumPlus => "premium-plus",
        }
    }
}

impl FromStr for AccountTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(AccountTier::Standard),
            "premium" => Ok(AccountTier::Premium),
            "premium-plus" | "premiumplus" | "plus" => Ok(AccountTier::PremiumPlus),
            other => Err(format!("unknown account tier: {}", other)),
        }
    }
}
