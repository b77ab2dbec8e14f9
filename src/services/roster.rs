use anyhow::{Context, Result};
use std::str::FromStr;

use crate::config::settings::LedgerSettings;
use crate::domain::{Account, AccountStats};
use crate::errors::roster_context;
use crate::rating::AccountTier;

/// Account description given on the command line: `name[:tier[:multiplier]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSpec {
    pub name: String,
    pub tier: AccountTier,
    pub multiplier: Option<u32>,
}

impl FromStr for AccountSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| format!("missing account name in '{}'", s))?;

        let tier = match parts.next() {
            Some(tier) => tier.parse()?,
            None => AccountTier::Standard,
        };

        let multiplier = match parts.next() {
            Some(m) => Some(
                m.trim()
                    .parse::<u32>()
                    .map_err(|e| format!("invalid multiplier '{}': {}", m, e))?,
            ),
            None => None,
        };

        if parts.next().is_some() {
            return Err(format!("too many fields in '{}'", s));
        }

        Ok(Self {
            name: name.to_string(),
            tier,
            multiplier,
        })
    }
}

/// Accounts held by the driver for the duration of a run
pub struct Roster {
    accounts: Vec<Account>,
}

impl Roster {
    pub fn from_specs(specs: &[AccountSpec], settings: &LedgerSettings) -> Result<Self> {
        let accounts = specs
            .iter()
            .map(|spec| build_account(spec, settings))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { accounts })
    }

    /// One account per tier
    pub fn one_per_tier(settings: &LedgerSettings) -> Self {
        let names = ["anna", "boris", "cleo"];
        let accounts = names
            .iter()
            .zip(AccountTier::ALL)
            .map(|(name, tier)| Account::new(*name, tier, settings.starting_rating))
            .collect();

        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Two distinct accounts borrowed mutably at once
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Account, &mut Account)> {
        if first == second || first >= self.len() || second >= self.len() {
            return None;
        }

        if first < second {
            let (head, tail) = self.accounts.split_at_mut(second);
            Some((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.accounts.split_at_mut(first);
            Some((&mut tail[0], &mut head[second]))
        }
    }

    pub fn stats(&self) -> Vec<AccountStats> {
        self.accounts.iter().map(Account::stats).collect()
    }
}

fn build_account(spec: &AccountSpec, settings: &LedgerSettings) -> Result<Account> {
    let multiplier = spec.multiplier.unwrap_or(settings.default_multiplier);
    Account::with_multiplier(
        spec.name.as_str(),
        spec.tier,
        settings.starting_rating,
        multiplier,
    )
    .with_context(|| roster_context(&spec.name))
}
