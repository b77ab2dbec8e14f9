use super::types::{AccountTier, RatingDelta, RatingValue};

/// Apply `delta` to `current` following the tier's adjustment curve.
///
/// The tier works on the proposed value `current + delta` before any floor,
/// and only the final rating is clamped to `0..=RatingValue::MAX`:
///
/// - `Standard` keeps the change as is.
/// - `Premium` divides losses by `multiplier`.
/// - `PremiumPlus` divides losses and multiplies gains by `multiplier`.
pub fn adjust(
    tier: AccountTier,
    multiplier: u32,
    current: RatingValue,
    delta: RatingDelta,
) -> RatingValue {
    let current = i64::from(current);
    let proposed = current.saturating_add(delta);
    let multiplier = i64::from(multiplier.max(1));

    let adjusted = match tier {
        AccountTier::Standard => proposed,
        AccountTier::Premium => soften_loss(current, proposed, multiplier),
        AccountTier::PremiumPlus if proposed > current => {
            amplify_gain(current, proposed, multiplier)
        }
        AccountTier::PremiumPlus => soften_loss(current, proposed, multiplier),
    };

    floor_rating(adjusted)
}

fn soften_loss(current: i64, proposed: i64, multiplier: i64) -> i64 {
    if proposed >= current {
        return proposed;
    }

    let loss = current - proposed;
    current - loss / multiplier
}

fn amplify_gain(current: i64, proposed: i64, multiplier: i64) -> i64 {
    let gain = proposed - current;
    current.saturating_add(gain.saturating_mul(multiplier))
}

fn floor_rating(value: i64) -> RatingValue {
    value.clamp(0, i64::from(RatingValue::MAX)) as RatingValue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_adds_delta() {
        assert_eq!(adjust(AccountTier::Standard, 2, 10, 5), 15);
        assert_eq!(adjust(AccountTier::Standard, 2, 10, -4), 6);
        assert_eq!(adjust(AccountTier::Standard, 2, 10, 0), 10);
    }

    #[test]
    fn test_standard_floors_at_zero() {
        assert_eq!(adjust(AccountTier::Standard, 2, 3, -10), 0);
    }

    #[test]
    fn test_premium_halves_losses() {
        // proposed = 4, loss = 6, softened loss = 3
        assert_eq!(adjust(AccountTier::Premium, 2, 10, -6), 7);
    }

    #[test]
    fn test_premium_applies_gains_in_full() {
        assert_eq!(adjust(AccountTier::Premium, 2, 10, 4), 14);
    }

    #[test]
    fn test_premium_truncates_softened_loss() {
        // loss = 5, 5 / 2 = 2
        assert_eq!(adjust(AccountTier::Premium, 2, 5, -5), 3);
        assert_eq!(adjust(AccountTier::Premium, 3, 10, -5), 9);
    }

    #[test]
    fn test_premium_softens_before_flooring() {
        // proposed = -7, loss = 10, 3 - 5 floors at 0
        assert_eq!(adjust(AccountTier::Premium, 2, 3, -10), 0);
        assert_eq!(adjust(AccountTier::PremiumPlus, 2, 3, -10), 0);
        // proposed = -1, loss = 6, 5 - 3 stays positive
        assert_eq!(adjust(AccountTier::Premium, 2, 5, -6), 2);
    }

    #[test]
    fn test_premium_plus_amplifies_gains() {
        assert_eq!(adjust(AccountTier::PremiumPlus, 2, 10, 4), 18);
        assert_eq!(adjust(AccountTier::PremiumPlus, 3, 10, 4), 22);
    }

    #[test]
    fn test_premium_plus_softens_losses() {
        assert_eq!(adjust(AccountTier::PremiumPlus, 2, 10, -6), 7);
    }

    #[test]
    fn test_multiplier_of_one_behaves_like_standard() {
        for tier in AccountTier::ALL {
            assert_eq!(adjust(tier, 1, 10, -6), 4);
            assert_eq!(adjust(tier, 1, 10, 6), 16);
        }
    }

    #[test]
    fn test_gain_saturates_instead_of_overflowing() {
        let current = RatingValue::MAX - 1;
        assert_eq!(adjust(AccountTier::PremiumPlus, 2, current, 10), RatingValue::MAX);
        assert_eq!(adjust(AccountTier::Standard, 2, current, 10), RatingValue::MAX);
    }
}
