use super::types::RatingDelta;
use crate::domain::{GameResult, GameVariant, Side};

/// Signed, pre-strategy rating change for one side of a decided game
pub fn rating_delta(
    result: GameResult,
    variant: GameVariant,
    stake: u32,
    side: Side,
) -> RatingDelta {
    match side {
        Side::First => first_participant_delta(result, stake),
        Side::Second if variant.moves_second_rating() => -first_participant_delta(result, stake),
        Side::Second => 0,
    }
}

fn first_participant_delta(result: GameResult, stake: u32) -> RatingDelta {
    let stake = RatingDelta::from(stake);

    match result {
        GameResult::Win => stake,
        GameResult::Lose => -stake,
        GameResult::Draw | GameResult::Undetermined => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_participant_delta() {
        let variant = GameVariant::Symmetric;
        assert_eq!(rating_delta(GameResult::Win, variant, 5, Side::First), 5);
        assert_eq!(rating_delta(GameResult::Lose, variant, 5, Side::First), -5);
        assert_eq!(rating_delta(GameResult::Draw, variant, 5, Side::First), 0);
    }

    #[test]
    fn test_second_participant_mirrors_symmetric() {
        let variant = GameVariant::Symmetric;
        assert_eq!(rating_delta(GameResult::Win, variant, 5, Side::Second), -5);
        assert_eq!(rating_delta(GameResult::Lose, variant, 5, Side::Second), 5);
        assert_eq!(rating_delta(GameResult::Draw, variant, 5, Side::Second), 0);
    }

    #[test]
    fn test_one_sided_leaves_second_untouched() {
        for result in [GameResult::Win, GameResult::Lose, GameResult::Draw] {
            assert_eq!(rating_delta(result, GameVariant::OneSided, 7, Side::Second), 0);
        }
        assert_eq!(rating_delta(GameResult::Win, GameVariant::OneSided, 7, Side::First), 7);
    }

    #[test]
    fn test_no_stake_mirrors_with_zero_stake() {
        assert_eq!(rating_delta(GameResult::Win, GameVariant::NoStake, 0, Side::First), 0);
        assert_eq!(rating_delta(GameResult::Win, GameVariant::NoStake, 0, Side::Second), 0);
    }
}
