//! 战斗结算
//!
//! 规则按顺序判定：
//! 1. 不能动的棋子（地雷、军旗）不能进攻
//! 2. 双方都有军衔：大吃小，相同同归于尽
//! 3. 炸弹进攻：同归于尽
//! 4. 防守方是炸弹：进攻方阵亡；工兵挖地雷例外
//! 5. 防守方是军旗：进攻方获胜

use crate::types::{Archetype, Outcome};

/// 结算战斗，不可能出现的组合返回 None
pub fn combat(attacker: Archetype, defender: Archetype) -> Option<Outcome> {
    if attacker.sessile() {
        return None;
    }

    if let (Some(a), Some(d)) = (attacker.order(), defender.order()) {
        return Some(match a.cmp(&d) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        });
    }

    if attacker.bomb() {
        return Some(Outcome::Tie);
    }

    if defender.bomb() {
        if defender.sessile() && attacker.defeats_sessile_bombs() {
            return Some(Outcome::Win);
        }
        return Some(Outcome::Loss);
    }

    if defender.lose_on_defeat() {
        return Some(Outcome::Win);
    }

    None
}

/// 结算战斗
///
/// # Panics
///
/// 进攻方不能移动，或组合不在规则内时 panic。
pub fn resolve(attacker: Archetype, defender: Archetype) -> Outcome {
    match combat(attacker, defender) {
        Some(outcome) => outcome,
        None => panic!("{} cannot attack {}", attacker, defender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_ARCHETYPES;

    #[test]
    fn test_rank_combat() {
        assert_eq!(resolve(Archetype::Marshal, Archetype::Engineer), Outcome::Win);
        assert_eq!(resolve(Archetype::Engineer, Archetype::Marshal), Outcome::Loss);
        assert_eq!(resolve(Archetype::Colonel, Archetype::Colonel), Outcome::Tie);
    }

    #[test]
    fn test_bomb_attacking_destroys_both() {
        assert_eq!(resolve(Archetype::Bomb, Archetype::Marshal), Outcome::Tie);
        assert_eq!(resolve(Archetype::Bomb, Archetype::Landmine), Outcome::Tie);
        assert_eq!(resolve(Archetype::Bomb, Archetype::Flag), Outcome::Tie);
    }

    #[test]
    fn test_attacking_bombs() {
        assert_eq!(resolve(Archetype::Engineer, Archetype::Landmine), Outcome::Win);
        assert_eq!(resolve(Archetype::Marshal, Archetype::Landmine), Outcome::Loss);
        assert_eq!(resolve(Archetype::Engineer, Archetype::Bomb), Outcome::Loss);
        assert_eq!(resolve(Archetype::General, Archetype::Bomb), Outcome::Loss);
    }

    #[test]
    fn test_flag_always_captured() {
        for attacker in ALL_ARCHETYPES.iter().filter(|a| !a.sessile() && !a.bomb()) {
            assert_eq!(resolve(*attacker, Archetype::Flag), Outcome::Win);
        }
    }

    #[test]
    fn test_sessile_cannot_attack() {
        for defender in ALL_ARCHETYPES {
            assert_eq!(combat(Archetype::Landmine, defender), None);
            assert_eq!(combat(Archetype::Flag, defender), None);
        }
    }

    #[test]
    #[should_panic]
    fn test_resolve_panics_for_sessile_attacker() {
        resolve(Archetype::Flag, Archetype::Engineer);
    }

    #[test]
    fn test_every_mobile_pair_resolves() {
        for attacker in ALL_ARCHETYPES.iter().filter(|a| !a.sessile()) {
            for defender in ALL_ARCHETYPES {
                assert!(combat(*attacker, defender).is_some(), "{} vs {}", attacker, defender);
            }
        }
    }
}
