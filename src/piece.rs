//! 棋子生命周期
//!
//! 每个棋子只保存一条只追加的事件日志（自己的走法 + 自己被攻击的记录），
//! 位置、死活、阵亡位置全部由日志推导，不单独存字段。

use crate::coords::Coord;
use crate::error::{Error, Result};
use crate::types::{Archetype, ArchetypeSet, MoveKind, Outcome, Side};

/// 棋子编号（在棋盘的棋子表中的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// 攻击信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackInfo {
    pub defender: PieceId,
    /// 进攻方视角的结果；None 表示尚未裁定（仅用于走法枚举）
    pub outcome: Option<Outcome>,
}

/// 一次走棋（或布阵）事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub(crate) turn: u32,
    pub(crate) piece: PieceId,
    pub(crate) start: Option<Coord>,
    pub(crate) end: Coord,
    pub(crate) kind: MoveKind,
    pub(crate) attack: Option<AttackInfo>,
}

impl Movement {
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// 布阵时为 None
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn attack(&self) -> Option<AttackInfo> {
        self.attack
    }

    pub fn is_placement(&self) -> bool {
        self.start.is_none()
    }

    /// 附上裁判给出的战斗结果
    pub fn with_outcome(mut self, outcome: Outcome) -> Result<Movement> {
        match self.attack.as_mut() {
            Some(attack) => {
                attack.outcome = Some(outcome);
                Ok(self)
            }
            None => Err(Error::NotAnAttack { end: self.end }),
        }
    }

    /// 战斗胜者；平局或未裁定时为 None
    pub fn winner(&self) -> Option<PieceId> {
        let attack = self.attack?;
        match attack.outcome? {
            Outcome::Win => Some(self.piece),
            Outcome::Loss => Some(attack.defender),
            Outcome::Tie => None,
        }
    }

    /// 该事件是否涉及某棋子
    pub fn involves(&self, id: PieceId) -> bool {
        self.piece == id || self.attack.is_some_and(|a| a.defender == id)
    }
}

/// 棋盘上的一个棋子
#[derive(Debug, Clone)]
pub struct BoardPiece {
    id: PieceId,
    side: Side,
    /// 己方棋子已知；敌方棋子为 None
    archetype: Option<Archetype>,
    /// 仍可能的身份
    candidates: ArchetypeSet,
    events: Vec<Movement>,
}

impl BoardPiece {
    pub fn new(id: PieceId, side: Side, archetype: Option<Archetype>) -> Self {
        let candidates = archetype.map_or(ArchetypeSet::ALL, ArchetypeSet::only);
        BoardPiece {
            id,
            side,
            archetype,
            candidates,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_friendly(&self) -> bool {
        self.side == Side::Friendly
    }

    /// 己方棋子的身份
    #[inline]
    pub fn archetype(&self) -> Option<Archetype> {
        self.archetype
    }

    #[inline]
    pub fn candidates(&self) -> ArchetypeSet {
        self.candidates
    }

    /// 已知或已推断出的身份
    pub fn identified(&self) -> Option<Archetype> {
        self.archetype.or_else(|| self.candidates.single())
    }

    pub fn events(&self) -> &[Movement] {
        &self.events
    }

    /// 自己发起的走法
    pub fn movements(&self) -> impl Iterator<Item = &Movement> {
        self.events.iter().filter(move |e| e.piece == self.id)
    }

    fn is_fatal(&self, event: &Movement) -> bool {
        let Some(attack) = event.attack else {
            return false;
        };
        let safe = if event.piece == self.id {
            Outcome::Win
        } else if attack.defender == self.id {
            Outcome::Loss
        } else {
            return false;
        };
        attack.outcome != Some(safe)
    }

    /// 追加事件
    ///
    /// # Panics
    ///
    /// 棋子已阵亡、事件与本棋子无关或战斗结果未裁定时 panic。
    pub(crate) fn add_event(&mut self, event: Movement) {
        assert!(!self.is_dead(), "piece {:?} is dead, nothing further can happen to it", self.id);
        assert!(event.involves(self.id), "event is not relevant to piece {:?}", self.id);
        assert!(
            event.attack.map_or(true, |a| a.outcome.is_some()),
            "theoretical attacks are never recorded"
        );
        self.events.push(event);
    }

    /// 收窄候选身份，只减不增
    pub(crate) fn narrow(&mut self, candidates: ArchetypeSet) {
        debug_assert!(candidates.is_subset(self.candidates));
        debug_assert!(!candidates.is_empty());
        self.candidates = candidates;
    }

    /// 布阵位置
    pub fn initial(&self) -> Option<Coord> {
        self.movements().next().map(|m| m.end)
    }

    pub fn is_placed(&self) -> bool {
        self.initial().is_some()
    }

    pub fn is_dead(&self) -> bool {
        self.events.last().is_some_and(|e| self.is_fatal(e))
    }

    /// 已上场且未阵亡
    pub fn is_alive(&self) -> bool {
        self.is_placed() && !self.is_dead()
    }

    /// 当前位置；未布阵或已阵亡时为 None
    pub fn position(&self) -> Option<Coord> {
        if self.is_dead() {
            return None;
        }
        self.movements().last().map(|m| m.end)
    }

    /// 阵亡位置：进攻失败死在出发格，防守失败死在原地
    pub fn died_at(&self) -> Option<Coord> {
        if !self.is_dead() {
            return None;
        }
        let last = self.movements().last()?;
        if self.is_fatal(last) {
            last.start
        } else {
            Some(last.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i8, y: i8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn placement(piece: PieceId, end: Coord) -> Movement {
        Movement {
            turn: 0,
            piece,
            start: None,
            end,
            kind: MoveKind::Initial,
            attack: None,
        }
    }

    fn attack(turn: u32, piece: PieceId, start: Coord, end: Coord, defender: PieceId, outcome: Outcome) -> Movement {
        Movement {
            turn,
            piece,
            start: Some(start),
            end,
            kind: MoveKind::Road,
            attack: Some(AttackInfo {
                defender,
                outcome: Some(outcome),
            }),
        }
    }

    #[test]
    fn test_unplaced_piece() {
        let piece = BoardPiece::new(PieceId(0), Side::Friendly, Some(Archetype::Major));
        assert!(!piece.is_placed());
        assert!(!piece.is_dead());
        assert!(!piece.is_alive());
        assert_eq!(piece.position(), None);
        assert_eq!(piece.died_at(), None);
        assert_eq!(piece.identified(), Some(Archetype::Major));
    }

    #[test]
    fn test_position_follows_movements() {
        let id = PieceId(0);
        let mut piece = BoardPiece::new(id, Side::Friendly, Some(Archetype::Major));
        piece.add_event(placement(id, c(0, 1)));
        piece.add_event(Movement {
            turn: 1,
            piece: id,
            start: Some(c(0, 1)),
            end: c(1, 1),
            kind: MoveKind::Road,
            attack: None,
        });
        assert_eq!(piece.initial(), Some(c(0, 1)));
        assert_eq!(piece.position(), Some(c(1, 1)));
        assert!(piece.is_alive());
    }

    #[test]
    fn test_attacker_dies_at_start() {
        let (me, them) = (PieceId(0), PieceId(1));
        let mut piece = BoardPiece::new(me, Side::Friendly, Some(Archetype::Captain));
        piece.add_event(placement(me, c(0, 1)));
        piece.add_event(attack(1, me, c(0, 1), c(0, -1), them, Outcome::Loss));
        assert!(piece.is_dead());
        assert_eq!(piece.position(), None);
        assert_eq!(piece.died_at(), Some(c(0, 1)));
    }

    #[test]
    fn test_defender_dies_in_place() {
        let (me, them) = (PieceId(0), PieceId(1));
        let mut piece = BoardPiece::new(me, Side::Enemy, None);
        piece.add_event(placement(me, c(0, -1)));
        piece.add_event(attack(1, them, c(0, 1), c(0, -1), me, Outcome::Win));
        assert!(piece.is_dead());
        assert_eq!(piece.died_at(), Some(c(0, -1)));
    }

    #[test]
    fn test_tie_is_fatal_to_both() {
        let (a, d) = (PieceId(0), PieceId(1));
        let event = attack(1, a, c(0, 1), c(0, -1), d, Outcome::Tie);
        let mut attacker = BoardPiece::new(a, Side::Friendly, Some(Archetype::Bomb));
        attacker.add_event(placement(a, c(0, 1)));
        attacker.add_event(event);
        let mut defender = BoardPiece::new(d, Side::Enemy, None);
        defender.add_event(placement(d, c(0, -1)));
        defender.add_event(event);
        assert!(attacker.is_dead());
        assert!(defender.is_dead());
        assert_eq!(event.winner(), None);
    }

    #[test]
    fn test_surviving_defender_stays_alive() {
        let (me, them) = (PieceId(0), PieceId(1));
        let mut piece = BoardPiece::new(me, Side::Friendly, Some(Archetype::Bomb));
        piece.add_event(placement(me, c(0, 2)));
        piece.add_event(attack(1, them, c(0, 1), c(0, 2), me, Outcome::Loss));
        assert!(piece.is_alive());
        assert_eq!(piece.position(), Some(c(0, 2)));
    }

    #[test]
    #[should_panic(expected = "dead")]
    fn test_dead_piece_is_immutable() {
        let (me, them) = (PieceId(0), PieceId(1));
        let mut piece = BoardPiece::new(me, Side::Friendly, Some(Archetype::Captain));
        piece.add_event(placement(me, c(0, 1)));
        piece.add_event(attack(1, me, c(0, 1), c(0, -1), them, Outcome::Loss));
        piece.add_event(placement(me, c(0, 1)));
    }

    #[test]
    #[should_panic(expected = "not relevant")]
    fn test_unrelated_event_rejected() {
        let mut piece = BoardPiece::new(PieceId(0), Side::Friendly, Some(Archetype::Captain));
        piece.add_event(placement(PieceId(3), c(0, 1)));
    }

    #[test]
    fn test_with_outcome() {
        let mv = placement(PieceId(0), c(0, 1));
        assert_eq!(mv.with_outcome(Outcome::Win), Err(Error::NotAnAttack { end: c(0, 1) }));
    }
}
