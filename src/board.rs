//! 陆战棋棋盘
//!
//! 负责布阵、走法合法性、走法执行、战斗记账和敌方身份推断。
//! 棋子本身只保存事件日志，棋盘额外维护一张格子 -> 棋子的占位表，
//! 两者在 `add_move` 中一起更新。

use std::collections::BTreeMap;
use std::fmt::Write as _;

use log::{debug, info, log, warn, Level};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::combat::combat;
use crate::coords::{Axis, AxisMatch, BoardState, Coord, SYSTEM};
use crate::error::{Error, Result};
use crate::notation;
use crate::piece::{AttackInfo, BoardPiece, Movement, PieceId};
use crate::railroad;
use crate::types::{
    Archetype, ArchetypeSet, GameStatus, MoveKind, Outcome, Side, Space, ALL_ARCHETYPES, ARMY_SIZE,
};

/// 默认布阵顺序：先放限制最多的棋子，其余按目录顺序
pub const DEFAULT_PLACEMENT_ORDER: [Archetype; 3] =
    [Archetype::Flag, Archetype::Landmine, Archetype::Bomb];

/// 陆战棋棋盘
#[derive(Debug, Clone)]
pub struct LuzhanqiBoard {
    state: BoardState<Option<PieceId>>,
    pieces: Vec<BoardPiece>,
    turn: u32,
}

impl Default for LuzhanqiBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LuzhanqiBoard {
    /// 空棋盘，第 0 回合
    pub fn new() -> Self {
        LuzhanqiBoard {
            state: BoardState::new(None),
            pieces: Vec::new(),
            turn: 0,
        }
    }

    /// 从指定棋子构造局面（不要求完整兵力），用于分析与测试
    ///
    /// 敌方棋子可以给出已知身份，等同于布阵后立即揭示。
    pub fn from_position(
        friendly: &[(Coord, Archetype)],
        enemy: &[(Coord, Option<Archetype>)],
    ) -> Result<Self> {
        let mut board = Self::new();
        for &(coord, archetype) in friendly {
            let id = board.spawn(Side::Friendly, Some(archetype));
            board.place(id, coord)?;
        }
        for &(coord, archetype) in enemy {
            let id = board.spawn(Side::Enemy, None);
            board.place(id, coord)?;
            if let Some(archetype) = archetype {
                board.reveal(id, archetype)?;
            }
        }
        board.turn = 1;
        Ok(board)
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// 格子类型
    #[inline]
    pub fn space_of(&self, coord: Coord) -> Space {
        Space::of(coord)
    }

    /// 某格上的棋子
    pub fn get(&self, coord: Coord) -> Option<&BoardPiece> {
        self.state[coord].map(|id| &self.pieces[id.0])
    }

    pub fn piece(&self, id: PieceId) -> &BoardPiece {
        &self.pieces[id.0]
    }

    /// 某方所有棋子（含阵亡）
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &BoardPiece> {
        self.pieces.iter().filter(move |p| p.side() == side)
    }

    pub fn living_pieces(&self, side: Side) -> impl Iterator<Item = &BoardPiece> {
        self.pieces(side).filter(|p| p.is_alive())
    }

    pub fn dead_pieces(&self, side: Side) -> impl Iterator<Item = &BoardPiece> {
        self.pieces(side).filter(|p| p.is_dead())
    }

    // ========================================================================
    // 布阵几何
    // ========================================================================

    /// 己方 25 个布阵格：第一象限可布阵的格子按 x 镜像展开
    pub fn initial_positions(&self) -> Vec<Coord> {
        let nonneg = |v: i8| v >= 0;
        let absolutes: Vec<Coord> = SYSTEM
            .coords_matching(AxisMatch::Test(&nonneg), AxisMatch::Test(&nonneg))
            .filter(|&c| Space::of(c).initial_placement())
            .collect();
        let mirror = |axis: &Axis, x: i8| axis.original_and_reflection(x);
        SYSTEM.map_components(absolutes, Some(&mirror), None)
    }

    /// 敌方 25 个布阵格：己方布阵格关于中线镜像
    pub fn enemy_initial_positions(&self) -> Vec<Coord> {
        let reflect = |axis: &Axis, y: i8| axis.reflection(y);
        SYSTEM.map_components(self.initial_positions(), None, Some(&reflect))
    }

    // ========================================================================
    // 布阵
    // ========================================================================

    fn spawn(&mut self, side: Side, archetype: Option<Archetype>) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(BoardPiece::new(id, side, archetype));
        id
    }

    /// 布下一个棋子（第 0 回合）
    fn place(&mut self, id: PieceId, coord: Coord) -> Result<()> {
        let movement = self.movement(id, coord, None)?;
        let updates = self.infer(&movement, None)?;
        self.pieces[id.0].add_event(movement);
        self.apply_inference(updates);
        self.state[coord] = Some(id);
        debug!("placed {:?} ({}) at {}", id, self.describe(id), coord);
        Ok(())
    }

    /// 布阵
    ///
    /// 按 `placement_order` 依次放置各兵种，未列出的兵种按目录顺序跟在后面。
    /// `choose(archetype, candidates, n)` 必须从 `candidates` 中选出 n 个不同的格子。
    /// 己方全部规划成功后才落子，然后在镜像位置放置 25 个未知敌方棋子。
    pub fn setup<F>(&mut self, placement_order: &[Archetype], mut choose: F) -> Result<()>
    where
        F: FnMut(Archetype, &[Coord], usize) -> Vec<Coord>,
    {
        if self.turn != 0 || !self.pieces.is_empty() {
            return Err(Error::AlreadySetUp);
        }

        let mut sequence: Vec<Archetype> = Vec::with_capacity(ALL_ARCHETYPES.len());
        for &archetype in placement_order.iter().chain(ALL_ARCHETYPES.iter()) {
            if !sequence.contains(&archetype) {
                sequence.push(archetype);
            }
        }

        let mut remaining = self.initial_positions();
        remaining.sort();
        let mut plan: Vec<(Coord, Archetype)> = Vec::with_capacity(ARMY_SIZE);

        for archetype in sequence {
            let candidates: Vec<Coord> = remaining
                .iter()
                .copied()
                .filter(|&c| archetype.can_place_at(c))
                .collect();
            let needed = archetype.initial_count();
            if candidates.len() < needed {
                return Err(Error::NotEnoughPlacements {
                    archetype,
                    needed,
                    available: candidates.len(),
                });
            }

            let mut chosen = choose(archetype, &candidates, needed);
            chosen.sort();
            chosen.dedup();
            if chosen.len() != needed || chosen.iter().any(|c| !candidates.contains(c)) {
                return Err(Error::InvalidPlacementChoice { archetype });
            }

            remaining.retain(|c| !chosen.contains(c));
            plan.extend(chosen.into_iter().map(|c| (c, archetype)));
        }

        for (coord, archetype) in plan {
            let id = self.spawn(Side::Friendly, Some(archetype));
            self.place(id, coord)?;
        }

        let mut enemy_positions = self.enemy_initial_positions();
        enemy_positions.sort();
        for coord in enemy_positions {
            let id = self.spawn(Side::Enemy, None);
            self.place(id, coord)?;
        }

        self.turn = 1;
        info!("setup complete: {} pieces on the board", self.pieces.len());
        Ok(())
    }

    /// 随机布阵
    pub fn setup_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.setup(&DEFAULT_PLACEMENT_ORDER, |_, candidates, n| {
            candidates.choose_multiple(&mut *rng, n).copied().collect()
        })
    }

    /// 按给定阵型布阵
    pub fn setup_from_layout(&mut self, layout: &[(Coord, Archetype)]) -> Result<()> {
        self.setup(&DEFAULT_PLACEMENT_ORDER, |archetype, _, _| {
            layout
                .iter()
                .filter(|(_, a)| *a == archetype)
                .map(|(c, _)| *c)
                .collect()
        })
    }

    // ========================================================================
    // 走法合法性
    // ========================================================================

    /// 棋子能否移动（不考虑目标）
    fn can_move(&self, piece: &BoardPiece, from: Coord) -> bool {
        if !piece.candidates().any(|a| !a.sessile()) {
            return false;
        }
        !Space::of(from).quagmire()
    }

    /// 不能吃自己人，不能攻击行营里的棋子
    fn verify_attack(&self, piece: &BoardPiece, end: Coord) -> bool {
        match self.get(end) {
            None => true,
            Some(target) => target.side() != piece.side() && !Space::of(end).safe(),
        }
    }

    /// 铁路可达格（未检查终点能否攻击）
    pub fn railroad_moves(&self, id: PieceId) -> BTreeMap<Coord, MoveKind> {
        let piece = self.piece(id);
        let Some(origin) = piece.position() else {
            return BTreeMap::new();
        };
        let can_corner = piece.candidates().any(|a| a.railroad_corners());
        railroad::search(origin, can_corner, |c| {
            self.state[c].is_some_and(|other| other != id)
        })
    }

    /// 校验走法，返回走法类型
    pub fn verify(&self, id: PieceId, end: Coord) -> Option<MoveKind> {
        let piece = self.piece(id);
        if piece.is_dead() {
            return None;
        }

        let Some(start) = piece.position() else {
            if self.turn != 0 || self.state[end].is_some() || !Space::of(end).initial_placement() {
                return None;
            }
            let fits = match piece.side() {
                Side::Friendly => piece.candidates().any(|a| a.can_place_at(end)),
                // 敌方的布阵限制在敌方视角下判断
                Side::Enemy => piece.candidates().any(|a| a.can_place_at(end.reflect_y())),
            };
            return fits.then_some(MoveKind::Initial);
        };

        if start == end || !self.can_move(piece, start) || !self.verify_attack(piece, end) {
            return None;
        }

        let (dx, dy) = start.delta(end);
        if dx + dy == 1 {
            return Some(MoveKind::Road);
        }
        if dx == 1 && dy == 1 && (Space::of(start).diagonals() || Space::of(end).diagonals()) {
            return Some(MoveKind::Road);
        }

        self.railroad_moves(id).get(&end).copied()
    }

    /// 某棋子所有合法目标
    pub fn destinations(&self, id: PieceId) -> Vec<(Coord, MoveKind)> {
        let piece = self.piece(id);
        let Some(start) = piece.position() else {
            return Vec::new();
        };
        if !self.can_move(piece, start) {
            return Vec::new();
        }

        let either_side = |_: &Axis, v: i8| vec![v - 1, v + 1];
        let mut found: BTreeMap<Coord, MoveKind> = BTreeMap::new();
        for c in SYSTEM.map_components_separately([start], &either_side, &either_side) {
            found.insert(c, MoveKind::Road);
        }
        let diagonal_from_here = Space::of(start).diagonals();
        for c in SYSTEM.map_components([start], Some(&either_side), Some(&either_side)) {
            if diagonal_from_here || Space::of(c).diagonals() {
                found.insert(c, MoveKind::Road);
            }
        }
        for (c, kind) in self.railroad_moves(id) {
            found.entry(c).or_insert(kind);
        }

        found
            .into_iter()
            .filter(|&(c, _)| c != start && self.verify_attack(piece, c))
            .collect()
    }

    /// 某棋子的所有候选走法
    pub fn valid_moves_for_piece(&self, id: PieceId) -> Vec<Movement> {
        self.destinations(id)
            .into_iter()
            .map(|(end, kind)| self.candidate_movement(id, end, kind))
            .collect()
    }

    /// 己方所有候选走法（攻击结果留空）
    pub fn valid_moves(&self) -> Vec<Movement> {
        self.living_pieces(Side::Friendly)
            .flat_map(|p| self.valid_moves_for_piece(p.id()))
            .collect()
    }

    fn candidate_movement(&self, id: PieceId, end: Coord, kind: MoveKind) -> Movement {
        Movement {
            turn: self.turn,
            piece: id,
            start: self.piece(id).position(),
            end,
            kind,
            attack: self.state[end].map(|defender| AttackInfo {
                defender,
                outcome: None,
            }),
        }
    }

    /// 构造并校验一次走法
    ///
    /// 目标格有敌子时为攻击，`outcome` 为裁判给出的结果（可留空由引擎推算）。
    pub fn movement(&self, id: PieceId, end: Coord, outcome: Option<Outcome>) -> Result<Movement> {
        let start = self.piece(id).position();
        if start.is_none() != (self.turn == 0) {
            return Err(Error::IllegalMove { start, end });
        }
        let kind = self
            .verify(id, end)
            .ok_or(Error::IllegalMove { start, end })?;

        let mut movement = self.candidate_movement(id, end, kind);
        match (movement.attack.as_mut(), outcome) {
            (Some(attack), outcome) => attack.outcome = outcome,
            (None, Some(_)) => return Err(Error::NotAnAttack { end }),
            (None, None) => {}
        }
        Ok(movement)
    }

    /// 按起止格执行走法
    pub fn make_move(&mut self, start: Coord, end: Coord, outcome: Option<Outcome>) -> Result<Movement> {
        let id = self.state[start].ok_or(Error::IllegalMove {
            start: Some(start),
            end,
        })?;
        let movement = self.movement(id, end, outcome)?;
        self.add_move(movement)
    }

    // ========================================================================
    // 战斗模拟
    // ========================================================================

    /// 模拟一次攻击，不修改任何状态
    ///
    /// 身份已知（或已推断出）时使用棋子自身身份，否则使用传入的假设身份。
    /// 任一方身份无法确定时返回 None。
    pub fn simulate_attack(
        &self,
        attacker: PieceId,
        defender: PieceId,
        attacker_as: Option<Archetype>,
        defender_as: Option<Archetype>,
    ) -> Option<Outcome> {
        let a = self.piece(attacker).identified().or(attacker_as)?;
        let d = self.piece(defender).identified().or(defender_as)?;
        combat(a, d)
    }

    /// 按双方候选身份枚举所有可能的战斗结果
    pub fn possible_outcomes(&self, attacker: PieceId, defender: PieceId) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(3);
        for a in self.piece(attacker).candidates().iter() {
            for d in self.piece(defender).candidates().iter() {
                if let Some(o) = combat(a, d) {
                    if !outcomes.contains(&o) {
                        outcomes.push(o);
                    }
                }
            }
        }
        outcomes
    }

    /// 结果唯一确定时给出预测
    pub fn predict_outcome(&self, movement: &Movement) -> Option<Outcome> {
        let attack = movement.attack?;
        if let Some(outcome) = self.simulate_attack(movement.piece, attack.defender, None, None) {
            return Some(outcome);
        }
        match self.possible_outcomes(movement.piece, attack.defender).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    // ========================================================================
    // 身份推断
    // ========================================================================

    /// 计算事件后的候选身份，不修改状态
    ///
    /// 返回需要更新的 (棋子, 新候选集)。任何候选集被排空都说明结果与
    /// 已知信息矛盾。
    fn infer(&self, movement: &Movement, outcome: Option<Outcome>) -> Result<Vec<(PieceId, ArchetypeSet)>> {
        let mut sets: Vec<ArchetypeSet> = self.pieces.iter().map(|p| p.candidates()).collect();
        let mover = movement.piece;

        // 布阵：敌方视角的布阵限制
        if movement.start.is_none() {
            let frame = match self.piece(mover).side() {
                Side::Friendly => movement.end,
                Side::Enemy => movement.end.reflect_y(),
            };
            sets[mover.0] = sets[mover.0].filter(|a| a.can_place_at(frame));
        } else {
            sets[mover.0] = sets[mover.0].filter(|a| !a.sessile());
            if movement.kind == MoveKind::RailroadCorner {
                sets[mover.0] = sets[mover.0].filter(|a| a.railroad_corners());
            }
        }

        if let (Some(attack), Some(outcome)) = (movement.attack, outcome) {
            let defender = attack.defender;
            let attacker_set = sets[mover.0];
            let defender_set = sets[defender.0];
            sets[mover.0] =
                attacker_set.filter(|a| defender_set.any(|d| combat(a, d) == Some(outcome)));
            sets[defender.0] =
                defender_set.filter(|d| attacker_set.any(|a| combat(a, d) == Some(outcome)));
        }

        if sets.iter().any(|s| s.is_empty()) {
            return Err(Error::InconsistentOutcome { end: movement.end });
        }

        self.propagate_counts(&mut sets)
            .map_err(|_| Error::InconsistentOutcome { end: movement.end })?;

        Ok(self
            .pieces
            .iter()
            .zip(sets)
            .filter(|(p, s)| p.candidates() != *s)
            .map(|(p, s)| (p.id(), s))
            .collect())
    }

    /// 按兵种数量传播：
    /// - 某兵种已全部确认，其他棋子排除该兵种
    /// - 兵力完整时，某兵种的可能棋子数恰好等于其数量，这些棋子就是它
    fn propagate_counts(&self, sets: &mut [ArchetypeSet]) -> std::result::Result<(), ()> {
        for side in [Side::Friendly, Side::Enemy] {
            let ids: Vec<usize> = self.pieces(side).map(|p| p.id().0).collect();
            let complete = ids.len() == ARMY_SIZE;
            let mut changed = true;
            while changed {
                changed = false;
                for archetype in ALL_ARCHETYPES {
                    let only = ArchetypeSet::only(archetype);
                    let count = archetype.initial_count();

                    let identified = ids.iter().filter(|&&i| sets[i] == only).count();
                    if identified > count {
                        return Err(());
                    }
                    if identified == count {
                        for &i in &ids {
                            if sets[i] != only && sets[i].contains(archetype) {
                                sets[i].remove(archetype);
                                if sets[i].is_empty() {
                                    return Err(());
                                }
                                changed = true;
                            }
                        }
                    }

                    if complete {
                        let possible: Vec<usize> =
                            ids.iter().copied().filter(|&i| sets[i].contains(archetype)).collect();
                        if possible.len() < count {
                            return Err(());
                        }
                        if possible.len() == count {
                            for i in possible {
                                if sets[i] != only {
                                    sets[i] = only;
                                    changed = true;
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn apply_inference(&mut self, updates: Vec<(PieceId, ArchetypeSet)>) {
        for (id, set) in updates {
            let piece = &mut self.pieces[id.0];
            piece.narrow(set);
            if let Some(archetype) = set.single() {
                if !piece.is_friendly() {
                    info!("enemy piece {:?} identified as {}", id, archetype);
                }
            }
        }
    }

    /// 外部揭示敌方棋子身份（例如司令阵亡后亮出的军旗）
    pub fn reveal(&mut self, id: PieceId, archetype: Archetype) -> Result<()> {
        let piece = self.piece(id);
        if !piece.candidates().contains(archetype) {
            return Err(Error::InconsistentReveal { archetype });
        }
        let mut sets: Vec<ArchetypeSet> = self.pieces.iter().map(|p| p.candidates()).collect();
        sets[id.0] = ArchetypeSet::only(archetype);
        self.propagate_counts(&mut sets)
            .map_err(|_| Error::InconsistentReveal { archetype })?;
        let updates: Vec<(PieceId, ArchetypeSet)> = self
            .pieces
            .iter()
            .zip(sets)
            .filter(|(p, s)| p.candidates() != *s)
            .map(|(p, s)| (p.id(), s))
            .collect();
        self.apply_inference(updates);
        Ok(())
    }

    /// 敌方每个兵种尚未确认的数量
    pub fn hidden_distribution(&self) -> Vec<(Archetype, usize)> {
        ALL_ARCHETYPES
            .iter()
            .map(|&archetype| {
                let known = self
                    .pieces(Side::Enemy)
                    .filter(|p| p.identified() == Some(archetype))
                    .count();
                (archetype, archetype.initial_count().saturating_sub(known))
            })
            .collect()
    }

    // ========================================================================
    // 执行走法
    // ========================================================================

    /// 执行一次经外部确认的走法
    ///
    /// 攻击结果未给出时尝试本地推算，推算不出返回 `MissingOutcome`。
    /// 所有校验在修改前完成：要么整步生效，要么棋盘不变。
    pub fn add_move(&mut self, mut movement: Movement) -> Result<Movement> {
        if movement.turn != self.turn {
            return Err(Error::StaleMovement {
                built: movement.turn,
                current: self.turn,
            });
        }
        let illegal = Error::IllegalMove {
            start: movement.start,
            end: movement.end,
        };
        if movement.start.is_none()
            || movement.start != self.piece(movement.piece).position()
            || self.verify(movement.piece, movement.end) != Some(movement.kind)
            || self.state[movement.end] != movement.attack.map(|a| a.defender)
        {
            warn!("rejected move {:?} -> {} at turn {}", movement.start, movement.end, self.turn);
            return Err(illegal);
        }

        if movement.attack.is_some_and(|a| a.outcome.is_none()) {
            let predicted = self.predict_outcome(&movement);
            if let Some(attack) = movement.attack.as_mut() {
                attack.outcome = predicted;
            }
        }
        let outcome = match movement.attack {
            Some(AttackInfo { outcome: None, .. }) => {
                return Err(Error::MissingOutcome { end: movement.end })
            }
            Some(AttackInfo { outcome, .. }) => outcome,
            None => None,
        };

        let updates = self.infer(&movement, outcome)?;

        let mover = movement.piece;
        self.pieces[mover.0].add_event(movement);
        if let Some(attack) = movement.attack {
            self.pieces[attack.defender.0].add_event(movement);
        }
        self.apply_inference(updates);

        if let Some(attack) = movement.attack {
            self.check_pulse(mover);
            self.check_pulse(attack.defender);
        }
        if !self.piece(mover).is_dead() {
            self.move_on_board(&movement);
        }

        debug!(
            "turn {}: {} {:?} -> {}{}",
            self.turn,
            self.describe(mover),
            movement.start,
            movement.end,
            outcome.map_or(String::new(), |o| format!(" ({})", o))
        );
        self.turn += 1;
        Ok(movement)
    }

    /// 阵亡的棋子从占位表移除
    fn check_pulse(&mut self, id: PieceId) {
        let piece = self.piece(id);
        if let Some(at) = piece.died_at() {
            info!("{} {} died at {}", piece.side(), self.describe(id), at);
            if self.state[at] == Some(id) {
                self.state[at] = None;
            }
        }
    }

    fn move_on_board(&mut self, movement: &Movement) {
        assert!(
            self.state[movement.end].is_none(),
            "cannot move onto an occupied space {}",
            movement.end
        );
        if let Some(start) = movement.start {
            self.state[start] = None;
        }
        self.state[movement.end] = Some(movement.piece);
    }

    // ========================================================================
    // 胜负
    // ========================================================================

    /// 己方视角的对局状态
    pub fn status(&self) -> GameStatus {
        let flag_lost = |side: Side| {
            self.dead_pieces(side)
                .any(|p| p.identified().is_some_and(|a| a.lose_on_defeat()))
        };
        if flag_lost(Side::Friendly) {
            return GameStatus::Lost;
        }
        if flag_lost(Side::Enemy) {
            return GameStatus::Won;
        }
        if self.turn > 0 && self.valid_moves().is_empty() {
            return GameStatus::Lost;
        }
        GameStatus::Ongoing
    }

    // ========================================================================
    // 显示
    // ========================================================================

    fn describe(&self, id: PieceId) -> String {
        match self.piece(id).identified() {
            Some(archetype) => archetype.name().to_string(),
            None => "unknown".to_string(),
        }
    }

    /// 己方布阵的记谱行
    pub fn placement_line(&self) -> String {
        let placed: Vec<(Coord, Archetype)> = self
            .pieces(Side::Friendly)
            .filter_map(|p| Some((p.initial()?, p.archetype()?)))
            .collect();
        notation::format_placement(&placed)
    }

    fn marker(piece: &BoardPiece) -> String {
        let sign = if piece.is_friendly() { '+' } else { '-' };
        let symbol = piece.identified().map_or('?', |a| a.symbol());
        format!("{}{}", sign, symbol)
    }

    /// 棋盘文本图，敌方在上
    pub fn render_layout(&self) -> String {
        let mut out = String::new();
        let cell = 6;

        let _ = write!(out, "    ");
        for x in SYSTEM.x.values() {
            let _ = write!(out, "{:^width$}", x, width = cell);
        }
        out.push('\n');

        let separator = format!("   +{}\n", format!("{}+", "-".repeat(cell - 1)).repeat(SYSTEM.x.len()));
        for y in SYSTEM.y.values() {
            out.push_str(&separator);
            let _ = write!(out, "{:>2} |", y);
            for x in SYSTEM.x.values() {
                let coord = Coord::at(x, y);
                let text = match self.get(coord) {
                    Some(piece) => Self::marker(piece),
                    None => match Space::of(coord) {
                        Space::Camp => "()".to_string(),
                        Space::Headquarters => "[]".to_string(),
                        Space::Station => String::new(),
                    },
                };
                let _ = write!(out, "{:^width$}|", text, width = cell - 1);
            }
            out.push('\n');
        }
        out.push_str(&separator);
        out
    }

    /// 按指定级别输出棋盘
    pub fn log_layout(&self, level: Level) {
        for line in self.render_layout().lines() {
            log!(level, "{}", line);
        }
    }
}
