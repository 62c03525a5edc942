//! 陆战棋核心类型定义
//!
//! 定义阵营、格子类型、棋子种类及走法/战斗结果等基础数据类型

use std::fmt;

use crate::coords::Coord;

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// 己方（身份已知）
    Friendly,
    /// 敌方（身份隐藏）
    Enemy,
}

impl Side {
    /// 获取对方阵营
    pub fn opposite(&self) -> Side {
        match self {
            Side::Friendly => Side::Enemy,
            Side::Enemy => Side::Friendly,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Friendly => write!(f, "Friendly"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}

/// 格子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// 兵站
    Station,
    /// 行营：安全，可斜走，不能布子
    Camp,
    /// 大本营：进去就出不来
    Headquarters,
}

/// 特殊格子表（第一象限），其余都是兵站
const SPACE_OVERRIDES: [((i8, i8), Space); 4] = [
    ((1, 2), Space::Camp),
    ((0, 3), Space::Camp),
    ((1, 4), Space::Camp),
    ((1, 6), Space::Headquarters),
];

impl Space {
    /// 查询格子类型。利用点对称，只查绝对坐标。
    pub fn of(coord: Coord) -> Space {
        let key = coord.abs();
        SPACE_OVERRIDES
            .iter()
            .find(|((x, y), _)| *x == key.x() && *y == key.y())
            .map_or(Space::Station, |&(_, space)| space)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Space::Station => "Soldier Station",
            Space::Camp => "Camp",
            Space::Headquarters => "Headquarters",
        }
    }

    #[inline]
    pub fn initial_placement(&self) -> bool {
        !matches!(self, Space::Camp)
    }

    /// 行营里的棋子不能被攻击
    #[inline]
    pub fn safe(&self) -> bool {
        matches!(self, Space::Camp)
    }

    #[inline]
    pub fn diagonals(&self) -> bool {
        matches!(self, Space::Camp)
    }

    #[inline]
    pub fn quagmire(&self) -> bool {
        matches!(self, Space::Headquarters)
    }
}

/// 布阵限制
#[derive(Debug, Clone, Copy)]
pub enum Placement {
    /// 只能放在指定类型的格子
    Space(Space),
    /// x 任意，y 满足谓词
    Rows(fn(i8) -> bool),
}

impl Placement {
    /// 以己方视角判断坐标是否满足限制
    pub fn allows(&self, coord: Coord) -> bool {
        match self {
            Placement::Space(space) => Space::of(coord) == *space,
            Placement::Rows(test) => test(coord.y()),
        }
    }
}

/// 棋子种类数量
pub const ARCHETYPE_COUNT: usize = 12;

/// 一方棋子总数
pub const ARMY_SIZE: usize = 25;

/// 棋子种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Archetype {
    /// 司令
    Marshal = 0,
    /// 军长
    General = 1,
    /// 师长
    LieutenantGeneral = 2,
    /// 旅长
    BrigadierGeneral = 3,
    /// 团长
    Colonel = 4,
    /// 营长
    Major = 5,
    /// 连长
    Captain = 6,
    /// 排长
    Commander = 7,
    /// 工兵
    Engineer = 8,
    /// 炸弹
    Bomb = 9,
    /// 地雷
    Landmine = 10,
    /// 军旗
    Flag = 11,
}

/// 目录顺序
pub const ALL_ARCHETYPES: [Archetype; ARCHETYPE_COUNT] = [
    Archetype::Marshal,
    Archetype::General,
    Archetype::LieutenantGeneral,
    Archetype::BrigadierGeneral,
    Archetype::Colonel,
    Archetype::Major,
    Archetype::Captain,
    Archetype::Commander,
    Archetype::Engineer,
    Archetype::Bomb,
    Archetype::Landmine,
    Archetype::Flag,
];

impl Archetype {
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Marshal => "Field Marshal",
            Archetype::General => "General",
            Archetype::LieutenantGeneral => "Lieutenant General",
            Archetype::BrigadierGeneral => "Brigadier General",
            Archetype::Colonel => "Colonel",
            Archetype::Major => "Major",
            Archetype::Captain => "Captain",
            Archetype::Commander => "Commander",
            Archetype::Engineer => "Engineer",
            Archetype::Bomb => "Bomb",
            Archetype::Landmine => "Landmine",
            Archetype::Flag => "Flag",
        }
    }

    /// 记谱符号
    pub fn symbol(&self) -> char {
        match self {
            Archetype::Marshal => '9',
            Archetype::General => '8',
            Archetype::LieutenantGeneral => '7',
            Archetype::BrigadierGeneral => '6',
            Archetype::Colonel => '5',
            Archetype::Major => '4',
            Archetype::Captain => '3',
            Archetype::Commander => '2',
            Archetype::Engineer => '1',
            Archetype::Bomb => 'B',
            Archetype::Landmine => 'L',
            Archetype::Flag => 'F',
        }
    }

    /// 从记谱符号解析
    pub fn from_symbol(c: char) -> Option<Archetype> {
        ALL_ARCHETYPES
            .iter()
            .copied()
            .find(|a| a.symbol() == c.to_ascii_uppercase())
    }

    /// 开局数量
    pub fn initial_count(&self) -> usize {
        match self {
            Archetype::Marshal | Archetype::General | Archetype::Flag => 1,
            Archetype::Captain | Archetype::Commander | Archetype::Engineer => 3,
            Archetype::Landmine => 3,
            _ => 2,
        }
    }

    /// 军衔，大吃小；炸弹、地雷、军旗没有军衔
    pub fn order(&self) -> Option<u8> {
        match self {
            Archetype::Bomb | Archetype::Landmine | Archetype::Flag => None,
            other => Some(9 - *other as u8),
        }
    }

    #[inline]
    pub fn sessile(&self) -> bool {
        matches!(self, Archetype::Landmine | Archetype::Flag)
    }

    #[inline]
    pub fn bomb(&self) -> bool {
        matches!(self, Archetype::Bomb | Archetype::Landmine)
    }

    /// 能排雷
    #[inline]
    pub fn defeats_sessile_bombs(&self) -> bool {
        matches!(self, Archetype::Engineer)
    }

    /// 能在铁路上拐弯
    #[inline]
    pub fn railroad_corners(&self) -> bool {
        matches!(self, Archetype::Engineer)
    }

    /// 司令阵亡后亮军旗
    #[inline]
    pub fn reveal_flag_on_defeat(&self) -> bool {
        matches!(self, Archetype::Marshal)
    }

    /// 军旗被夺即输
    #[inline]
    pub fn lose_on_defeat(&self) -> bool {
        matches!(self, Archetype::Flag)
    }

    pub fn initial_placement(&self) -> Option<Placement> {
        match self {
            Archetype::Bomb => Some(Placement::Rows(|y| y > 1)),
            Archetype::Landmine => Some(Placement::Rows(|y| y > 4)),
            Archetype::Flag => Some(Placement::Space(Space::Headquarters)),
            _ => None,
        }
    }

    /// 以己方视角判断能否布在该格
    pub fn can_place_at(&self, coord: Coord) -> bool {
        self.initial_placement().map_or(true, |p| p.allows(coord))
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 棋子种类集合（位集），用于敌方身份推断
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArchetypeSet(u16);

impl ArchetypeSet {
    pub const EMPTY: ArchetypeSet = ArchetypeSet(0);
    pub const ALL: ArchetypeSet = ArchetypeSet((1 << ARCHETYPE_COUNT) - 1);

    pub fn only(archetype: Archetype) -> Self {
        ArchetypeSet(1 << archetype as u8)
    }

    #[inline]
    pub fn contains(&self, archetype: Archetype) -> bool {
        self.0 & (1 << archetype as u8) != 0
    }

    #[inline]
    pub fn insert(&mut self, archetype: Archetype) {
        self.0 |= 1 << archetype as u8;
    }

    #[inline]
    pub fn remove(&mut self, archetype: Archetype) {
        self.0 &= !(1 << archetype as u8);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// 恰好剩一个时返回它
    pub fn single(&self) -> Option<Archetype> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    pub fn is_subset(&self, other: ArchetypeSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn any(&self, f: impl Fn(Archetype) -> bool) -> bool {
        self.iter().any(f)
    }

    /// 保留满足条件的种类
    pub fn filter(&self, f: impl Fn(Archetype) -> bool) -> ArchetypeSet {
        self.iter().filter(|&a| f(a)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Archetype> {
        let bits = self.0;
        ALL_ARCHETYPES
            .into_iter()
            .filter(move |&a| bits & (1 << a as u8) != 0)
    }
}

impl FromIterator<Archetype> for ArchetypeSet {
    fn from_iter<I: IntoIterator<Item = Archetype>>(iter: I) -> Self {
        let mut set = ArchetypeSet::EMPTY;
        for a in iter {
            set.insert(a);
        }
        set
    }
}

impl fmt::Debug for ArchetypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// 走法类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// 布阵
    Initial,
    /// 公路（含行营斜走）一步
    Road,
    /// 铁路直行
    Railroad,
    /// 铁路拐弯
    RailroadCorner,
}

/// 战斗结果（进攻方视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    /// 同归于尽
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// 游戏结果（己方视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i8, y: i8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn test_catalog_counts() {
        let total: usize = ALL_ARCHETYPES.iter().map(|a| a.initial_count()).sum();
        assert_eq!(total, ARMY_SIZE);
        assert_eq!(ALL_ARCHETYPES.iter().filter(|a| a.lose_on_defeat()).count(), 1);

        let top = ALL_ARCHETYPES.iter().filter_map(|a| a.order()).max();
        assert_eq!(top, Some(9));
        assert_eq!(ALL_ARCHETYPES.iter().filter(|a| a.order() == top).count(), 1);
        assert!(Archetype::Marshal.reveal_flag_on_defeat());
    }

    #[test]
    fn test_orders() {
        assert_eq!(Archetype::Marshal.order(), Some(9));
        assert_eq!(Archetype::Engineer.order(), Some(1));
        assert_eq!(Archetype::Colonel.order(), Some(5));
        assert_eq!(Archetype::Bomb.order(), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for a in ALL_ARCHETYPES {
            assert_eq!(Archetype::from_symbol(a.symbol()), Some(a));
        }
        assert_eq!(Archetype::from_symbol('l'), Some(Archetype::Landmine));
        assert_eq!(Archetype::from_symbol('X'), None);
    }

    #[test]
    fn test_space_symmetry() {
        assert_eq!(Space::of(c(1, 2)), Space::Camp);
        assert_eq!(Space::of(c(-1, -2)), Space::Camp);
        assert_eq!(Space::of(c(0, -3)), Space::Camp);
        assert_eq!(Space::of(c(-1, 6)), Space::Headquarters);
        assert_eq!(Space::of(c(0, 6)), Space::Station);
        assert_eq!(Space::of(c(2, 1)), Space::Station);
    }

    #[test]
    fn test_placement_restrictions() {
        assert!(Archetype::Bomb.can_place_at(c(0, 2)));
        assert!(!Archetype::Bomb.can_place_at(c(0, 1)));
        assert!(Archetype::Landmine.can_place_at(c(2, 5)));
        assert!(!Archetype::Landmine.can_place_at(c(2, 4)));
        assert!(Archetype::Flag.can_place_at(c(1, 6)));
        assert!(!Archetype::Flag.can_place_at(c(0, 6)));
        assert!(Archetype::Marshal.can_place_at(c(0, 1)));
    }

    #[test]
    fn test_archetype_set() {
        let mut set = ArchetypeSet::ALL;
        assert_eq!(set.len(), ARCHETYPE_COUNT);
        set.remove(Archetype::Flag);
        set.remove(Archetype::Landmine);
        assert!(!set.contains(Archetype::Flag));
        assert_eq!(set.len(), 10);

        let movable = ArchetypeSet::ALL.filter(|a| !a.sessile());
        assert_eq!(movable, set);
        assert!(set.is_subset(ArchetypeSet::ALL));
        assert_eq!(ArchetypeSet::only(Archetype::Bomb).single(), Some(Archetype::Bomb));
        assert_eq!(set.single(), None);
    }
}
