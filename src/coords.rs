//! 坐标系
//!
//! 棋盘使用以原点为中心的坐标：x 轴 5 列 (-2..=2)，y 轴 12 行
//! (-6..=-1, 1..=6，偶数长度的轴没有 0)。己方半场 y > 0。
//!
//! 对称性是这里的核心：取反是关于原点的点对称，取绝对值把任意格子
//! 折叠到第一象限，格子属性表和铁路表都只需要写四分之一。

use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use crate::error::{Error, Result};

/// 棋盘格子总数 (5 x 12)
pub const CELL_COUNT: usize = 60;

/// 以原点为中心的一维坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    symbol: char,
    size: u8,
}

/// 按轴筛选分量
pub enum AxisMatch<'a> {
    /// 任意值
    Any,
    /// 谓词
    Test(&'a dyn Fn(i8) -> bool),
    /// 显式集合
    OneOf(&'a [i8]),
}

impl AxisMatch<'_> {
    pub fn matches(&self, value: i8) -> bool {
        match self {
            AxisMatch::Any => true,
            AxisMatch::Test(test) => test(value),
            AxisMatch::OneOf(values) => values.contains(&value),
        }
    }
}

/// 分量变换：给定轴与原分量，返回变换后的所有分量
pub type ComponentMap<'a> = &'a dyn Fn(&Axis, i8) -> Vec<i8>;

impl Axis {
    pub const fn new(symbol: char, size: u8) -> Self {
        Axis { symbol, size }
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn abs_max(&self) -> i8 {
        (self.size / 2) as i8
    }

    #[inline]
    fn has_zero(&self) -> bool {
        self.size % 2 != 0
    }

    /// 检查分量是否在轴上
    pub fn contains(&self, value: i8) -> bool {
        if value == 0 {
            return self.has_zero();
        }
        (-self.abs_max()..=self.abs_max()).contains(&value)
    }

    /// 分量 -> 线性索引
    pub fn index(&self, value: i8) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        let abs_max = self.abs_max();
        let index = match value {
            0 => abs_max,
            v if v < 0 => abs_max + v,
            v if self.has_zero() => abs_max + v,
            v => abs_max + v - 1,
        };
        Some(index as usize)
    }

    /// 线性索引 -> 分量
    pub fn value_at(&self, index: usize) -> Option<i8> {
        if index >= self.len() {
            return None;
        }
        let abs_max = self.abs_max() as usize;
        if index < abs_max {
            return Some(index as i8 - abs_max as i8);
        }
        let mut rest = index - abs_max;
        if self.has_zero() {
            if rest == 0 {
                return Some(0);
            }
            rest -= 1;
        }
        Some(rest as i8 + 1)
    }

    /// 按索引顺序遍历所有分量
    pub fn values(&self) -> impl Iterator<Item = i8> + '_ {
        (0..self.len()).filter_map(move |i| self.value_at(i))
    }

    pub fn matching<'a>(&'a self, filter: &'a AxisMatch<'a>) -> impl Iterator<Item = i8> + 'a {
        self.values().filter(move |&v| filter.matches(v))
    }

    /// 镜像
    pub fn reflection(&self, value: i8) -> Vec<i8> {
        vec![-value]
    }

    /// 原值与镜像（0 只返回自身）
    pub fn original_and_reflection(&self, value: i8) -> Vec<i8> {
        if value == 0 {
            vec![0]
        } else {
            vec![value, -value]
        }
    }

    /// 索引相邻的分量。偶数轴上 -1 与 1 相邻。
    pub fn neighbors(&self, value: i8) -> Vec<i8> {
        let Some(index) = self.index(value) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(2);
        if let Some(prev) = index.checked_sub(1).and_then(|i| self.value_at(i)) {
            out.push(prev);
        }
        if let Some(next) = self.value_at(index + 1) {
            out.push(next);
        }
        out
    }
}

/// 棋盘坐标 (x, y)，构造时校验范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: i8,
    y: i8,
}

impl Coord {
    /// 创建坐标，越界返回错误
    pub fn new(x: i8, y: i8) -> Result<Coord> {
        SYSTEM.coord(x, y)
    }

    /// 仅供内部静态表使用，调用方保证合法
    pub(crate) const fn at(x: i8, y: i8) -> Coord {
        Coord { x, y }
    }

    #[inline]
    pub fn x(&self) -> i8 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i8 {
        self.y
    }

    /// 各分量取绝对值
    #[inline]
    pub fn abs(self) -> Coord {
        Coord {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// 关于中线 (y -> -y) 镜像，用于敌方视角
    #[inline]
    pub fn reflect_y(self) -> Coord {
        Coord {
            x: self.x,
            y: -self.y,
        }
    }

    /// 各分量差值的绝对值（原始数值，不跨越坐标索引）
    #[inline]
    pub fn delta(self, other: Coord) -> (i8, i8) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 二维坐标系
///
/// 只能在本 crate 内构造，唯一实例是 [`SYSTEM`]，因此任何 `Coord`
/// 都能在 `BoardState` 中找到下标。
#[derive(Debug, Clone, Copy)]
pub struct CoordinateSystem {
    pub(crate) x: Axis,
    pub(crate) y: Axis,
}

/// 陆战棋棋盘坐标系
pub const SYSTEM: CoordinateSystem = CoordinateSystem {
    x: Axis::new('x', 5),
    y: Axis::new('y', 12),
};

impl CoordinateSystem {
    #[inline]
    pub fn x_axis(&self) -> Axis {
        self.x
    }

    #[inline]
    pub fn y_axis(&self) -> Axis {
        self.y
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    pub fn coord(&self, x: i8, y: i8) -> Result<Coord> {
        if self.contains(x, y) {
            Ok(Coord { x, y })
        } else {
            Err(Error::InvalidCoordinate { x, y })
        }
    }

    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 坐标 -> 线性索引
    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        let xi = self.x.index(coord.x).expect("coordinate validated at construction");
        let yi = self.y.index(coord.y).expect("coordinate validated at construction");
        xi * self.y.len() + yi
    }

    /// 线性索引 -> 坐标
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        let x = self.x.value_at(index / self.y.len())?;
        let y = self.y.value_at(index % self.y.len())?;
        Some(Coord { x, y })
    }

    /// 所有坐标
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len()).filter_map(move |i| self.coord_at(i))
    }

    /// 分量分别满足条件的所有坐标（笛卡尔积）
    pub fn coords_matching(&self, x: AxisMatch<'_>, y: AxisMatch<'_>) -> impl Iterator<Item = Coord> {
        let xs: Vec<i8> = self.x.matching(&x).collect();
        let ys: Vec<i8> = self.y.matching(&y).collect();
        xs.into_iter().flat_map(move |x| {
            let ys = ys.clone();
            ys.into_iter().map(move |y| Coord { x, y })
        })
    }

    /// 对每个坐标按轴做分量变换，取笛卡尔积；越界组合直接丢弃
    pub fn map_components<I>(
        &self,
        coords: I,
        x_map: Option<ComponentMap<'_>>,
        y_map: Option<ComponentMap<'_>>,
    ) -> Vec<Coord>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut out = Vec::new();
        for coord in coords {
            let xs = match x_map {
                Some(map) => map(&self.x, coord.x),
                None => vec![coord.x],
            };
            let ys = match y_map {
                Some(map) => map(&self.y, coord.y),
                None => vec![coord.y],
            };
            for &x in &xs {
                for &y in &ys {
                    if let Ok(c) = self.coord(x, y) {
                        out.push(c);
                    }
                }
            }
        }
        out
    }

    /// 每个轴单独变换（其余轴不变），结果拼接
    pub fn map_components_separately<I>(
        &self,
        coords: I,
        x_map: ComponentMap<'_>,
        y_map: ComponentMap<'_>,
    ) -> Vec<Coord>
    where
        I: IntoIterator<Item = Coord>,
    {
        let coords: Vec<Coord> = coords.into_iter().collect();
        let mut out = self.map_components(coords.iter().copied(), Some(x_map), None);
        out.extend(self.map_components(coords, None, Some(y_map)));
        out
    }
}

/// 坐标到格子内容的全映射
#[derive(Debug, Clone)]
pub struct BoardState<T: Copy> {
    cells: [T; CELL_COUNT],
}

impl<T: Copy> BoardState<T> {
    pub fn new(fill: T) -> Self {
        BoardState {
            cells: [fill; CELL_COUNT],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        SYSTEM.coords().map(move |c| (c, self[c]))
    }
}

impl<T: Copy> Index<Coord> for BoardState<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.cells[SYSTEM.index_of(coord)]
    }
}

impl<T: Copy> IndexMut<Coord> for BoardState<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        &mut self.cells[SYSTEM.index_of(coord)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_round_trip() {
        for axis in [SYSTEM.x, SYSTEM.y, Axis::new('z', 1), Axis::new('w', 4)] {
            for i in 0..axis.len() {
                let v = axis.value_at(i).unwrap();
                assert_eq!(axis.index(v), Some(i));
            }
            assert_eq!(axis.value_at(axis.len()), None);
        }
    }

    #[test]
    fn test_axis_zero() {
        assert!(SYSTEM.x.contains(0));
        assert!(!SYSTEM.y.contains(0));
        assert!(!SYSTEM.y.contains(7));
        assert_eq!(SYSTEM.y.values().collect::<Vec<_>>(), vec![-6, -5, -4, -3, -2, -1, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_axis_neighbors_skip_missing_zero() {
        assert_eq!(SYSTEM.y.neighbors(1), vec![-1, 2]);
        assert_eq!(SYSTEM.y.neighbors(-6), vec![-5]);
        assert_eq!(SYSTEM.x.neighbors(0), vec![-1, 1]);
        assert_eq!(SYSTEM.x.neighbors(2), vec![1]);
    }

    #[test]
    fn test_coord_validation() {
        assert!(Coord::new(2, 6).is_ok());
        assert_eq!(Coord::new(3, 1), Err(Error::InvalidCoordinate { x: 3, y: 1 }));
        assert!(Coord::new(0, 0).is_err());
    }

    #[test]
    fn test_neg_and_abs_are_involutions() {
        for c in SYSTEM.coords() {
            assert_eq!(-(-c), c);
            assert_eq!(c.abs().abs(), c.abs());
            assert!(SYSTEM.contains((-c).x(), (-c).y()));
        }
        assert_eq!(SYSTEM.coords().count(), CELL_COUNT);
    }

    #[test]
    fn test_coords_matching() {
        let nonneg = |v: i8| v >= 0;
        let quadrant: Vec<Coord> = SYSTEM
            .coords_matching(AxisMatch::Test(&nonneg), AxisMatch::Test(&nonneg))
            .collect();
        assert_eq!(quadrant.len(), 3 * 6);

        let row: Vec<Coord> = SYSTEM
            .coords_matching(AxisMatch::Any, AxisMatch::OneOf(&[1]))
            .collect();
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn test_map_components_discards_invalid() {
        let either_side = |_: &Axis, v: i8| vec![v - 1, v + 1];
        let origin = Coord::new(2, 1).unwrap();
        let mapped = SYSTEM.map_components_separately([origin], &either_side, &either_side);
        // (3, 1) 与 (2, 0) 越界被丢弃
        assert_eq!(mapped.len(), 2);
        assert!(mapped.contains(&Coord::new(1, 1).unwrap()));
        assert!(mapped.contains(&Coord::new(2, 2).unwrap()));
    }

    #[test]
    fn test_every_constructed_coord_is_indexable() {
        // 越界的分量变换结果被丢弃，剩下的都能映射回唯一下标
        let wide = |_: &Axis, v: i8| vec![v - 7, v - 1, v, v + 1, v + 7, -v];
        let mapped = SYSTEM.map_components(SYSTEM.coords(), Some(&wide), Some(&wide));
        assert!(!mapped.is_empty());
        for c in mapped {
            assert!(SYSTEM.contains(c.x(), c.y()));
            assert_eq!(SYSTEM.coord_at(SYSTEM.index_of(c)), Some(c));
        }
        for (x, y) in [(3, 1), (-3, 1), (0, 0), (0, 7), (0, -7)] {
            assert!(SYSTEM.coord(x, y).is_err());
        }
        assert_eq!(SYSTEM.x_axis().len() * SYSTEM.y_axis().len(), CELL_COUNT);
    }

    #[test]
    fn test_board_state_index() {
        let mut state = BoardState::new(0u8);
        let c = Coord::new(-1, -6).unwrap();
        state[c] = 7;
        assert_eq!(state[c], 7);
        assert_eq!(state.iter().filter(|&(_, v)| v == 7).count(), 1);
    }
}
