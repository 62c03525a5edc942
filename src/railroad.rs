//! 铁路
//!
//! 铁路线只写第一象限的四条，再按对称展开：
//! - 前沿横线 y = 1（跨越整行）
//! - 后方横线 y = 5
//! - 边线 x = 2，|y| <= 5，跨过中线
//! - 中路 x = 0，只连接两方前沿 (|y| <= 1)
//!
//! 展开后共七条：y = ±1、y = ±5、x = ±2、x = 0。同一条线上按轴索引
//! 相邻的格子直接相连，所以 y = -1 与 y = 1 在竖线上相邻。

use std::collections::{BTreeMap, HashSet, VecDeque};

use lazy_static::lazy_static;
use log::trace;

use crate::coords::{AxisMatch, Coord, SYSTEM};
use crate::types::MoveKind;

/// 紧凑表示的铁路线
#[derive(Debug, Clone, Copy)]
enum CompactLine {
    /// 整行
    Row { y: i8 },
    /// 一列中 |y| <= reach 的部分
    Column { x: i8, reach: i8 },
}

const COMPACT_LINES: [CompactLine; 4] = [
    CompactLine::Row { y: 1 },
    CompactLine::Row { y: 5 },
    CompactLine::Column { x: 2, reach: 5 },
    CompactLine::Column { x: 0, reach: 1 },
];

fn expand(line: CompactLine) -> Vec<Vec<Coord>> {
    let mut lines = Vec::new();
    match line {
        CompactLine::Row { y } => {
            for y in SYSTEM.y.original_and_reflection(y) {
                lines.push(SYSTEM.coords_matching(AxisMatch::Any, AxisMatch::OneOf(&[y])).collect());
            }
        }
        CompactLine::Column { x, reach } => {
            let within = move |y: i8| y.abs() <= reach;
            for x in SYSTEM.x.original_and_reflection(x) {
                lines.push(
                    SYSTEM
                        .coords_matching(AxisMatch::OneOf(&[x]), AxisMatch::Test(&within))
                        .collect(),
                );
            }
        }
    }
    lines
}

lazy_static! {
    /// 所有铁路线，每条按轴索引排序
    static ref RAILROADS: Vec<Vec<Coord>> = COMPACT_LINES.iter().flat_map(|&line| expand(line)).collect();
}

/// 所有铁路线
pub fn lines() -> &'static [Vec<Coord>] {
    &RAILROADS
}

/// 经过某格的铁路线编号
pub fn lines_through(coord: Coord) -> Vec<usize> {
    RAILROADS
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(&coord))
        .map(|(i, _)| i)
        .collect()
}

pub fn is_on_railroad(coord: Coord) -> bool {
    RAILROADS.iter().any(|line| line.contains(&coord))
}

/// 同一条线上的相邻格
fn neighbors_on_line(line: usize, coord: Coord) -> Vec<Coord> {
    let cells = &RAILROADS[line];
    let Some(i) = cells.iter().position(|&c| c == coord) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(2);
    if i > 0 {
        out.push(cells[i - 1]);
    }
    if let Some(&next) = cells.get(i + 1) {
        out.push(next);
    }
    out
}

/// 铁路可达格子及其走法类型
///
/// 从起点所在的每条线出发做广度优先搜索，状态为 (格子, 所在线, 是否拐过弯)。
/// 有子的格子可以作为终点（是否能攻击由调用方判断），但不能穿过。
/// 换线只能在空格上进行，且需要 `can_corner`。每个终点保留拐弯最少的标记。
/// 起点本身不在结果中。
pub fn search<F>(origin: Coord, can_corner: bool, occupied: F) -> BTreeMap<Coord, MoveKind>
where
    F: Fn(Coord) -> bool,
{
    let mut cornered_at: BTreeMap<Coord, bool> = BTreeMap::new();
    let mut seen: HashSet<(Coord, usize, bool)> = HashSet::new();
    let mut queue: VecDeque<(Coord, usize, bool)> = VecDeque::new();

    for line in lines_through(origin) {
        if seen.insert((origin, line, false)) {
            queue.push_back((origin, line, false));
        }
    }

    while let Some((at, line, cornered)) = queue.pop_front() {
        if at != origin && can_corner {
            for other in lines_through(at) {
                if other != line && seen.insert((at, other, true)) {
                    queue.push_back((at, other, true));
                }
            }
        }

        for next in neighbors_on_line(line, at) {
            if next == origin {
                continue;
            }
            cornered_at
                .entry(next)
                .and_modify(|c| *c = *c && cornered)
                .or_insert(cornered);
            if occupied(next) {
                continue;
            }
            if seen.insert((next, line, cornered)) {
                queue.push_back((next, line, cornered));
            }
        }
    }

    trace!("railroad search from {}: {} destinations", origin, cornered_at.len());

    cornered_at
        .into_iter()
        .map(|(coord, cornered)| {
            let kind = if cornered {
                MoveKind::RailroadCorner
            } else {
                MoveKind::Railroad
            };
            (coord, kind)
        })
        .collect()
}
