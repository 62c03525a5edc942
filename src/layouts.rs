//! 预设阵型

use crate::coords::Coord;
use crate::notation::parse_placement;
use crate::types::Archetype;

/// 标准开局阵型（裁判记谱）
pub const STANDARD: &str = "( ( A1 1 ) ( B1 F ) ( C1 2 ) ( D1 L ) ( E1 5 ) \
( A2 L ) ( B2 4 ) ( C2 7 ) ( D2 6 ) ( E2 L ) \
( A3 1 ) ( C3 6 ) ( E3 1 ) \
( A4 7 ) ( B4 B ) ( D4 B ) ( E4 3 ) \
( A5 2 ) ( C5 3 ) ( E5 5 ) \
( A6 8 ) ( B6 4 ) ( C6 9 ) ( D6 2 ) ( E6 3 ) )";

/// 标准开局阵型
pub fn standard() -> Vec<(Coord, Archetype)> {
    match parse_placement(STANDARD) {
        Ok(layout) => layout,
        Err(e) => unreachable!("built-in layout is malformed: {}", e),
    }
}

/// 按名称查找阵型；`random` 不是固定阵型，返回 None
pub fn by_name(name: &str) -> Option<Vec<(Coord, Archetype)>> {
    match name {
        "standard" => Some(standard()),
        _ => None,
    }
}
