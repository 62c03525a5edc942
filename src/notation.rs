//! 裁判记谱
//!
//! 列 `A..E` 对应 x = -2..2。行号从己方底线数起：
//! - `1..6` 对应 y = 6..1
//! - `7..12` 对应 y = -1..-6
//!
//! 布阵行：`( ( A1 1 ) ( B1 F ) ... )`
//! 走法行：`( A6 A7 )`

use crate::coords::{Coord, SYSTEM};
use crate::error::{Error, Result};
use crate::types::Archetype;

const COLUMNS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// 坐标 -> 记谱格名
pub fn format_coord(coord: Coord) -> String {
    let column = COLUMNS[(coord.x() + 2) as usize];
    let row = if coord.y() > 0 { 7 - coord.y() } else { 6 - coord.y() };
    format!("{}{}", column, row)
}

/// 记谱格名 -> 坐标
pub fn parse_coord(s: &str) -> Result<Coord> {
    let invalid = || Error::InvalidNotation(format!("bad cell: {}", s));
    let mut chars = s.trim().chars();
    let column = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let x = COLUMNS
        .iter()
        .position(|&c| c == column)
        .ok_or_else(invalid)? as i8
        - 2;
    let row: i8 = chars.as_str().parse().map_err(|_| invalid())?;
    let y = match row {
        1..=6 => 7 - row,
        7..=12 => 6 - row,
        _ => return Err(invalid()),
    };
    SYSTEM.coord(x, y)
}

/// 把括号拆成独立记号
fn tokenize(s: &str) -> Vec<String> {
    s.replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn expect(tokens: &[String], pos: usize, want: &str) -> Result<()> {
    match tokens.get(pos) {
        Some(t) if t == want => Ok(()),
        Some(t) => Err(Error::InvalidNotation(format!("expected '{}', got '{}'", want, t))),
        None => Err(Error::InvalidNotation(format!("expected '{}', got end of line", want))),
    }
}

/// 格式化布阵行
pub fn format_placement(placements: &[(Coord, Archetype)]) -> String {
    let body: Vec<String> = placements
        .iter()
        .map(|&(coord, archetype)| format!("( {} {} )", format_coord(coord), archetype.symbol()))
        .collect();
    format!("( {} )", body.join(" "))
}

/// 解析布阵行
pub fn parse_placement(line: &str) -> Result<Vec<(Coord, Archetype)>> {
    let tokens = tokenize(line);
    expect(&tokens, 0, "(")?;

    let mut out = Vec::new();
    let mut pos = 1;
    while tokens.get(pos).map(String::as_str) == Some("(") {
        let cell = tokens
            .get(pos + 1)
            .ok_or_else(|| Error::InvalidNotation("truncated placement".to_string()))?;
        let symbol = tokens
            .get(pos + 2)
            .ok_or_else(|| Error::InvalidNotation("truncated placement".to_string()))?;
        expect(&tokens, pos + 3, ")")?;

        let coord = parse_coord(cell)?;
        let mut chars = symbol.chars();
        let archetype = match (chars.next(), chars.next()) {
            (Some(c), None) => Archetype::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| Error::InvalidNotation(format!("bad piece symbol: {}", symbol)))?;

        out.push((coord, archetype));
        pos += 4;
    }

    expect(&tokens, pos, ")")?;
    if pos + 1 != tokens.len() {
        return Err(Error::InvalidNotation(format!("trailing input: {}", tokens[pos + 1..].join(" "))));
    }
    Ok(out)
}

/// 格式化走法行
pub fn format_move(start: Coord, end: Coord) -> String {
    format!("( {} {} )", format_coord(start), format_coord(end))
}

/// 解析走法行
pub fn parse_move(line: &str) -> Result<(Coord, Coord)> {
    let tokens = tokenize(line);
    if tokens.len() != 4 {
        return Err(Error::InvalidNotation(format!("bad move: {}", line.trim())));
    }
    expect(&tokens, 0, "(")?;
    expect(&tokens, 3, ")")?;
    Ok((parse_coord(&tokens[1])?, parse_coord(&tokens[2])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i8, y: i8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn test_coord_notation() {
        assert_eq!(format_coord(c(-2, 6)), "A1");
        assert_eq!(format_coord(c(2, 1)), "E6");
        assert_eq!(format_coord(c(-2, -1)), "A7");
        assert_eq!(format_coord(c(0, -6)), "C12");
        assert_eq!(parse_coord("b1").unwrap(), c(-1, 6));
        assert_eq!(parse_coord("D12").unwrap(), c(1, -6));
    }

    #[test]
    fn test_coord_round_trip_all_cells() {
        let mut seen = std::collections::HashSet::new();
        for coord in SYSTEM.coords() {
            let name = format_coord(coord);
            assert!(seen.insert(name.clone()));
            assert_eq!(parse_coord(&name).unwrap(), coord);
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn test_bad_cells() {
        for bad in ["", "F1", "A0", "A13", "A", "1A", "AA"] {
            assert!(matches!(parse_coord(bad), Err(Error::InvalidNotation(_))), "{}", bad);
        }
    }

    #[test]
    fn test_placement_line() {
        let placed = vec![(c(-2, 6), Archetype::Engineer), (c(-1, 6), Archetype::Flag)];
        let line = format_placement(&placed);
        assert_eq!(line, "( ( A1 1 ) ( B1 F ) )");
        assert_eq!(parse_placement(&line).unwrap(), placed);
        // 紧凑写法也能读
        assert_eq!(parse_placement("((A1 1)(B1 F))").unwrap(), placed);
    }

    #[test]
    fn test_bad_placement_lines() {
        assert!(parse_placement("( ( A1 X ) )").is_err());
        assert!(parse_placement("( ( A1 1 )").is_err());
        assert!(parse_placement("( ( A1 1 ) ) extra").is_err());
        assert!(parse_placement("( ( Z1 1 ) )").is_err());
        assert_eq!(parse_placement("( )").unwrap(), vec![]);
    }

    #[test]
    fn test_move_line() {
        assert_eq!(format_move(c(-2, 1), c(-2, -1)), "( A6 A7 )");
        assert_eq!(parse_move("( A6 A7 )").unwrap(), (c(-2, 1), c(-2, -1)));
        assert!(parse_move("( A6 )").is_err());
        assert!(parse_move("A6 A7").is_err());
    }
}
