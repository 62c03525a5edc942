//! Luzhanqi (Military Chess) Rule Engine
//!
//! 陆战棋规则引擎 - 走法合法性、战斗结算与暗子身份推断

pub mod board;
pub mod combat;
pub mod coords;
pub mod error;
pub mod layouts;
pub mod notation;
pub mod piece;
pub mod railroad;
pub mod types;

pub use board::{LuzhanqiBoard, DEFAULT_PLACEMENT_ORDER};
pub use combat::{combat, resolve};
pub use coords::{Axis, AxisMatch, BoardState, Coord, CoordinateSystem, SYSTEM};
pub use error::{Error, Result};
pub use notation::{format_move, format_placement, parse_move, parse_placement};
pub use piece::{AttackInfo, BoardPiece, Movement, PieceId};
pub use types::{
    Archetype, ArchetypeSet, GameStatus, MoveKind, Outcome, Placement, Side, Space, ALL_ARCHETYPES,
    ARCHETYPE_COUNT, ARMY_SIZE,
};
