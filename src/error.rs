//! 错误类型
//!
//! 非法输入与布阵失败通过 `Error` 返回；内部不变量被破坏时直接 panic。

use thiserror::Error;

use crate::coords::Coord;
use crate::types::Archetype;

/// 引擎错误
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// 坐标超出棋盘范围
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: i8, y: i8 },

    /// 无法解析的记谱文本
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// 走法不合法
    #[error("illegal move from {start:?} to {end}")]
    IllegalMove { start: Option<Coord>, end: Coord },

    /// 目标格为空却给出了战斗结果
    #[error("move to {end} is not an attack but an outcome was given")]
    NotAnAttack { end: Coord },

    /// 双方身份均未知，必须由裁判给出结果
    #[error("outcome of the attack on {end} cannot be computed locally")]
    MissingOutcome { end: Coord },

    /// 走法生成后棋盘已经前进
    #[error("movement was built for turn {built} but the board is at turn {current}")]
    StaleMovement { built: u32, current: u32 },

    /// 战斗结果与所有候选身份矛盾
    #[error("outcome at {end} contradicts every candidate identity")]
    InconsistentOutcome { end: Coord },

    /// 揭示的身份与已知信息矛盾
    #[error("cannot reveal piece as {archetype}: contradicts known information")]
    InconsistentReveal { archetype: Archetype },

    /// 对局已经开始，不能重新布阵
    #[error("cannot set up while a game is in progress")]
    AlreadySetUp,

    /// 可用布阵位置不足
    #[error("not enough positions to place {archetype}: need {needed}, have {available}")]
    NotEnoughPlacements {
        archetype: Archetype,
        needed: usize,
        available: usize,
    },

    /// 布阵回调返回了非法位置
    #[error("placement choice for {archetype} is not valid")]
    InvalidPlacementChoice { archetype: Archetype },
}

pub type Result<T> = std::result::Result<T, Error>;
