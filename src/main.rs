//! Luzhanqi CLI
//!
//! 命令行界面，用于检查布阵与走法生成

use clap::{Parser, Subcommand};
use log::Level;
use luzhanqi::{layouts, notation, LuzhanqiBoard, Movement, MoveKind, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "luzhanqi")]
#[command(about = "Luzhanqi (Military Chess) rule engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 布阵并输出记谱行
    Setup {
        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// 阵型 (standard, random)
        #[arg(long, default_value = "standard")]
        layout: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 布阵后列出己方合法走法
    Moves {
        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// 阵型 (standard, random)
        #[arg(long, default_value = "standard")]
        layout: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 布阵后打印棋盘
    Board {
        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// 阵型 (standard, random)
        #[arg(long, default_value = "standard")]
        layout: String,
    },
}

#[derive(Serialize, Deserialize)]
struct PlacedPiece {
    cell: String,
    symbol: char,
    name: String,
}

#[derive(Serialize, Deserialize)]
struct SetupResponse {
    placement: String,
    pieces: Vec<PlacedPiece>,
}

#[derive(Serialize, Deserialize)]
struct MoveResult {
    #[serde(rename = "move")]
    mv: String,
    #[serde(rename = "type")]
    move_type: String,
    attack: bool,
}

#[derive(Serialize, Deserialize)]
struct MovesResponse {
    moves: Vec<MoveResult>,
    total: usize,
}

fn move_type_to_str(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Initial => "initial",
        MoveKind::Road => "road",
        MoveKind::Railroad => "railroad",
        MoveKind::RailroadCorner => "railroad_corner",
    }
}

fn move_result(mv: &Movement) -> Option<MoveResult> {
    Some(MoveResult {
        mv: notation::format_move(mv.start()?, mv.end()),
        move_type: move_type_to_str(mv.kind()).to_string(),
        attack: mv.attack().is_some(),
    })
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

/// 按参数布阵
fn set_up(seed: Option<u64>, layout: &str) -> LuzhanqiBoard {
    let mut board = LuzhanqiBoard::new();
    let result = match layout {
        "random" => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            board.setup_random(&mut rng)
        }
        name => match layouts::by_name(name) {
            Some(placements) => board.setup_from_layout(&placements),
            None => fail(format!("unknown layout: {}", name)),
        },
    };
    if let Err(e) = result {
        fail(e);
    }
    board
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Setup { seed, layout, json } => {
            let board = set_up(seed, &layout);
            let placement = board.placement_line();

            if json {
                let response = SetupResponse {
                    placement,
                    pieces: board
                        .pieces(Side::Friendly)
                        .filter_map(|p| {
                            let archetype = p.archetype()?;
                            Some(PlacedPiece {
                                cell: notation::format_coord(p.initial()?),
                                symbol: archetype.symbol(),
                                name: archetype.name().to_string(),
                            })
                        })
                        .collect(),
                };
                match serde_json::to_string_pretty(&response) {
                    Ok(text) => println!("{}", text),
                    Err(e) => fail(e),
                }
            } else {
                println!("{}", placement);
            }
        }

        Commands::Moves { seed, layout, json } => {
            let board = set_up(seed, &layout);
            let moves: Vec<MoveResult> = board.valid_moves().iter().filter_map(move_result).collect();

            if json {
                let response = MovesResponse {
                    total: moves.len(),
                    moves,
                };
                match serde_json::to_string_pretty(&response) {
                    Ok(text) => println!("{}", text),
                    Err(e) => fail(e),
                }
            } else {
                println!("Legal moves ({}):", moves.len());
                for mv in &moves {
                    let marker = if mv.attack { " x" } else { "" };
                    println!("  {} {}{}", mv.mv, mv.move_type, marker);
                }
            }
        }

        Commands::Board { seed, layout } => {
            let board = set_up(seed, &layout);
            board.log_layout(Level::Debug);
            print!("{}", board.render_layout());
        }
    }
}
