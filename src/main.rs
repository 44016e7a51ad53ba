use clap::{Parser, ValueEnum};

use layered_chess::agent::ai::Difficulty;
use layered_chess::config::{GameConfig, PlayerConfig, Variant};
use layered_chess::game_repr::{Position, Position3D};
use layered_chess::orchestrator::Orchestrator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Human,
    Computer,
}

/// Play standard or layered chess in the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Board to play on
    #[arg(long, value_enum, default_value_t = Variant::Standard)]
    variant: Variant,

    /// Who plays White
    #[arg(long, value_enum, default_value_t = Side::Human)]
    white: Side,

    /// Who plays Black
    #[arg(long, value_enum, default_value_t = Side::Computer)]
    black: Side,

    /// Search depth level of computer players
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Stop the game after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Print the perft node count to this depth and exit
    #[arg(long)]
    perft: Option<u32>,
}

impl Args {
    fn player(&self, side: Side) -> PlayerConfig {
        match side {
            Side::Human => PlayerConfig::Human,
            Side::Computer => PlayerConfig::Computer { difficulty: self.difficulty },
        }
    }

    fn config(&self) -> GameConfig {
        GameConfig {
            variant: self.variant,
            white_player: self.player(self.white),
            black_player: self.player(self.black),
        }
    }
}

fn play<const L: usize>(config: &GameConfig, max_plies: Option<u32>) {
    let mut game = Orchestrator::<L>::from_config(config);
    if let Some(max_plies) = max_plies {
        game = game.with_max_plies(max_plies);
    }
    let result = game.run();
    println!("{}", game.board().position());
    println!("Result: {}", result);
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(depth) = args.perft {
        let nodes = match args.variant {
            Variant::Standard => Position::<1>::new().perft_parallel(depth),
            Variant::Layered => Position3D::new().perft_parallel(depth),
        };
        println!("perft({}) = {}", depth, nodes);
        return;
    }

    let config = args.config();
    log::debug!("{:?}", config);
    match config.variant {
        Variant::Standard => play::<1>(&config, args.max_plies),
        Variant::Layered => play::<{ layered_chess::game_repr::LAYERED_BOARD_LAYERS }>(&config, args.max_plies),
    }
}
