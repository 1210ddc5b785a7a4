use std::path::PathBuf;
use std::process::ExitCode;

use chess_rules::{ChessLogger, Game, GameStatus, LoggerConfig};
use clap::Parser;

/// Replay a sequence of long algebraic moves from the starting position.
#[derive(Parser, Debug)]
#[command(name = "replay")]
struct Args {
    /// Moves in order, e.g. `e2-e4 e7-e5 Ng1-f3`
    moves: Vec<String>,

    /// Directory for the saved game record
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Dump the board after every move
    #[arg(long)]
    advanced: bool,

    /// Write the game record to --log-dir when done
    #[arg(long)]
    save: bool,

    /// Stop at the first rejected move instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut game = Game::default();
    let mut logger = ChessLogger::with_config(LoggerConfig {
        directory: args.log_dir,
        advanced: args.advanced,
    });

    let mut failed = false;
    for text in &args.moves {
        let player = game.current_player();
        match game.apply_move(text) {
            Ok(outcome) => {
                println!("{}", outcome.notation);
                logger.log_move(player, &outcome, &game.board);
                if matches!(outcome.status, GameStatus::Checkmate(_)) {
                    break;
                }
            }
            Err(err) => {
                eprintln!("{}: {}", text, err);
                logger.log_rejection(player, text, &err);
                if args.strict {
                    logger.log_game_aborted(&format!("rejected move {}", text));
                    failed = true;
                    break;
                }
            }
        }
    }

    print!("{}", game.board);
    match game.status() {
        GameStatus::Check(color) => println!("{} to move, in check", color),
        GameStatus::Checkmate(color) => println!("{} is checkmated", color),
        GameStatus::InProgress => println!("{} to move", game.current_player().color),
    }

    if args.save {
        let reason = match game.victor() {
            Some(player) => format!("{} wins", player.color),
            None => "replay finished".to_string(),
        };
        match logger.save_to_file(&reason) {
            Ok(path) => println!("Game record saved to {}", path.display()),
            Err(err) => {
                eprintln!("Failed to save game record: {}", err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
