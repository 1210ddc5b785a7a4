use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::board::Board;
use crate::error::MoveError;
use crate::game::MoveOutcome;
use crate::types::{Color, GameStatus, Player};

/// Where game records go and how chatty they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub directory: PathBuf,
    pub advanced: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            advanced: false,
        }
    }
}

/// Human-readable record of one game, kept in memory until saved.
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    directory: PathBuf,
    game_start_time: Instant,
    move_count: u32,
    rejected_count: u32,
    indent_level: usize,
}

impl ChessLogger {
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    pub fn with_config(config: LoggerConfig) -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: config.advanced,
            directory: config.directory,
            game_start_time: Instant::now(),
            move_count: 0,
            rejected_count: 0,
            indent_level: 0,
        };

        logger.log("🎯 === Chess Game Log Started ===");
        logger.log(&format!("📅 Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("🔬 Advanced logging enabled - board dumps after every move");
    }

    pub fn disable_advanced_logging(&mut self) {
        self.advanced_logging = false;
        self.log("📊 Advanced logging disabled - Basic mode active");
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn rejected_count(&self) -> u32 {
        self.rejected_count
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        for line in message.lines() {
            self.log_buffer.push_str(&indent);
            self.log_buffer.push_str(line);
            self.log_buffer.push('\n');
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    // MOVE LOGGING
    pub fn log_move(&mut self, player: Player, outcome: &MoveOutcome, board: &Board) {
        self.move_count += 1;
        let elapsed = self.game_start_time.elapsed().as_millis();
        self.log(&format!(
            "{}. {} ({} - {}ms)",
            self.move_count,
            outcome.notation.replace('\n', " "),
            player,
            elapsed
        ));

        self.increase_indent();
        if let Some(captured) = outcome.captured {
            self.log_with_indent(&format!("captured {} {}", captured.color, captured.kind));
        }
        match outcome.status {
            GameStatus::Check(color) => self.log_check(color),
            GameStatus::Checkmate(color) => self.log_checkmate(color.opposite()),
            GameStatus::InProgress => {}
        }
        if self.should_log_advanced() {
            self.log_board(board);
        }
        self.decrease_indent();
    }

    pub fn log_rejection(&mut self, player: Player, text: &str, error: &MoveError) {
        self.rejected_count += 1;
        self.log(&format!("❌ {} tried {}: {}", player.color, text, error));
    }

    pub fn log_check(&mut self, color: Color) {
        self.log_with_indent(&format!("⚠️ {} is in check", color));
    }

    pub fn log_checkmate(&mut self, victor: Color) {
        self.log_with_indent(&format!("🏁 Checkmate - {} wins ({})", victor, victor.win_token()));
    }

    pub fn log_board(&mut self, board: &Board) {
        self.log_with_indent(&board.to_string());
    }

    pub fn log_game_aborted(&mut self, reason: &str) {
        self.log(&format!("🛑 Game finished abruptly - {}", reason));
    }

    /// Write the buffer to `<directory>/<timestamp>.txt` and return the path.
    pub fn save_to_file(&mut self, reason: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;

        let now = chrono::Local::now();
        let path = self.directory.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("💾 Game ended: {} - Saving log", reason));

        let mut file = File::create(&path)?;
        file.write_all(self.log_buffer.as_bytes())?;
        Ok(path)
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn header_is_written_on_creation() {
        let logger = ChessLogger::new();
        assert!(logger.log_buffer.starts_with("🎯 === Chess Game Log Started ===\n"));
        assert!(logger.log_buffer.contains("📅 Date: "));
        assert!(!logger.should_log_advanced());
    }

    #[test]
    fn records_moves_and_rejections() {
        let mut game = Game::default();
        let mut logger = ChessLogger::new();

        let player = game.current_player();
        let outcome = game.apply_move("e2-e4").unwrap();
        logger.log_move(player, &outcome, &game.board);

        let player = game.current_player();
        let err = game.apply_move("e7-e4").unwrap_err();
        logger.log_rejection(player, "e7-e4", &err);

        assert_eq!(logger.move_count(), 1);
        assert_eq!(logger.rejected_count(), 1);
        assert!(logger.log_buffer.contains("1. e2-e4 (White (human)"));
        assert!(logger.log_buffer.contains("❌ Black tried e7-e4: That piece can't move like that."));
        // No board dump unless advanced logging is on.
        assert!(!logger.log_buffer.contains("♔"));
    }

    #[test]
    fn advanced_mode_dumps_the_board_indented() {
        let mut game = Game::default();
        let mut logger = ChessLogger::new();
        logger.enable_advanced_logging();

        let player = game.current_player();
        let outcome = game.apply_move("Ng1-f3").unwrap();
        logger.log_move(player, &outcome, &game.board);

        assert!(logger.log_buffer.contains("  ♖ ♘ ♗ ♕ ♔ ♗ . ♖\n"));
    }

    #[test]
    fn indentation_never_goes_negative() {
        let mut logger = ChessLogger::new();
        logger.decrease_indent();
        logger.log_with_indent("flat");
        assert!(logger.log_buffer.ends_with("\nflat\n"));
    }

    #[test]
    fn saves_into_the_configured_directory() {
        let directory = std::env::temp_dir().join(format!("chess-rules-log-{}", std::process::id()));
        let mut logger = ChessLogger::with_config(LoggerConfig {
            directory: directory.clone(),
            advanced: false,
        });
        logger.log_game_aborted("test");

        let path = logger.save_to_file("done").unwrap();
        assert!(path.starts_with(&directory));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("🛑 Game finished abruptly - test"));
        assert!(written.ends_with("💾 Game ended: done - Saving log\n"));

        let _ = fs::remove_dir_all(&directory);
    }
}
