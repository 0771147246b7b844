use crate::theme::ThemeName;
use clap::Parser;
use std::path::PathBuf;

/// Interactive terminal chessboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "board-tui", version, about)]
pub struct Args {
    /// Start position as board notation (the placement field is enough).
    #[arg(long)]
    pub fen: Option<String>,

    /// JSON config file. Flags win over file values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Board color scheme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,

    /// Draw the board from black's side.
    #[arg(long)]
    pub flipped: bool,

    /// Click-click move input instead of drag and drop. Click moves are
    /// notation-level: they bypass the legality hooks.
    #[arg(long)]
    pub click_moves: bool,

    /// Let the built-in engine answer for black.
    #[arg(long)]
    pub engine: bool,

    /// Skip legality checks: any drag is allowed, any drop applies.
    #[arg(long)]
    pub free_play: bool,
}
