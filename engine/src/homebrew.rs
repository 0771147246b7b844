//! Built-in fallback engine.
//!
//! Prefers a capture, otherwise plays the first legal move it sees. No
//! search, no evaluation; enough to give the board an opponent when no
//! stronger collaborator is wired up.

use crate::{EngineCommand, EngineEvent, EngineHandle, PositionVersion};
use cozy_chess::Board;
use notation::MoveToken;
use tokio::sync::mpsc;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unreadable position: {0}")]
    BadPosition(String),
    #[error("engine produced an unparseable move: {0}")]
    BadMove(String),
}

/// Spawn the homebrew engine task and return its handle.
pub fn spawn_homebrew() -> EngineHandle {
    let (command_tx, mut command_rx) = mpsc::channel::<EngineCommand>(32);
    let (event_tx, event_rx) = mpsc::channel::<EngineEvent>(32);

    tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            match command {
                EngineCommand::Suggest { fen, version } => {
                    tracing::debug!("suggest requested for version {version:?}");
                    let event = match suggest(&fen, version) {
                        Ok(event) => event,
                        Err(err) => EngineEvent::Error {
                            message: err.to_string(),
                            version,
                        },
                    };
                    if event_tx.send(event).await.is_err() {
                        break;
                    }
                }
                EngineCommand::Quit => break,
            }
        }
        tracing::debug!("homebrew engine task exiting");
    });

    EngineHandle {
        tx: command_tx,
        rx: event_rx,
    }
}

fn suggest(fen: &str, version: PositionVersion) -> Result<EngineEvent, EngineError> {
    let board: Board = fen
        .parse()
        .map_err(|_| EngineError::BadPosition(fen.to_string()))?;

    let enemy = !board.side_to_move();
    let mut fallback = None;
    let mut capture = None;
    board.generate_moves(|moves| {
        for mv in moves {
            if fallback.is_none() {
                fallback = Some(mv);
            }
            if board.color_on(mv.to) == Some(enemy) {
                capture = Some(mv);
                return true;
            }
        }
        false
    });

    let Some(best) = capture.or(fallback) else {
        return Ok(EngineEvent::NoMove { version });
    };
    let token = format!("{}-{}", best.from, best.to);
    let mv: MoveToken = token
        .parse()
        .map_err(|_| EngineError::BadMove(token.clone()))?;
    tracing::debug!("suggesting {mv} for version {version:?}");
    Ok(EngineEvent::BestMove { mv, version })
}
