//! Asynchronous move-suggestion collaborator.
//!
//! The board side dispatches a request tagged with the position version
//! it was computed against; replies carry the tag back, so a suggestion
//! that arrives after further moves have been made can be recognized as
//! stale and discarded instead of being applied to the wrong position.

pub mod homebrew;

pub use homebrew::spawn_homebrew;

use notation::MoveToken;
use tokio::sync::mpsc;

/// Monotonic tag for the position a request was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionVersion(pub u64);

impl PositionVersion {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Commands sent to the engine task.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Suggest a move for the given full FEN.
    Suggest {
        fen: String,
        version: PositionVersion,
    },
    Quit,
}

/// Events received from the engine task.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    BestMove {
        mv: MoveToken,
        version: PositionVersion,
    },
    /// No legal move exists for the request's position.
    NoMove { version: PositionVersion },
    Error {
        message: String,
        version: PositionVersion,
    },
}

impl EngineEvent {
    pub fn version(&self) -> PositionVersion {
        match self {
            Self::BestMove { version, .. }
            | Self::NoMove { version }
            | Self::Error { version, .. } => *version,
        }
    }
}

/// Handle for communicating with a suggestion engine.
pub struct EngineHandle {
    pub tx: mpsc::Sender<EngineCommand>,
    pub rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Drain pending events, dropping any computed against an older
    /// position. The state at response time is authoritative, not the
    /// state at dispatch time.
    pub fn poll_current(&mut self, current: PositionVersion) -> Option<EngineEvent> {
        while let Ok(event) = self.rx.try_recv() {
            if event.version() == current {
                return Some(event);
            }
            tracing::debug!(
                "discarding stale engine event for version {:?} (current {:?})",
                event.version(),
                current
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> MoveToken {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn poll_current_discards_stale_events() {
        let (command_tx, _command_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let mut handle = EngineHandle {
            tx: command_tx,
            rx: event_rx,
        };

        let stale = PositionVersion(1);
        let current = PositionVersion(2);
        event_tx
            .send(EngineEvent::BestMove {
                mv: mv("e2-e4"),
                version: stale,
            })
            .await
            .unwrap();
        event_tx
            .send(EngineEvent::BestMove {
                mv: mv("d2-d4"),
                version: current,
            })
            .await
            .unwrap();

        let event = handle.poll_current(current).unwrap();
        match event {
            EngineEvent::BestMove { mv: best, version } => {
                assert_eq!(best, mv("d2-d4"));
                assert_eq!(version, current);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(handle.poll_current(current).is_none());
    }

    #[tokio::test]
    async fn poll_current_returns_none_when_only_stale() {
        let (command_tx, _command_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let mut handle = EngineHandle {
            tx: command_tx,
            rx: event_rx,
        };

        event_tx
            .send(EngineEvent::NoMove {
                version: PositionVersion(7),
            })
            .await
            .unwrap();

        assert!(handle.poll_current(PositionVersion(9)).is_none());
    }

    #[test]
    fn versions_are_monotonic() {
        let v = PositionVersion::default();
        assert_eq!(v.next(), PositionVersion(1));
        assert_eq!(v.next().next(), PositionVersion(2));
    }
}
