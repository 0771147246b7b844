//! Terminal lifecycle and the event loop tying the pieces together.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Context;
use board::{BoardController, InputAdapter, PointerEvent, PositionSource};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use engine::{EngineCommand, EngineEvent, EngineHandle, PositionVersion};
use futures::StreamExt;
use notation::{Color, Square, START_FEN};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::cli::Args;
use crate::config::{self, FileConfig, StartOrientation};
use crate::rules::RulesHooks;
use crate::theme::Theme;
use crate::ui::board_view::{BoardView, TuiRenderer};

pub async fn run(args: Args) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => config::load(path)?,
        None => FileConfig::default(),
    };
    let mut app = App::new(args, file_config)?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let size = terminal.size()?;
    app.fit_board(size.width, size.height);

    let result = app.event_loop(&mut terminal).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

struct App {
    board: BoardController<TuiRenderer>,
    input: InputAdapter<RulesHooks>,
    engine: Option<EngineHandle>,
    version: PositionVersion,
    theme: Theme,
    click_moves: bool,
    drag_from: Option<Square>,
    hover: Option<Square>,
    // last rules placement already mirrored onto the visual board
    last_fen: String,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(args: Args, file_config: FileConfig) -> anyhow::Result<Self> {
        let theme = args.theme.or(file_config.theme).unwrap_or_default().theme();
        let enforce = !args.free_play;

        let start = match &args.fen {
            Some(fen) => Some(PositionSource::Fen(fen.clone())),
            None => file_config.start_position()?,
        };

        let rules = match &start {
            Some(PositionSource::Fen(fen)) => RulesHooks::from_fen(fen, enforce)?,
            Some(PositionSource::Map(position)) => {
                RulesHooks::from_fen(&notation::format_fen(position), enforce)?
            }
            Some(PositionSource::Entries(_)) | None => RulesHooks::new(enforce),
        };
        let last_fen = rules.placement();

        let mut board = BoardController::new(TuiRenderer::default());
        if let Some(source) = start {
            board
                .set_position(source)
                .context("start position rejected")?;
        }
        if args.flipped || file_config.orientation == Some(StartOrientation::Black) {
            board.flip();
        }

        let engine = args.engine.then(engine::spawn_homebrew);

        Ok(Self {
            board,
            input: InputAdapter::new(rules),
            engine,
            version: PositionVersion::default(),
            theme,
            click_moves: args.click_moves,
            drag_from: None,
            hover: None,
            last_fen,
            status: None,
            should_quit: false,
        })
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(50));

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            tokio::select! {
                maybe = events.next() => match maybe {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                _ = tick.tick() => self.poll_engine(),
            }
            self.sync_rules();
        }

        if let Some(engine) = &self.engine {
            let _ = engine.tx.try_send(EngineCommand::Quit);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.fit_board(width, height),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('f') => {
                let orientation = self.board.flip();
                tracing::debug!("board flipped to {orientation}");
            }
            KeyCode::Char('c') => {
                self.click_moves = !self.click_moves;
                self.input.clear_selection();
            }
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(square) = self.locate(mouse.column, mouse.row) else {
                    return;
                };
                if self.click_moves {
                    self.input
                        .handle(&mut self.board, PointerEvent::Click { square });
                } else {
                    self.drag_from = Some(square);
                    self.input
                        .handle(&mut self.board, PointerEvent::DragStart { square });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let source = self.drag_from.take();
                let target = self.locate(mouse.column, mouse.row);
                if let (Some(source), Some(target)) = (source, target) {
                    self.input
                        .handle(&mut self.board, PointerEvent::Drop { source, target });
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                let over = self.locate(mouse.column, mouse.row);
                if over != self.hover {
                    if let Some(square) = self.hover {
                        self.input
                            .handle(&mut self.board, PointerEvent::Leave { square });
                    }
                    if let Some(square) = over {
                        self.input
                            .handle(&mut self.board, PointerEvent::Enter { square });
                    }
                    self.hover = over;
                }
            }
            _ => {}
        }
    }

    fn locate(&self, column: u16, row: u16) -> Option<Square> {
        self.board.renderer().locate(column, row)
    }

    fn reset(&mut self) {
        let enforce = self.input.hooks().enforcing();
        *self.input.hooks_mut() = RulesHooks::new(enforce);
        self.input.clear_selection();
        self.drag_from = None;
        self.version = self.version.next();
        self.last_fen = self.input.hooks().placement();
        self.status = None;
        if let Err(err) = self
            .board
            .set_position(PositionSource::Fen(START_FEN.to_string()))
        {
            tracing::error!("reset failed: {err}");
        }
    }

    /// Mirror the rules board onto the visual one after anything moved.
    ///
    /// Going through the rules FEN rather than the move token keeps
    /// castling and promotion displays correct: the rules board places
    /// the rook and the promoted piece, a raw relocation would not.
    fn sync_rules(&mut self) {
        if !self.input.hooks().enforcing() {
            return;
        }
        let placement = self.input.hooks().placement();
        if placement == self.last_fen {
            return;
        }
        self.last_fen = placement.clone();
        self.version = self.version.next();
        if let Err(err) = self.board.set_position(PositionSource::Fen(placement)) {
            tracing::error!("rules position rejected by the board: {err}");
        }
        self.maybe_request_suggestion();
    }

    fn maybe_request_suggestion(&mut self) {
        if self.input.hooks().is_game_over() {
            self.status = Some(format!(
                "game over, {} cannot move",
                self.input.hooks().side_to_move()
            ));
            return;
        }
        if self.input.hooks().side_to_move() != Color::Black {
            return;
        }
        let fen = self.input.hooks().fen();
        let version = self.version;
        if let Some(engine) = &self.engine {
            if engine
                .tx
                .try_send(EngineCommand::Suggest { fen, version })
                .is_err()
            {
                tracing::warn!("engine busy, suggestion request dropped");
            }
        }
    }

    fn poll_engine(&mut self) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        let Some(event) = engine.poll_current(self.version) else {
            return;
        };
        match event {
            EngineEvent::BestMove { mv, .. } => {
                if self.input.hooks_mut().apply_external(mv) {
                    tracing::info!("engine plays {mv}");
                } else {
                    tracing::warn!("engine suggested illegal move {mv}");
                }
            }
            EngineEvent::NoMove { .. } => self.status = Some("engine found no move".to_string()),
            EngineEvent::Error { message, .. } => {
                self.status = Some(format!("engine error: {message}"));
            }
        }
    }

    fn fit_board(&mut self, width: u16, height: u16) {
        // cells are roughly twice as wide as tall; leave room for the
        // labels and the status line
        let edge = (width / 2).min(height.saturating_sub(3)).max(8);
        self.board.set_board_size(edge);
        self.board.redraw();
    }

    fn draw(&self, frame: &mut Frame) {
        let [board_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(
            BoardView {
                renderer: self.board.renderer(),
                theme: &self.theme,
                selected: self.input.selected().or(self.drag_from),
                highlighted: &self.input.hooks().highlighted,
            },
            board_area,
        );
        frame.render_widget(Paragraph::new(self.status_line()), status_area);
    }

    fn status_line(&self) -> String {
        let hooks = self.input.hooks();
        let turn = if hooks.enforcing() {
            format!("{} to move", hooks.side_to_move())
        } else {
            "free play".to_string()
        };
        // click moves skip the legality hooks; say so while rules are on
        let mode = match (self.click_moves, hooks.enforcing()) {
            (true, true) => "click, rules bypassed",
            (true, false) => "click",
            (false, _) => "drag",
        };
        let mut line = format!(" {turn} | input: {mode} | q quit  f flip  c click-moves  r reset");
        if let Some(status) = &self.status {
            line.push_str(" | ");
            line.push_str(status);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notation::Position;

    fn args() -> Args {
        Args {
            fen: None,
            config: None,
            theme: None,
            flipped: false,
            click_moves: false,
            engine: false,
            free_play: false,
        }
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn starts_with_the_standard_position() {
        let app = App::new(args(), FileConfig::default()).unwrap();
        assert_eq!(app.board.position(), &Position::standard());
        assert!(app.status_line().contains("white to move"));
    }

    #[test]
    fn fen_flag_seeds_board_and_rules() {
        let mut flags = args();
        flags.fen = Some("k7/8/8/8/8/8/8/K6R".to_string());
        let app = App::new(flags, FileConfig::default()).unwrap();
        assert_eq!(app.board.position().len(), 3);
        assert_eq!(app.input.hooks().placement(), "k7/8/8/8/8/8/8/K6R");
    }

    #[test]
    fn bad_fen_flag_fails_up_front_when_enforcing() {
        let mut flags = args();
        flags.fen = Some("definitely not a position".to_string());
        assert!(App::new(flags, FileConfig::default()).is_err());
    }

    #[test]
    fn drop_then_sync_mirrors_the_rules_board() {
        let mut app = App::new(args(), FileConfig::default()).unwrap();
        app.input.handle(
            &mut app.board,
            PointerEvent::DragStart { square: sq("e2") },
        );
        app.input.handle(
            &mut app.board,
            PointerEvent::Drop {
                source: sq("e2"),
                target: sq("e4"),
            },
        );
        app.sync_rules();

        assert_eq!(app.board.position().piece_at(sq("e2")), None);
        assert!(app.board.position().piece_at(sq("e4")).is_some());
        assert_eq!(app.version, PositionVersion(1));
        assert!(app.status_line().contains("black to move"));
    }

    #[test]
    fn illegal_drop_changes_nothing() {
        let mut app = App::new(args(), FileConfig::default()).unwrap();
        app.input.handle(
            &mut app.board,
            PointerEvent::DragStart { square: sq("e2") },
        );
        app.input.handle(
            &mut app.board,
            PointerEvent::Drop {
                source: sq("e2"),
                target: sq("e5"),
            },
        );
        app.sync_rules();

        assert_eq!(app.board.position(), &Position::standard());
        assert_eq!(app.version, PositionVersion(0));
    }

    #[test]
    fn reset_restores_the_opening_state() {
        let mut app = App::new(args(), FileConfig::default()).unwrap();
        app.input.handle(
            &mut app.board,
            PointerEvent::DragStart { square: sq("e2") },
        );
        app.input.handle(
            &mut app.board,
            PointerEvent::Drop {
                source: sq("e2"),
                target: sq("e4"),
            },
        );
        app.sync_rules();
        app.reset();

        assert_eq!(app.board.position(), &Position::standard());
        assert_eq!(app.input.hooks().side_to_move(), Color::White);
    }

    #[test]
    fn click_mode_status_warns_while_rules_are_on() {
        let mut flags = args();
        flags.click_moves = true;
        let app = App::new(flags, FileConfig::default()).unwrap();
        assert!(app.status_line().contains("rules bypassed"));

        let mut flags = args();
        flags.click_moves = true;
        flags.free_play = true;
        let app = App::new(flags, FileConfig::default()).unwrap();
        assert!(!app.status_line().contains("rules bypassed"));
    }

    #[test]
    fn free_play_status_hides_the_turn() {
        let mut flags = args();
        flags.free_play = true;
        let app = App::new(flags, FileConfig::default()).unwrap();
        assert!(app.status_line().contains("free play"));
    }
}
