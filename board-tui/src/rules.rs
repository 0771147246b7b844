//! cozy-chess rules collaborator wired into the board hooks.
//!
//! The visual board stays notation-level; this adapter decides which
//! drags and drops are allowed, tracks the authoritative game, and
//! produces the legal-destination highlights for hover.

use crate::converters::{from_rules_color, from_rules_square, to_rules_square};
use board::{BoardHooks, DragVerdict, DropVerdict, Orientation};
use cozy_chess::{Board, File, GameStatus, Rank};
use notation::{Color, MoveToken, Piece, Position, Square};

pub struct RulesHooks {
    game: Board,
    enforce: bool,
    /// Legal destinations for the hovered square, for highlight
    /// painting. Includes the hovered square itself.
    pub highlighted: Vec<Square>,
}

impl RulesHooks {
    pub fn new(enforce: bool) -> Self {
        Self {
            game: Board::default(),
            enforce,
            highlighted: Vec::new(),
        }
    }

    /// Build from a start position. A bare placement field is padded
    /// into a playable game with white to move and no castling rights.
    pub fn from_fen(fen: &str, enforce: bool) -> anyhow::Result<Self> {
        match parse_game_fen(fen) {
            Ok(game) => Ok(Self {
                game,
                enforce,
                highlighted: Vec::new(),
            }),
            Err(err) if !enforce => {
                tracing::warn!("start position not playable ({err}); rules tracking disabled");
                Ok(Self::new(false))
            }
            Err(err) => Err(err),
        }
    }

    pub fn enforcing(&self) -> bool {
        self.enforce
    }

    /// Full FEN of the authoritative game.
    pub fn fen(&self) -> String {
        self.game.to_string()
    }

    /// Just the placement field, for the visual board.
    pub fn placement(&self) -> String {
        self.fen()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    pub fn side_to_move(&self) -> Color {
        from_rules_color(self.game.side_to_move())
    }

    pub fn is_game_over(&self) -> bool {
        self.game.status() != GameStatus::Ongoing
    }

    /// Play a move produced elsewhere (an engine reply). Returns false
    /// when it is not legal on the rules board.
    pub fn apply_external(&mut self, mv: MoveToken) -> bool {
        let Some(legal) = self.find_legal(mv.from, mv.to) else {
            return false;
        };
        self.game.try_play(legal).is_ok()
    }

    // The legal move from `from` to `to`, promoting to queen when a
    // choice exists.
    fn find_legal(&self, from: Square, to: Square) -> Option<cozy_chess::Move> {
        let from = to_rules_square(from);
        let to = to_rules_square(to);
        let castle_to = self.castling_alias(from, to);
        let mut found = None;
        self.game.generate_moves_for(from.bitboard(), |moves| {
            for mv in moves {
                let hits_target = mv.to == to || Some(mv.to) == castle_to;
                if hits_target && matches!(mv.promotion, None | Some(cozy_chess::Piece::Queen)) {
                    found = Some(mv);
                    return true;
                }
            }
            false
        });
        found
    }

    // The standard castling gesture moves the king two squares; the
    // rules board spells castling as king-takes-own-rook. Translate a
    // g/c-file king drop on the back rank to the rook square so both
    // spellings find the move. A king never has an ordinary move to
    // the rook square, so the alias cannot shadow anything.
    fn castling_alias(
        &self,
        from: cozy_chess::Square,
        to: cozy_chess::Square,
    ) -> Option<cozy_chess::Square> {
        if self.game.piece_on(from) != Some(cozy_chess::Piece::King) {
            return None;
        }
        if from.file() != File::E
            || !matches!(from.rank(), Rank::First | Rank::Eighth)
            || to.rank() != from.rank()
        {
            return None;
        }
        match to.file() {
            File::G => Some(cozy_chess::Square::new(File::H, from.rank())),
            File::C => Some(cozy_chess::Square::new(File::A, from.rank())),
            _ => None,
        }
    }
}

fn parse_game_fen(fen: &str) -> anyhow::Result<Board> {
    if let Ok(board) = fen.parse::<Board>() {
        return Ok(board);
    }
    let placement = fen.split_whitespace().next().unwrap_or("");
    if placement == notation::START_FEN {
        return Ok(Board::default());
    }
    format!("{placement} w - - 0 1")
        .parse::<Board>()
        .map_err(|_| anyhow::anyhow!("cannot build a playable game from {fen:?}"))
}

impl BoardHooks for RulesHooks {
    fn on_drag(
        &mut self,
        _source: Square,
        piece: Piece,
        _position: &Position,
        _orientation: Orientation,
    ) -> DragVerdict {
        if !self.enforce {
            return DragVerdict::Allow;
        }
        if self.is_game_over() || piece.color != self.side_to_move() {
            return DragVerdict::Veto;
        }
        DragVerdict::Allow
    }

    fn on_drop(
        &mut self,
        source: Square,
        target: Square,
        _position: &Position,
        _orientation: Orientation,
    ) -> DropVerdict {
        self.highlighted.clear();
        if !self.enforce {
            return DropVerdict::Apply;
        }
        match self.find_legal(source, target) {
            Some(legal) if self.game.try_play(legal).is_ok() => DropVerdict::Apply,
            _ => DropVerdict::Reject,
        }
    }

    fn on_mouseover_square(
        &mut self,
        square: Square,
        piece: Option<Piece>,
        _position: &Position,
        _orientation: Orientation,
    ) {
        if !self.enforce {
            return;
        }
        self.highlighted.clear();
        if piece.is_none() {
            return;
        }
        let from = to_rules_square(square);
        let mut targets = vec![square];
        self.game.generate_moves_for(from.bitboard(), |moves| {
            for mv in moves {
                if let Some(to) = from_rules_square(mv.to) {
                    targets.push(to);
                }
            }
            false
        });
        if targets.len() > 1 {
            self.highlighted = targets;
        }
    }

    fn on_mouseout_square(
        &mut self,
        _square: Square,
        _piece: Option<Piece>,
        _position: &Position,
        _orientation: Orientation,
    ) {
        self.highlighted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn piece(s: &str) -> Piece {
        s.parse().unwrap()
    }

    #[test]
    fn vetoes_the_side_not_to_move() {
        let mut rules = RulesHooks::new(true);
        let position = Position::standard();
        assert_eq!(
            rules.on_drag(sq("e7"), piece("bP"), &position, Orientation::White),
            DragVerdict::Veto
        );
        assert_eq!(
            rules.on_drag(sq("e2"), piece("wP"), &position, Orientation::White),
            DragVerdict::Allow
        );
    }

    #[test]
    fn free_play_never_vetoes() {
        let mut rules = RulesHooks::new(false);
        let position = Position::standard();
        assert_eq!(
            rules.on_drag(sq("e7"), piece("bP"), &position, Orientation::White),
            DragVerdict::Allow
        );
        assert_eq!(
            rules.on_drop(sq("e2"), sq("e7"), &position, Orientation::White),
            DropVerdict::Apply
        );
    }

    #[test]
    fn rejects_illegal_drops_and_applies_legal_ones() {
        let mut rules = RulesHooks::new(true);
        let position = Position::standard();
        assert_eq!(
            rules.on_drop(sq("e2"), sq("e5"), &position, Orientation::White),
            DropVerdict::Reject
        );
        assert_eq!(rules.side_to_move(), Color::White);

        assert_eq!(
            rules.on_drop(sq("e2"), sq("e4"), &position, Orientation::White),
            DropVerdict::Apply
        );
        // the rules board advanced
        assert_eq!(rules.side_to_move(), Color::Black);
    }

    #[test]
    fn applies_external_engine_moves() {
        let mut rules = RulesHooks::new(true);
        assert!(rules.apply_external("e2-e4".parse().unwrap()));
        assert!(!rules.apply_external("e2-e4".parse().unwrap()));
        assert_eq!(rules.side_to_move(), Color::Black);
    }

    #[test]
    fn hover_highlights_legal_destinations() {
        let mut rules = RulesHooks::new(true);
        let position = Position::standard();
        rules.on_mouseover_square(sq("e2"), position.piece_at(sq("e2")), &position, Orientation::White);
        assert!(rules.highlighted.contains(&sq("e2")));
        assert!(rules.highlighted.contains(&sq("e3")));
        assert!(rules.highlighted.contains(&sq("e4")));

        rules.on_mouseout_square(sq("e2"), None, &position, Orientation::White);
        assert!(rules.highlighted.is_empty());
    }

    #[test]
    fn hover_on_empty_square_highlights_nothing() {
        let mut rules = RulesHooks::new(true);
        let position = Position::standard();
        rules.on_mouseover_square(sq("e4"), None, &position, Orientation::White);
        assert!(rules.highlighted.is_empty());
    }

    #[test]
    fn castling_gesture_moves_the_king_two_squares() {
        let mut rules =
            RulesHooks::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", true).unwrap();
        let position = Position::standard();

        assert_eq!(
            rules.on_drop(sq("e1"), sq("g1"), &position, Orientation::White),
            DropVerdict::Apply
        );
        // king on g1, rook on f1
        assert_eq!(rules.placement(), "r3k2r/8/8/8/8/8/8/R4RK1");

        assert_eq!(
            rules.on_drop(sq("e8"), sq("c8"), &position, Orientation::White),
            DropVerdict::Apply
        );
        assert_eq!(rules.placement(), "2kr3r/8/8/8/8/8/8/R4RK1");
    }

    #[test]
    fn dropping_the_king_on_its_rook_also_castles() {
        let mut rules =
            RulesHooks::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", true).unwrap();
        let position = Position::standard();
        assert_eq!(
            rules.on_drop(sq("e1"), sq("h1"), &position, Orientation::White),
            DropVerdict::Apply
        );
        assert_eq!(rules.placement(), "r3k2r/8/8/8/8/8/8/R4RK1");
    }

    #[test]
    fn castling_gesture_without_rights_is_rejected() {
        let mut rules = RulesHooks::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", true).unwrap();
        let position = Position::standard();
        assert_eq!(
            rules.on_drop(sq("e1"), sq("g1"), &position, Orientation::White),
            DropVerdict::Reject
        );
    }

    #[test]
    fn placement_pads_into_a_playable_game() {
        let rules = RulesHooks::from_fen("k7/8/8/8/8/8/8/K6R", true).unwrap();
        assert_eq!(rules.side_to_move(), Color::White);
        assert!(RulesHooks::from_fen("not a fen", true).is_err());
    }
}
