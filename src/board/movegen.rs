//! Legal move generation and move application.

use super::error::MoveParseError;
use super::state::Position;
use super::types::{Bitboard, Cell, Move, MoveList, Player, Square};

/// The 8 compass directions as (row, col) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    /// Opponent discs captured along one direction from `from`.
    ///
    /// A run of opponent discs counts only when a `mover` disc closes it
    /// on the board; runs ending at an edge or an empty cell capture nothing.
    fn flips_in_direction(&self, from: Square, mover: Player, dr: isize, dc: isize) -> Bitboard {
        let own = mover.cell();
        let theirs = mover.opponent().cell();
        let mut run = Bitboard::EMPTY;
        let mut cur = from.offset(dr, dc);

        while let Some(sq) = cur {
            let cell = self.cell(sq);
            if cell == theirs {
                run |= Bitboard::from_square(sq);
            } else if cell == own {
                return run;
            } else {
                break;
            }
            cur = sq.offset(dr, dc);
        }
        Bitboard::EMPTY
    }

    /// Capture set for `mover` placing on `sq` (empty if not a legal destination).
    #[must_use]
    pub fn flips_for(&self, sq: Square, mover: Player) -> Bitboard {
        if self.cell(sq) != Cell::Empty {
            return Bitboard::EMPTY;
        }
        DIRECTIONS
            .iter()
            .fold(Bitboard::EMPTY, |acc, &(dr, dc)| {
                acc | self.flips_in_direction(sq, mover, dr, dc)
            })
    }

    /// All legal moves for `mover` in ascending cell order.
    ///
    /// An empty list means `mover` must pass.
    #[must_use]
    pub fn legal_moves(&self, mover: Player) -> MoveList {
        let mut moves = MoveList::new();
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let flips = self.flips_for(sq, mover);
            if !flips.is_empty() {
                moves.push(Move::new(sq, flips));
            }
        }
        moves
    }

    /// Whether `mover` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, mover: Player) -> bool {
        (0..64).any(|idx| {
            let sq = Square::from_index(idx);
            self.cell(sq) == Cell::Empty
                && DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| !self.flips_in_direction(sq, mover, dr, dc).is_empty())
        })
    }

    /// Neither side can move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// Side with more discs, `None` on a tie. Meaningful once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.disc_difference(Player::Black) {
            d if d > 0 => Some(Player::Black),
            d if d < 0 => Some(Player::White),
            _ => None,
        }
    }

    /// New position with `mv` played by `mover`. `self` is left untouched.
    #[must_use]
    pub fn apply_move(&self, mv: &Move, mover: Player) -> Position {
        let mut next = *self;
        let own = mover.cell();
        next.set(mv.to(), own);
        for sq in mv.flipped() {
            next.set(sq, own);
        }
        next
    }

    /// Look up the legal move for `mover` landing on `sq`.
    #[must_use]
    pub fn find_move(&self, mover: Player, sq: Square) -> Option<Move> {
        let flips = self.flips_for(sq, mover);
        (!flips.is_empty()).then(|| Move::new(sq, flips))
    }

    /// Parse `f5`-style notation into a legal move for `mover`.
    pub fn parse_move(&self, mover: Player, notation: &str) -> Result<Move, MoveParseError> {
        let sq: Square = notation.parse()?;
        self.find_move(mover, sq).ok_or_else(|| MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_has_four_opening_moves() {
        let pos = Position::new();
        let moves = pos.legal_moves(Player::Black);
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(
            targets,
            vec![Square(2, 3), Square(3, 2), Square(4, 5), Square(5, 4)]
        );
        assert!(moves.iter().all(|m| m.flip_count() == 1));
    }

    #[test]
    fn run_without_closing_disc_captures_nothing() {
        // White on b1 and c1, a1 empty: the run from d1 reaches an empty cell
        let pos = Position::empty()
            .with(Square(0, 1), Cell::White)
            .with(Square(0, 2), Cell::White);
        assert!(pos.flips_for(Square(0, 3), Player::Black).is_empty());
        assert!(pos.flips_for(Square(0, 3), Player::White).is_empty());

        // Run toward the a-file edge with no closing disc
        let edge = Position::empty()
            .with(Square(0, 0), Cell::White)
            .with(Square(0, 1), Cell::White);
        assert!(edge.flips_for(Square(0, 2), Player::Black).is_empty());

        let pos = pos.with(Square(0, 0), Cell::Black);
        let flips = pos.flips_for(Square(0, 3), Player::Black);
        assert_eq!(flips.iter().collect::<Vec<_>>(), vec![Square(0, 1), Square(0, 2)]);
    }

    #[test]
    fn captures_union_across_directions() {
        // Black plays d4 capturing toward both e4 and d5
        let pos = Position::empty()
            .with(Square(3, 4), Cell::White)
            .with(Square(3, 5), Cell::Black)
            .with(Square(4, 3), Cell::White)
            .with(Square(5, 3), Cell::Black);
        let mv = pos.find_move(Player::Black, Square(3, 3)).unwrap();
        assert_eq!(mv.flip_count(), 2);
        assert!(mv.flips().contains(Square(3, 4)));
        assert!(mv.flips().contains(Square(4, 3)));
    }

    #[test]
    fn apply_move_leaves_input_untouched() {
        let pos = Position::new();
        let mv = pos.parse_move(Player::Black, "f5").unwrap();
        let next = pos.apply_move(&mv, Player::Black);
        assert_eq!(pos, Position::new());
        assert_eq!(next.cell(Square(4, 5)), Cell::Black);
        assert_eq!(next.cell(Square(4, 4)), Cell::Black);
        assert_eq!(next.disc_count(Player::Black), 4);
        assert_eq!(next.disc_count(Player::White), 1);
    }

    #[test]
    fn parse_move_rejects_illegal_squares() {
        let pos = Position::new();
        assert!(matches!(
            pos.parse_move(Player::Black, "a1"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            pos.parse_move(Player::Black, "z9"),
            Err(MoveParseError::InvalidSquare(_))
        ));
    }

    #[test]
    fn blocked_player_gets_empty_list() {
        // Only Black discs: White can never capture
        let pos = Position::empty()
            .with(Square(0, 0), Cell::Black)
            .with(Square(0, 1), Cell::Black);
        assert!(pos.legal_moves(Player::White).is_empty());
        assert!(!pos.has_legal_move(Player::White));
        assert!(pos.is_game_over());
        assert_eq!(pos.winner(), Some(Player::Black));
    }
}
