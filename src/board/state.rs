use super::attack_tables::AttackTables;
use super::attacks::{attackers_of, generate_attacks, union};
use super::error::MoveParseError;
use super::pins::detect_pins;
use super::types::{Bitboard, CastlingRights, Color, Move, MoveList, Piece, Pins, Square};

/// Board state: piece placement plus the caches `update_board` fills.
///
/// `attacks`, `attacks_all`, `pins` and `legal_moves` are only valid right
/// after [`Board::update_board`]. [`Board::apply_move`] leaves them stale.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) pieces_all: [Bitboard; 2],
    pub(crate) occupied: Bitboard,
    pub(crate) attacks: [[Bitboard; 6]; 2],
    pub(crate) attacks_all: [Bitboard; 2],
    pub(crate) pins: [Pins; 2],
    pub(crate) en_passant: [Bitboard; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) piece_lookup: [Option<Piece>; 64],
    pub(crate) legal_moves: MoveList,
}

/// Standard starting position with full castling rights.
#[must_use]
pub fn init_board() -> Board {
    Board::new()
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            board.put_piece(Square::new(0, file), Color::White, piece);
            board.put_piece(Square::new(1, file), Color::White, Piece::Pawn);
            board.put_piece(Square::new(6, file), Color::Black, Piece::Pawn);
            board.put_piece(Square::new(7, file), Color::Black, piece);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces and no castling rights
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            pieces_all: [Bitboard::EMPTY; 2],
            occupied: Bitboard::EMPTY,
            attacks: [[Bitboard::EMPTY; 6]; 2],
            attacks_all: [Bitboard::EMPTY; 2],
            pins: [Pins::new(); 2],
            en_passant: [Bitboard::EMPTY; 2],
            castling_rights: CastlingRights::none(),
            piece_lookup: [None; 64],
            legal_moves: MoveList::new(),
        }
    }

    /// Place a piece, replacing whatever stood on `sq`.
    pub fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.remove_piece(sq);
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.pieces_all[color.index()] |= bit;
        self.occupied |= bit;
        self.piece_lookup[sq.index()] = Some(piece);
    }

    /// Take whatever stands on `sq` off the board.
    pub fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let piece = self.piece_lookup[sq.index()].take()?;
        let color = self.color_on(sq)?;
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] &= !bit;
        self.pieces_all[color.index()] &= !bit;
        self.occupied &= !bit;
        Some((color, piece))
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn pieces_all(&self, color: Color) -> Bitboard {
        self.pieces_all[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn total_occupancy(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    #[must_use]
    pub fn attacks(&self, color: Color, piece: Piece) -> Bitboard {
        self.attacks[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn attacks_all(&self, color: Color) -> Bitboard {
        self.attacks_all[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn pins(&self, color: Color) -> &Pins {
        &self.pins[color.index()]
    }

    /// Square `color` may capture en passant onto this ply, if any
    #[inline]
    #[must_use]
    pub fn en_passant(&self, color: Color) -> Bitboard {
        self.en_passant[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_lookup[sq.index()]
    }

    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|color| self.pieces_all[color.index()].contains(sq))
    }

    /// Legal moves from the last `update_board` call
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces(color, Piece::King);
        kings.is_nonempty().then(|| kings.lsb())
    }

    /// Pieces of `by` attacking `sq` with the current occupancy
    #[must_use]
    pub fn attackers_to(&self, tables: &AttackTables, sq: Square, by: Color) -> Bitboard {
        attackers_of(tables, sq, by, &self.pieces[by.index()], self.occupied)
    }

    /// Refresh attacks for both colors, pins for `color` and the legal moves
    /// of `color`.
    pub fn update_board(&mut self, tables: &AttackTables, color: Color) {
        for side in Color::BOTH {
            let attacks = generate_attacks(tables, side, &self.pieces[side.index()], self.occupied);
            self.attacks_all[side.index()] = union(&attacks);
            self.attacks[side.index()] = attacks;
        }

        let them = !color;
        self.pins[color.index()] = match self.king_square(color) {
            Some(king) => {
                let queens = self.pieces(them, Piece::Queen);
                detect_pins(
                    tables,
                    king,
                    self.pieces_all(color),
                    self.pieces(them, Piece::Rook) | queens,
                    self.pieces(them, Piece::Bishop) | queens,
                    self.occupied,
                )
            }
            None => Pins::new(),
        };

        let mut moves = MoveList::new();
        self.generate_legal_moves(tables, color, &mut moves);
        self.legal_moves = moves;
        engine_log!(
            trace,
            "{} legal moves for {color}",
            self.legal_moves.len()
        );
    }

    /// True if `color`'s king stands on a square the opponent attacks.
    #[must_use]
    pub fn check(&self, color: Color) -> bool {
        self.pieces(color, Piece::King)
            .intersects(self.attacks_all(!color))
    }

    /// In check with no legal moves. Meaningful after `update_board(color)`.
    #[must_use]
    pub fn checkmate(&self, color: Color) -> bool {
        self.check(color) && self.legal_moves.is_empty()
    }

    /// Not in check and no legal moves. Meaningful after `update_board(color)`.
    #[must_use]
    pub fn stalemate(&self, color: Color) -> bool {
        !self.check(color) && self.legal_moves.is_empty()
    }

    /// Look up a long algebraic move (e.g. `e2e4`, `e7e8q`) among the legal
    /// moves of the last `update_board` call.
    pub fn find_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        if !notation.is_ascii() {
            return Err(invalid_square());
        }
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;
        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
