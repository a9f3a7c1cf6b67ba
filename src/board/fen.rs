use super::error::FenError;
use super::types::{Bitboard, CastleSide, CastlingRights, Color, Piece, Square};
use super::Board;

impl Board {
    /// Parse a position from FEN notation, returning the board and the side
    /// to move. Clocks are accepted and ignored. Caches are left empty; call
    /// `update_board` before querying moves.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.put_piece(Square::new(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let found = board.pieces(color, Piece::King).popcount();
            if found != 1 {
                let color = match color {
                    Color::White => "White",
                    Color::Black => "Black",
                };
                return Err(FenError::KingCount { color, found });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.grant(Color::White, CastleSide::Short),
                'Q' => rights.grant(Color::White, CastleSide::Long),
                'k' => rights.grant(Color::Black, CastleSide::Short),
                'q' => rights.grant(Color::Black, CastleSide::Long),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling_rights = rights;

        if parts[3] != "-" {
            let target: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            // The target sits behind a pawn that just moved two squares.
            let expected_rank = if side == Color::White { 5 } else { 2 };
            if target.rank() != expected_rank {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            board.en_passant[side.index()] = Bitboard::from_square(target);
        }

        Ok((board, side))
    }

    /// Convert the position to FEN with `side` to move. Clocks are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self, side: Color) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                match (self.piece_on(sq), self.color_on(sq)) {
                    (Some(piece), Some(color)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    _ => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if side == Color::White { "w" } else { "b" };
        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::Short, 'K'),
            (Color::White, CastleSide::Long, 'Q'),
            (Color::Black, CastleSide::Short, 'k'),
            (Color::Black, CastleSide::Long, 'q'),
        ] {
            if self.castling_rights.has(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self.en_passant(side);
        let ep = if ep.is_empty() {
            "-".to_string()
        } else {
            ep.lsb().to_string()
        };

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}
