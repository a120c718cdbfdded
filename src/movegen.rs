//! Pseudo-legal move generation, attack queries, legality filtering, and
//! insufficient-material detection.
//!
//! Attacks are computed on demand by re-deriving, for a given square,
//! whether any enemy piece could reach it — rather than maintaining a
//! materialized attack matrix. Both give identical results, and on-demand
//! queries need no incremental bookkeeping when a position changes.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const PROMOTABLE_KINDS: [PieceKind; 4] =
    [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

/// `true` if any piece of `attacker` could move to `target` on `board`,
/// ignoring whose turn it is and whether the attacker's own king would be
/// left in check.
pub fn is_square_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    // Pawns: a pawn attacks diagonally forward, so we look one row *behind*
    // (from the pawn's point of view) the target for an attacking pawn.
    let pawn_row_delta = -attacker.pawn_direction();
    for dj in [-1i8, 1] {
        if let Some(sq) = target.offset(pawn_row_delta, dj) {
            if let Some(p) = board.get(sq) {
                if p.color == attacker && p.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }

    for (di, dj) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(di, dj) {
            if let Some(p) = board.get(sq) {
                if p.color == attacker && p.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    for (di, dj) in QUEEN_DIRS {
        if let Some(sq) = target.offset(di, dj) {
            if let Some(p) = board.get(sq) {
                if p.color == attacker && p.kind == PieceKind::King {
                    return true;
                }
            }
        }
    }

    for (di, dj) in ROOK_DIRS {
        if slider_attacks(board, target, attacker, di, dj, &[PieceKind::Rook, PieceKind::Queen]) {
            return true;
        }
    }
    for (di, dj) in BISHOP_DIRS {
        if slider_attacks(board, target, attacker, di, dj, &[PieceKind::Bishop, PieceKind::Queen])
        {
            return true;
        }
    }

    false
}

fn slider_attacks(
    board: &Board,
    from: Square,
    attacker: Color,
    di: i8,
    dj: i8,
    kinds: &[PieceKind],
) -> bool {
    let mut cursor = from;
    while let Some(sq) = cursor.offset(di, dj) {
        if let Some(p) = board.get(sq) {
            return p.color == attacker && kinds.contains(&p.kind);
        }
        cursor = sq;
    }
    false
}

/// `true` if `color`'s king is currently attacked.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.board.find_king(color) {
        Some(king_sq) => is_square_attacked(&position.board, king_sq, color.opponent()),
        None => false,
    }
}

/// Generates every pseudo-legal move for the side to move — legal except
/// possibly for leaving its own king in check.
pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    let board = &position.board;
    let color = position.turn;

    for piece in board.occupied().filter(|p| p.color == color) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(position, piece, &mut moves),
            PieceKind::Knight => generate_step_moves(board, piece, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::King => {
                generate_step_moves(board, piece, &QUEEN_DIRS, &mut moves);
                generate_castling_moves(position, piece, &mut moves);
            }
            PieceKind::Rook => generate_sliding_moves(board, piece, &ROOK_DIRS, &mut moves),
            PieceKind::Bishop => generate_sliding_moves(board, piece, &BISHOP_DIRS, &mut moves),
            PieceKind::Queen => generate_sliding_moves(board, piece, &QUEEN_DIRS, &mut moves),
        }
    }

    moves
}

fn generate_step_moves(board: &Board, piece: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(di, dj) in offsets {
        let Some(to) = piece.square.offset(di, dj) else { continue };
        push_step_or_capture(board, piece, to, out);
    }
}

fn push_step_or_capture(board: &Board, piece: Piece, to: Square, out: &mut Vec<Move>) {
    match board.get(to) {
        None => out.push(Move::simple(piece, piece.square, to)),
        Some(target) if target.color != piece.color => {
            out.push(Move::simple(piece, piece.square, to).with_capture(target))
        }
        Some(_) => {}
    }
}

fn generate_sliding_moves(board: &Board, piece: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(di, dj) in dirs {
        let mut cursor = piece.square;
        while let Some(to) = cursor.offset(di, dj) {
            match board.get(to) {
                None => {
                    out.push(Move::simple(piece, piece.square, to));
                    cursor = to;
                }
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::simple(piece, piece.square, to).with_capture(target));
                    }
                    break;
                }
            }
        }
    }
}

fn generate_pawn_moves(position: &Position, piece: Piece, out: &mut Vec<Move>) {
    let board = &position.board;
    let color = piece.color;
    let dir = color.pawn_direction();
    let promotion_row = color.promotion_row();

    let push_with_promotion = |to: Square, out: &mut Vec<Move>, base: Move| {
        if to.i == promotion_row {
            for kind in PROMOTABLE_KINDS {
                out.push(base.with_promotion(kind));
            }
        } else {
            out.push(base);
        }
    };

    if let Some(one) = piece.square.offset(dir, 0) {
        if board.get(one).is_none() {
            push_with_promotion(one, out, Move::simple(piece, piece.square, one));

            if piece.square.i == color.pawn_start_row() {
                if let Some(two) = piece.square.offset(dir * 2, 0) {
                    if board.get(two).is_none() {
                        out.push(
                            Move::simple(piece, piece.square, two).with_double_pawn_push(),
                        );
                    }
                }
            }
        }
    }

    for dj in [-1i8, 1] {
        let Some(to) = piece.square.offset(dir, dj) else { continue };
        if let Some(target) = board.get(to) {
            if target.color != color {
                let base = Move::simple(piece, piece.square, to).with_capture(target);
                push_with_promotion(to, out, base);
            }
        } else if position.en_passant == Some(to) {
            let captured_sq = to.offset(-dir, 0).expect("en passant square has a pawn behind it");
            let captured = Piece::new(color.opponent(), PieceKind::Pawn, captured_sq);
            out.push(Move::simple(piece, piece.square, to).with_capture(captured));
        }
    }
}

fn generate_castling_moves(position: &Position, king: Piece, out: &mut Vec<Move>) {
    let color = king.color;
    let rights = position.castling.for_color(color);
    let board = &position.board;
    let opponent = color.opponent();
    let home_rank = king.square.i;

    if is_square_attacked(board, king.square, opponent) {
        return;
    }

    if rights.king_side {
        let f = Square::new_unchecked(home_rank, 5);
        let g = Square::new_unchecked(home_rank, 6);
        if board.get(f).is_none()
            && board.get(g).is_none()
            && !is_square_attacked(board, f, opponent)
            && !is_square_attacked(board, g, opponent)
        {
            out.push(Move::simple(king, king.square, g).with_king_side_castling());
        }
    }

    if rights.queen_side {
        let d = Square::new_unchecked(home_rank, 3);
        let c = Square::new_unchecked(home_rank, 2);
        let b = Square::new_unchecked(home_rank, 1);
        if board.get(d).is_none()
            && board.get(c).is_none()
            && board.get(b).is_none()
            && !is_square_attacked(board, d, opponent)
            && !is_square_attacked(board, c, opponent)
        {
            out.push(Move::simple(king, king.square, c).with_queen_side_castling());
        }
    }
}

/// Filters pseudo-legal moves down to legal ones by simulating each and
/// rejecting those that leave the mover's own king in check.
pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    let color = position.turn;
    generate_pseudo_legal_moves(position)
        .into_iter()
        .filter(|mv| {
            let after = position.make_move(mv, false);
            !is_in_check(&after, color)
        })
        .collect()
}

/// `true` when neither side has enough material to deliver checkmate by
/// any sequence of legal moves: king vs king, king+minor vs king, or
/// king+bishop vs king+bishop with both bishops on the same color square.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut white = Vec::new();
    let mut black = Vec::new();
    for piece in board.occupied() {
        match piece.kind {
            PieceKind::King => {}
            _ => match piece.color {
                Color::White => white.push(piece),
                Color::Black => black.push(piece),
            },
        }
    }

    match (white.len(), black.len()) {
        (0, 0) => true,
        (1, 0) | (0, 1) => {
            let lone = if white.len() == 1 { white[0] } else { black[0] };
            matches!(lone.kind, PieceKind::Bishop | PieceKind::Knight)
        }
        (1, 1) => {
            white[0].kind == PieceKind::Bishop
                && black[0].kind == PieceKind::Bishop
                && square_color(white[0].square) == square_color(black[0].square)
        }
        _ => false,
    }
}

fn square_color(sq: Square) -> bool {
    (sq.i + sq.j) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let position = Position::starting();
        assert_eq!(generate_legal_moves(&position).len(), 20);
    }

    #[test]
    fn starting_position_is_not_check() {
        let position = Position::starting();
        assert!(!is_in_check(&position, Color::White));
    }

    #[test]
    fn en_passant_capture_is_generated() {
        let position = Position::from_fen(
            "rnbqkbnr/ppp1pppp/8/2PpP3/8/8/PP1P1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .unwrap();
        let moves = generate_legal_moves(&position);
        assert!(moves.iter().any(|m| m.to_algebraic() == "e5d6" && m.is_en_passant()));
    }

    #[test]
    fn castling_available_when_path_is_clear_and_safe() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = generate_legal_moves(&position);
        assert!(moves.iter().any(|m| m.is_king_side_castling));
        assert!(moves.iter().any(|m| m.is_queen_side_castling));
    }

    #[test]
    fn castling_through_check_is_forbidden() {
        // Black rook on f8 attacks f1, barring white from castling kingside.
        let position = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves = generate_legal_moves(&position);
        assert!(!moves.iter().any(|m| m.is_king_side_castling));
    }

    #[test]
    fn promotion_expands_into_all_four_kinds() {
        let position = Position::from_fen("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
        let moves = generate_legal_moves(&position);
        let promotions: Vec<_> = moves.iter().filter(|m| m.from.algebraic() == "a7").collect();
        assert_eq!(promotions.len(), 4);
    }

    #[test]
    fn insufficient_material_king_vs_king() {
        let board = Board::from_placement("8/8/8/4k3/8/8/8/4K3").unwrap();
        assert!(is_insufficient_material(&board));
    }

    #[test]
    fn insufficient_material_king_bishop_vs_king() {
        let board = Board::from_placement("8/8/8/4k3/8/8/8/3BK3").unwrap();
        assert!(is_insufficient_material(&board));
    }

    #[test]
    fn rook_is_sufficient_material() {
        let board = Board::from_placement("8/8/8/4k3/8/8/8/3RK3").unwrap();
        assert!(!is_insufficient_material(&board));
    }
}
