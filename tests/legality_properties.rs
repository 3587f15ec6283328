//! Rules behaviour observed through the public API only.

use chess_core::{CoordinateMove, Move, MoveParseError, Piece, Position, Square, STARTING_FEN};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn starting_position_has_twenty_moves() {
    let start = Position::from_fen(STARTING_FEN).unwrap();
    assert_eq!(start, Position::starting());
    assert_eq!(start.legal_moves().len(), 20);
    assert!(!start.is_checkmate());
    assert!(!start.is_stalemate());
}

#[test]
fn double_push_sets_en_passant_target() {
    let start = Position::starting();
    let mv = start.parse_move("e2e4").unwrap();
    let next = start.apply_move(&mv).unwrap();
    assert_eq!(
        next.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert_eq!(start.to_fen(), STARTING_FEN);
}

#[test]
fn coordinate_notation_parses() {
    let promo: CoordinateMove = "e7e8q".parse().unwrap();
    assert_eq!(promo.from, sq("e7"));
    assert_eq!(promo.to, sq("e8"));
    assert_eq!(promo.promotion, Some(Piece::Queen));

    let push: CoordinateMove = "e2e4".parse().unwrap();
    assert_eq!(push.from, sq("e2"));
    assert_eq!(push.to, sq("e4"));
    assert_eq!(push.promotion, None);

    assert!(matches!(
        "e2".parse::<CoordinateMove>(),
        Err(MoveParseError::InvalidFormat { .. })
    ));
}

#[test]
fn queen_takes_f7_is_checkmate() {
    let position =
        Position::from_fen("rnbqkb1r/pppp1ppp/5n2/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    // Black is to move here, so the capture is built by hand and applied
    // without a legality check.
    let mv = Move {
        captured: Some(Piece::Pawn),
        ..Move::quiet(sq("f3"), sq("f7"), Piece::Queen)
    };
    let after = position.apply_move(&mv).unwrap();
    assert!(after.is_checkmate());
    assert!(after.legal_moves().is_empty());
}

#[test]
fn kingside_castling_moves_the_rook() {
    let position =
        Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let mv = position.parse_move("e1g1").unwrap();
    assert!(mv.is_castling());
    assert!(position.is_valid_move(&mv));
    assert!(position.is_castling_legal(&mv));

    let after = position.apply_move(&mv).unwrap();
    assert_eq!(after.piece_at(sq("g1")).map(|(_, p)| p), Some(Piece::King));
    assert_eq!(after.piece_at(sq("f1")).map(|(_, p)| p), Some(Piece::Rook));
    assert!(after.is_empty(sq("h1")));
    assert!(after.is_empty(sq("e1")));
    assert_eq!(after.castling_rights().to_string(), "kq");
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let position =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .unwrap();
    let mv = position.parse_move("e5d6").unwrap();
    assert!(mv.en_passant);
    assert!(position.is_valid_move(&mv));

    let after = position.apply_move(&mv).unwrap();
    assert!(after.is_empty(sq("d5")));
    assert!(after.is_empty(sq("e5")));
    assert_eq!(after.piece_at(sq("d6")).map(|(_, p)| p), Some(Piece::Pawn));
}

#[test]
fn queries_leave_position_unchanged() {
    let position =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    let snapshot = position.clone();

    assert_eq!(position.legal_moves(), position.legal_moves());
    assert_eq!(position.is_checkmate(), position.is_checkmate());
    assert_eq!(position.to_fen(), position.to_fen());
    for mv in &position.legal_moves() {
        assert_eq!(position.is_valid_move(mv), position.is_valid_move(mv));
        assert_eq!(position.annotate(mv).unwrap(), position.annotate(mv).unwrap());
    }
    assert_eq!(position, snapshot);
}

#[test]
fn illegal_text_moves_are_rejected() {
    let start = Position::starting();
    assert!(matches!(
        start.parse_move("e2e5"),
        Err(MoveParseError::IllegalMove { .. })
    ));
    assert!(matches!(
        start.parse_move("z9e4"),
        Err(MoveParseError::InvalidFormat { .. })
    ));
    assert!(start.parse_move("e7e5").is_err());
}

#[test]
fn chess960_positions_are_playable() {
    for index in [0, 100, 518, 959] {
        let position = chess_core::chess960::position(index).unwrap();
        assert_eq!(position.legal_moves().len(), position.perft(1) as usize);
        let reparsed = Position::from_fen(&position.to_fen()).unwrap();
        assert_eq!(reparsed, position);
    }
    assert!(chess_core::chess960::position(960).is_err());
}
