use serde::Deserialize;

use chess_core::{Outcome, Position};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn load() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

fn coordinates_from_problem_moves(moves: &str) -> String {
    moves.replace('-', "")
}

fn play(problem: &Problem) -> (Position, String) {
    let position = Position::from_fen(&problem.fen)
        .unwrap_or_else(|e| panic!("bad fen {}: {e}", problem.fen));
    let mv = position
        .parse_move(&coordinates_from_problem_moves(&problem.moves))
        .unwrap_or_else(|e| panic!("fen: {} move: {}: {e}", problem.fen, problem.moves));
    let san = position.to_algebraic(&mv).unwrap();
    (position.apply_move(&mv).unwrap(), san)
}

#[test]
fn mate_in_one_suite() {
    let set = load();
    let mut checked = 0;

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let (after, san) = play(problem);
        assert!(
            after.is_checkmate(),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
        assert!(after.legal_moves().is_empty());
        assert!(san.ends_with('#'), "{san} should carry a mate suffix");
        assert_eq!(
            after.outcome(),
            Some(Outcome::Checkmate {
                winner: after.side_to_move().opponent()
            })
        );
        checked += 1;
    }

    assert!(checked > 0);
}

#[test]
fn stalemate_suite() {
    let set = load();

    for problem in set.problems.iter().filter(|p| p.kind == "Stalemate in One") {
        let (after, san) = play(problem);
        assert!(
            after.is_stalemate(),
            "stalemate failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
        assert!(!san.ends_with('+') && !san.ends_with('#'));
        assert_eq!(after.outcome(), Some(Outcome::Stalemate));
        assert_eq!(after.outcome().map(Outcome::result), Some("1/2-1/2"));
    }
}
