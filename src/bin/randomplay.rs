// Smoke-play the legality engine: start from the standard position and let
// both sides play random engine-approved moves for a while, then dump the
// final position as JSON. Handy for eyeballing that the rules behave sanely
// end to end.

use chess_rules::board::Board;
use chess_rules::coordinate::coord;
use chess_rules::engine::can_move;
use chess_rules::piece::Color;
use rand::Rng;

const MAX_MOVES: u32 = 60;
const MAX_TRIES_PER_MOVE: u32 = 2_000;

fn main() {
    let mut board = Board::standard();
    let mut rng = rand::thread_rng();
    let mut turn = Color::White;
    let mut played = 0;

    'game: while played < MAX_MOVES {
        for _ in 0..MAX_TRIES_PER_MOVE {
            let from = coord(rng.gen_range(0..8), rng.gen_range(0..8));
            let to = coord(rng.gen_range(0..8), rng.gen_range(0..8));

            let mover = match board.piece_at(from) {
                Some(piece) if piece.color() == turn => *piece,
                _ => continue,
            };
            if !can_move(&mover, from, to, &board) {
                continue;
            }

            println!(
                "{:?} {:?}: ({}, {}) -> ({}, {})",
                mover.color(),
                mover.kind(),
                from.row,
                from.column,
                to.row,
                to.column
            );
            board.apply_move(from, to);
            played += 1;
            turn = turn.opposite();
            continue 'game;
        }
        // No random probe found a legal move; stop rather than spin.
        break;
    }

    eprintln!("played {played} moves");
    match serde_json::to_string_pretty(&board) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize board: {err}"),
    }
}
