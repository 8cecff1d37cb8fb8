//! Kani proof harnesses for the board engine.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Coordinate, Mark};

    fn any_coordinate() -> Coordinate {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Coordinate::ALL[index]
    }

    fn any_mark() -> Mark {
        if kani::any() { Mark::X } else { Mark::O }
    }

    /// Counters stay equal to the grid contents across any short sequence
    /// of moves, legal or not.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_counters_track_grid() {
        let mut board = Board::new();
        for _ in 0..4 {
            let _ = board.apply_move(any_coordinate(), any_mark());
            assert!(board.counters_consistent());
        }
    }

    /// A rejected move leaves the board untouched.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_occupied_move_is_noop() {
        let mut board = Board::new();
        let target = any_coordinate();
        board.apply_move(target, any_mark()).unwrap();
        let before = board.clone();

        assert!(board.apply_move(target, any_mark()).is_err());
        assert!(board == before);
    }
}
