use super::board::Board;
use super::types::Direction;

/// Result of resolving one move, before any tile is spawned.
pub struct MoveOutcome {
    pub board: Board,
    pub score_gained: u32,
    pub moved: bool,
}

/// Resolves a directional move into the next board and score delta.
///
/// Every direction reduces to a single slide-left pass through the two
/// self-inverse orientation transforms: RIGHT reverses each row around the
/// slide, UP transposes around it, DOWN transposes then reverses before and
/// undoes both after. `moved` is a cell-by-cell comparison against the
/// input; a no-op move must not consume a turn.
pub fn resolve(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = board.clone();

    let score_gained = match direction {
        Direction::Left => slide_left(&mut next),
        Direction::Right => {
            next.reverse_rows();
            let score = slide_left(&mut next);
            next.reverse_rows();
            score
        }
        Direction::Up => {
            next.transpose();
            let score = slide_left(&mut next);
            next.transpose();
            score
        }
        Direction::Down => {
            next.transpose();
            next.reverse_rows();
            let score = slide_left(&mut next);
            next.reverse_rows();
            next.transpose();
            score
        }
    };

    let moved = next != *board;
    MoveOutcome {
        board: next,
        score_gained,
        moved,
    }
}

/// True while at least one direction can still change the board: an empty
/// cell exists, or two equal tiles sit next to each other horizontally or
/// vertically.
pub fn is_move_possible(board: &Board) -> bool {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let value = board.get(row, col);
            if value == 0 {
                return true;
            }
            if col + 1 < size && value == board.get(row, col + 1) {
                return true;
            }
            if row + 1 < size && value == board.get(row + 1, col) {
                return true;
            }
        }
    }
    false
}

fn slide_left(board: &mut Board) -> u32 {
    let size = board.size();
    let mut score = 0;
    for row in 0..size {
        let line: Vec<u32> = (0..size).map(|col| board.get(row, col)).collect();
        let (merged, row_score) = slide_and_merge_line(&line);
        score += row_score;
        for (col, &value) in merged.iter().enumerate() {
            board.set(row, col, value);
        }
    }
    score
}

/// Slides one line towards index 0: compacts the non-zero tiles preserving
/// order, then merges equal neighbours in a single left-to-right pass. A
/// merged tile never merges again within the same move.
fn slide_and_merge_line(line: &[u32]) -> (Vec<u32>, u32) {
    let mut result: Vec<u32> = Vec::with_capacity(line.len());
    let mut score: u32 = 0;

    let non_zero: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut i = 0;
    while i < non_zero.len() {
        if i + 1 < non_zero.len() && non_zero[i] == non_zero[i + 1] {
            let merged = non_zero[i] * 2;
            result.push(merged);
            score += merged;
            i += 2;
        } else {
            result.push(non_zero[i]);
            i += 1;
        }
    }

    result.resize(line.len(), 0);

    (result, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_4x4_with_row0(row: [u32; 4]) -> Board {
        Board::from_rows(vec![row.to_vec(), vec![0; 4], vec![0; 4], vec![0; 4]])
    }

    #[test]
    fn slide_line_merges_pair() {
        let (result, score) = slide_and_merge_line(&[2, 2, 0, 0]);
        assert_eq!(result, vec![4, 0, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn slide_line_compacts_without_merging() {
        let (result, score) = slide_and_merge_line(&[2, 4, 8, 16]);
        assert_eq!(result, vec![2, 4, 8, 16]);
        assert_eq!(score, 0);
    }

    #[test]
    fn slide_line_merges_across_gap() {
        let (result, score) = slide_and_merge_line(&[2, 0, 0, 2]);
        assert_eq!(result, vec![4, 0, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn slide_line_merges_each_pair_once() {
        let (result, score) = slide_and_merge_line(&[2, 2, 4, 4]);
        assert_eq!(result, vec![4, 8, 0, 0]);
        assert_eq!(score, 12);
    }

    #[test]
    fn slide_line_does_not_chain_merges() {
        // The 4 produced by merging must not merge with the trailing 2.
        let (result, score) = slide_and_merge_line(&[2, 2, 2, 0]);
        assert_eq!(result, vec![4, 2, 0, 0]);
        assert_eq!(score, 4);

        let (result, score) = slide_and_merge_line(&[4, 4, 4, 4]);
        assert_eq!(result, vec![8, 8, 0, 0]);
        assert_eq!(score, 16);
    }

    #[test]
    fn slide_line_of_length_one_never_merges() {
        let (result, score) = slide_and_merge_line(&[2]);
        assert_eq!(result, vec![2]);
        assert_eq!(score, 0);
    }

    #[test]
    fn left_move_merges_into_column_zero() {
        let board = empty_4x4_with_row0([2, 2, 0, 0]);
        let outcome = resolve(&board, Direction::Left);
        assert_eq!(outcome.board.to_rows()[0], vec![4, 0, 0, 0]);
        assert_eq!(outcome.score_gained, 4);
        assert!(outcome.moved);
    }

    #[test]
    fn right_move_slides_without_scoring() {
        let board = empty_4x4_with_row0([2, 0, 0, 0]);
        let outcome = resolve(&board, Direction::Right);
        assert_eq!(outcome.board.to_rows()[0], vec![0, 0, 0, 2]);
        assert_eq!(outcome.score_gained, 0);
        assert!(outcome.moved);
    }

    #[test]
    fn up_move_merges_column() {
        let board = Board::from_rows(vec![
            vec![2, 0, 0, 0],
            vec![2, 0, 0, 0],
            vec![0; 4],
            vec![0; 4],
        ]);
        let outcome = resolve(&board, Direction::Up);
        assert_eq!(outcome.board.get(0, 0), 4);
        assert_eq!(outcome.board.get(1, 0), 0);
        assert_eq!(outcome.score_gained, 4);
    }

    #[test]
    fn down_move_keeps_tile_order() {
        let board = Board::from_rows(vec![
            vec![2, 0, 0, 0],
            vec![4, 0, 0, 0],
            vec![0; 4],
            vec![0; 4],
        ]);
        let outcome = resolve(&board, Direction::Down);
        assert_eq!(outcome.board.get(2, 0), 2);
        assert_eq!(outcome.board.get(3, 0), 4);
        assert_eq!(outcome.score_gained, 0);
        assert!(outcome.moved);
    }

    #[test]
    fn resolve_does_not_mutate_input() {
        let board = empty_4x4_with_row0([2, 2, 0, 0]);
        let before = board.clone();
        let _ = resolve(&board, Direction::Left);
        assert_eq!(board, before);
    }

    #[test]
    fn sliding_twice_is_idempotent() {
        // No row forms a fresh adjacent pair after the first slide, so the
        // second slide has nothing left to do.
        let board = Board::from_rows(vec![
            vec![0, 2, 4, 8],
            vec![2, 2, 8, 0],
            vec![0, 8, 0, 8],
            vec![4, 0, 2, 0],
        ]);
        let first = resolve(&board, Direction::Left);
        assert!(first.moved);
        let second = resolve(&first.board, Direction::Left);
        assert!(!second.moved);
        assert_eq!(second.score_gained, 0);
        assert_eq!(second.board, first.board);
    }

    #[test]
    fn tile_value_sum_is_conserved() {
        let board = Board::from_rows(vec![
            vec![2, 2, 4, 4],
            vec![8, 0, 8, 2],
            vec![0, 2, 0, 2],
            vec![16, 16, 2, 0],
        ]);
        let sum_before: u32 = board.cells().iter().sum();
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let outcome = resolve(&board, direction);
            let sum_after: u32 = outcome.board.cells().iter().sum();
            assert_eq!(sum_after, sum_before);
        }
    }

    #[test]
    fn immovable_board_reports_no_change_in_all_directions() {
        let board = Board::from_rows(vec![vec![2, 4], vec![4, 2]]);
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let outcome = resolve(&board, direction);
            assert!(!outcome.moved);
            assert_eq!(outcome.score_gained, 0);
            assert_eq!(outcome.board, board);
        }
        assert!(!is_move_possible(&board));
    }

    #[test]
    fn move_possible_with_empty_cell() {
        let board = Board::from_rows(vec![vec![2, 4], vec![4, 0]]);
        assert!(is_move_possible(&board));
    }

    #[test]
    fn move_possible_with_horizontal_pair() {
        let board = Board::from_rows(vec![vec![2, 2], vec![4, 8]]);
        assert!(is_move_possible(&board));
    }

    #[test]
    fn move_possible_with_vertical_pair() {
        let board = Board::from_rows(vec![vec![2, 4], vec![2, 8]]);
        assert!(is_move_possible(&board));
    }

    #[test]
    fn single_occupied_cell_is_terminal() {
        let board = Board::from_rows(vec![vec![2]]);
        assert!(!is_move_possible(&board));
    }

    #[test]
    fn single_empty_cell_is_not_terminal() {
        let board = Board::empty(1);
        assert!(is_move_possible(&board));
    }
}
