//! Winning line analysis for the 3x3 board

use crate::board::{BOARD_SIZE, Cell, Player};

/// Winning line indices, in scan order: rows, then columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has three in a row
pub fn has_won(cells: &[Cell; BOARD_SIZE], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Get the owner of the first completed line in scan order, if any.
///
/// A single line can only be uniform in one mark, so checking each line
/// for the human mark before the computer mark reduces to finding the
/// first uniform non-empty line.
pub fn winner(cells: &[Cell; BOARD_SIZE]) -> Option<Player> {
    for line in &WINNING_LINES {
        if cells[line[0]] != Cell::Empty
            && cells[line[0]] == cells[line[1]]
            && cells[line[1]] == cells[line[2]]
        {
            return match cells[line[0]] {
                Cell::Human => Some(Player::Human),
                Cell::Computer => Some(Player::Computer),
                Cell::Empty => None,
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Human;
        cells[1] = Cell::Human;
        cells[2] = Cell::Human;

        assert!(has_won(&cells, Player::Human));
        assert!(!has_won(&cells, Player::Computer));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Computer;
        cells[3] = Cell::Computer;
        cells[6] = Cell::Computer;

        assert!(has_won(&cells, Player::Computer));
        assert!(!has_won(&cells, Player::Human));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Human;
        cells[4] = Cell::Human;
        cells[8] = Cell::Human;

        assert!(has_won(&cells, Player::Human));

        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::Computer;
        cells[4] = Cell::Computer;
        cells[6] = Cell::Computer;

        assert!(has_won(&cells, Player::Computer));
    }

    #[test]
    fn test_winner_none_on_two_in_a_row() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Human;
        cells[1] = Cell::Human;

        assert_eq!(winner(&cells), None);
    }

    #[test]
    fn test_winner_matches_has_won() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::Computer;
        cells[4] = Cell::Computer;
        cells[7] = Cell::Computer;

        assert_eq!(winner(&cells), Some(Player::Computer));
        assert!(has_won(&cells, Player::Computer));
    }

    #[test]
    fn test_all_eight_lines() {
        for line in WINNING_LINES {
            let mut cells = [Cell::Empty; 9];
            for idx in line {
                cells[idx] = Cell::Human;
            }
            assert_eq!(winner(&cells), Some(Player::Human), "line {line:?}");
        }
    }
}
