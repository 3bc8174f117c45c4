//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};

/// The eight winning lines as board index triples.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first complete line and the player who owns it.
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let squares = board.squares();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = squares[a].mark()?;
        (squares[b] == squares[a] && squares[c] == squares[a]).then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX_O_O__".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some((Player::X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO_XO__OX".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, [1, 4, 7])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X_OXO_O__".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, [2, 4, 6])));
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Both a row and a column complete; the row comes first.
        let board: Board = "XXXX__X__".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::X, [0, 1, 2])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
