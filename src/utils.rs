use crate::error::SolverError;
use crate::puzzle::PUZZLE_SIZE;

/// Parses a whitespace-separated board encoding into a tile array.
///
/// The input is the linear encoding of the 3x3 board, row by row, with `0`
/// for the hole. Any amount of whitespace (including newlines) separates the
/// tokens.
///
/// Only the shape of the input is checked here. Whether the tiles form a
/// valid board is decided by [`crate::puzzle::EightPuzzleState::new`].
///
/// # Arguments
/// * `s`: The text to parse, e.g. `"1 2 3 4 5 6 7 0 8"`.
///
/// # Returns
/// * `Ok([u8; 9])` with the tiles in input order.
/// * `Err(SolverError::InvalidToken)` if a token is not a number in `0..=255`.
/// * `Err(SolverError::WrongLength)` if there are not exactly 9 tokens.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str;
/// use eight_puzzle_solver::error::SolverError;
///
/// assert_eq!(board_from_str("1 2 3\n4 5 6\n7 0 8"), Ok([1, 2, 3, 4, 5, 6, 7, 0, 8]));
/// assert!(matches!(board_from_str("1 2 x"), Err(SolverError::InvalidToken { .. })));
/// assert_eq!(
///     board_from_str("1 2 3"),
///     Err(SolverError::WrongLength { expected: 9, found: 3 })
/// );
/// ```
pub fn board_from_str(s: &str) -> Result<[u8; PUZZLE_SIZE], SolverError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    let mut tiles = [0u8; PUZZLE_SIZE];
    for (position, token) in tokens.iter().enumerate() {
        let value = token.parse::<u8>().map_err(|_| SolverError::InvalidToken {
            token: token.to_string(),
            position,
        })?;
        // Keep reading past the ninth token so a bad token still wins over a
        // length error.
        if let Some(slot) = tiles.get_mut(position) {
            *slot = value;
        }
    }

    if tokens.len() != PUZZLE_SIZE {
        return Err(SolverError::WrongLength {
            expected: PUZZLE_SIZE,
            found: tokens.len(),
        });
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_valid() {
        assert_eq!(
            board_from_str("  8 1 3   4 0 2 7 6 5 "),
            Ok([8, 1, 3, 4, 0, 2, 7, 6, 5])
        );
    }

    #[test]
    fn test_board_from_str_invalid_token() {
        assert_eq!(
            board_from_str("1 2 3 4 five 6 7 8 0"),
            Err(SolverError::InvalidToken {
                token: "five".to_string(),
                position: 4
            })
        );
        assert!(
            matches!(board_from_str("1 2 3 4 5 6 7 8 -1"), Err(SolverError::InvalidToken { .. })),
            "Negative numbers are not tiles"
        );
    }

    #[test]
    fn test_board_from_str_wrong_length() {
        assert_eq!(
            board_from_str(""),
            Err(SolverError::WrongLength { expected: 9, found: 0 })
        );
        assert_eq!(
            board_from_str("1 2 3 4 5 6 7 8 0 9"),
            Err(SolverError::WrongLength { expected: 9, found: 10 })
        );
    }

    #[test]
    fn test_board_from_str_does_not_validate_tiles() {
        // Shape is fine, content is checked by EightPuzzleState::new.
        assert_eq!(board_from_str("9 9 9 9 9 9 9 9 9"), Ok([9; 9]));
    }
}
