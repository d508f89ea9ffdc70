/// Two rows whose queens sit on a shared diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalConflict {
    pub row: usize,
    pub other_row: usize,
}

/// Finds the first diagonal conflict in a placement, if any.
///
/// `perm[row]` is the column of the queen in `row`. Columns are assumed
/// distinct, so only diagonals are checked. Each row scans forward through
/// the later rows, then backward through the earlier ones, and the scan stops
/// at the first hit.
pub fn first_conflict(perm: &[usize]) -> Option<DiagonalConflict> {
    let n = perm.len();

    for row in 0..n {
        let column = perm[row] as i64;

        let ahead = (row + 1..n).map(|other| (other, (other - row) as i64));
        let behind = (0..row).rev().map(|other| (other, (row - other) as i64));

        for (other_row, dist) in ahead.chain(behind) {
            let other_column = perm[other_row] as i64;
            if other_column == column - dist || other_column == column + dist {
                return Some(DiagonalConflict { row, other_row });
            }
        }
    }

    None
}

/// True when no two queens share a diagonal.
pub fn is_accepted(perm: &[usize]) -> bool {
    first_conflict(perm).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::factorial;
    use crate::permutation::PermutationDecoder;

    fn accepted_on_board(n: usize) -> Vec<Vec<usize>> {
        let mut decoder = PermutationDecoder::new(n);
        (0..factorial(n as u64))
            .map(|index| decoder.decode(index).to_vec())
            .filter(|perm| is_accepted(perm))
            .collect()
    }

    #[test]
    fn four_queens_has_two_classical_solutions() {
        let solutions = accepted_on_board(4);
        assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn single_queen_is_accepted() {
        assert!(is_accepted(&[0]));
        assert!(is_accepted(&[]));
    }

    #[test]
    fn two_and_three_have_no_solutions() {
        assert!(accepted_on_board(2).is_empty());
        assert!(accepted_on_board(3).is_empty());
    }

    #[test]
    fn identity_conflicts_on_main_diagonal() {
        let conflict = first_conflict(&[0, 1, 2, 3]).expect("diagonal conflict");
        assert_eq!(conflict, DiagonalConflict { row: 0, other_row: 1 });
    }

    #[test]
    fn anti_diagonal_conflict_is_detected() {
        assert!(!is_accepted(&[3, 2, 1, 0]));
    }

    #[test]
    fn distant_conflict_is_reported_from_the_first_row_that_sees_it() {
        // Rows 0 and 3 share the anti-diagonal; no adjacent pair conflicts.
        let perm = [3, 1, 4, 0, 2];
        let conflict = first_conflict(&perm).expect("conflict");
        assert_eq!(conflict, DiagonalConflict { row: 0, other_row: 3 });
    }

    #[test]
    fn known_solution_of_eight_is_accepted() {
        assert!(is_accepted(&[0, 4, 7, 5, 2, 6, 1, 3]));
    }
}
