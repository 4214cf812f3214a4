//! Sums matrix elements that are not shadowed by a zero above them.
//!
//! A zero masks its column for every later row. The first row is always
//! summed in full.

use crate::errors::CipherDrillsError;

/// A row-major integer matrix. Every function here borrows it as `&[Vec<i64>]`,
/// so a `&Matrix` can be passed directly.
pub type Matrix = Vec<Vec<i64>>;

/// Checks that `matrix` has at least one row and that every row has as many
/// columns as the first one. Returns the column count.
///
/// # Errors
///
/// Returns `CipherDrillsError::EmptyMatrix` if there are no rows.
/// Returns `CipherDrillsError::DimensionMismatch` if the rows have inconsistent lengths.
pub fn validate_rectangular(matrix: &[Vec<i64>]) -> Result<usize, CipherDrillsError> {
    let Some(first) = matrix.first() else {
        log::debug!("rejecting matrix with no rows");
        return Err(CipherDrillsError::EmptyMatrix);
    };
    let cols = first.len();

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != cols {
            log::debug!("rejecting jagged matrix at row {}", i);
            return Err(CipherDrillsError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                cols
            )));
        }
    }

    Ok(cols)
}

/// Walks the matrix top to bottom, calling `visit` with every visible cell
/// and returning the final column mask.
fn scan_visible<F>(matrix: &[Vec<i64>], mut visit: F) -> Result<Vec<bool>, CipherDrillsError>
where
    F: FnMut(i64) -> Result<(), CipherDrillsError>,
{
    let cols = validate_rectangular(matrix)?;
    let mut masked = vec![false; cols];

    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if i > 0 && masked[j] {
                continue;
            }
            visit(value)?;
            if value == 0 {
                masked[j] = true;
            }
        }
    }

    Ok(masked)
}

/// Adds up every value that does not appear below a `0` in its column.
///
/// # Errors
///
/// Returns `CipherDrillsError::EmptyMatrix` or `CipherDrillsError::DimensionMismatch`
/// for matrices that are not rectangular with at least one row, and
/// `CipherDrillsError::CalculationOverflow` if the sum does not fit in `i64`.
///
/// # Example
///
/// ```
/// # use cipher_drills::matrix::{Matrix, get_matrix_elements_sum};
/// let matrix: Matrix = vec![
///     vec![0, 1, 1, 2],
///     vec![0, 5, 0, 0],
///     vec![2, 0, 3, 3],
/// ];
/// assert_eq!(get_matrix_elements_sum(&matrix).unwrap(), 9);
/// ```
pub fn get_matrix_elements_sum(matrix: &[Vec<i64>]) -> Result<i64, CipherDrillsError> {
    let mut sum = 0i64;
    scan_visible(matrix, |value| {
        sum = sum
            .checked_add(value)
            .ok_or(CipherDrillsError::CalculationOverflow)?;
        Ok(())
    })?;

    log::trace!("matrix elements sum over {} rows: {}", matrix.len(), sum);

    Ok(sum)
}

/// Returns, for every column, whether a zero was seen in it during the scan.
///
/// Columns flagged `true` are the ones whose lower cells were left out of
/// [`get_matrix_elements_sum`].
pub fn masked_columns(matrix: &[Vec<i64>]) -> Result<Vec<bool>, CipherDrillsError> {
    scan_visible(matrix, |_| Ok(()))
}
