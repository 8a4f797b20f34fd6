//! Grid construction.
//!
//! Reshapes the flat, ordered offspring sequence into the familiar
//! two-dimensional Punnett square: one row per maternal gamete, one
//! column per paternal gamete.

use crate::types::PunnettError;

/// Reshape a flat sequence of canonical genotypes into rows of
/// `columns` cells each, preserving sequence order left-to-right,
/// top-to-bottom.
///
/// `columns` is the size of the paternal gamete set. A column count of
/// zero, or one that does not evenly divide the sequence length, means
/// an upstream stage broke its contract; the error is an internal
/// invariant failure, not a user-input problem.
///
/// # Errors
///
/// Returns [`PunnettError::GridDimensions`] when the sequence cannot be
/// reshaped.
pub fn build_grid(offspring: Vec<String>, columns: usize) -> Result<Vec<Vec<String>>, PunnettError> {
    if columns == 0 || offspring.len() % columns != 0 {
        return Err(PunnettError::GridDimensions {
            cells: offspring.len(),
            columns,
        });
    }

    let mut grid = Vec::with_capacity(offspring.len() / columns);
    let mut row = Vec::with_capacity(columns);
    for genotype in offspring {
        row.push(genotype);
        if row.len() == columns {
            grid.push(std::mem::replace(&mut row, Vec::with_capacity(columns)));
        }
    }
    Ok(grid)
}
