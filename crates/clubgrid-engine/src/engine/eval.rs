//! Formula evaluation against a grid snapshot.
//!
//! Every call starts from scratch: there is no dependency graph, no cache
//! and no cycle detection, since formulas can only read raw cell values.

use super::cell::Cell;
use super::formula::{Formula, FormulaRef};
use super::grid::Grid;
use super::number::parse_number;
use super::value::Value;

/// Evaluate `formula` against `grid`.
///
/// Text without a leading `=` comes back unchanged as [`Value::Text`].
/// Unsupported syntax, missing cells and non-numeric operands yield
/// [`Value::Error`]; this function never panics.
pub fn evaluate(formula: &str, grid: &Grid) -> Value {
    match Formula::parse(formula) {
        Formula::Literal(text) => Value::Text(text.to_string()),
        Formula::SumRange { start, end } => Value::Number(sum_range(grid, &start, &end)),
        Formula::Product(lhs, rhs) => product(grid, &lhs, &rhs),
        Formula::Reference(r) => match cell_at(grid, &r) {
            Some(cell) => Value::Text(cell.value.clone()),
            None => Value::Error,
        },
        Formula::Unsupported => Value::Error,
    }
}

fn cell_at<'g>(grid: &'g Grid, r: &FormulaRef) -> Option<&'g Cell> {
    grid.get_ref(&r.cell_ref()?)
}

/// Sum the numeric cells of `start.row..=end.row` x `start.col..=end.col`.
///
/// Bounds come from each corner independently, so a reversed range is empty.
/// Non-numeric cells and cells outside the grid count as zero.
fn sum_range(grid: &Grid, start: &FormulaRef, end: &FormulaRef) -> f64 {
    // An end corner on row 0 leaves nothing inside the grid.
    let Some(end_row) = end.row else {
        return 0.0;
    };
    // Rows and columns outside the grid contribute nothing; skip them outright.
    let first_row = start.row.unwrap_or(0);
    let last_row = end_row.min(grid.rows() - 1);
    let last_col = end.col.min(grid.cols() - 1);

    let mut sum = 0.0;
    for row in first_row..=last_row {
        for col in start.col..=last_col {
            if let Some(n) = grid.get(row, col).and_then(|c| parse_number(&c.value)) {
                sum += n;
            }
        }
    }
    sum
}

fn product(grid: &Grid, lhs: &FormulaRef, rhs: &FormulaRef) -> Value {
    let (Some(a), Some(b)) = (cell_at(grid, lhs), cell_at(grid, rhs)) else {
        return Value::Error;
    };
    match (parse_number(&a.value), parse_number(&b.value)) {
        (Some(x), Some(y)) => Value::Number(x * y),
        _ => Value::Error,
    }
}
