//! Conversion of raw matrices into canonical grids
//!
//! Raw input can be any rows of values with an explicit truthiness
//! ([`Truthy`]), rows of values with a caller-supplied predicate, or a
//! dynamically typed JSON matrix. The engine itself only ever works on
//! [`Cell`]; caller-owned markers are mapped back at the boundary with
//! [`decode_with_markers`].

use super::{Cell, Grid};
use crate::error::{AutomatonError, Result};
use serde_json::Value;

/// Explicit conversion of a raw value to alive (`true`) or dead (`false`).
///
/// Zero, `false`, empty strings, `None`/`null` and NaN are dead; everything
/// else is alive.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Cell {
    fn is_truthy(&self) -> bool {
        self.is_alive()
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Encode rows of values using their [`Truthy`] conversion
pub fn encode<T: Truthy>(rows: &[Vec<T>]) -> Grid {
    encode_with(rows, T::is_truthy)
}

/// Encode rows of values with a custom liveness predicate
pub fn encode_with<T, F>(rows: &[Vec<T>], is_alive: F) -> Grid
where
    F: Fn(&T) -> bool,
{
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|value| Cell::from(is_alive(value))).collect())
            .collect(),
    )
}

/// Encode a dynamically typed matrix using JSON truthiness
pub fn encode_json(matrix: &Value) -> Result<Grid> {
    encode_json_with(matrix, |value| value.is_truthy())
}

/// Encode a dynamically typed matrix with a custom liveness predicate.
///
/// The matrix must be an array whose elements are themselves arrays; rows
/// may differ in length.
pub fn encode_json_with<F>(matrix: &Value, is_alive: F) -> Result<Grid>
where
    F: Fn(&Value) -> bool,
{
    let rows = matrix.as_array().ok_or(AutomatonError::InvalidInput {
        row: None,
        found: kind_of(matrix),
    })?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            row.as_array()
                .map(|cells| cells.iter().map(|value| Cell::from(is_alive(value))).collect())
                .ok_or(AutomatonError::InvalidInput {
                    row: Some(index),
                    found: kind_of(row),
                })
        })
        .collect::<Result<Vec<Vec<Cell>>>>()
        .map(Grid::from_rows)
}

/// Map a grid back onto caller-owned alive/dead markers
pub fn decode_with_markers<M: Clone>(grid: &Grid, alive: M, dead: M) -> Vec<Vec<M>> {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Alive => alive.clone(),
                    Cell::Dead => dead.clone(),
                })
                .collect()
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
