//! Table data model: typed cells, rows, and the assembled table.

use std::fmt;

use serde::{Serialize, Serializer};

/// One value in a data row: numeric if the whole trimmed cell looked
/// like a number at parse time, text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Number(_) => None,
            Cell::Text(s) => Some(s),
        }
    }

    /// True for a number with no fractional part that fits in i64.
    fn as_integral(&self) -> Option<i64> {
        match self {
            Cell::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            _ => None,
        }
    }
}

/// String form used for CSV rendering and pattern tests. Integral
/// numbers render without a decimal point (`1972`, not `1972.0`).
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(i) = self.as_integral() {
            return write!(f, "{i}");
        }
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Integral numbers serialize as JSON integers, matching the CSV
/// rendering; everything else is a plain float or string.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(i) = self.as_integral() {
            return serializer.serialize_i64(i);
        }
        match self {
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// An ordered row of cells.
pub type DataRow = Vec<Cell>;

/// The final table: ordered rows, the first of which may be a merged
/// header row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table(Vec<DataRow>);

impl Table {
    pub fn new(rows: Vec<DataRow>) -> Self {
        Table(rows)
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A degenerate row has no cells, or an empty string in its first
    /// cell. Degenerate rows never appear in a final table.
    pub fn is_degenerate(row: &DataRow) -> bool {
        match row.first() {
            None => true,
            Some(Cell::Text(s)) => s.is_empty(),
            Some(Cell::Number(_)) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integral_number() {
        assert_eq!(Cell::Number(1972.0).to_string(), "1972");
        assert_eq!(Cell::Number(-5.0).to_string(), "-5");
    }

    #[test]
    fn test_display_fractional_number() {
        assert_eq!(Cell::Number(0.068027211).to_string(), "0.068027211");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Cell::Text("Airbus".to_string()).to_string(), "Airbus");
    }

    #[test]
    fn test_serialize_mixed_row() {
        let row: DataRow = vec![
            Cell::Text("Airbus".to_string()),
            Cell::Number(5558.0),
            Cell::Number(12.5),
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"["Airbus",5558,12.5]"#);
    }

    #[test]
    fn test_is_degenerate() {
        assert!(Table::is_degenerate(&vec![]));
        assert!(Table::is_degenerate(&vec![Cell::Text(String::new())]));
        assert!(!Table::is_degenerate(&vec![Cell::Number(0.0)]));
        assert!(!Table::is_degenerate(&vec![Cell::Text("x".to_string())]));
    }
}
