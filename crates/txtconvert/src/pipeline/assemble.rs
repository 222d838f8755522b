//! Header reconciliation and final table assembly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::comment::{CommentBlock, SENTINEL};
use crate::table::{Cell, DataRow, Table};

/// Date-like first column: `2016-Jul-01` style, or a fiscal quarter
/// such as `Q3 2020`.
static DATE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,4}[-/]\w+[-/]\d{1,4}|Q[1-4]\s?\d{4}").unwrap());

/// Merge the header candidate into the parsed rows and filter
/// degenerate rows.
///
/// The candidate is a copy of the first comment entry; the comment
/// block handed back to the caller is never touched. When the first
/// data row has exactly one more column than the candidate, a leading
/// label is inferred from that row's first cell: `"date"` if its
/// string form looks date-like, otherwise the sentinel itself as a
/// placeholder.
pub fn assemble(rows: Vec<DataRow>, comments: &CommentBlock) -> Table {
    let mut rows: Vec<DataRow> = rows
        .into_iter()
        .filter(|row| !Table::is_degenerate(row))
        .collect();

    if let Some(labels) = comments.first() {
        let mut header: DataRow = labels
            .fields()
            .iter()
            .cloned()
            .map(Cell::Text)
            .collect();

        if let Some(first_cell) = rows.first().and_then(|row| row.first()) {
            if rows[0].len() == header.len() + 1 {
                let label = if DATE_LIKE.is_match(&first_cell.to_string()) {
                    "date".to_string()
                } else {
                    SENTINEL.to_string()
                };
                header.insert(0, Cell::Text(label));
            }
        }

        rows.insert(0, header);
        rows.retain(|row| !Table::is_degenerate(row));
    }

    Table::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(fields: &[&str]) -> CommentBlock {
        CommentBlock::extract(&format!("&{}\n", fields.join("\t")))
    }

    fn text_row(cells: &[&str]) -> DataRow {
        cells.iter().map(|c| Cell::Text(c.to_string())).collect()
    }

    #[test]
    fn test_header_matches_width_unchanged() {
        let rows = vec![text_row(&["a", "b"])];
        let table = assemble(rows, &labels(&["X", "Y"]));
        assert_eq!(table.rows()[0], text_row(&["X", "Y"]));
    }

    #[test]
    fn test_infers_sentinel_label_for_plain_first_cell() {
        let rows = vec![vec![
            Cell::Number(1972.0),
            Cell::Number(36.0),
            Cell::Number(38.0),
        ]];
        let table = assemble(rows, &labels(&["Men", "Women"]));
        assert_eq!(table.rows()[0], text_row(&["&", "Men", "Women"]));
    }

    #[test]
    fn test_infers_date_label_for_datelike_first_cell() {
        let rows = vec![vec![
            Cell::Text("2016-Jul-01".to_string()),
            Cell::Number(1.0),
            Cell::Number(2.0),
        ]];
        let table = assemble(rows, &labels(&["Exports", "Imports"]));
        assert_eq!(table.rows()[0], text_row(&["date", "Exports", "Imports"]));
    }

    #[test]
    fn test_infers_date_label_for_fiscal_quarter() {
        let rows = vec![vec![Cell::Text("Q3 2020".to_string()), Cell::Number(7.0)]];
        let table = assemble(rows, &labels(&["Revenue"]));
        assert_eq!(table.rows()[0], text_row(&["date", "Revenue"]));
    }

    #[test]
    fn test_wider_gap_leaves_header_alone() {
        let rows = vec![vec![
            Cell::Number(1.0),
            Cell::Number(2.0),
            Cell::Number(3.0),
            Cell::Number(4.0),
        ]];
        let table = assemble(rows, &labels(&["A", "B"]));
        assert_eq!(table.rows()[0], text_row(&["A", "B"]));
    }

    #[test]
    fn test_empty_comment_block_no_header() {
        let rows = vec![text_row(&["a", "b"])];
        let table = assemble(rows, &CommentBlock::default());
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], text_row(&["a", "b"]));
    }

    #[test]
    fn test_degenerate_rows_dropped() {
        let rows = vec![
            vec![],
            text_row(&["", "x"]),
            text_row(&["kept", "y"]),
        ];
        let table = assemble(rows, &CommentBlock::default());
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], text_row(&["kept", "y"]));
    }

    #[test]
    fn test_header_inserted_even_without_data_rows() {
        let table = assemble(Vec::new(), &labels(&["Only", "Labels"]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], text_row(&["Only", "Labels"]));
    }

    #[test]
    fn test_header_with_empty_first_field_is_dropped() {
        // A first comment line like `&=x` yields fields ["", "x"]; the
        // assembled header is degenerate and the final filter removes
        // it, leaving only the data rows.
        let block = CommentBlock::extract("&=x\n");
        assert_eq!(block.first().unwrap().fields(), ["", "x"]);

        let rows = vec![vec![Cell::Number(1.0), Cell::Number(2.0)]];
        let table = assemble(rows, &block);

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], vec![Cell::Number(1.0), Cell::Number(2.0)]);
        // The comment block itself still carries the entry untouched.
        assert_eq!(block.first().unwrap().fields(), ["", "x"]);
    }

    #[test]
    fn test_comment_block_not_mutated() {
        let block = labels(&["Men", "Women"]);
        let rows = vec![vec![
            Cell::Number(1972.0),
            Cell::Number(36.0),
            Cell::Number(38.0),
        ]];
        let _ = assemble(rows, &block);
        assert_eq!(block.first().unwrap().fields(), ["Men", "Women"]);
    }

    #[test]
    fn test_coerced_numeric_first_cell_uses_string_form() {
        // 2016.0 stringifies as "2016": no separator, so no date match.
        let rows = vec![vec![
            Cell::Number(2016.0),
            Cell::Number(1.0),
            Cell::Number(2.0),
        ]];
        let table = assemble(rows, &labels(&["A", "B"]));
        assert_eq!(table.rows()[0], text_row(&["&", "A", "B"]));
    }
}
