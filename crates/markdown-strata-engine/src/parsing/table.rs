use serde::Serialize;

use super::kinds::{Alignment, TableRow};

/// Column-typed grid built from a table block's raw rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    pub header: Vec<String>,
    pub alignments: Vec<Alignment>,
    /// Data rows whose cell count matches the header.
    pub rows: Vec<Vec<String>>,
    /// Data rows excluded from the grid for a cell-count mismatch. They are
    /// counted here rather than silently lost.
    pub dropped_rows: usize,
}

impl TableModel {
    /// Total data rows seen, kept or dropped.
    pub fn raw_row_count(&self) -> usize {
        self.rows.len() + self.dropped_rows
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// Specializes a table candidate (header row, alignment row, data rows)
/// into a [`TableModel`]. Rows that do not match the header's cell count
/// are dropped from the grid but counted.
pub fn parse_table(raw_rows: &[String]) -> TableModel {
    let header = raw_rows.first().map(|r| TableRow::split_cells(r)).unwrap_or_default();
    let alignments = raw_rows
        .get(1)
        .map(|r| TableRow::split_cells(r).iter().map(|c| TableRow::alignment_of(c)).collect())
        .unwrap_or_default();

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for raw in raw_rows.iter().skip(2) {
        let cells = TableRow::split_cells(raw);
        if cells.len() == header.len() {
            rows.push(cells);
        } else {
            dropped += 1;
        }
    }
    TableModel { header, alignments, rows, dropped_rows: dropped }
}
