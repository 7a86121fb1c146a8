use num::Float;
use serde::{Deserialize, Serialize};

/// One cell of the term-by-document matrix.
///
/// The serialized form of this matrix historically overloaded three float
/// values: `0` for an absent term, `-1` for a globally pruned column and `-2`
/// in column 0 for a pruned row. Those sentinels are carried here as explicit
/// variants so a legitimate weight can never collide with a pruning marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell<N> {
    /// The term does not occur in this document.
    Absent,
    /// The term occurs, with the weight the active scheme assigned. A weight
    /// of zero is legal: under IDF a term present in every document scores
    /// `log10(1) = 0` while still being present.
    Present(N),
    /// The term's column was pruned globally; true for this cell in every row.
    PrunedTerm,
    /// Column 0 only: the whole row is pruned and must be skipped at
    /// serialization. The rest of the row is left as-is and ignored.
    PrunedDocument,
}

/// Term-by-document matrix: rows are documents, columns are the initial
/// vocabulary. Never resized after creation; column removal is virtual,
/// expressed through [`Cell::PrunedTerm`] tags.
///
/// Memory is O(documents x initial vocabulary). No paging or chunking is
/// attempted for large corpora.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDocumentMatrix<N> {
    rows: Vec<Vec<Cell<N>>>,
    width: usize,
}

impl<N> TermDocumentMatrix<N>
where
    N: Float,
{
    /// Fresh all-absent matrix of the given shape.
    pub(crate) fn zeroed(doc_num: usize, width: usize) -> Self {
        TermDocumentMatrix {
            rows: vec![vec![Cell::Absent; width]; doc_num],
            width,
        }
    }

    /// Number of document rows, pruned rows included.
    pub fn doc_num(&self) -> usize {
        self.rows.len()
    }

    /// Initial vocabulary width, pruned columns included.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell<N> {
        self.rows[row][col]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell<N> {
        &mut self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[Cell<N>] {
        &self.rows[row]
    }

    /// Whether the whole row was pruned (column 0 carries the marker).
    pub fn is_row_pruned(&self, row: usize) -> bool {
        matches!(self.rows[row].first(), Some(Cell::PrunedDocument))
    }

    /// Count of cells in a row not tagged as a pruned column.
    ///
    /// For every surviving row this equals the surviving vocabulary length,
    /// and the surviving cells correspond positionally, left to right, to the
    /// vocabulary order. The serializer relies on exactly this, instead of an
    /// explicit column-to-term mapping.
    pub fn retained_width(&self, row: usize) -> usize {
        self.rows[row]
            .iter()
            .filter(|cell| !matches!(cell, Cell::PrunedTerm))
            .count()
    }
}
