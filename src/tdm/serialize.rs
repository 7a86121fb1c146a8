use std::io::Write;

use log::debug;
use num::Float;

use crate::error::TdmError;

use super::matrix::{Cell, TermDocumentMatrix};
use super::vocabulary::Vocabulary;

/// Exclusive handle on the serialization destination.
///
/// Exactly one writer owns the destination for the duration of a
/// [`serialize`] call; concurrent producers must go through separate handles
/// on separate destinations. Lines are appended whole, separator included, so
/// a completed call never leaves a dangling field behind.
pub struct MatrixWriter<W: Write> {
    inner: W,
}

impl<W: Write> MatrixWriter<W> {
    pub fn new(inner: W) -> Self {
        MatrixWriter { inner }
    }

    /// Appends one complete line, newline terminated.
    fn append_line(&mut self, line: &str) -> Result<(), TdmError> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TdmError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Releases the underlying destination.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Writes the vocabulary header and the surviving matrix rows as delimited
/// text.
///
/// The header is the vocabulary comma-joined in column order. Each surviving
/// row follows in original document order: rows whose column 0 carries the
/// pruned-document marker are skipped whole; pruned-term cells are skipped
/// within a row; every remaining cell becomes `y` for a non-zero stored
/// weight and an empty field otherwise.
///
/// Weighted values collapse to presence markers on purpose: magnitudes only
/// ever decide pruning. Callers needing real-valued output would need an
/// extension of this contract.
///
/// Serializing the same vocabulary and matrix twice yields byte-identical
/// output.
pub fn serialize<N, W>(
    vocabulary: &Vocabulary,
    matrix: &TermDocumentMatrix<N>,
    writer: &mut MatrixWriter<W>,
) -> Result<(), TdmError>
where
    N: Float,
    W: Write,
{
    let header = vocabulary.terms().collect::<Vec<_>>().join(",");
    writer.append_line(&header)?;

    let mut rows_written = 0usize;
    for row in 0..matrix.doc_num() {
        if matrix.is_row_pruned(row) {
            debug!("skipping pruned row {row}");
            continue;
        }

        let mut fields: Vec<&str> = Vec::with_capacity(vocabulary.len());
        for cell in matrix.row(row) {
            match cell {
                Cell::PrunedTerm => continue,
                Cell::Present(weight) if *weight != N::zero() => fields.push("y"),
                _ => fields.push(""),
            }
        }
        writer.append_line(&fields.join(","))?;
        rows_written += 1;
    }

    writer.flush()?;
    debug!(
        "serialized {rows_written} of {} rows, {} columns",
        matrix.doc_num(),
        vocabulary.len()
    );
    Ok(())
}
