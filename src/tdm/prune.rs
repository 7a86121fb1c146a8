use log::debug;
use num::Float;
use serde::{Deserialize, Serialize};

use super::matrix::{Cell, TermDocumentMatrix};
use super::vocabulary::Vocabulary;

/// Value-range and row-survival thresholds for pruning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PruneConfig<N> {
    /// Inclusive lower bound a present weight must reach to survive.
    pub value_lower_bound: N,
    /// Inclusive upper bound a present weight must stay under to survive.
    pub value_upper_bound: N,
    /// Rows with fewer in-range present cells than this are pruned entirely.
    pub min_terms_per_document: usize,
}

/// Outcome of a prune pass, computed once and consumed by both the
/// vocabulary update and the serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruneResult {
    /// Vocabulary with the pruned terms removed, still in column order.
    pub vocabulary: Vocabulary,
    /// One flag per original column; `false` where the column was pruned
    /// globally.
    pub retained_columns: Vec<bool>,
    /// Indices of rows marked as pruned documents, in row order.
    pub pruned_rows: Vec<usize>,
}

/// Two-pass pruning of the matrix and vocabulary.
///
/// Pass 1 walks every row. A `Present` cell whose weight falls strictly
/// outside `[value_lower_bound, value_upper_bound]` is tagged as a pruned
/// column and its index recorded; a `Present` cell inside the bounds
/// (inclusive on both sides) counts toward the row's survival. A cell exactly
/// at a bound is therefore counted and never marked; the two checks are
/// complementary. `Absent` cells take part in neither check. Rows whose count
/// stays below `min_terms_per_document` are recorded for full pruning.
///
/// Pass 2 applies the marks: every recorded column becomes `PrunedTerm` in
/// every row, because pruning a term removes it globally; every recorded row
/// gets `PrunedDocument` written at column 0; the recorded term indices are
/// removed from the vocabulary in descending order.
///
/// The matrix keeps its original shape throughout. After this call, for every
/// surviving row the count of non-`PrunedTerm` cells equals the surviving
/// vocabulary length, and the surviving cells match the vocabulary
/// positionally, left to right.
pub fn prune<N>(
    matrix: &mut TermDocumentMatrix<N>,
    mut vocabulary: Vocabulary,
    config: &PruneConfig<N>,
) -> PruneResult
where
    N: Float,
{
    let mut columns_to_prune: Vec<usize> = Vec::new();
    let mut pruned_rows: Vec<usize> = Vec::new();

    // pass 1: mark
    for row in 0..matrix.doc_num() {
        let mut terms_present = 0usize;

        for col in 0..matrix.width() {
            if let Cell::Present(weight) = matrix.cell(row, col) {
                if weight < config.value_lower_bound || weight > config.value_upper_bound {
                    *matrix.cell_mut(row, col) = Cell::PrunedTerm;
                    if !columns_to_prune.contains(&col) {
                        columns_to_prune.push(col);
                        if let Some(term) = vocabulary.term_at(col) {
                            debug!("marked term {term:?} for pruning");
                        }
                    }
                } else {
                    terms_present += 1;
                }
            }
        }

        if terms_present < config.min_terms_per_document {
            pruned_rows.push(row);
            debug!("marked row {row} for pruning ({terms_present} terms in range)");
        }
    }

    columns_to_prune.sort_unstable();

    // pass 2: a pruned term is pruned in every row, not only the row that
    // triggered it
    for &col in &columns_to_prune {
        for row in 0..matrix.doc_num() {
            *matrix.cell_mut(row, col) = Cell::PrunedTerm;
        }
    }

    // pass 2: column 0 carries the row marker
    if matrix.width() > 0 {
        for &row in &pruned_rows {
            *matrix.cell_mut(row, 0) = Cell::PrunedDocument;
        }
    }

    let mut retained_columns = vec![true; matrix.width()];
    for &col in &columns_to_prune {
        retained_columns[col] = false;
    }

    vocabulary.remove_indices(columns_to_prune);
    debug!(
        "pruning left {} terms and {} of {} rows",
        vocabulary.len(),
        matrix.doc_num() - pruned_rows.len(),
        matrix.doc_num()
    );

    PruneResult {
        vocabulary,
        retained_columns,
        pruned_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tdm::weighting::{compute_matrix, WeightingScheme};

    fn bags(docs: &[&str]) -> Vec<Vec<String>> {
        docs.iter()
            .map(|d| d.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    fn build(
        docs: &[&str],
        scheme: WeightingScheme,
    ) -> (Vec<Vec<String>>, Vocabulary, TermDocumentMatrix<f32>) {
        let bags = bags(docs);
        let vocab = Vocabulary::build(&bags);
        let matrix = compute_matrix::<f32>(&bags, &vocab, scheme).unwrap();
        (bags, vocab, matrix)
    }

    #[test]
    fn in_range_values_trigger_no_pruning() {
        let (_, vocab, mut matrix) = build(&["a b c", "b c", "c"], WeightingScheme::Binary);
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 0.0,
                value_upper_bound: 1.0,
                min_terms_per_document: 1,
            },
        );
        assert_eq!(result.vocabulary.len(), 3);
        assert!(result.retained_columns.iter().all(|&kept| kept));
        assert!(result.pruned_rows.is_empty());
    }

    #[test]
    fn low_row_count_prunes_the_row_but_not_the_vocabulary() {
        let (_, vocab, mut matrix) = build(&["a b c", "b c", "c"], WeightingScheme::Binary);
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 0.0,
                value_upper_bound: 1.0,
                min_terms_per_document: 2,
            },
        );
        assert_eq!(result.pruned_rows, vec![2]);
        assert!(matrix.is_row_pruned(2));
        assert!(!matrix.is_row_pruned(0));
        // no term violated the bounds, so the vocabulary is untouched
        assert_eq!(result.vocabulary.len(), 3);
    }

    #[test]
    fn out_of_range_term_is_pruned_in_every_row() {
        // tf of "a" is 3 in row 0 only, but the column must disappear globally
        let (_, vocab, mut matrix) = build(&["a a a b", "a b", "b"], WeightingScheme::Tf);
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 0.0,
                value_upper_bound: 2.0,
                min_terms_per_document: 0,
            },
        );
        let terms: Vec<&str> = result.vocabulary.terms().collect();
        assert_eq!(terms, vec!["b"]);
        assert_eq!(result.retained_columns, vec![false, true]);
        for row in 0..matrix.doc_num() {
            assert_eq!(matrix.cell(row, 0), Cell::PrunedTerm);
        }
    }

    #[test]
    fn weight_exactly_at_a_bound_survives_and_counts() {
        let (_, vocab, mut matrix) = build(&["a a", "a"], WeightingScheme::Tf);
        // weights are 2 and 1, both exactly at a bound
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 1.0,
                value_upper_bound: 2.0,
                min_terms_per_document: 1,
            },
        );
        assert_eq!(result.vocabulary.len(), 1);
        assert!(result.pruned_rows.is_empty());
        assert_eq!(matrix.cell(0, 0), Cell::Present(2.0));
        assert_eq!(matrix.cell(1, 0), Cell::Present(1.0));
    }

    #[test]
    fn zero_idf_weight_is_present_and_prunable() {
        // "a" is in both documents, idf = log10(1) = 0, below the lower bound
        let (_, vocab, mut matrix) = build(&["a a", "a"], WeightingScheme::Idf);
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 0.5,
                value_upper_bound: 4.0,
                min_terms_per_document: 0,
            },
        );
        assert!(result.vocabulary.is_empty());
        assert_eq!(result.retained_columns, vec![false]);
        assert_eq!(matrix.cell(0, 0), Cell::PrunedTerm);
        assert_eq!(matrix.cell(1, 0), Cell::PrunedTerm);
    }

    #[test]
    fn absent_cells_take_part_in_no_check() {
        // row 1 has no "a"; with bounds excluding nothing, its zero cell must
        // neither be marked nor counted as present
        let (_, vocab, mut matrix) = build(&["a b", "b"], WeightingScheme::Binary);
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 1.0,
                value_upper_bound: 1.0,
                min_terms_per_document: 2,
            },
        );
        assert_eq!(result.vocabulary.len(), 2);
        assert_eq!(result.pruned_rows, vec![1]);
        assert_eq!(matrix.cell(1, 1), Cell::Present(1.0));
    }

    #[test]
    fn surviving_rows_uphold_the_width_invariant() {
        let (_, vocab, mut matrix) =
            build(&["a a a b c", "b c", "a c", "c"], WeightingScheme::Tf);
        let result = prune(
            &mut matrix,
            vocab,
            &PruneConfig {
                value_lower_bound: 0.0,
                value_upper_bound: 2.0,
                min_terms_per_document: 2,
            },
        );
        for row in 0..matrix.doc_num() {
            if matrix.is_row_pruned(row) {
                continue;
            }
            assert_eq!(matrix.retained_width(row), result.vocabulary.len());
        }
    }
}
