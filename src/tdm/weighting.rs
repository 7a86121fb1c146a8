use std::collections::HashMap;

use log::debug;
use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TdmError;

use super::matrix::{Cell, TermDocumentMatrix};
use super::vocabulary::Vocabulary;

/// Weighting scheme applied to matrix cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightingScheme {
    /// 1 if the term occurs in the document.
    Binary,
    /// Raw occurrence count of the term in the document.
    Tf,
    /// `log10(N / df(term))`, identical for every document containing the
    /// term.
    Idf,
    /// Term frequency multiplied by the term's IDF.
    TfIdf,
}

/// Number of documents whose bag contains the term at least once.
///
/// Containment only; occurrence counts do not weigh in. The scan over the
/// collection is parallel and read-only.
pub fn document_frequency<N>(documents: &[Vec<String>], term: &str) -> N
where
    N: Float + Send + Sync,
{
    documents
        .par_iter()
        .filter(|bag| bag.iter().any(|token| token.as_str() == term))
        .map(|_| N::one())
        .reduce(N::zero, |a, b| a + b)
}

/// Inverse document frequency of a term over the collection.
///
/// A term occurring in every document legitimately scores `log10(1) = 0`. A
/// term occurring in no document has no defined IDF; that is an
/// internal-consistency defect and is reported as
/// [`TdmError::ZeroDocumentFrequency`] rather than letting `inf` or `NaN`
/// leak into the matrix.
pub fn idf<N>(documents: &[Vec<String>], term: &str) -> Result<N, TdmError>
where
    N: Float + Send + Sync,
{
    let df = document_frequency::<N>(documents, term);
    if df == N::zero() {
        return Err(TdmError::ZeroDocumentFrequency {
            term: term.to_string(),
        });
    }
    let doc_num = documents
        .iter()
        .fold(N::zero(), |acc, _| acc + N::one());
    Ok((doc_num / df).log10())
}

/// Occurrence count of a term within one bag of words, as a weight.
fn occurrences<N>(bag: &[String], term: &str) -> N
where
    N: Float,
{
    bag.iter()
        .filter(|token| token.as_str() == term)
        .fold(N::zero(), |acc, _| acc + N::one())
}

/// Computes the weighted term-by-document matrix for a tokenized collection.
///
/// Rows follow document order, columns follow vocabulary order; the shape is
/// fixed at `documents x vocabulary` and never changes afterwards. For the
/// IDF-based schemes each term's IDF is computed once, on the first document
/// in which the scan encounters it, and cached for the rest of the build. The
/// cache lives and dies with this call.
pub fn compute_matrix<N>(
    documents: &[Vec<String>],
    vocabulary: &Vocabulary,
    scheme: WeightingScheme,
) -> Result<TermDocumentMatrix<N>, TdmError>
where
    N: Float + Send + Sync,
{
    if documents.is_empty() {
        return Err(TdmError::EmptyCorpus);
    }

    let mut matrix = TermDocumentMatrix::zeroed(documents.len(), vocabulary.len());
    // 1ビルド分だけ生きるIDFキャッシュ
    let mut idf_cache: HashMap<String, N> = HashMap::new();

    for (row, bag) in documents.iter().enumerate() {
        for term in bag {
            let col = vocabulary
                .index_of(term)
                .ok_or_else(|| TdmError::UnknownTerm { term: term.clone() })?;

            let weight = match scheme {
                WeightingScheme::Binary => N::one(),
                WeightingScheme::Tf => match matrix.cell(row, col) {
                    Cell::Present(count) => count + N::one(),
                    _ => N::one(),
                },
                WeightingScheme::Idf => cached_idf(&mut idf_cache, documents, term)?,
                WeightingScheme::TfIdf => {
                    let idf = cached_idf(&mut idf_cache, documents, term)?;
                    occurrences::<N>(bag, term) * idf
                }
            };
            *matrix.cell_mut(row, col) = Cell::Present(weight);
        }
    }

    if matches!(scheme, WeightingScheme::Idf | WeightingScheme::TfIdf) {
        debug!("idf cache holds {} terms after the build", idf_cache.len());
    }
    debug!(
        "computed {} x {} matrix with scheme {:?}",
        matrix.doc_num(),
        matrix.width(),
        scheme
    );

    Ok(matrix)
}

/// IDF with first-encounter caching.
fn cached_idf<N>(
    cache: &mut HashMap<String, N>,
    documents: &[Vec<String>],
    term: &str,
) -> Result<N, TdmError>
where
    N: Float + Send + Sync,
{
    if let Some(score) = cache.get(term) {
        return Ok(*score);
    }
    let score = idf::<N>(documents, term)?;
    cache.insert(term.to_string(), score);
    Ok(score)
}
