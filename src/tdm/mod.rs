pub mod matrix;
pub mod prune;
pub mod serialize;
pub mod tokenizer;
pub mod vocabulary;
pub mod weighting;

use std::io::Write;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::error::TdmError;

use self::matrix::TermDocumentMatrix;
use self::prune::{PruneConfig, PruneResult};
use self::serialize::MatrixWriter;
use self::vocabulary::Vocabulary;
use self::weighting::WeightingScheme;

/// End-to-end term-by-document matrix pipeline.
///
/// Raw transaction lines go in, the pruned delimited matrix comes out:
/// tokenize, build the vocabulary, weight the matrix, prune it, serialize it.
/// Single-threaded and input-bounded; the vocabulary and matrix live for one
/// [`TdmBuilder::run`] call and are consumed exactly once by the serializer.
///
/// `N` is the weight type of the matrix cells, `f32` by default.
///
/// # Examples
/// ```
/// use tdm_builder::{MatrixWriter, PruneConfig, TdmBuilder, WeightingScheme};
///
/// let builder: TdmBuilder<f32> = TdmBuilder::new(
///     WeightingScheme::Binary,
///     PruneConfig {
///         value_lower_bound: 0.0,
///         value_upper_bound: 1.0,
///         min_terms_per_document: 1,
///     },
/// );
/// let mut writer = MatrixWriter::new(Vec::new());
/// builder.run(&["a b c", "b c", "c"], &mut writer).unwrap();
///
/// let csv = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(csv, "a,b,c\ny,y,y\n,y,y\n,,y\n");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdmBuilder<N = f32>
where
    N: Float,
{
    pub scheme: WeightingScheme,
    pub prune: PruneConfig<N>,
}

impl<N> TdmBuilder<N>
where
    N: Float + Send + Sync,
{
    pub fn new(scheme: WeightingScheme, prune: PruneConfig<N>) -> Self {
        TdmBuilder { scheme, prune }
    }

    /// Tokenizes the transactions and computes the weighted matrix, without
    /// pruning or serialization.
    pub fn build_matrix<T>(
        &self,
        transactions: &[T],
    ) -> Result<(Vocabulary, TermDocumentMatrix<N>), TdmError>
    where
        T: AsRef<str>,
    {
        if transactions.is_empty() {
            return Err(TdmError::EmptyCorpus);
        }
        let bags = tokenizer::tokenize_all(transactions);
        let vocabulary = Vocabulary::build(&bags);
        let matrix = weighting::compute_matrix(&bags, &vocabulary, self.scheme)?;
        Ok((vocabulary, matrix))
    }

    /// Runs the whole pipeline, writing the matrix through the exclusive
    /// writer handle.
    ///
    /// Returns the prune outcome so callers can correlate the surviving rows
    /// back to their source transactions. An empty transaction collection is
    /// rejected before anything is written.
    pub fn run<T, W>(
        &self,
        transactions: &[T],
        writer: &mut MatrixWriter<W>,
    ) -> Result<PruneResult, TdmError>
    where
        T: AsRef<str>,
        W: Write,
    {
        let (vocabulary, mut matrix) = self.build_matrix(transactions)?;
        let result = prune::prune(&mut matrix, vocabulary, &self.prune);
        serialize::serialize(&result.vocabulary, &matrix, writer)?;
        Ok(result)
    }
}
