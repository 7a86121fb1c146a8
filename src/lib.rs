/// This crate converts tokenized text transactions into a weighted
/// term-by-document matrix, prunes it, and serializes it as delimited text.
pub mod tdm;
pub mod error;

/// Term-by-Document Matrix Builder
/// The top-level struct of this crate, running the whole pipeline over a
/// transaction collection: tokenization, vocabulary construction, weighting,
/// pruning, serialization.
///
/// Internally the pipeline produces:
/// - The sorted corpus vocabulary
/// - The weighted matrix (one row per document)
/// - A per-build IDF cache for the IDF-based schemes
/// - The prune outcome consumed by the serializer
///
/// `TdmBuilder<N>` has the following generic parameter:
/// - `N`: matrix weight type (e.g. f32, f64), `f32` by default
///
/// The builder takes the raw lines and a [`MatrixWriter`]; everything before
/// the lines (file reading, case folding, lemmatization) and everything after
/// the written matrix (rule mining, visualization) belongs to collaborators.
pub use tdm::TdmBuilder;

/// Vocabulary of the corpus
/// The sorted, duplicate-free index of all terms observed across the
/// transaction collection. A term's position is its matrix column. Pruning
/// shrinks it through descending-index removal; nothing else mutates it.
pub use tdm::vocabulary::Vocabulary;

/// Term-by-Document Matrix and its cell type
/// Rows are documents, columns the initial vocabulary. The matrix is never
/// resized: pruning tags cells with `Cell::PrunedTerm` / `Cell::PrunedDocument`
/// instead of removing storage, which keeps the surviving cells positionally
/// aligned with the vocabulary.
pub use tdm::matrix::{Cell, TermDocumentMatrix};

/// Weighting Scheme selector
/// One of `Binary`, `Tf`, `Idf`, `TfIdf`. The weighted values decide what
/// gets pruned; the serialized matrix always collapses to presence markers.
pub use tdm::weighting::WeightingScheme;

/// Pruning configuration and outcome
/// `PruneConfig` carries the inclusive value bounds and the per-row minimum
/// term count. `PruneResult` combines the surviving vocabulary, the
/// column-retention bitmap and the pruned row indices, computed once and
/// consumed by both the vocabulary update and the serializer.
pub use tdm::prune::{PruneConfig, PruneResult};

/// Exclusive writer handle for the serialized matrix
/// A single `MatrixWriter` owns the output destination for the duration of a
/// serialize call; there is no shared global append path.
pub use tdm::serialize::MatrixWriter;

/// Error taxonomy
/// Input errors (empty collection, vocabulary mismatch), computation errors
/// (undefined IDF) and write errors, all surfaced to the immediate caller
/// without retries or silent defaults.
pub use error::TdmError;
