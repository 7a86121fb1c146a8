use thiserror::Error;

/// Failure taxonomy of the TDM pipeline.
///
/// Every error is returned to the immediate caller. The pipeline is a
/// deterministic batch computation, so nothing is retried, and no failure is
/// ever downgraded to a default weight.
#[derive(Debug, Error)]
pub enum TdmError {
    /// The document collection was empty. An empty vocabulary makes weighting
    /// and pruning meaningless, so this is rejected before any output is
    /// produced.
    #[error("empty document collection")]
    EmptyCorpus,

    /// A document token is missing from the vocabulary the matrix is being
    /// computed against. The vocabulary must have been built from the same
    /// document collection.
    #[error("token {term:?} is not in the vocabulary")]
    UnknownTerm { term: String },

    /// A vocabulary term occurs in no document, so its IDF division is
    /// undefined. Aborts the build instead of propagating `inf`/`NaN` into
    /// the matrix.
    #[error("document frequency of {term:?} is zero, idf is undefined")]
    ZeroDocumentFrequency { term: String },

    /// The output destination could not be written. Downstream consumers must
    /// treat a partially written matrix file as invalid.
    #[error("failed to write matrix output")]
    Io(#[from] std::io::Error),
}
