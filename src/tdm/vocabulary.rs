use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};

/// Sorted index of the unique terms observed across a document collection.
///
/// Terms are kept in lexicographic (byte) order and the position of a term is
/// its column in the term-by-document matrix. Membership lookups are O(1);
/// the set is only ever shrunk through [`Vocabulary::remove_indices`], which
/// the pruning engine drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Builds the sorted unique-term index from tokenized documents.
    ///
    /// Deterministic: repeated builds over identical input produce an
    /// identical index.
    pub fn build(documents: &[Vec<String>]) -> Self {
        let mut terms: IndexSet<String> = IndexSet::new();
        for bag in documents {
            for token in bag {
                if !terms.contains(token.as_str()) {
                    terms.insert(token.clone());
                }
            }
        }
        terms.sort_unstable();
        debug!("built vocabulary of {} terms", terms.len());
        Vocabulary { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of a term, if present.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at a column index, if in range.
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(String::as_str)
    }

    /// Terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Removes terms by column index.
    ///
    /// Indices are deduplicated and processed in descending order so earlier
    /// removals never shift the positions of later ones.
    pub fn remove_indices(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable();
        indices.dedup();
        for index in indices.into_iter().rev() {
            if let Some(term) = self.terms.shift_remove_index(index) {
                debug!("removed term {term:?} from vocabulary");
            }
        }
    }
}
