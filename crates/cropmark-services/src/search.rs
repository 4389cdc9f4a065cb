//! Ranked similarity search over stored embeddings.
//!
//! The primary index lives in an external system. When it is unavailable the
//! documented fallback is a brute-force dot-product scan over a full
//! in-memory corpus. The fallback is wired up as an explicit two-stage
//! strategy object with clear error propagation, not as exception-driven
//! control flow: only [`ServiceError::Unavailable`] triggers the second
//! stage.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Stable identifier of the stored item.
    pub id: String,
    /// Similarity score; higher is closer. Dot product of unit vectors.
    pub similarity: f32,
    /// Free-form item metadata (name, price, image path, ...).
    pub metadata: serde_json::Value,
}

/// Nearest-neighbor search over stored embeddings, ranked by similarity.
pub trait SimilaritySearch {
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit>, ServiceError>;
}

/// One stored corpus entry for brute-force scanning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub id: String,
    pub embedding: Vec<f32>,
    pub metadata: serde_json::Value,
}

/// Brute-force dot-product ranking over a full in-memory corpus.
///
/// Assumes stored embeddings and queries are L2-normalized, so the dot
/// product equals cosine similarity. Entries whose dimension does not match
/// the query are skipped rather than failing the whole scan.
#[derive(Debug, Clone, Default)]
pub struct BruteForceSearch {
    corpus: Vec<CorpusEntry>,
}

impl BruteForceSearch {
    pub fn new(corpus: Vec<CorpusEntry>) -> Self {
        Self { corpus }
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}

impl SimilaritySearch for BruteForceSearch {
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit>, ServiceError> {
        let mut hits: Vec<SearchHit> = self
            .corpus
            .iter()
            .filter(|entry| entry.embedding.len() == query.len())
            .map(|entry| SearchHit {
                id: entry.id.clone(),
                similarity: dot(&entry.embedding, query),
                metadata: entry.metadata.clone(),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(top_k);
        Ok(hits)
    }
}

/// Two-stage search: a primary index with a brute-force fallback.
///
/// The fallback runs only when the primary reports
/// [`ServiceError::Unavailable`]; every other error propagates unchanged so
/// a malformed query never silently degrades into a full scan.
#[derive(Debug, Clone)]
pub struct FallbackSearch<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSearch<P, F>
where
    P: SimilaritySearch,
    F: SimilaritySearch,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> SimilaritySearch for FallbackSearch<P, F>
where
    P: SimilaritySearch,
    F: SimilaritySearch,
{
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit>, ServiceError> {
        match self.primary.search(query, top_k) {
            Ok(hits) => Ok(hits),
            Err(ServiceError::Unavailable(_)) => self.fallback.search(query, top_k),
            Err(other) => Err(other),
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
