//! In-memory chunk store: documents plus their flattened retrieval index

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};
use crate::ingestion::TextChunker;
use crate::types::{Chunk, Document, DocumentSummary};

/// Owns ingested documents and the flattened index retrieval runs over.
///
/// `chunk_index` is always exactly the concatenation of every current
/// document's chunks in document order; add and remove update the two
/// together, so callers never observe a partial state. The store does no
/// locking of its own. A concurrent host keeps one store per logical
/// session and serializes access to it.
pub struct ChunkStore {
    documents: Vec<Document>,
    chunk_index: Vec<Chunk>,
    chunker: TextChunker,
}

impl ChunkStore {
    /// Create a store with default chunking settings
    pub fn new() -> Self {
        Self::with_config(&ChunkingConfig::default())
    }

    /// Create a store with explicit chunking settings
    pub fn with_config(config: &ChunkingConfig) -> Self {
        Self {
            documents: Vec::new(),
            chunk_index: Vec::new(),
            chunker: TextChunker::new(config.chunk_size),
        }
    }

    /// Ingest a document, replacing any existing document with the same
    /// title (last write wins; the replaced version and its index
    /// entries are evicted first, and the new version lands at the end
    /// of store order).
    ///
    /// Content that trims to nothing is rejected with
    /// [`Error::EmptyDocument`] and the store is left untouched.
    pub fn add_document(
        &mut self,
        content: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<DocumentSummary> {
        let content = content.into();
        let title = title.into();

        if content.trim().is_empty() {
            return Err(Error::empty_document(title));
        }

        // Non-empty trimmed content always yields at least one chunk
        let chunks = self.chunker.chunk(&content, &title);

        if self.documents.iter().any(|d| d.title == title) {
            tracing::info!("Replacing existing document: {}", title);
            self.evict(&title);
        }

        let document = Document::new(title, content, chunks.clone());
        let summary = document.summary();
        self.documents.push(document);
        self.chunk_index.extend(chunks);

        tracing::info!(
            "Added document: {} ({} chars, {} chunks)",
            summary.title,
            summary.content_chars,
            summary.chunk_count
        );
        Ok(summary)
    }

    /// Remove a document by title, dropping its index entries with it.
    ///
    /// An unknown title is a reportable outcome, not a crash: the store
    /// stays as it was and [`Error::DocumentNotFound`] is returned.
    pub fn remove_document(&mut self, title: &str) -> Result<DocumentSummary> {
        let summary = self
            .documents
            .iter()
            .find(|d| d.title == title)
            .map(|d| d.summary())
            .ok_or_else(|| Error::DocumentNotFound(title.to_string()))?;

        self.evict(title);
        tracing::info!("Removed document: {}", title);
        Ok(summary)
    }

    /// Read-only projection of every document, in store order
    pub fn list_documents(&self) -> Vec<DocumentSummary> {
        self.documents.iter().map(|d| d.summary()).collect()
    }

    /// Drop every document and index entry
    pub fn clear(&mut self) {
        let count = self.documents.len();
        self.documents.clear();
        self.chunk_index.clear();
        tracing::info!("Cleared store ({} documents)", count);
    }

    /// True when no documents are loaded
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents in the store
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Number of entries in the flattened chunk index
    pub fn chunk_count(&self) -> usize {
        self.chunk_index.len()
    }

    /// Flattened view of every chunk, in document order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunk_index
    }

    /// Drop a title from both sides of the mirror in one step
    fn evict(&mut self, title: &str) {
        self.documents.retain(|d| d.title != title);
        self.chunk_index.retain(|c| c.source_title != title);
    }
}

impl Default for ChunkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The index must equal the concatenation of all documents' chunks
    /// in document order.
    fn assert_index_mirrors_documents(store: &ChunkStore) {
        let expected: Vec<(&str, &str)> = store
            .documents
            .iter()
            .flat_map(|d| {
                d.chunks
                    .iter()
                    .map(|c| (c.text.as_str(), c.source_title.as_str()))
            })
            .collect();
        let actual: Vec<(&str, &str)> = store
            .chunks()
            .iter()
            .map(|c| (c.text.as_str(), c.source_title.as_str()))
            .collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn add_document_reports_counts_and_extends_index() {
        let mut store = ChunkStore::new();
        let summary = store
            .add_document("The cat sat on the mat. The dog ran in the park.", "Doc1")
            .unwrap();

        assert_eq!(summary.title, "Doc1");
        assert_eq!(summary.content_chars, 48);
        assert_eq!(summary.chunk_count, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.chunk_count(), 1);
        assert_index_mirrors_documents(&store);
    }

    #[test]
    fn empty_content_is_rejected_and_store_is_unchanged() {
        let mut store = ChunkStore::new();
        let err = store.add_document("   \n  ", "Blank").unwrap_err();
        assert!(matches!(err, Error::EmptyDocument { .. }));
        assert!(store.is_empty());
        assert_eq!(store.chunk_count(), 0);
    }

    #[test]
    fn index_stays_consistent_across_adds_and_removes() {
        let mut store = ChunkStore::with_config(&ChunkingConfig { chunk_size: 30 });
        store
            .add_document("First document. It talks about cats and mats at length.", "A")
            .unwrap();
        store
            .add_document("Second document. It talks about dogs in parks instead.", "B")
            .unwrap();
        store
            .add_document("Third document about nothing in particular at all.", "C")
            .unwrap();
        assert_index_mirrors_documents(&store);

        store.remove_document("B").unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.chunks().iter().all(|c| c.source_title != "B"));
        assert_index_mirrors_documents(&store);

        store.remove_document("A").unwrap();
        store.remove_document("C").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.chunk_count(), 0);
    }

    #[test]
    fn removing_an_unknown_title_reports_not_found_without_side_effects() {
        let mut store = ChunkStore::new();
        store.add_document("Some employee handbook text.", "Handbook").unwrap();
        let before = store.list_documents();

        let err = store.remove_document("Ghost").unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(_)));
        assert_eq!(store.list_documents(), before);
    }

    #[test]
    fn duplicate_title_replaces_the_previous_version() {
        let mut store = ChunkStore::new();
        store.add_document("Old vacation policy: ten days.", "Policy").unwrap();
        store.add_document("Area guide for the office neighborhood.", "Guide").unwrap();
        let summary = store
            .add_document("New vacation policy: twenty days.", "Policy")
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(summary.chunk_count, 1);
        // Only the new version's text is indexed
        let policy_chunks: Vec<&str> = store
            .chunks()
            .iter()
            .filter(|c| c.source_title == "Policy")
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(policy_chunks, vec!["New vacation policy: twenty days."]);
        // Last write moves the document to the end of store order
        let titles: Vec<String> = store.list_documents().iter().map(|d| d.title.clone()).collect();
        assert_eq!(titles, vec!["Guide".to_string(), "Policy".to_string()]);
        assert_index_mirrors_documents(&store);
    }

    #[test]
    fn list_documents_preserves_insertion_order() {
        let mut store = ChunkStore::new();
        store.add_document("Alpha content here.", "Alpha").unwrap();
        store.add_document("Beta content here.", "Beta").unwrap();
        store.add_document("Gamma content here.", "Gamma").unwrap();

        let titles: Vec<String> = store.list_documents().iter().map(|d| d.title.clone()).collect();
        assert_eq!(
            titles,
            vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]
        );
    }

    #[test]
    fn clear_empties_both_sides_of_the_mirror() {
        let mut store = ChunkStore::new();
        store.add_document("Content one.", "One").unwrap();
        store.add_document("Content two.", "Two").unwrap();

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.chunk_count(), 0);
        assert!(store.list_documents().is_empty());
    }
}
