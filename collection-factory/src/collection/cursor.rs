use super::Document;
use std::collections::VecDeque;

/// An owned cursor over the documents matched by a find operation.
///
/// Results are fully decorated (computed properties applied) by the time the
/// cursor is handed out, so iteration itself cannot fail.
#[derive(Debug, Default)]
pub struct DocumentCursor {
    documents: VecDeque<Document>,
}

impl DocumentCursor {
    pub fn new(documents: Vec<Document>) -> Self {
        DocumentCursor {
            documents: documents.into(),
        }
    }

    /// Returns the first matched document, consuming the cursor.
    pub fn first(mut self) -> Option<Document> {
        self.documents.pop_front()
    }

    /// Number of documents remaining in the cursor.
    pub fn size(&self) -> usize {
        self.documents.len()
    }
}

impl Iterator for DocumentCursor {
    type Item = Document;

    fn next(&mut self) -> Option<Self::Item> {
        self.documents.pop_front()
    }
}
