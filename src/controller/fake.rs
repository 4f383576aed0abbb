//! In-memory content source for controller tests

use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::cms::{ContentSource, FetchError, Query};

/// Answers every query with the same canned response
pub(crate) struct FakeSource {
    response: Result<Vec<Value>, u16>,
    calls: AtomicUsize,
    last_query: Mutex<Option<Query>>,
}

impl FakeSource {
    pub(crate) fn with_documents(documents: Vec<Value>) -> Self {
        Self::new(Ok(documents))
    }

    pub(crate) fn with_status(status: u16) -> Self {
        Self::new(Err(status))
    }

    fn new(response: Result<Vec<Value>, u16>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_query(&self) -> Option<Query> {
        self.last_query.lock().unwrap().clone()
    }
}

impl ContentSource for FakeSource {
    async fn query(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        match &self.response {
            Ok(documents) => Ok(documents.clone()),
            Err(status) => Err(FetchError::Status(*status)),
        }
    }
}
