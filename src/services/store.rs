//! Record storage
//!
//! `Collection<R>` is the seam between route groups and whatever holds their
//! records. It only knows data operations: there is no way to create, alter or
//! drop a schema through it.

use crate::models::marking::{Answer, Paper, Question, Scheme, Student, Submission};
use crate::models::Record;
use crate::utils::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Storage for one record kind
#[async_trait]
pub trait Collection<R: Record>: Send + Sync {
    /// Store a new record and return it with its assigned id
    async fn insert(&self, draft: R::Draft) -> AppResult<R>;

    /// Records matching the filter, in id order
    async fn list(&self, filter: &R::Filter) -> AppResult<Vec<R>>;

    /// Record by id
    async fn get(&self, id: i64) -> AppResult<Option<R>>;
}

/// Process-local collection
///
/// Ids start at 1 and increase by one per insert.
pub struct MemoryCollection<R> {
    rows: RwLock<Vec<R>>,
}

impl<R: Record> MemoryCollection<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Record> Default for MemoryCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Collection<R> for MemoryCollection<R> {
    async fn insert(&self, draft: R::Draft) -> AppResult<R> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |last| last.id() + 1);
        let record = R::assemble(id, draft);
        rows.push(record.clone());
        debug!("Stored {} {}", R::KIND, id);
        Ok(record)
    }

    async fn list(&self, filter: &R::Filter) -> AppResult<Vec<R>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.matches(filter)).cloned().collect())
    }

    async fn get(&self, id: i64) -> AppResult<Option<R>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }
}

/// One collection per route group
#[derive(Clone)]
pub struct Stores {
    pub students: Arc<dyn Collection<Student>>,
    pub papers: Arc<dyn Collection<Paper>>,
    pub questions: Arc<dyn Collection<Question>>,
    pub schemes: Arc<dyn Collection<Scheme>>,
    pub submissions: Arc<dyn Collection<Submission>>,
    pub answers: Arc<dyn Collection<Answer>>,
}

impl Stores {
    /// Every collection held in process memory
    pub fn in_memory() -> Self {
        Self {
            students: Arc::new(MemoryCollection::<Student>::new()),
            papers: Arc::new(MemoryCollection::<Paper>::new()),
            questions: Arc::new(MemoryCollection::<Question>::new()),
            schemes: Arc::new(MemoryCollection::<Scheme>::new()),
            submissions: Arc::new(MemoryCollection::<Submission>::new()),
            answers: Arc::new(MemoryCollection::<Answer>::new()),
        }
    }
}
