//! In-memory blog store
//!
//! Holds the ordered collection of blogs for the lifetime of the process.
//! Every operation takes the single collection lock, so concurrent requests
//! observe the same results they would if they ran one at a time.

pub mod models;

pub use models::{seed_blogs, Blog, BlogPayload};

use tokio::sync::RwLock;
use tracing::debug;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Blog not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered collection of blogs guarded by one lock
#[derive(Debug, Default)]
pub struct BlogStore {
    blogs: RwLock<Vec<Blog>>,
}

impl BlogStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the two startup records
    pub fn seeded() -> Self {
        Self::with_blogs(seed_blogs())
    }

    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: RwLock::new(blogs),
        }
    }

    /// Snapshot of all blogs in insertion order
    pub async fn list(&self) -> Vec<Blog> {
        self.blogs.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.blogs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blogs.read().await.is_empty()
    }

    /// First blog whose id matches
    pub async fn get(&self, id: i32) -> Result<Blog> {
        let blogs = self.blogs.read().await;
        blogs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Id the next created blog will receive
    pub async fn next_id(&self) -> i32 {
        next_id(&self.blogs.read().await)
    }

    /// Append a new blog, assigning it the highest existing id plus one
    pub async fn create(&self, payload: BlogPayload) -> Blog {
        let mut blogs = self.blogs.write().await;
        let blog = Blog {
            id: next_id(&blogs),
            title: payload.title,
            body: payload.body,
        };
        blogs.push(blog.clone());
        debug!(id = blog.id, count = blogs.len(), "Blog created");
        blog
    }

    /// Replace title and body of the blog with the given id
    pub async fn update(&self, id: i32, payload: BlogPayload) -> Result<Blog> {
        let mut blogs = self.blogs.write().await;
        let existing = blogs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound)?;

        existing.title = payload.title;
        existing.body = payload.body;
        existing.id = id;

        debug!(id, "Blog updated");
        Ok(existing.clone())
    }

    /// Remove the blog at a zero-based position in the current ordering.
    ///
    /// The position is unrelated to blog ids once anything has been removed.
    pub async fn remove_at(&self, position: i32) -> Result<Blog> {
        let mut blogs = self.blogs.write().await;
        let index = usize::try_from(position)
            .ok()
            .filter(|&i| i < blogs.len())
            .ok_or(StoreError::NotFound)?;

        let removed = blogs.remove(index);
        debug!(position, id = removed.id, "Blog removed by position");
        Ok(removed)
    }

    /// Remove the blog with the given id
    pub async fn remove_by_id(&self, id: i32) -> Result<Blog> {
        let mut blogs = self.blogs.write().await;
        let index = blogs
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound)?;

        let removed = blogs.remove(index);
        debug!(id, "Blog removed by id");
        Ok(removed)
    }
}

fn next_id(blogs: &[Blog]) -> i32 {
    blogs.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}
