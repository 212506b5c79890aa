//! Render plan memoization with LRU eviction
//!
//! Rendering is a pure function of `(content, annotation snapshot)`, so
//! plans can be memoized keyed by lesson id, a digest of the content, and
//! the word store's version counter. Any edit or annotation change produces
//! a new key; stale entries age out of the LRU.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::annotations::Annotation;
use crate::error::Result;
use crate::lesson::Lesson;
use crate::render::{self, RenderNode};

const DEFAULT_CAPACITY: usize = 64;

/// Cache key for a render plan
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct RenderCacheKey {
    /// Lesson id
    pub lesson_id: String,
    /// Hex digest of the lesson content
    pub content_digest: String,
    /// Word store version at plan time
    pub store_version: u64,
}

impl RenderCacheKey {
    pub fn new(lesson: &Lesson, store_version: u64) -> Self {
        let digest = Sha256::digest(lesson.content.as_bytes());
        Self {
            lesson_id: lesson.id.clone(),
            content_digest: hex::encode(digest),
            store_version,
        }
    }
}

/// LRU cache of assembled render plans
///
/// Thread-safe behind a `parking_lot::Mutex`; the engine itself is
/// synchronous, so there is nothing to await while holding the lock.
pub struct RenderCache {
    plans: Mutex<LruCache<RenderCacheKey, Arc<Vec<RenderNode>>>>,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RenderCache {
    /// Create a cache holding up to `capacity` plans
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or_else(|| NonZeroUsize::new(DEFAULT_CAPACITY).expect("non-zero default"));
        Self {
            plans: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Render through the cache
    ///
    /// `store_version` must come from the same word store the snapshot was
    /// taken from; it is what invalidates memoized plans after a mutation.
    pub fn get_or_render(
        &self,
        lesson: &Lesson,
        annotations: &[Annotation],
        store_version: u64,
    ) -> Result<Arc<Vec<RenderNode>>> {
        let key = RenderCacheKey::new(lesson, store_version);

        if let Some(plan) = self.plans.lock().get(&key) {
            debug!(lesson_id = %lesson.id, "render plan cache hit");
            return Ok(Arc::clone(plan));
        }

        let plan = Arc::new(render::render(lesson, annotations)?);
        self.plans.lock().put(key, Arc::clone(&plan));
        Ok(plan)
    }

    /// Number of memoized plans
    pub fn len(&self) -> usize {
        self.plans.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.lock().is_empty()
    }

    /// Drop all memoized plans
    pub fn clear(&self) {
        self.plans.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::{AnnotationKind, WordStore};

    #[test]
    fn test_hit_returns_same_plan() {
        let lesson = Lesson::new("l1", "Cats", "the cat sat");
        let mut store = WordStore::new();
        store
            .add_annotation(&lesson, "cat", AnnotationKind::NewWord)
            .unwrap();
        let snapshot = store.list_for_lesson("l1");

        let cache = RenderCache::default();
        let first = cache
            .get_or_render(&lesson, &snapshot, store.version())
            .unwrap();
        let second = cache
            .get_or_render(&lesson, &snapshot, store.version())
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_mutation_invalidates() {
        let lesson = Lesson::new("l1", "Cats", "the cat sat");
        let mut store = WordStore::new();
        let cache = RenderCache::default();

        let before = cache
            .get_or_render(&lesson, &store.list_for_lesson("l1"), store.version())
            .unwrap();

        store
            .add_annotation(&lesson, "cat", AnnotationKind::NewWord)
            .unwrap();
        let after = cache
            .get_or_render(&lesson, &store.list_for_lesson("l1"), store.version())
            .unwrap();

        assert_ne!(*before, *after);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_content_edit_invalidates() {
        let store = WordStore::new();
        let cache = RenderCache::default();

        let original = Lesson::new("l1", "Cats", "the cat sat");
        let edited = Lesson::new("l1", "Cats", "the dog sat");

        cache
            .get_or_render(&original, &[], store.version())
            .unwrap();
        cache.get_or_render(&edited, &[], store.version()).unwrap();

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_eviction() {
        let cache = RenderCache::new(2);
        let store = WordStore::new();

        for i in 0..3 {
            let lesson = Lesson::new(&format!("l{}", i), "T", "text");
            cache.get_or_render(&lesson, &[], store.version()).unwrap();
        }

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear() {
        let cache = RenderCache::default();
        let store = WordStore::new();
        let lesson = Lesson::new("l1", "T", "text");

        cache.get_or_render(&lesson, &[], store.version()).unwrap();
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }
}
