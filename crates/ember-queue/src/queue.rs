use ember_core::errors::QueueError;
use rustc_hash::FxHashMap;

use crate::entry::Entry;

/// Binary min-heap on `Entry::priority` with a key → heap position index.
///
/// # Invariants
///
/// - `heap[i].priority >= heap[parent(i)].priority` for every non-root `i`.
/// - `index[heap[i].key] == i` for every `i`, and `index` holds no other keys.
///
/// The queue never bounds its own size; `with_capacity` is only a hint.
/// Owners that need a bound enforce it before calling [`add`](Self::add).
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<V> {
    heap: Vec<Entry<V>>,
    index: FxHashMap<i64, usize>,
}

impl<V> IndexedPriorityQueue<V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with storage preallocated for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.index.contains_key(&key)
    }

    /// O(1) lookup by key.
    pub fn get(&self, key: i64) -> Option<&Entry<V>> {
        self.index.get(&key).map(|&pos| &self.heap[pos])
    }

    /// Mutable access to a stored payload. Ordering is untouched.
    pub fn value_mut(&mut self, key: i64) -> Option<&mut V> {
        let pos = *self.index.get(&key)?;
        Some(&mut self.heap[pos].value)
    }

    /// The entry with the lowest priority, without removing it.
    pub fn peek(&self) -> Option<&Entry<V>> {
        self.heap.first()
    }

    /// Insert a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DuplicateKey`] if `entry.key` is already queued;
    /// the queue is left unchanged.
    pub fn add(&mut self, entry: Entry<V>) -> Result<&Entry<V>, QueueError> {
        if self.index.contains_key(&entry.key) {
            return Err(QueueError::DuplicateKey { key: entry.key });
        }
        let pos = self.heap.len();
        self.index.insert(entry.key, pos);
        self.heap.push(entry);
        let pos = self.sift_up(pos);
        Ok(&self.heap[pos])
    }

    /// Remove and return the entry with the lowest priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<Entry<V>, QueueError> {
        self.remove_at(0)
            .ok_or(QueueError::Empty { operation: "pop" })
    }

    /// Remove the entry for `key`, wherever it sits in the heap.
    pub fn remove(&mut self, key: i64) -> Option<Entry<V>> {
        let pos = *self.index.get(&key)?;
        self.remove_at(pos)
    }

    /// Replace the priority of `key` and restore heap order from its slot.
    ///
    /// Only one priority changes per call, so a single sift in one
    /// direction is enough: up if it now beats its parent, down otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::KeyNotFound`] if `key` is not queued.
    pub fn set_priority(&mut self, key: i64, priority: i64) -> Result<&Entry<V>, QueueError> {
        let pos = *self
            .index
            .get(&key)
            .ok_or(QueueError::KeyNotFound { key })?;
        self.heap[pos].priority = priority;
        let pos = self.priority_has_changed(pos);
        Ok(&self.heap[pos])
    }

    /// Entries in heap-array order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<V>> {
        self.heap.iter()
    }

    /// Check heap order and index consistency.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::CorruptIndex`] describing the first violation found.
    pub fn validate(&self) -> Result<(), QueueError> {
        if self.index.len() != self.heap.len() {
            return Err(QueueError::CorruptIndex {
                details: format!(
                    "index holds {} keys but heap holds {} entries",
                    self.index.len(),
                    self.heap.len()
                ),
            });
        }
        for (pos, entry) in self.heap.iter().enumerate() {
            if self.index.get(&entry.key) != Some(&pos) {
                return Err(QueueError::CorruptIndex {
                    details: format!("key {} at position {pos} is indexed elsewhere", entry.key),
                });
            }
            if pos > 0 {
                let parent = &self.heap[parent(pos)];
                if entry.priority < parent.priority {
                    return Err(QueueError::CorruptIndex {
                        details: format!(
                            "key {} (priority {}) sits below key {} (priority {})",
                            entry.key, entry.priority, parent.key, parent.priority
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    fn remove_at(&mut self, pos: usize) -> Option<Entry<V>> {
        if pos >= self.heap.len() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(pos, last);
        let removed = self.heap.pop()?;
        self.index.remove(&removed.key);
        if pos < self.heap.len() {
            // The moved-in entry came from a different subtree; it may need
            // to travel either way.
            self.priority_has_changed(pos);
        }
        Some(removed)
    }

    /// Restore heap order around `pos` after its priority changed.
    /// Returns the entry's final position.
    fn priority_has_changed(&mut self, pos: usize) -> usize {
        let moved = self.sift_up(pos);
        if moved != pos {
            return moved;
        }
        self.sift_down(pos)
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let up = parent(pos);
            if self.heap[pos].priority >= self.heap[up].priority {
                break;
            }
            self.swap(pos, up);
            pos = up;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right].priority < self.heap[left].priority {
                right
            } else {
                left
            };
            if self.heap[child].priority >= self.heap[pos].priority {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
        pos
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].key, a);
        self.index.insert(self.heap[b].key, b);
    }
}

impl<V: Clone> IndexedPriorityQueue<V> {
    /// Snapshot copy of all entries in heap-array order.
    pub fn to_vec(&self) -> Vec<Entry<V>> {
        self.heap.clone()
    }
}

impl<V> Default for IndexedPriorityQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}
