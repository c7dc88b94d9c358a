/// A keyed payload ordered by `priority` (lowest first).
///
/// Entries borrowed from a queue are read-only; the queue is the only place
/// a stored entry's priority can change, so heap order is never stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: i64,
    pub value: V,
    pub priority: i64,
}

impl<V> Entry<V> {
    pub fn new(key: i64, value: V, priority: i64) -> Self {
        Self {
            key,
            value,
            priority,
        }
    }
}
