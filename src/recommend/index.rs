//! Explicit id ↔ matrix row mapping.

use std::collections::HashMap;
use std::hash::Hash;

/// Bidirectional map between entity ids and matrix rows.
///
/// Built in the same pass as the matrix it indexes and stored next to it,
/// so a row number is never re-derived from a container whose order may
/// have moved since.
///
/// # Examples
///
/// ```
/// use movierec::recommend::EntityIndex;
///
/// let index = EntityIndex::from_ids([30u32, 10, 20]);
/// assert_eq!(index.position(10), Some(1));
/// assert_eq!(index.id(2), Some(20));
/// assert_eq!(index.position(99), None);
/// ```
#[derive(Debug, Clone)]
pub struct EntityIndex<K> {
    ids: Vec<K>,
    rows: HashMap<K, usize>,
}

impl<K: Eq + Hash> PartialEq for EntityIndex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl<K: Eq + Hash> Eq for EntityIndex<K> {}

impl<K: Copy + Eq + Hash> EntityIndex<K> {
    /// Index `ids` in iteration order. Repeated ids keep their first row.
    pub fn from_ids<I: IntoIterator<Item = K>>(ids: I) -> Self {
        let mut index = Self {
            ids: Vec::new(),
            rows: HashMap::new(),
        };
        for id in ids {
            if !index.rows.contains_key(&id) {
                index.rows.insert(id, index.ids.len());
                index.ids.push(id);
            }
        }
        index
    }

    /// Row of `id`.
    #[must_use]
    pub fn position(&self, id: K) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    /// Id at `row`.
    #[must_use]
    pub fn id(&self, row: usize) -> Option<K> {
        self.ids.get(row).copied()
    }

    /// Ids in row order.
    #[must_use]
    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    /// Number of indexed ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
