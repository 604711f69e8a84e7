//! Array-backed binary min-heap keyed by item weight.
//!
//! The heap supports insertion, removal of the minimum and wholesale absorption
//! of another heap. There is no decrease-key or arbitrary delete: partial trees
//! discard stale arcs as they are popped instead.

use crate::error::HeapError;

/// Items that can be ordered inside a [`MinHeap`].
pub trait Weighted {
    /// Ordering key; smaller keys leave the heap first.
    type Key: Ord + Copy;

    /// Returns the key used to position the item.
    fn weight(&self) -> Self::Key;
}

/// How [`MinHeap::absorb`] combines two heaps.
///
/// Both strategies conserve the total item count.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum HeapMergeStrategy {
    /// Insert every item of the smaller heap into the larger one.
    #[default]
    Reinsert,
    /// Append the other heap's storage and rebuild the heap bottom-up.
    Concatenate,
}

impl HeapMergeStrategy {
    /// Returns the lowercase label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reinsert => "reinsert",
            Self::Concatenate => "concatenate",
        }
    }
}

/// Binary min-heap stored in a `Vec`.
///
/// # Examples
/// ```
/// use sapling_core::{MinHeap, Weighted};
///
/// #[derive(Debug)]
/// struct Job(u8);
///
/// impl Weighted for Job {
///     type Key = u8;
///     fn weight(&self) -> u8 { self.0 }
/// }
///
/// let mut heap = MinHeap::new();
/// heap.insert(Job(4));
/// heap.insert(Job(1));
/// heap.insert(Job(3));
/// assert_eq!(heap.delete_min()?.0, 1);
/// assert_eq!(heap.delete_min()?.0, 3);
/// # Ok::<(), sapling_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Weighted> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from arbitrary items in linear time.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        heap.heapify();
        heap
    }

    /// Returns the number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum item without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterates over the stored items in storage order, not weight order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Inserts `item`, sifting it up by weight.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum item.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no items.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(HeapError::Empty)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Moves every item of `other` into `self` using `strategy`.
    pub fn absorb(&mut self, mut other: Self, strategy: HeapMergeStrategy) {
        match strategy {
            HeapMergeStrategy::Reinsert => {
                if other.items.len() > self.items.len() {
                    std::mem::swap(&mut self.items, &mut other.items);
                }
                self.items.reserve(other.items.len());
                for item in other.items {
                    self.insert(item);
                }
            }
            HeapMergeStrategy::Concatenate => {
                self.items.append(&mut other.items);
                self.heapify();
            }
        }
    }

    /// Consumes the heap, returning its storage in heap order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn heapify(&mut self) {
        for index in (0..self.items.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].weight() >= self.items[parent].weight() {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.items[right].weight() < self.items[left].weight() {
                right
            } else {
                left
            };
            if self.items[child].weight() >= self.items[index].weight() {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}
