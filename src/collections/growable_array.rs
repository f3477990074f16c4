use crate::error::{Result, TrackerError};

/// Capacity a new array starts with, and the floor for shrinking
pub const DEFAULT_CAPACITY: usize = 10;

const GROWTH_FACTOR: usize = 2;
/// Shrink once the array is less than a quarter full
const SHRINK_DIVISOR: usize = 4;

/// Growable array with an explicit capacity policy
///
/// Capacity doubles when an append or insert would overflow it, and halves
/// (never below [`DEFAULT_CAPACITY`]) when a removal leaves the array less
/// than a quarter full. The logical capacity is tracked here; the backing
/// `Vec` is reserved and shrunk to follow it.
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableArray<T> {
    /// Create an empty array with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with the given starting capacity
    ///
    /// The shrink floor stays at [`DEFAULT_CAPACITY`] regardless.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an element at the end
    pub fn append(&mut self, element: T) {
        self.grow_if_full();
        self.items.push(element);
    }

    /// Insert an element at `index`, shifting later elements right
    ///
    /// Valid positions are `0..=len`.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        TrackerError::check_position(index, self.len())?;
        self.grow_if_full();
        self.items.insert(index, element);
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        TrackerError::check_index(index, self.len())?;
        let removed = self.items.remove(index);
        self.shrink_if_sparse();
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        TrackerError::check_index(index, self.len())?;
        Ok(&self.items[index])
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        TrackerError::check_index(index, self.len())?;
        Ok(std::mem::replace(&mut self.items[index], element))
    }

    /// Remove everything and reset capacity to [`DEFAULT_CAPACITY`]
    pub fn clear(&mut self) {
        self.items = Vec::with_capacity(DEFAULT_CAPACITY);
        self.capacity = DEFAULT_CAPACITY;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shrink capacity down to the current length
    pub fn trim_to_size(&mut self) {
        if self.len() < self.capacity {
            self.resize(self.len());
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn grow_if_full(&mut self) {
        if self.len() == self.capacity {
            let grown = (self.capacity + 1).max(self.capacity * GROWTH_FACTOR);
            self.resize(grown);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let len = self.len();
        // len < capacity * 0.25, kept in integer arithmetic
        if len > 0 && len * SHRINK_DIVISOR < self.capacity {
            let shrunk = DEFAULT_CAPACITY.max(self.capacity / GROWTH_FACTOR);
            self.resize(shrunk);
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        tracing::trace!(from = self.capacity, to = new_capacity, "resizing growable array");
        if new_capacity > self.items.capacity() {
            self.items.reserve_exact(new_capacity - self.items.len());
        } else {
            self.items.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Remove the first element equal to `element`
    ///
    /// Returns whether anything was removed.
    pub fn remove_first_occurrence(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Position of the first element equal to `element`
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.items.iter().position(|item| item == element)
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = GrowableArray::new();
        for element in iter {
            array.append(element);
        }
        array
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
