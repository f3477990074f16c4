//! Hand-rolled generic containers backing the tracker
//!
//! - `growable_array`: index-addressed array with an explicit grow/shrink policy
//! - `linked_list`: doubly linked list with O(n/2) index lookup
//!
//! Both are generic over `T`; the search operations (`contains`, `index_of`,
//! `remove_first_occurrence`) use the element's own `PartialEq`.

mod growable_array;
mod linked_list;

pub use growable_array::{DEFAULT_CAPACITY, GrowableArray};
pub use linked_list::{DoublyLinkedList, Iter as LinkedListIter};
