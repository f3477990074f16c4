//! Container behaviour tests over longer operation sequences

use project_tracker::collections::DEFAULT_CAPACITY;
use project_tracker::{DoublyLinkedList, GrowableArray, TrackerError};

/// Deterministic operation stream: (op, value) pairs
fn operations(count: usize) -> Vec<(u32, usize)> {
    let mut state: u32 = 0x2545_f491;
    (0..count)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 4, i)
        })
        .collect()
}

#[test]
fn test_growable_array_matches_model() {
    let mut array = GrowableArray::new();
    let mut model: Vec<usize> = Vec::new();

    for (op, value) in operations(500) {
        match op {
            0 | 1 => {
                array.append(value);
                model.push(value);
            }
            2 if !model.is_empty() => {
                let index = value % model.len();
                assert_eq!(array.remove_at(index).unwrap(), model.remove(index));
            }
            _ => {
                let index = value % (model.len() + 1);
                array.insert_at(index, value).unwrap();
                model.insert(index, value);
            }
        }
        assert_eq!(array.len(), model.len());
        assert!(array.capacity() >= array.len());
    }

    for (i, expected) in model.iter().enumerate() {
        assert_eq!(array.get(i).unwrap(), expected);
    }
}

#[test]
fn test_growable_array_shrinks_only_below_quarter() {
    let mut array = GrowableArray::new();
    for i in 0..200 {
        array.append(i);
    }

    while !array.is_empty() {
        let before = array.capacity();
        array.remove_at(array.len() - 1).unwrap();
        let size = array.len();
        let after = array.capacity();
        assert!(after >= size);
        if after < before {
            assert!(size * 4 < before, "shrank at size {} from {}", size, before);
            assert_eq!(after, DEFAULT_CAPACITY.max(before / 2));
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn test_linked_list_matches_model() {
    let mut list = DoublyLinkedList::new();
    let mut model: Vec<usize> = Vec::new();

    for (op, value) in operations(500) {
        match op {
            0 | 1 => {
                list.append(value);
                model.push(value);
            }
            2 if !model.is_empty() => {
                let index = value % model.len();
                assert_eq!(list.remove_at(index).unwrap(), model.remove(index));
            }
            _ => {
                let index = value % (model.len() + 1);
                list.insert_at(index, value).unwrap();
                model.insert(index, value);
            }
        }
        assert_eq!(list.len(), model.len());
    }

    let forward: Vec<usize> = list.iter().copied().collect();
    let mut backward: Vec<usize> = list.iter().rev().copied().collect();
    assert_eq!(forward, model);
    backward.reverse();
    assert_eq!(backward, model);
}

#[test]
fn test_containers_agree_on_errors() {
    let mut array: GrowableArray<i32> = GrowableArray::new();
    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();

    let expected = TrackerError::IndexOutOfBounds { index: 0, size: 0 };
    assert_eq!(array.get(0).unwrap_err(), expected);
    assert_eq!(list.get(0).unwrap_err(), expected);
    assert_eq!(array.remove_at(0).unwrap_err(), expected);
    assert_eq!(list.remove_at(0).unwrap_err(), expected);
    assert_eq!(array.set(0, 1).unwrap_err(), expected);
    assert_eq!(list.set(0, 1).unwrap_err(), expected);

    assert_eq!(
        list.first().unwrap_err(),
        TrackerError::IllegalState("List is empty".to_string())
    );
}
