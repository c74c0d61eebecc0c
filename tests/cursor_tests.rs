use std::ops::ControlFlow;

use stridevec::{CursorState, StrideVec};

fn bytes(values: impl IntoIterator<Item = u8>) -> StrideVec {
    let mut vec = StrideVec::new(4, 1).unwrap();
    for value in values {
        vec.push_back(&[value]).unwrap();
    }
    vec
}

#[test]
fn test_cursor_lifecycle() {
    let mut vec = bytes([1, 2]);
    assert_eq!(vec.cursor_state(), CursorState::Inactive);
    assert_eq!(vec.step(), None);

    vec.rewind();
    assert_eq!(vec.cursor_state(), CursorState::Active(0));
    assert_eq!(vec.step(), Some(0));
    assert_eq!(vec.step(), Some(1));
    assert_eq!(vec.cursor_state(), CursorState::Active(2));
    assert_eq!(vec.step(), None);
    assert_eq!(vec.cursor_state(), CursorState::Finished);
    assert_eq!(vec.step(), None);
}

#[test]
fn test_traversal_is_restartable() {
    let mut vec = bytes([5, 6, 7]);

    for _ in 0..2 {
        let mut seen = Vec::new();
        vec.rewind();
        while let Some(index) = vec.step() {
            seen.push(vec.get(index).unwrap()[0]);
        }
        assert_eq!(seen, vec![5, 6, 7]);
    }
}

#[test]
fn test_remove_every_visited_element() {
    let mut vec = bytes(0..5);

    let mut visited = Vec::new();
    vec.rewind();
    while let Some(index) = vec.step() {
        visited.push(vec.get(index).unwrap()[0]);
        assert!(vec.remove(index));
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cursor_state(), CursorState::Finished);
}

#[test]
fn test_remove_fast_every_visited_element() {
    let mut vec = bytes(0..5);

    let mut visited = Vec::new();
    vec.rewind();
    while let Some(index) = vec.step() {
        visited.push(vec.get(index).unwrap()[0]);
        assert!(vec.remove_fast(index));
    }

    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert!(vec.is_empty());
}

#[test]
fn test_remove_fast_before_cursor_revisits_current() {
    let mut vec = bytes(0..5);

    let mut visited = Vec::new();
    let mut removed = false;
    vec.rewind();
    while let Some(index) = vec.step() {
        let value = vec.get(index).unwrap()[0];
        visited.push(value);
        if value == 3 && !removed {
            assert_eq!(vec.cursor_state(), CursorState::Active(4));
            assert!(vec.remove_fast(0));
            assert_eq!(vec.cursor_state(), CursorState::Active(3));
            removed = true;
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 3]);
    assert_eq!(vec.as_bytes(), &[4, 1, 2, 3]);
    assert_eq!(vec.cursor_state(), CursorState::Finished);
}

#[test]
fn test_remove_before_cursor() {
    let mut vec = bytes(0..6);

    let mut visited = Vec::new();
    vec.rewind();
    while let Some(index) = vec.step() {
        let value = vec.get(index).unwrap()[0];
        visited.push(value);
        if value == 3 {
            vec.remove(0);
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(vec.as_bytes(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_remove_after_cursor() {
    let mut vec = bytes(0..6);

    let mut visited = Vec::new();
    vec.rewind();
    while let Some(index) = vec.step() {
        let value = vec.get(index).unwrap()[0];
        visited.push(value);
        if value == 1 {
            vec.remove(4);
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 5]);
}

#[test]
fn test_pop_back_of_current_last_element() {
    let mut vec = bytes(0..3);

    let mut visited = Vec::new();
    vec.rewind();
    while let Some(index) = vec.step() {
        visited.push(vec.get(index).unwrap()[0]);
        if index == vec.len() - 1 {
            vec.pop_back();
        }
    }

    assert_eq!(visited, vec![0, 1, 2]);
    assert_eq!(vec.as_bytes(), &[0, 1]);
    assert_eq!(vec.cursor_state(), CursorState::Finished);
}

#[test]
fn test_insert_before_cursor_revisits() {
    let mut vec = bytes([10, 20, 30]);

    let mut visited = Vec::new();
    vec.rewind();
    while let Some(index) = vec.step() {
        let value = vec.get(index).unwrap()[0];
        visited.push(value);
        if value == 20 && visited.len() < 3 {
            vec.insert(0, &[99]).unwrap();
        }
    }

    // 20 is seen twice and 99 never, as documented
    assert_eq!(visited, vec![10, 20, 20, 30]);
    assert_eq!(vec.as_bytes(), &[99, 10, 20, 30]);
}

#[test]
fn test_removal_without_traversal_leaves_cursor() {
    let mut vec = bytes(0..4);
    vec.remove(1);
    assert_eq!(vec.cursor_state(), CursorState::Inactive);

    vec.rewind();
    while vec.step().is_some() {}
    vec.remove(0);
    assert_eq!(vec.cursor_state(), CursorState::Finished);
}

#[test]
fn test_abandoned_traversal_still_adjusts() {
    let mut vec = bytes(0..4);
    vec.rewind();
    vec.step();
    vec.step();
    assert_eq!(vec.cursor_state(), CursorState::Active(2));

    vec.remove(0);
    assert_eq!(vec.cursor_state(), CursorState::Active(1));
}

#[test]
fn test_clear_with_destructor_finishes_cursor() {
    let mut vec = StrideVec::builder(1).destructor(|_| {}).build().unwrap();
    vec.push_back(&[1]).unwrap();

    vec.clear();
    assert_eq!(vec.cursor_state(), CursorState::Finished);
}

#[test]
fn test_traverse_removes_and_breaks() {
    let mut vec = bytes(0..8);

    let found = vec.traverse(|vec, index| {
        let value = vec.get(index).unwrap()[0];
        if value % 2 == 1 {
            vec.remove(index);
        }
        if value == 5 {
            ControlFlow::Break(index)
        } else {
            ControlFlow::Continue(())
        }
    });

    assert_eq!(found, ControlFlow::Break(3));
    assert_eq!(vec.as_bytes(), &[0, 2, 4, 6, 7]);
}

#[test]
fn test_retain() {
    let mut vec = bytes(0..10);
    vec.retain(|value| value[0] % 3 == 0);
    assert_eq!(vec.as_bytes(), &[0, 3, 6, 9]);
}

#[test]
fn test_cursor_mut_remove_current() {
    let mut vec = bytes(0..6);

    let mut visited = Vec::new();
    let mut cursor = vec.cursor_mut();
    while let Some(value) = cursor.next() {
        let value = value[0];
        visited.push(value);
        if value % 2 == 0 {
            assert!(cursor.remove_current());
            assert!(cursor.index().is_none());
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(vec.as_bytes(), &[1, 3, 5]);
}

#[test]
fn test_cursor_mut_remove_current_fast() {
    let mut vec = bytes(0..5);

    let mut visited = Vec::new();
    let mut cursor = vec.cursor_mut();
    while let Some(value) = cursor.next() {
        visited.push(value[0]);
        cursor.remove_current_fast();
    }

    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert!(vec.is_empty());
}

#[test]
fn test_cursor_mut_edit_in_place() {
    let mut vec = bytes(0..3);

    let mut cursor = vec.cursor_mut();
    assert!(cursor.current().is_none());
    assert!(!cursor.remove_current());
    while cursor.next().is_some() {
        if let Some(slot) = cursor.current_mut() {
            slot[0] *= 10;
        }
    }

    assert_eq!(vec.as_bytes(), &[0, 10, 20]);
}

#[test]
fn test_cursor_mut_leaves_embedded_cursor() {
    let mut vec = bytes(0..3);
    vec.rewind();
    vec.step();

    let mut cursor = vec.cursor_mut();
    cursor.next();
    cursor.remove_current();

    assert_eq!(vec.cursor_state(), CursorState::Active(1));
}
