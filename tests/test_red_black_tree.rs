extern crate balanced_collections;
extern crate rand;

use self::rand::{thread_rng, Rng, SeedableRng, XorShiftRng};
use balanced_collections::red_black_tree::{Color, Error, RedBlackMap};
use std::vec::Vec;

// Re-derives the red-black invariants from the public pre-order traversal alone: the parent of a
// node is the most recent shallower node, so the root color, red-red edges, and black heights are
// all checkable without reaching into the tree.
fn check_invariants(map: &RedBlackMap<u32>) {
    let nodes: Vec<(i32, Color, usize)> = map.traverse().collect();
    assert_eq!(nodes.len(), map.len());
    if nodes.is_empty() {
        return;
    }

    assert_eq!(nodes[0].2, 0);
    assert_eq!(nodes[0].1, Color::Black);

    let mut stack: Vec<(Color, usize, usize)> = Vec::new();
    let mut child_counts = vec![0; nodes.len()];
    let mut blacks = vec![0; nodes.len()];

    for (index, &(_, color, depth)) in nodes.iter().enumerate() {
        stack.truncate(depth);
        assert_eq!(stack.len(), depth);

        match stack.last() {
            None => {
                assert_eq!(depth, 0);
                blacks[index] = (color == Color::Black) as usize;
            }
            Some(&(parent_color, parent_blacks, parent_index)) => {
                child_counts[parent_index] += 1;
                assert!(child_counts[parent_index] <= 2);
                if color == Color::Red {
                    assert_ne!(parent_color, Color::Red);
                }
                blacks[index] = parent_blacks + (color == Color::Black) as usize;
            }
        }
        stack.push((color, blacks[index], index));
    }

    // Every node with fewer than two children borders at least one absent child; all paths down
    // to an absent child must have seen the same number of black nodes.
    let mut black_height = None;
    for (index, &count) in child_counts.iter().enumerate() {
        if count < 2 {
            match black_height {
                None => black_height = Some(blacks[index]),
                Some(height) => assert_eq!(blacks[index], height),
            }
        }
    }
}

#[test]
fn int_test_red_black_map() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = Vec::new();

    for _ in 0..1_000 {
        let key = (rng.next_u32() % 2_048) as i32;
        let val = rng.next_u32();

        if map.insert(key, val).is_ok() {
            expected.push((key, val));
        } else {
            assert_eq!(map.insert(key, val), Err(Error::DuplicateKey(key)));
        }
        check_invariants(&map);
    }

    expected.sort();
    assert_eq!(map.len(), expected.len());

    for entry in &expected {
        assert!(map.contains_key(entry.0));
        assert_eq!(map.get(entry.0), Ok(&entry.1));
    }

    assert_eq!(
        map.iter().map(|(key, value)| (*key, *value)).collect::<Vec<_>>(),
        expected,
    );

    thread_rng().shuffle(&mut expected);

    let mut expected_len = expected.len();
    for entry in expected {
        assert_eq!(map.remove(entry.0), Ok(entry.1));
        assert_eq!(map.remove(entry.0), Err(Error::KeyNotFound(entry.0)));
        expected_len -= 1;
        assert_eq!(map.len(), expected_len);
        check_invariants(&map);
    }

    assert!(map.is_empty());
    assert_eq!(map.traverse().next(), None);
}

#[test]
fn int_test_missing_key_operations_leave_map_unchanged() {
    let mut map = RedBlackMap::new();
    for key in [50, 30, 70, 20, 40, 60, 80].iter() {
        map.insert(*key, *key as u32).unwrap();
    }

    assert_eq!(map.get(55), Err(Error::KeyNotFound(55)));
    assert_eq!(map.set(55, 0), Err(Error::KeyNotFound(55)));
    assert_eq!(map.remove(55), Err(Error::KeyNotFound(55)));

    assert_eq!(map.len(), 7);
    assert_eq!(
        map.iter().map(|(key, _)| *key).collect::<Vec<i32>>(),
        vec![20, 30, 40, 50, 60, 70, 80],
    );
    check_invariants(&map);
}

#[test]
fn int_test_interleaved_inserts_and_removes() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut keys = Vec::new();
    let mut inserts = 0;
    let mut removes = 0;

    for _ in 0..2_000 {
        let key = (rng.next_u32() % 256) as i32;
        if rng.gen::<bool>() {
            if map.insert(key, key as u32).is_ok() {
                keys.push(key);
                inserts += 1;
            }
        } else if map.remove(key).is_ok() {
            let index = keys.iter().position(|&k| k == key).unwrap();
            keys.swap_remove(index);
            removes += 1;
        }
        check_invariants(&map);
    }

    assert_eq!(map.len(), inserts - removes);

    keys.sort();
    assert_eq!(
        map.iter().map(|(key, _)| *key).collect::<Vec<i32>>(),
        keys,
    );
}
