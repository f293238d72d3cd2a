use linked_list::{IndexPolicy, LinkedList};
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn values<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

fn from_values(values: &[i32]) -> LinkedList<i32> {
    values.iter().cloned().collect()
}

#[test]
fn push_prepends() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());
    list.push(3);
    list.push(2);
    list.push(1);
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(list.len(), 3);
    assert!(list.is_well_formed());
}

#[test]
fn pop_drains_in_order() {
    let mut list = LinkedList::new();
    list.push(3);
    list.push(2);
    list.push(1);
    assert_eq!(list.pop(), Some(1));
    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.pop(), Some(3));
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
    assert!(list.is_well_formed());
}

#[test]
fn append_then_remove_last() {
    let mut list = LinkedList::new();
    list.append(6);
    list.append(7);
    list.append(8);
    assert_eq!(list.to_string(), "[6, 7, 8]");
    assert_eq!(list.remove_last(), Some(8));
    assert_eq!(list.remove_last(), Some(7));
    assert_eq!(list.remove_last(), Some(6));
    assert!(list.is_empty());
    assert!(list.is_well_formed());
}

#[test]
fn head_chain_reads_values() {
    let list = from_values(&[1, 2, 3]);
    let head = list.head().unwrap();
    assert_eq!(*head.value(), 1);
    let second = list.get(head.next().unwrap()).unwrap();
    assert_eq!(*second.value(), 2);
    let third = list.get(second.next().unwrap()).unwrap();
    assert_eq!(*third.value(), 3);
    assert_eq!(list.tail(), Some(third));
}

#[test]
fn node_at_index() {
    let list = from_values(&[1, 2, 3]);
    assert_eq!(list.node(0).map(|node| *node.value()), Some(1));
    assert_eq!(list.node(1).map(|node| *node.value()), Some(2));
    assert_eq!(list.node(2).map(|node| *node.value()), Some(3));
    assert!(list.node(-1).is_none());
    assert!(LinkedList::<i32>::new().node(0).is_none());
}

#[test]
fn delete_middle_then_front() {
    let mut list = from_values(&[1, 2, 3]);
    assert_eq!(list.delete(1), Some(2));
    assert_eq!(list.to_string(), "[1, 3]");
    assert!(list.is_well_formed());
    assert_eq!(list.delete(0), Some(1));
    assert_eq!(list.to_string(), "[3]");
    assert!(list.is_well_formed());
}

#[test]
fn delete_last_position_moves_tail() {
    let mut list = from_values(&[1, 2, 3]);
    assert_eq!(list.delete(2), Some(3));
    assert_eq!(list.back(), Some(&2));
    list.append(4);
    assert_eq!(list.to_string(), "[1, 2, 4]");
    assert!(list.is_well_formed());
}

#[test]
fn delete_negative_is_noop() {
    let mut list = from_values(&[1, 2]);
    assert_eq!(list.delete(-1), None);
    assert_eq!(list.to_string(), "[1, 2]");
}

#[test]
fn insert_at_end_and_front() {
    let mut list = from_values(&[3, 6, 7]);
    assert!(list.insert(8, 3));
    assert_eq!(list.to_string(), "[3, 6, 7, 8]");
    assert_eq!(list.back(), Some(&8));
    assert!(list.insert(2, 0));
    assert_eq!(list.to_string(), "[2, 3, 6, 7, 8]");
    assert!(list.is_well_formed());
}

#[test]
fn insert_splices_middle() {
    let mut list = from_values(&[1, 3]);
    assert!(list.insert(2, 1));
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(list.back(), Some(&3));
    assert!(!list.insert(0, -2));
    assert_eq!(list.len(), 3);
    assert!(list.is_well_formed());
}

#[test]
fn insert_into_empty() {
    let mut list = LinkedList::new();
    assert!(list.insert(5, 0));
    assert_eq!(list.to_string(), "[5]");
    let mut list = LinkedList::new();
    assert!(list.insert(5, 4));
    assert_eq!(list.to_string(), "[5]");
    assert!(list.is_well_formed());
}

#[test]
fn reverse_lists() {
    let mut list = from_values(&[2, 3, 6, 7, 8]);
    list.reverse();
    assert_eq!(list.to_string(), "[8, 7, 6, 3, 2]");
    assert_eq!(list.front(), Some(&8));
    assert_eq!(list.back(), Some(&2));
    assert!(list.is_well_formed());

    let mut empty: LinkedList<i32> = LinkedList::new();
    empty.reverse();
    assert_eq!(empty.to_string(), "[]");
    assert!(empty.is_well_formed());

    let mut single = from_values(&[4]);
    single.reverse();
    assert_eq!(single.to_string(), "[4]");
    assert_eq!(single.front(), single.back());
    assert!(single.is_well_formed());
}

#[test]
fn reverse_twice_restores_order() {
    let original = from_values(&[5, 1, 4, 2, 3]);
    let mut list = original.clone();
    list.reverse();
    list.reverse();
    assert_eq!(list, original);
    assert!(list.is_well_formed());
}

#[test]
fn empty_removals_stay_empty() {
    let mut list: LinkedList<i32> = LinkedList::new();
    for _ in 0..3 {
        assert_eq!(list.pop(), None);
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.delete(0), None);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
    }
    assert!(list.is_well_formed());
}

#[test]
fn clamp_policy_operates_at_end() {
    init_logging();
    let mut list = from_values(&[1, 2, 3]);
    assert_eq!(list.policy(), IndexPolicy::Clamp);
    assert_eq!(list.node(10).map(|node| *node.value()), Some(3));
    assert_eq!(list.delete(10), Some(3));
    assert_eq!(list.to_string(), "[1, 2]");
    assert!(list.insert(9, 10));
    assert_eq!(list.to_string(), "[1, 2, 9]");
    assert!(list.is_well_formed());
}

#[test]
fn strict_policy_rejects_out_of_range() {
    init_logging();
    let mut list: LinkedList<i32> = LinkedList::with_policy(IndexPolicy::Strict);
    list.extend(vec![1, 2, 3]);
    assert!(list.node(3).is_none());
    assert_eq!(list.delete(3), None);
    assert!(!list.insert(9, 4));
    assert_eq!(list.to_string(), "[1, 2, 3]");

    assert_eq!(list.node(2).map(|node| *node.value()), Some(3));
    assert!(list.insert(4, 3));
    assert_eq!(list.delete(3), Some(4));
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert!(list.is_well_formed());
}

#[test]
fn clone_and_equality() {
    let mut list = from_values(&[1, 2, 3]);
    let copy = list.clone();
    list.pop();
    assert_eq!(copy.to_string(), "[1, 2, 3]");
    assert_ne!(list, copy);
    list.push(1);
    assert_eq!(list, copy);
}

#[test]
fn iterators_and_debug() {
    let list: LinkedList<String> = vec!["a".to_string(), "b".to_string()].into_iter().collect();
    assert_eq!(format!("{:?}", list), "[\"a\", \"b\"]");
    assert_eq!(list.iter().len(), 2);
    let mut joined = String::new();
    for value in &list {
        joined.push_str(value);
    }
    assert_eq!(joined, "ab");
    let owned: Vec<String> = list.into_iter().collect();
    assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn random_operations_match_vec_model() {
    init_logging();
    let mut rng = rand::rngs::StdRng::seed_from_u64(110);
    for round in 0..20 {
        let mut list: LinkedList<u32> = LinkedList::new();
        let mut model: Vec<u32> = Vec::new();
        for step in 0..200 {
            let value: u32 = rng.gen();
            // Indices may run one or two past the end to exercise clamping
            let index = rng.gen_range(0, model.len() + 2);
            match rng.gen_range(0, 7) {
                0 => {
                    list.push(value);
                    model.insert(0, value);
                }
                1 => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    assert_eq!(list.pop(), expected);
                }
                2 => {
                    list.append(value);
                    model.push(value);
                }
                3 => assert_eq!(list.remove_last(), model.pop()),
                4 => {
                    let expected = if model.is_empty() {
                        None
                    } else {
                        Some(model.remove(index.min(model.len() - 1)))
                    };
                    assert_eq!(list.delete(index as isize), expected);
                }
                5 => {
                    assert!(list.insert(value, index as isize));
                    model.insert(index.min(model.len()), value);
                }
                _ => {
                    list.reverse();
                    model.reverse();
                }
            }
            assert!(list.is_well_formed(), "round {} step {}", round, step);
            assert_eq!(list.len(), model.len());
            assert_eq!(values(&list), model);
        }
    }
}
