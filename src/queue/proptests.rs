//! Property-based tests for the queue composition using proptest
//!
//! Random operation sequences are replayed against a plain `VecDeque`
//! reference model; the queue must agree with the model after every step,
//! for both backends.

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;

#[derive(Debug, Clone)]
enum Op {
    Put(i32),
    Pop,
    Get,
    ReadFront,
    Len,
    IsEmpty,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Put),
        1 => Just(Op::Pop),
        2 => Just(Op::Get),
        1 => Just(Op::ReadFront),
        1 => Just(Op::Len),
        1 => Just(Op::IsEmpty),
    ]
}

fn run_against_model<B, G>(ops: &[Op])
where
    B: Backend<i32> + IntoIterator<Item = i32>,
    G: Guard<B>,
{
    let queue: Queue<i32, B, G> = Queue::new();
    let mut model: VecDeque<i32> = VecDeque::new();

    for op in ops {
        match op {
            Op::Put(v) => {
                queue.put(*v);
                model.push_back(*v);
            }
            Op::Pop => {
                queue.pop();
                model.pop_front();
            }
            Op::Get => assert_eq!(queue.get(), model.pop_front()),
            Op::ReadFront => assert_eq!(queue.read_front(), model.front().copied()),
            Op::Len => assert_eq!(queue.len(), model.len()),
            Op::IsEmpty => assert_eq!(queue.is_empty(), model.is_empty()),
        }
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.is_empty(), model.is_empty());
    }

    // Drain and compare the tail end.
    let rest: Vec<i32> = queue.into_inner().into_iter().collect();
    let expected: Vec<i32> = model.into_iter().collect();
    assert_eq!(rest, expected);
}

proptest! {
    #[test]
    fn vec_deque_backend_matches_model(
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        run_against_model::<VecDequeBackend<i32>, SysGuard<VecDequeBackend<i32>>>(&ops);
    }

    #[test]
    fn linked_backend_matches_model(
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        run_against_model::<LinkedBackend<i32>, RwGuard<LinkedBackend<i32>>>(&ops);
    }

    #[test]
    fn fifo_order_is_preserved(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let queue: RwQueue<i32> = RwQueue::new();
        for &v in &values {
            queue.put(v);
        }
        for &v in &values {
            prop_assert_eq!(queue.get(), Some(v));
        }
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn read_front_is_stable(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let queue: UnsyncQueue<i32> = UnsyncQueue::new();
        for &v in &values {
            queue.put(v);
        }
        let first = queue.read_front();
        for _ in 0..10 {
            prop_assert_eq!(queue.read_front(), first);
        }
        prop_assert_eq!(queue.len(), values.len());
    }
}
