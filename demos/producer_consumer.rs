//! Multi-producer / single-consumer demo
//!
//! Four producers push distinct ranges into a read-write-guarded queue
//! while a consumer drains it and inspector threads watch the length, all
//! through the same five public operations.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use polyqueue::RwQueue;

const PRODUCERS: usize = 4;
const ITEMS_PER_PRODUCER: usize = 50_000;

fn main() {
    let queue: Arc<RwQueue<usize>> = Arc::new(RwQueue::new());
    let started = Instant::now();

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|id| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..ITEMS_PER_PRODUCER {
                    queue.put(id * ITEMS_PER_PRODUCER + i);
                }
                println!("producer {id} done");
            })
        })
        .collect();

    // Inspectors take read locks only; under the read-write guard they run
    // concurrently with each other.
    let inspector = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            for _ in 0..20 {
                println!(
                    "inspector: len = {}, front = {:?}",
                    queue.len(),
                    queue.read_front()
                );
                thread::sleep(Duration::from_millis(10));
            }
        })
    };

    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let total = PRODUCERS * ITEMS_PER_PRODUCER;
            let mut sum: u64 = 0;
            let mut received = 0;
            while received < total {
                match queue.get() {
                    Some(v) => {
                        sum += v as u64;
                        received += 1;
                    }
                    None => thread::yield_now(),
                }
            }
            (received, sum)
        })
    };

    for p in producers {
        p.join().unwrap();
    }
    let (received, sum) = consumer.join().unwrap();
    inspector.join().unwrap();

    let total = PRODUCERS * ITEMS_PER_PRODUCER;
    let expected: u64 = (0..total as u64).sum();
    println!("received {received} items in {:?}", started.elapsed());
    assert_eq!(received, total);
    assert_eq!(sum, expected, "every value delivered exactly once");
    assert!(queue.is_empty());
    println!("checksum OK");
}
