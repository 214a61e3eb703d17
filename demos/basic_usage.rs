//! Basic usage of polyqueue
//!
//! Walks through the queue API and the effect of picking different guard
//! policies for the same storage backend.

use polyqueue::{LinkedRwQueue, MutexQueue, ReentrantQueue, RwQueue, UnsyncQueue};

fn main() {
    println!("polyqueue basic usage");
    println!("=====================");

    // Single-threaded queue: no locking overhead, and the compiler will
    // refuse to let it cross a thread boundary.
    println!("\n1. Unsynchronized queue:");
    let local: UnsyncQueue<i32> = UnsyncQueue::new();
    local.put(1);
    local.put(2);
    println!("   len = {}, front = {:?}", local.len(), local.read_front());
    println!("   get -> {:?}, get -> {:?}", local.get(), local.get());
    println!("   get on empty -> {:?}", local.get());

    // The same API over an OS mutex.
    println!("\n2. Mutex-guarded queue:");
    let shared: MutexQueue<String> = MutexQueue::new();
    shared.put("first".to_string());
    shared.put("second".to_string());
    println!("   front without removing = {:?}", shared.read_front());
    shared.pop(); // discard the head
    println!("   after pop, front = {:?}", shared.read_front());

    // pop on an empty queue is a safe no-op.
    println!("\n3. pop on empty is a no-op:");
    let q: ReentrantQueue<u8> = ReentrantQueue::new();
    q.pop();
    println!("   still empty: {}", q.is_empty());

    // Backends are swappable independently of the guard.
    println!("\n4. Alternate backend, read-write guard:");
    let linked: LinkedRwQueue<u64> = LinkedRwQueue::new();
    for i in 0..5 {
        linked.put(i * 10);
    }
    print!("   draining:");
    while let Some(v) = linked.get() {
        print!(" {v}");
    }
    println!();

    // Leftover elements can be recovered when the queue is done.
    println!("\n5. into_inner:");
    let q: RwQueue<char> = RwQueue::new();
    for c in ['a', 'b', 'c'] {
        q.put(c);
    }
    q.get();
    let rest: Vec<char> = q.into_inner().into_iter().collect();
    println!("   remaining after one get: {rest:?}");
}
