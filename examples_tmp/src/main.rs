extern crate alloc;
use alloc::boxed::Box;

const HEAP_SIZE: usize = 4 * 1024 * 1024;
#[global_allocator]
static ALLOCATOR: rtheap::Allocator<HEAP_SIZE> = rtheap::Allocator::new();

fn main() {
    let handles: Vec<_> = (0..16).map(|i| {
        std::thread::spawn(move || {
            let b = Box::new([0u8; 512]);
            eprintln!("thread {} ok {}", i, b.len());
        })
    }).collect();
    for h in handles { h.join().unwrap(); }
}
