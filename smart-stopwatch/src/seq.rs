use std::sync::atomic::{AtomicU64, Ordering};

static INSTANCES: AtomicU64 = AtomicU64::new(0);

/// Next value of the process-wide instance counter, starting at 1.
pub fn next_instance_id() -> u64 {
    INSTANCES.fetch_add(1, Ordering::SeqCst) + 1
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_works() {
        let first = next_instance_id();
        let second = next_instance_id();
        assert!(first >= 1);
        assert!(second > first);
    }

    #[test]
    fn concurrent_ids_are_unique() {
        let per_thread: Vec<Vec<u64>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| (0..250).map(|_| next_instance_id()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for ids in &per_thread {
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }

        let mut all: Vec<u64> = per_thread.into_iter().flatten().collect();
        let n = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n);
    }
}
