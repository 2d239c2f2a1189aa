//! Injectable random choice for enhancement passes

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Uniform source of list indices
pub trait Picker {
    /// An index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Pick one entry of `options`, or `None` when the list is empty
pub fn pick<'a>(picker: &mut dyn Picker, options: &'a [String]) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let index = picker.pick_index(options.len()).min(options.len() - 1);
    Some(options[index].as_str())
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Deterministic picker driven by a splitmix64 sequence
#[derive(Debug, Clone)]
pub struct SeededPicker {
    state: u64,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent stream for the `index`-th item of a run seeded with `seed`
    pub fn for_item(seed: u64, index: usize) -> Self {
        Self::new(seed ^ splitmix64(index as u64))
    }

    /// Seed from the clock, a process-wide counter and the pid
    pub fn from_entropy() -> Self {
        let sequence = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        let now_ns = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(sequence);
        let pid = u64::from(std::process::id());
        Self::new(now_ns ^ sequence.rotate_left(13) ^ (pid << 32))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        splitmix64(self.state)
    }
}

impl Picker for SeededPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        // Multiply-shift maps the full u64 range onto 0..len
        ((self.next_u64() as u128 * len as u128) >> 64) as usize
    }
}

/// Always picks the same index (wrapped into range). For tests and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pick_empty_is_none() {
        let mut picker = FixedPicker(0);
        assert_eq!(pick(&mut picker, &[]), None);
    }

    #[test]
    fn test_fixed_picker_wraps() {
        let opts = options(&["a", "b", "c"]);
        assert_eq!(pick(&mut FixedPicker(1), &opts), Some("b"));
        assert_eq!(pick(&mut FixedPicker(4), &opts), Some("b"));
    }

    #[test]
    fn test_seeded_picker_is_deterministic() {
        let mut a = SeededPicker::new(42);
        let mut b = SeededPicker::new(42);
        let seq_a: Vec<usize> = (0..20).map(|_| a.pick_index(6)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick_index(6)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_seeded_picker_covers_range() {
        let mut picker = SeededPicker::new(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[picker.pick_index(5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_for_item_streams_differ() {
        let mut first = SeededPicker::for_item(1, 0);
        let mut second = SeededPicker::for_item(1, 1);
        assert_ne!(first.next_u64(), second.next_u64());
    }
}
