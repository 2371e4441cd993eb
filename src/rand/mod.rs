//! Random draws behind an injectable source.
//!
//! The composer never talks to an entropy device directly; it draws through
//! [`RandomSource`] so tests can replay a fixed stream.

use std::fs::File;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use zeroize::Zeroize;

/// Source of uniform random draws for password composition.
///
/// Implementations must be safe for sequential reuse across generate
/// actions; no per-call re-seeding is required.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    #[inline]
    fn pick(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// SplitMix64 stream.
///
/// Small state, full 64-bit output, good enough for character selection.
/// This deliberately is not a CSPRNG; the tool makes no cryptographic
/// guarantee about its output.
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Fixed-seed stream for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Stream seeded from `/dev/urandom`, falling back to the clock and pid
    /// on platforms without a urandom device.
    pub fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        let seed = File::open("/dev/urandom")
            .and_then(|mut f| f.read_exact(&mut buf).map(|_| u64::from_ne_bytes(buf)))
            .unwrap_or_else(|_| {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0);
                nanos ^ u64::from(std::process::id()).rotate_left(32)
            });
        Self { state: seed }
    }
}

impl RandomSource for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Drop for SplitMix64 {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
