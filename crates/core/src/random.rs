//! Random source used by the outfit generator for shuffles and slot draws.
//!
//! Production callers wrap a `rand` generator in [`RngSource`]; tests can
//! script exact draws with [`ScriptedSource`].

use rand::Rng;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    /// Thread-local, non-deterministic source.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Uniform index into a collection of `len` elements. `len` must be non-zero.
pub fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    let idx = (rng.next_f64() * len as f64).floor() as usize;
    idx.min(len - 1)
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = pick_index(rng, i + 1);
        items.swap(i, j);
    }
}
