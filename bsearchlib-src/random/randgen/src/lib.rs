use std::ops::Range;

use rand::{seq::index, Rng};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// Non-decreasing sequence of `len` values drawn from `bound`.
/// Duplicates are allowed and appear whenever the draws collide.
pub struct Asc<B> {
    pub bound: B,
    pub len: usize,
}

/// Strictly increasing sequence of `len` distinct values from `bound`.
///
/// # Panics
/// Panics if `bound` holds fewer than `len` values.
pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.clone())
    }
}

impl Gen for Range<usize> {
    type Output = usize;
    fn generate<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.clone())
    }
}

impl Gen for Asc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        let mut res: Vec<_> =
            (0..self.len).map(|_| self.bound.generate(rng)).collect();
        res.sort_unstable();
        res
    }
}

impl Gen for StrictAsc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        let Range { start, end } = self.bound.clone();
        let width = (end as i64 - start as i64).max(0) as usize;
        let mut res: Vec<_> = index::sample(rng, width, self.len)
            .into_iter()
            .map(|i| (start as i64 + i as i64) as i32)
            .collect();
        res.sort_unstable();
        res
    }
}
