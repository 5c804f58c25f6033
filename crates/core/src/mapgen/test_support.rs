use std::collections::VecDeque;

use super::seed::RandomSource;

/// Replays a fixed list of draws, then falls back to the low end of each range.
pub(crate) struct ScriptedSource {
    draws: VecDeque<i32>,
}

impl ScriptedSource {
    pub(crate) fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self { draws: draws.into_iter().collect() }
    }
}

impl RandomSource for ScriptedSource {
    fn rand_range(&mut self, min: i32, max: i32) -> i32 {
        let value = self.draws.pop_front().unwrap_or(min);
        assert!((min..=max).contains(&value), "scripted draw {value} outside {min}..={max}");
        value
    }
}
