// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use magyar_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected while solving one assignment instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Hungarian iterations performed (reduce / match / cover rounds).
    pub iterations: u64,
    /// Maximum matchings computed, including enumeration rematches.
    pub matchings_computed: u64,
    /// Minimum vertex covers derived from imperfect matchings.
    pub covers_computed: u64,
    /// Re-reductions applied from a vertex cover.
    pub rereductions: u64,
    /// Branch-and-bound frames processed during enumeration.
    pub frames_explored: u64,
    /// Assignments handed to the consumer.
    pub assignments_yielded: u64,
    /// Total time spent producing assignments.
    pub time_total: Duration,
}

impl SolveStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add_val(1);
    }

    #[inline]
    pub fn on_matching_computed(&mut self) {
        self.matchings_computed = self.matchings_computed.saturating_add_val(1);
    }

    #[inline]
    pub fn add_matchings_computed(&mut self, count: u64) {
        self.matchings_computed = self.matchings_computed.saturating_add_val(count);
    }

    #[inline]
    pub fn on_cover_computed(&mut self) {
        self.covers_computed = self.covers_computed.saturating_add_val(1);
    }

    #[inline]
    pub fn on_rereduction(&mut self) {
        self.rereductions = self.rereductions.saturating_add_val(1);
    }

    #[inline]
    pub fn add_frames_explored(&mut self, frames: u64) {
        self.frames_explored = self.frames_explored.saturating_add_val(frames);
    }

    #[inline]
    pub fn on_assignment_yielded(&mut self) {
        self.assignments_yielded = self.assignments_yielded.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Magyar Solver Statistics:")?;
        writeln!(f, "  Iterations:           {}", self.iterations)?;
        writeln!(f, "  Matchings computed:   {}", self.matchings_computed)?;
        writeln!(f, "  Covers computed:      {}", self.covers_computed)?;
        writeln!(f, "  Re-reductions:        {}", self.rereductions)?;
        writeln!(f, "  Frames explored:      {}", self.frames_explored)?;
        writeln!(f, "  Assignments yielded:  {}", self.assignments_yielded)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = SolveStatistics::default();
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.matchings_computed, 0);
        assert_eq!(stats.covers_computed, 0);
        assert_eq!(stats.rereductions, 0);
        assert_eq!(stats.frames_explored, 0);
        assert_eq!(stats.assignments_yielded, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = SolveStatistics::default();
        stats.on_iteration();
        stats.on_iteration();
        stats.on_matching_computed();
        stats.on_cover_computed();
        stats.on_rereduction();
        stats.add_frames_explored(7);
        stats.on_assignment_yielded();

        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.matchings_computed, 1);
        assert_eq!(stats.covers_computed, 1);
        assert_eq!(stats.rereductions, 1);
        assert_eq!(stats.frames_explored, 7);
        assert_eq!(stats.assignments_yielded, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SolveStatistics {
            iterations: u64::MAX,
            ..SolveStatistics::default()
        };
        stats.on_iteration();
        assert_eq!(stats.iterations, u64::MAX);
    }

    #[test]
    fn test_display_lists_all_counters() {
        let mut stats = SolveStatistics::default();
        stats.on_iteration();
        stats.set_total_time(Duration::from_millis(5));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Iterations:           1"));
        assert!(rendered.contains("Assignments yielded:  0"));
        assert!(rendered.contains("Total time"));
    }
}
