//! Per-day task completion flags for tracker mode.

/// Upper bound on days in any month.
pub const MAX_DAYS: usize = 31;

/// Completion state for each day of the displayed month.
///
/// Built from a caller slice where index 0 corresponds to day 1. Entries
/// beyond the slice or beyond the month's day count read as false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionFlags {
    days: [bool; MAX_DAYS],
}

impl CompletionFlags {
    /// All days incomplete.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `flags` against a month of `days_in_month` days.
    pub fn from_slice(flags: &[bool], days_in_month: u32) -> Self {
        let mut days = [false; MAX_DAYS];
        let limit = (days_in_month as usize).min(MAX_DAYS);
        for (i, slot) in days.iter_mut().enumerate().take(limit) {
            *slot = flags.get(i).copied().unwrap_or(false);
        }
        Self { days }
    }

    /// Whether `day` (1-based) is marked complete.
    pub fn is_complete(&self, day: u32) -> bool {
        day >= 1 && day <= MAX_DAYS as u32 && self.days[(day - 1) as usize]
    }

    /// Count of completed days within the first `days_in_month` days.
    pub fn count_complete(&self, days_in_month: u32) -> u32 {
        (1..=days_in_month.min(MAX_DAYS as u32))
            .filter(|&day| self.is_complete(day))
            .count() as u32
    }
}
