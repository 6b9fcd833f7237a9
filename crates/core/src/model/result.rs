/// Rounded percentage of `score` out of `total`, rounding halves up.
///
/// A `total` of zero yields 0.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Feedback message band chosen from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// 80% and above.
    Outstanding,
    /// 60% up to 79%.
    WellDone,
    /// Below 60%.
    KeepPracticing,
}

impl FeedbackTier {
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Outstanding
        } else if percentage >= 60 {
            Self::WellDone
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding! You're a JavaScript wizard. 🌟",
            Self::WellDone => "Well done! Keep practicing those concepts. 👍",
            Self::KeepPracticing => "Good start—dive back into the lecture notes for a refresh. 📚",
        }
    }
}

/// Final outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    score: u32,
    total: u32,
    percentage: u32,
    tier: FeedbackTier,
}

impl QuizResult {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: FeedbackTier::for_percentage(percentage),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> FeedbackTier {
        self.tier
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.percentage == 100
    }
}
