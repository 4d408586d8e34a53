/// Final tally shown on the end screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    score: u32,
    total: u32,
}

impl QuizResult {
    /// `score` is clamped to `total`.
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self {
            score: score.min(total),
            total,
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

    /// `round(100 * score / total)`, rounding halves up. Zero for an empty quiz.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let score = u64::from(self.score);
        let total = u64::from(self.total);
        let rounded = (200 * score + total) / (2 * total);
        u32::try_from(rounded).unwrap_or(100)
    }

    /// Encouragement line for the score band.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self.percentage() {
            100 => "Ausgezeichnet! Perfect score!",
            80..=99 => "Sehr gut! Excellent work!",
            50..=79 => "Gut gemacht! Keep practicing!",
            _ => "Übung macht den Meister! Practice makes perfect!",
        }
    }
}
