use crate::{CharCounts, Recommendation, Strength};

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    score: u8,
    strength: Strength,
    entropy: f64,
    crack_time: String,
    recommendations: Vec<Recommendation>,
    char_counts: CharCounts,
    is_common: bool,
}

impl Analysis {
    pub(crate) fn new(
        score: u8,
        strength: Strength,
        entropy: f64,
        crack_time: String,
        recommendations: Vec<Recommendation>,
        char_counts: CharCounts,
        is_common: bool,
    ) -> Self {
        Self {
            score,
            strength,
            entropy,
            crack_time,
            recommendations,
            char_counts,
            is_common,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn crack_time(&self) -> &str {
        &self.crack_time
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn char_counts(&self) -> CharCounts {
        self.char_counts
    }

    pub fn is_common(&self) -> bool {
        self.is_common
    }
}
