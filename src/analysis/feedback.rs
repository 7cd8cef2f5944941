// src/analysis/feedback.rs

//! Rule-based feedback text.
//!
//! Each of the five clauses maps a metric onto a band, and each band onto one
//! fixed sentence. The rendered text always lists the clauses in the order
//! overall, time, confidence, skipped, hard, each sentence followed by a
//! single space.

use std::fmt;

/// Inclusive lower bounds of the overall bands, in percent.
pub const EXCELLENT_PERCENTAGE: f64 = 90.0;
pub const GOOD_PERCENTAGE: f64 = 70.0;
pub const ON_TRACK_PERCENTAGE: f64 = 50.0;

/// Exclusive lower bounds of the time bands, in points per minute.
pub const EXCELLENT_EFFICIENCY: f64 = 5.0;
pub const GOOD_EFFICIENCY: f64 = 3.0;

/// Exclusive lower bounds of the confidence bands, in switches.
pub const FREQUENT_SWITCHES: u64 = 10;
pub const OCCASIONAL_SWITCHES: u64 = 5;

pub const SEVERAL_SKIPPED: usize = 3;

/// Exclusive upper bounds of the hard-question bands, in percent.
pub const WEAK_HARD_ACCURACY: f64 = 30.0;
pub const FAIR_HARD_ACCURACY: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallBand {
    Excellent,
    Good,
    OnTrack,
    NeedsReview,
}

impl OverallBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCELLENT_PERCENTAGE {
            OverallBand::Excellent
        } else if percentage >= GOOD_PERCENTAGE {
            OverallBand::Good
        } else if percentage >= ON_TRACK_PERCENTAGE {
            OverallBand::OnTrack
        } else {
            OverallBand::NeedsReview
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            OverallBand::Excellent => {
                "Excellent performance! You have a strong understanding of the material."
            }
            OverallBand::Good => "Good job! You have a solid grasp of most concepts.",
            OverallBand::OnTrack => "You're on the right track, but there's room for improvement.",
            OverallBand::NeedsReview => "You need to review the material more thoroughly.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl TimeBand {
    pub fn from_efficiency(efficiency_score: f64) -> Self {
        if efficiency_score > EXCELLENT_EFFICIENCY {
            TimeBand::Excellent
        } else if efficiency_score > GOOD_EFFICIENCY {
            TimeBand::Good
        } else {
            TimeBand::NeedsImprovement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TimeBand::Excellent => "Your time management is excellent.",
            TimeBand::Good => "Your time management is good.",
            TimeBand::NeedsImprovement => "Try to improve your time management.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    SecondGuessing,
    OccasionalChanges,
    Confident,
}

impl ConfidenceBand {
    pub fn from_switches(option_switch_count: u64) -> Self {
        if option_switch_count > FREQUENT_SWITCHES {
            ConfidenceBand::SecondGuessing
        } else if option_switch_count > OCCASIONAL_SWITCHES {
            ConfidenceBand::OccasionalChanges
        } else {
            ConfidenceBand::Confident
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfidenceBand::SecondGuessing => {
                "You seem to be second-guessing yourself frequently. Try to be more confident in your answers."
            }
            ConfidenceBand::OccasionalChanges => {
                "You occasionally change your answers. Trust your instincts more."
            }
            ConfidenceBand::Confident => "You show good confidence in your answers.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipBand {
    Several,
    AFew,
    AnsweredAll,
}

impl SkipBand {
    pub fn from_skipped(skipped_count: usize) -> Self {
        if skipped_count > SEVERAL_SKIPPED {
            SkipBand::Several
        } else if skipped_count > 0 {
            SkipBand::AFew
        } else {
            SkipBand::AnsweredAll
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SkipBand::Several => {
                "You skipped several questions. Try to answer all questions, even if you're unsure."
            }
            SkipBand::AFew => {
                "You skipped a few questions. Remember that educated guesses are better than no answer."
            }
            SkipBand::AnsweredAll => "Great job attempting all questions!",
        }
    }
}

/// Quizzes without hard questions report an accuracy of 0 and therefore land
/// in `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardBand {
    Weak,
    Fair,
    Strong,
}

impl HardBand {
    pub fn from_accuracy(hard_questions_accuracy: f64) -> Self {
        if hard_questions_accuracy < WEAK_HARD_ACCURACY {
            HardBand::Weak
        } else if hard_questions_accuracy < FAIR_HARD_ACCURACY {
            HardBand::Fair
        } else {
            HardBand::Strong
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            HardBand::Weak => "Focus on improving your understanding of more difficult concepts.",
            HardBand::Fair => {
                "You're handling challenging questions reasonably well, but there's room to improve."
            }
            HardBand::Strong => "You excel at tackling difficult questions. Well done!",
        }
    }
}

/// One sentence of the feedback, tagged by the metric it comments on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackClause {
    Overall(OverallBand),
    Time(TimeBand),
    Confidence(ConfidenceBand),
    Skipped(SkipBand),
    Hard(HardBand),
}

impl FeedbackClause {
    pub fn message(self) -> &'static str {
        match self {
            FeedbackClause::Overall(band) => band.message(),
            FeedbackClause::Time(band) => band.message(),
            FeedbackClause::Confidence(band) => band.message(),
            FeedbackClause::Skipped(band) => band.message(),
            FeedbackClause::Hard(band) => band.message(),
        }
    }
}

/// Metrics the feedback is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackInputs {
    pub percentage: f64,
    pub efficiency_score: f64,
    pub option_switch_count: u64,
    pub skipped_count: usize,
    pub hard_questions_accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub overall: OverallBand,
    pub time: TimeBand,
    pub confidence: ConfidenceBand,
    pub skipped: SkipBand,
    pub hard: HardBand,
}

impl Feedback {
    pub fn assess(inputs: &FeedbackInputs) -> Self {
        Self {
            overall: OverallBand::from_percentage(inputs.percentage),
            time: TimeBand::from_efficiency(inputs.efficiency_score),
            confidence: ConfidenceBand::from_switches(inputs.option_switch_count),
            skipped: SkipBand::from_skipped(inputs.skipped_count),
            hard: HardBand::from_accuracy(inputs.hard_questions_accuracy),
        }
    }

    /// The clauses in rendering order.
    pub fn clauses(&self) -> [FeedbackClause; 5] {
        [
            FeedbackClause::Overall(self.overall),
            FeedbackClause::Time(self.time),
            FeedbackClause::Confidence(self.confidence),
            FeedbackClause::Skipped(self.skipped),
            FeedbackClause::Hard(self.hard),
        ]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in self.clauses() {
            write!(f, "{} ", clause.message())?;
        }
        Ok(())
    }
}

pub fn generate_feedback(inputs: &FeedbackInputs) -> String {
    Feedback::assess(inputs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> FeedbackInputs {
        FeedbackInputs {
            percentage: 100.0,
            efficiency_score: 6.0,
            option_switch_count: 0,
            skipped_count: 0,
            hard_questions_accuracy: 100.0,
        }
    }

    #[test]
    fn test_overall_band_lower_bounds_are_inclusive() {
        assert_eq!(OverallBand::from_percentage(90.0), OverallBand::Excellent);
        assert_eq!(OverallBand::from_percentage(89.99), OverallBand::Good);
        assert_eq!(OverallBand::from_percentage(70.0), OverallBand::Good);
        assert_eq!(OverallBand::from_percentage(50.0), OverallBand::OnTrack);
        assert_eq!(OverallBand::from_percentage(49.9), OverallBand::NeedsReview);
        assert_eq!(OverallBand::from_percentage(0.0), OverallBand::NeedsReview);
    }

    #[test]
    fn test_time_band_bounds_are_exclusive() {
        assert_eq!(TimeBand::from_efficiency(5.01), TimeBand::Excellent);
        assert_eq!(TimeBand::from_efficiency(5.0), TimeBand::Good);
        assert_eq!(TimeBand::from_efficiency(3.0), TimeBand::NeedsImprovement);
        assert_eq!(TimeBand::from_efficiency(0.0), TimeBand::NeedsImprovement);
    }

    #[test]
    fn test_confidence_band() {
        assert_eq!(ConfidenceBand::from_switches(12), ConfidenceBand::SecondGuessing);
        assert_eq!(ConfidenceBand::from_switches(10), ConfidenceBand::OccasionalChanges);
        assert_eq!(ConfidenceBand::from_switches(6), ConfidenceBand::OccasionalChanges);
        assert_eq!(ConfidenceBand::from_switches(5), ConfidenceBand::Confident);
    }

    #[test]
    fn test_skip_band() {
        assert_eq!(SkipBand::from_skipped(4), SkipBand::Several);
        assert_eq!(SkipBand::from_skipped(3), SkipBand::AFew);
        assert_eq!(SkipBand::from_skipped(1), SkipBand::AFew);
        assert_eq!(SkipBand::from_skipped(0), SkipBand::AnsweredAll);
    }

    #[test]
    fn test_hard_band() {
        assert_eq!(HardBand::from_accuracy(0.0), HardBand::Weak);
        assert_eq!(HardBand::from_accuracy(29.9), HardBand::Weak);
        assert_eq!(HardBand::from_accuracy(30.0), HardBand::Fair);
        assert_eq!(HardBand::from_accuracy(69.9), HardBand::Fair);
        assert_eq!(HardBand::from_accuracy(70.0), HardBand::Strong);
    }

    #[test]
    fn test_best_case_text() {
        let text = generate_feedback(&inputs());
        assert_eq!(
            text,
            "Excellent performance! You have a strong understanding of the material. \
             Your time management is excellent. \
             You show good confidence in your answers. \
             Great job attempting all questions! \
             You excel at tackling difficult questions. Well done! "
        );
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let feedback = Feedback::assess(&FeedbackInputs {
            percentage: 10.0,
            efficiency_score: 0.0,
            option_switch_count: 12,
            skipped_count: 5,
            hard_questions_accuracy: 50.0,
        });
        let text = feedback.to_string();

        let positions: Vec<usize> = feedback
            .clauses()
            .iter()
            .map(|c| text.find(c.message()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(matches!(feedback.clauses()[0], FeedbackClause::Overall(_)));
        assert!(matches!(feedback.clauses()[4], FeedbackClause::Hard(HardBand::Fair)));
        assert!(text.ends_with(' '));
    }

    #[test]
    fn test_second_guessing_clause() {
        let mut i = inputs();
        i.option_switch_count = 12;
        let text = generate_feedback(&i);
        assert!(text.contains("second-guessing"));
        assert!(!text.contains("occasionally change"));
        assert!(!text.contains("good confidence"));
    }
}
