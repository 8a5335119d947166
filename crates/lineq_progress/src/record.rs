use std::collections::BTreeMap;

use lineq_ast::{Difficulty, PracticeMode};
use lineq_engine::{MistakeKind, ValidationResult};
use serde::{Deserialize, Serialize};

/// Attempts and correct attempts within one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub total: u32,
    pub correct: u32,
}

impl Tally {
    fn count(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Percentage of correct attempts, `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| 100.0 * f64::from(self.correct) / f64::from(self.total))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeStat {
    pub count: u32,
    /// Unix seconds of the latest occurrence.
    pub last_seen: u64,
}

/// Mastery scores, each in `0..=100`.
///
/// Only `calculation_skill` is derived from attempts. `concept_understanding`
/// and `application_ability` are supplied from outside the engine (for
/// instance by a teacher or a separate assessment) and stay at 0 until then.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Mastery {
    pub calculation_skill: f64,
    pub concept_understanding: f64,
    pub application_ability: f64,
    pub overall: f64,
}

impl Mastery {
    pub const CONCEPT_WEIGHT: f64 = 0.3;
    pub const CALCULATION_WEIGHT: f64 = 0.4;
    pub const APPLICATION_WEIGHT: f64 = 0.3;

    fn recompute_overall(&mut self) {
        self.overall = Self::CONCEPT_WEIGHT * self.concept_understanding
            + Self::CALCULATION_WEIGHT * self.calculation_skill
            + Self::APPLICATION_WEIGHT * self.application_ability;
    }

    fn scores(&self) -> [f64; 4] {
        [
            self.calculation_skill,
            self.concept_understanding,
            self.application_ability,
            self.overall,
        ]
    }
}

/// Everything known about one learner's attempts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub by_mode: BTreeMap<PracticeMode, Tally>,
    pub by_difficulty: BTreeMap<Difficulty, Tally>,
    pub mistake_frequency: BTreeMap<MistakeKind, MistakeStat>,
    pub mastery: Mastery,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record after one more validated attempt. `self` is left untouched.
    pub fn record(
        &self,
        mode: PracticeMode,
        difficulty: Difficulty,
        result: &ValidationResult,
        seen_at: u64,
    ) -> ProgressRecord {
        let mut next = self.clone();
        next.count_attempt(mode, difficulty, result, seen_at);
        next
    }

    fn count_attempt(
        &mut self,
        mode: PracticeMode,
        difficulty: Difficulty,
        result: &ValidationResult,
        seen_at: u64,
    ) {
        let correct = result.is_correct;
        self.total_attempts += 1;
        if correct {
            self.correct_attempts += 1;
        }
        self.by_mode.entry(mode).or_default().count(correct);
        self.by_difficulty.entry(difficulty).or_default().count(correct);

        if let (false, Some(kind)) = (correct, result.mistake_kind) {
            let stat = self.mistake_frequency.entry(kind).or_default();
            stat.count += 1;
            stat.last_seen = seen_at;
        }

        self.mastery.calculation_skill = self.accuracy();
        self.mastery.recompute_overall();
    }

    /// Overall percentage of correct attempts (0 before the first attempt).
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.correct_attempts) / f64::from(self.total_attempts)
    }

    pub fn accuracy_for_mode(&self, mode: PracticeMode) -> Option<f64> {
        self.by_mode.get(&mode).and_then(Tally::accuracy)
    }

    pub fn accuracy_for_difficulty(&self, difficulty: Difficulty) -> Option<f64> {
        self.by_difficulty.get(&difficulty).and_then(Tally::accuracy)
    }

    /// Set the externally assessed mastery components (clamped to `0..=100`).
    /// `None` keeps the current value.
    pub fn set_external_signals(
        &mut self,
        concept_understanding: Option<f64>,
        application_ability: Option<f64>,
    ) {
        if let Some(v) = concept_understanding.filter(|v| v.is_finite()) {
            self.mastery.concept_understanding = v.clamp(0.0, 100.0);
        }
        if let Some(v) = application_ability.filter(|v| v.is_finite()) {
            self.mastery.application_ability = v.clamp(0.0, 100.0);
        }
        self.mastery.recompute_overall();
    }

    /// Most frequent mistake; ties go to the most recently seen.
    pub fn most_frequent_mistake(&self) -> Option<(MistakeKind, MistakeStat)> {
        self.mistake_frequency
            .iter()
            .max_by_key(|(_, stat)| (stat.count, stat.last_seen))
            .map(|(kind, stat)| (*kind, *stat))
    }

    /// Remediation message for the learner's most frequent mistake.
    pub fn remediation_for(&self) -> Option<&'static str> {
        self.most_frequent_mistake().map(|(kind, _)| kind.remediation())
    }

    /// Structural consistency check used when loading persisted records.
    pub fn check_consistency(&self) -> Result<(), String> {
        if self.correct_attempts > self.total_attempts {
            return Err(format!(
                "{} correct out of {} attempts",
                self.correct_attempts, self.total_attempts
            ));
        }
        let tallies = self
            .by_mode
            .values()
            .chain(self.by_difficulty.values());
        if let Some(bad) = tallies.into_iter().find(|t| t.correct > t.total) {
            return Err(format!("tally with {} correct out of {}", bad.correct, bad.total));
        }
        let mode_total: u64 = self.by_mode.values().map(|t| u64::from(t.total)).sum();
        let difficulty_total: u64 = self.by_difficulty.values().map(|t| u64::from(t.total)).sum();
        let total = u64::from(self.total_attempts);
        if mode_total != total || difficulty_total != total {
            return Err(format!(
                "breakdowns ({} by mode, {} by difficulty) do not add up to {} attempts",
                mode_total, difficulty_total, total
            ));
        }
        let mistakes: u64 = self
            .mistake_frequency
            .values()
            .map(|s| u64::from(s.count))
            .sum();
        if mistakes > total - u64::from(self.correct_attempts) {
            return Err(format!("{} mistakes recorded for fewer wrong attempts", mistakes));
        }
        if let Some(score) = self
            .mastery
            .scores()
            .into_iter()
            .find(|s| !s.is_finite() || !(0.0..=100.0).contains(s))
        {
            return Err(format!("mastery score {} out of range", score));
        }
        Ok(())
    }
}
