//! Plain-text rendering of a learner's progress.

use lineq_ast::{Difficulty, PracticeMode};
use lineq_progress::ProgressRecord;

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.0}%", v))
}

pub fn progress_report(learner: &str, record: &ProgressRecord) -> String {
    let mut lines = vec![format!(
        "Progress for {}: {} of {} answers correct ({:.0}%)",
        learner,
        record.correct_attempts,
        record.total_attempts,
        record.accuracy()
    )];

    let mastery = &record.mastery;
    lines.push(format!(
        "Mastery {:.0}  (calculation {:.0}, concepts {:.0}, application {:.0})",
        mastery.overall,
        mastery.calculation_skill,
        mastery.concept_understanding,
        mastery.application_ability
    ));

    let modes: Vec<String> = PracticeMode::ALL
        .iter()
        .map(|m| format!("{} {}", m, percent(record.accuracy_for_mode(*m))))
        .collect();
    lines.push(format!("By mode:       {}", modes.join(", ")));

    let levels: Vec<String> = Difficulty::ALL
        .iter()
        .map(|d| format!("{} {}", d, percent(record.accuracy_for_difficulty(*d))))
        .collect();
    lines.push(format!("By difficulty: {}", levels.join(", ")));

    if let Some((kind, stat)) = record.most_frequent_mistake() {
        lines.push(format!(
            "Most frequent mistake: {} ({}x). {}",
            kind,
            stat.count,
            kind.remediation()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineq_engine::Validator;

    #[test]
    fn fresh_record_report() {
        let report = progress_report("ana", &ProgressRecord::new());
        assert!(report.starts_with("Progress for ana: 0 of 0 answers correct (0%)"));
        assert!(report.contains("guided -, practice -, challenge -"));
        assert!(!report.contains("Most frequent mistake"));
    }

    #[test]
    fn report_names_the_most_frequent_mistake() {
        let record = ProgressRecord::new().record(
            PracticeMode::Practice,
            Difficulty::Easy,
            &Validator::new().validate_answer(4.0, -4.0),
            1,
        );
        let report = progress_report("ana", &record);
        assert!(report.contains("practice 0%"));
        assert!(report.contains("Most frequent mistake: sign error (1x)"));
    }
}
