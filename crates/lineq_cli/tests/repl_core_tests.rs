//! Core-only tests for the tutor REPL: commands in, messages out, no I/O.

use lineq_cli::catalogue::builtin_catalogue;
use lineq_cli::config::TutorConfig;
use lineq_cli::repl::{ReplCore, ReplMsg};
use lineq_ast::{Difficulty, PracticeMode};
use lineq_engine::{MistakeKind, Validator};
use lineq_progress::{MemoryProgressStore, ProgressRecord, ProgressStore};

fn core() -> ReplCore<MemoryProgressStore> {
    let config = TutorConfig {
        learner: "ana".to_string(),
        show_weights: false,
        ..TutorConfig::default()
    };
    ReplCore::new(
        builtin_catalogue().unwrap(),
        &config,
        MemoryProgressStore::new(),
    )
}

fn has(reply: &[ReplMsg], pred: impl Fn(&ReplMsg) -> bool) -> bool {
    reply.iter().any(pred)
}

fn output_containing(reply: &[ReplMsg], text: &str) -> bool {
    has(reply, |m| matches!(m, ReplMsg::Output(s) | ReplMsg::Steps(s) if s.contains(text)))
}

#[test]
fn help_returns_output() {
    let mut core = core();
    let reply = core.handle_command_core("help");
    assert!(output_containing(&reply, "answer <n>"));
}

#[test]
fn commands_need_a_problem() {
    let mut core = core();
    for command in ["undo", "show", "add 3", "answer 4", "hint"] {
        let reply = core.handle_command_core(command);
        assert!(
            has(&reply, |m| matches!(m, ReplMsg::Error(_))),
            "{command} should fail without a problem"
        );
    }
}

#[test]
fn list_filters_by_mode_and_difficulty() {
    let mut core = core();
    let reply = core.handle_command_core("list challenge hard");
    assert_eq!(reply.len(), 1);
    assert!(reply[0].text().starts_with("like-terms"));

    let reply = core.handle_command_core("list sideways");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Error(_))));
}

#[test]
fn solve_a_problem_end_to_end() {
    let mut core = core();
    let reply = core.handle_command_core("start add-one-step");
    assert!(output_containing(&reply, "x + 3 = 7"));

    let reply = core.handle_command_core("sub 3");
    assert!(output_containing(&reply, "Subtract 3 from both sides"));
    let reply = core.handle_command_core("simplify");
    assert!(output_containing(&reply, "x = 4"));
    assert!(has(&reply, |m| matches!(m, ReplMsg::Info(s) if s.contains("on its own"))));

    let reply = core.handle_command_core("answer 4");
    assert!(output_containing(&reply, "Correct! x = 4"));
    assert!(core.session().unwrap().is_solved());
}

#[test]
fn undo_redo_and_restart() {
    let mut core = core();
    core.handle_command_core("start two-step");
    core.handle_command_core("sub 5");
    core.handle_command_core("simplify");

    let reply = core.handle_command_core("undo");
    assert!(output_containing(&reply, "2x + 0 = 12"));
    let reply = core.handle_command_core("redo");
    assert!(output_containing(&reply, "2x = 12"));
    let reply = core.handle_command_core("redo");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Warn(_))));

    let reply = core.handle_command_core("restart");
    assert!(output_containing(&reply, "2x + 5 = 17"));
    assert_eq!(core.session().unwrap().history().len(), 1);
}

#[test]
fn rejected_operations_are_reported() {
    let mut core = core();
    core.handle_command_core("start two-step");
    let reply = core.handle_command_core("div 0");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Error(s) if s.contains("divide by zero"))));

    let reply = core.handle_command_core("frobnicate 3");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Error(s) if s.contains("help"))));
    assert_eq!(core.session().unwrap().history().len(), 1);
}

#[test]
fn one_sided_operations_warn_about_balance() {
    let mut core = core();
    core.handle_command_core("start two-step");
    let reply = core.handle_command_core("add 1 left");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Warn(s) if s.contains("no longer balance"))));
}

#[test]
fn hints_and_expected_steps_follow_the_mode() {
    let mut core = core();
    core.handle_command_core("start add-one-step");
    let reply = core.handle_command_core("expected");
    assert!(output_containing(&reply, "Subtract 3 from both sides"));
    let reply = core.handle_command_core("hint");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Info(s) if s.starts_with("Hint:"))));

    core.handle_command_core("start two-step-challenge");
    let reply = core.handle_command_core("hint");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Warn(s) if s.contains("challenge"))));
    let reply = core.handle_command_core("expected");
    assert!(has(&reply, |m| matches!(m, ReplMsg::Warn(_))));
}

#[test]
fn answers_feed_progress() {
    let mut core = core();
    core.handle_command_core("start two-step");
    let reply = core.handle_command_core("answer -6");
    assert!(output_containing(&reply, "Not quite"));
    core.handle_command_core("answer six");
    core.handle_command_core("answer 6");

    let record = core.tracker().record();
    assert_eq!(record.total_attempts, 3);
    assert_eq!(record.correct_attempts, 1);
    assert!(record.mistake_frequency.contains_key(&MistakeKind::SignError));
    assert!(record
        .mistake_frequency
        .contains_key(&MistakeKind::InterpretationError));

    let reply = core.handle_command_core("stats");
    assert!(output_containing(&reply, "Progress for ana: 1 of 3"));

    assert!(core.finish());
}

#[test]
fn next_walks_the_catalogue() {
    let mut core = core();
    core.handle_command_core("next");
    let first = core.session().unwrap().problem().id.clone();
    core.handle_command_core("next");
    let second = core.session().unwrap().problem().id.clone();
    assert_eq!(first, "add-one-step");
    assert_ne!(first, second);
}

#[test]
fn saved_progress_is_loaded_at_start() {
    let mut store = MemoryProgressStore::new();
    let saved = ProgressRecord::new().record(
        PracticeMode::Practice,
        Difficulty::Easy,
        &Validator::new().validate_answer(4.0, 4.0),
        1,
    );
    store.save("ana", &saved).unwrap();

    let config = TutorConfig {
        learner: "ana".to_string(),
        ..TutorConfig::default()
    };
    let mut core = ReplCore::new(builtin_catalogue().unwrap(), &config, store);
    assert_eq!(core.tracker().record(), &saved);
    let reply = core.handle_command_core("stats");
    assert!(output_containing(&reply, "1 of 1"));
}

#[test]
fn signals_update_mastery_and_persist() {
    let mut core = core();
    let reply = core.handle_command_core("signals 80 -");
    assert!(output_containing(&reply, "concepts 80"));
    let mastery = &core.tracker().record().mastery;
    assert_eq!(mastery.concept_understanding, 80.0);
    assert_eq!(mastery.application_ability, 0.0);

    core.handle_command_core("signals - 150");
    assert_eq!(core.tracker().record().mastery.application_ability, 100.0);
    assert_eq!(core.tracker().record().mastery.concept_understanding, 80.0);

    for bad in ["signals", "signals 10", "signals ten 5", "signals 5 NaN"] {
        let reply = core.handle_command_core(bad);
        assert!(has(&reply, |m| matches!(m, ReplMsg::Error(_))), "{bad}");
    }
    assert_eq!(core.tracker().record().mastery.concept_understanding, 80.0);

    let stored = core.tracker().store().load("ana").unwrap().unwrap();
    assert_eq!(stored.mastery.application_ability, 100.0);
}
