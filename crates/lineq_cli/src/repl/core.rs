//! REPL state without I/O.

use lineq_ast::EquationProblem;
use lineq_engine::{BalanceWeights, Validator};
use lineq_progress::{ProgressStore, ProgressTracker};
use lineq_session::{ProblemRepository, ProblemSession, StaticCatalogue};

use crate::config::TutorConfig;

/// Everything the tutor knows between two commands.
///
/// Commands are handled in `dispatch`; this type only holds state and the
/// small helpers they share.
pub struct ReplCore<S: ProgressStore> {
    pub(crate) catalogue: StaticCatalogue,
    pub(crate) validator: Validator,
    pub(crate) tracker: ProgressTracker<S>,
    pub(crate) session: Option<ProblemSession>,
    pub(crate) show_weights: bool,
}

impl<S: ProgressStore> ReplCore<S> {
    pub fn new(catalogue: StaticCatalogue, config: &TutorConfig, store: S) -> Self {
        Self {
            catalogue,
            validator: Validator::with_thresholds(config.thresholds()),
            tracker: ProgressTracker::open(store, config.learner.clone()),
            session: None,
            show_weights: config.show_weights,
        }
    }

    pub fn session(&self) -> Option<&ProblemSession> {
        self.session.as_ref()
    }

    pub fn tracker(&self) -> &ProgressTracker<S> {
        &self.tracker
    }

    pub fn catalogue(&self) -> &StaticCatalogue {
        &self.catalogue
    }

    /// Save progress at the end of a run. Returns whether the save succeeded.
    pub fn finish(&mut self) -> bool {
        self.tracker.flush()
    }

    /// Problem after the current one in catalogue order, wrapping around.
    pub(crate) fn next_problem(&self) -> Option<&EquationProblem> {
        let problems = self.catalogue.problems();
        let position = self
            .session
            .as_ref()
            .and_then(|s| problems.iter().position(|p| p.id == s.problem().id));
        match position {
            Some(i) => problems.get((i + 1) % problems.len()).copied(),
            None => problems.first().copied(),
        }
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.session {
            Some(session) => format!("{} [{}]> ", session.problem().id, session.history().cursor()),
            None => "lineq> ".to_string(),
        }
    }
}

pub(crate) fn describe_weights(weights: &BalanceWeights) -> String {
    let state = if weights.is_balanced {
        "level".to_string()
    } else if weights.tilt_angle > 0.0 {
        format!("tipped {:.0}° to the right", weights.tilt_angle)
    } else {
        format!("tipped {:.0}° to the left", -weights.tilt_angle)
    };
    format!(
        "Balance: left {} | right {} ({})",
        lineq_ast::format_number(weights.left_weight),
        lineq_ast::format_number(weights.right_weight),
        state
    )
}
