use lineq_ast::PracticeMode;
use lineq_parser::parse_operation;
use lineq_session::{ProblemRepository, ProblemSession};
use lineq_progress::ProgressStore;

use super::core::{describe_weights, ReplCore};
use super::output::{ReplMsg, ReplReply, ReplReplyExt};
use crate::catalogue::{parse_difficulty, parse_mode, problem_line};
use crate::report::progress_report;

pub const HELP: &str = "\
Problems
  list [mode] [difficulty]   list problems, e.g. `list practice hard`
  start <id>                 start a problem
  next                       start the next problem
Working
  add|sub|mul|div <n> [left|right]   operate on both sides or one side
  simplify [left|right]      collect like terms
  undo, redo, restart        move through your steps
  show, steps, weights, latex
  hint                       next hint (not in challenge mode)
  expected                   the worked step that comes next (guided mode)
  answer <n>                 submit your value for x
Other
  stats                      your progress
  signals <c|-> <a|->        set concept and application scores (0-100)
  help, quit";

fn no_problem() -> ReplReply {
    let mut reply = ReplReply::new();
    reply.push_error("No problem started. Try `list`, `start <id>` or `next`.");
    reply
}

impl<S: ProgressStore> ReplCore<S> {
    /// Handle one command line and describe the outcome.
    pub fn handle_command_core(&mut self, line: &str) -> ReplReply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "help" => vec![ReplMsg::output(HELP)],
            "list" => self.handle_list(rest),
            "start" => self.handle_start(rest),
            "next" => match self.next_problem().map(|p| p.id.clone()) {
                Some(id) => self.handle_start(&id),
                None => {
                    let mut reply = ReplReply::new();
                    reply.push_error("The catalogue is empty.");
                    reply
                }
            },
            "show" => self.handle_show(),
            "steps" => self.handle_steps(),
            "weights" => self.with_session(|session, reply| {
                reply.push_output(describe_weights(&session.weights()));
            }),
            "latex" => self.with_session(|session, reply| {
                reply.push_output(session.current_equation().to_latex());
            }),
            "undo" => self.with_session(|session, reply| {
                if session.undo() {
                    reply.push_output(session.current_equation().to_string());
                } else {
                    reply.push_warn("Nothing to undo.");
                }
            }),
            "redo" => self.with_session(|session, reply| {
                if session.redo() {
                    reply.push_output(session.current_equation().to_string());
                } else {
                    reply.push_warn("Nothing to redo.");
                }
            }),
            "restart" => self.with_session(|session, reply| {
                session.restart();
                reply.push_output(session.current_equation().to_string());
            }),
            "hint" => self.with_session(|session, reply| {
                let allows_hints = session.problem().mode.allows_hints();
                match session.next_hint() {
                    Some(hint) => reply.push_info(format!("Hint: {}", hint)),
                    None if !allows_hints => reply.push_warn("No hints in challenge mode."),
                    None => reply.push_warn("No more hints for this problem."),
                }
            }),
            "expected" => self.handle_expected(),
            "answer" => self.handle_answer(rest),
            "stats" => vec![ReplMsg::output(progress_report(
                self.tracker.key(),
                self.tracker.record(),
            ))],
            "signals" => self.handle_signals(rest),
            _ => self.handle_operation(line),
        }
    }

    fn with_session(&mut self, f: impl FnOnce(&mut ProblemSession, &mut ReplReply)) -> ReplReply {
        let Some(session) = self.session.as_mut() else {
            return no_problem();
        };
        let mut reply = ReplReply::new();
        f(session, &mut reply);
        reply
    }

    fn handle_list(&self, args: &str) -> ReplReply {
        let mut reply = ReplReply::new();
        let mut mode = None;
        let mut difficulty = None;
        for word in args.split_whitespace() {
            if let Some(m) = parse_mode(word) {
                mode = Some(m);
            } else if let Some(d) = parse_difficulty(word) {
                difficulty = Some(d);
            } else {
                reply.push_error(format!("Unknown filter '{}'", word));
                return reply;
            }
        }

        let problems = self.catalogue.matching(mode, difficulty);
        if problems.is_empty() {
            reply.push_info("No problems match.");
        }
        for problem in problems {
            reply.push_output(problem_line(problem));
        }
        reply
    }

    fn handle_start(&mut self, id: &str) -> ReplReply {
        let mut reply = ReplReply::new();
        let Some(problem) = self.catalogue.get(id).cloned() else {
            reply.push_error(format!("No problem with id '{}'", id));
            return reply;
        };

        let session = ProblemSession::new(problem);
        let problem = session.problem();
        reply.push_info(format!(
            "Problem {} ({}, {})",
            problem.id, problem.mode, problem.difficulty
        ));
        reply.push_output(format!("Solve for {}:  {}", problem.equation.variable, problem.equation));
        if self.show_weights {
            reply.push_info(describe_weights(&session.weights()));
        }
        self.session = Some(session);
        reply
    }

    fn handle_show(&mut self) -> ReplReply {
        let show_weights = self.show_weights;
        self.with_session(|session, reply| {
            let history = session.history();
            reply.push_output(format!(
                "Step {}: {}",
                history.cursor(),
                session.current_equation()
            ));
            if show_weights {
                reply.push_info(describe_weights(&session.weights()));
            }
        })
    }

    fn handle_steps(&mut self) -> ReplReply {
        self.with_session(|session, reply| {
            let lines: Vec<String> = session
                .history()
                .active_path()
                .iter()
                .map(|step| {
                    let marker = if step.is_key_step { " *" } else { "" };
                    format!("{}. {}{}\n   {}", step.step_index, step.note, marker, step.equation)
                })
                .collect();
            reply.push_steps(lines.join("\n"));
        })
    }

    fn handle_expected(&mut self) -> ReplReply {
        self.with_session(|session, reply| {
            if session.problem().mode != PracticeMode::Guided {
                reply.push_warn("The worked path is only shown in guided mode.");
                return;
            }
            match session.expected_next_step() {
                Some(step) => reply.push_steps(format!("{}\n   {}", step.note, step.equation)),
                None => reply.push_info("You are past the end of the worked path."),
            }
        })
    }

    fn handle_operation(&mut self, line: &str) -> ReplReply {
        let operation = match parse_operation(line) {
            Ok(operation) => operation,
            Err(e) => {
                let mut reply = ReplReply::new();
                reply.push_error(format!("{}. Type `help` for the list of commands.", e));
                return reply;
            }
        };

        let show_weights = self.show_weights;
        self.with_session(|session, reply| match session.apply(&operation) {
            Ok(step) => {
                reply.push_steps(format!("{}\n   {}", step.note, step.equation));
                if step.is_key_step {
                    reply.push_info(format!(
                        "{} is on its own. Submit it with `answer <n>`.",
                        step.equation.variable
                    ));
                }
                let weights = session.weights();
                if !weights.is_balanced {
                    reply.push_warn("The two sides no longer balance. `undo` to go back.");
                }
                if show_weights {
                    reply.push_info(describe_weights(&weights));
                }
            }
            Err(e) => reply.push_error(e.to_string()),
        })
    }

    /// `signals 70 -` sets concept understanding and leaves application as is.
    fn handle_signals(&mut self, args: &str) -> ReplReply {
        let mut reply = ReplReply::new();
        let words: Vec<&str> = args.split_whitespace().collect();
        let [concept, application] = words.as_slice() else {
            reply.push_error("Usage: signals <concept|-> <application|->");
            return reply;
        };

        let parse = |word: &str| -> Result<Option<f64>, String> {
            if word == "-" {
                return Ok(None);
            }
            match word.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(format!("'{}' is not a score", word)),
            }
        };
        let (concept, application) = match (parse(*concept), parse(*application)) {
            (Ok(c), Ok(a)) => (c, a),
            (Err(e), _) | (_, Err(e)) => {
                reply.push_error(e);
                return reply;
            }
        };

        self.tracker.set_external_signals(concept, application);
        let mastery = &self.tracker.record().mastery;
        reply.push_output(format!(
            "Mastery {:.0}  (concepts {:.0}, application {:.0})",
            mastery.overall, mastery.concept_understanding, mastery.application_ability
        ));
        reply
    }

    fn handle_answer(&mut self, text: &str) -> ReplReply {
        let Some(session) = self.session.as_mut() else {
            return no_problem();
        };
        let mut reply = ReplReply::new();
        if text.is_empty() {
            reply.push_error("Usage: answer <n>");
            return reply;
        }

        // Unreadable input is graded (as an interpretation error), not refused.
        let submitted = text.parse::<f64>().unwrap_or(f64::NAN);
        let result = session.submit(submitted, &self.validator);
        let problem = session.problem();
        self.tracker
            .record_attempt(problem.mode, problem.difficulty, &result);

        if result.is_correct {
            reply.push_output(format!(
                "Correct! {} = {}",
                problem.equation.variable,
                lineq_ast::format_number(result.expected)
            ));
            reply.push_info("Type `next` for another problem.");
        } else {
            reply.push_output(format!(
                "Not quite ({:.0}% credit). {}",
                result.partial_credit * 100.0,
                result.feedback()
            ));
        }
        reply
    }
}
