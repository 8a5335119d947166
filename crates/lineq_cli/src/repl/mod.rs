//! Interactive tutor loop.
//!
//! [`ReplCore`] does the work and returns [`ReplReply`] messages; [`Repl`]
//! owns the line editor and is the only place that prints.

mod core;
mod dispatch;
mod output;

use rustyline::error::ReadlineError;

use lineq_progress::ProgressStore;
use lineq_session::StaticCatalogue;

use crate::config::TutorConfig;

pub use self::core::ReplCore;
pub use dispatch::HELP;
pub use output::{ReplMsg, ReplReply, ReplReplyExt};

pub struct Repl<S: ProgressStore> {
    core: ReplCore<S>,
    max_history_size: usize,
}

impl<S: ProgressStore> Repl<S> {
    pub fn new(catalogue: StaticCatalogue, config: &TutorConfig, store: S) -> Self {
        Self {
            core: ReplCore::new(catalogue, config, store),
            max_history_size: config.max_history_size,
        }
    }

    /// Single point where core output becomes visible.
    pub fn print_reply(&self, reply: ReplReply) {
        for msg in reply {
            match msg {
                ReplMsg::Output(s) => println!("{s}"),
                ReplMsg::Info(s) => println!("{s}"),
                ReplMsg::Warn(s) => println!("⚠ {s}"),
                ReplMsg::Error(s) => eprintln!("✖ {s}"),
                ReplMsg::Steps(s) => println!("{s}"),
            }
        }
    }

    pub fn handle_command(&mut self, line: &str) {
        let reply = self.core.handle_command_core(line);
        self.print_reply(reply);
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Linear equation tutor. Type `help` for commands, `next` to begin.");

        let config = rustyline::Config::builder()
            .max_history_size(self.max_history_size)?
            .build();
        let mut rl = rustyline::DefaultEditor::with_config(config)?;

        // History file path: ~/.lineq_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".lineq_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".lineq_history"));

        // Missing history is normal on first run
        let _ = rl.load_history(&history_path);

        loop {
            let prompt = self.core.prompt();
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    rl.add_history_entry(line)?;

                    if line == "quit" || line == "exit" {
                        println!("Goodbye!");
                        break;
                    }

                    for statement in line.split(';') {
                        let statement = statement.trim();
                        if statement.is_empty() {
                            continue;
                        }
                        self.handle_command(statement);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        if !self.core.finish() {
            self.print_reply(vec![ReplMsg::warn("Progress could not be saved.")]);
        }
        let _ = rl.save_history(&history_path);

        Ok(())
    }
}
