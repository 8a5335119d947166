//! Structured messages returned by [`ReplCore`](super::ReplCore).
//!
//! The core never prints. The outer [`Repl`](super::Repl) decides how each
//! message kind reaches the terminal, which keeps the core testable.

#[derive(Debug, Clone, PartialEq)]
pub enum ReplMsg {
    /// General feedback
    Info(String),
    /// Non-fatal issue, e.g. progress could not be saved
    Warn(String),
    /// The command failed
    Error(String),
    /// What the learner asked for
    Output(String),
    /// Worked steps
    Steps(String),
}

impl ReplMsg {
    pub fn output(s: impl Into<String>) -> Self {
        ReplMsg::Output(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        ReplMsg::Info(s.into())
    }

    pub fn warn(s: impl Into<String>) -> Self {
        ReplMsg::Warn(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        ReplMsg::Error(s.into())
    }

    pub fn steps(s: impl Into<String>) -> Self {
        ReplMsg::Steps(s.into())
    }

    pub fn text(&self) -> &str {
        match self {
            ReplMsg::Info(s)
            | ReplMsg::Warn(s)
            | ReplMsg::Error(s)
            | ReplMsg::Output(s)
            | ReplMsg::Steps(s) => s,
        }
    }
}

pub type ReplReply = Vec<ReplMsg>;

pub trait ReplReplyExt {
    fn push_output(&mut self, s: impl Into<String>);
    fn push_info(&mut self, s: impl Into<String>);
    fn push_warn(&mut self, s: impl Into<String>);
    fn push_error(&mut self, s: impl Into<String>);
    fn push_steps(&mut self, s: impl Into<String>);
}

impl ReplReplyExt for ReplReply {
    fn push_output(&mut self, s: impl Into<String>) {
        self.push(ReplMsg::output(s));
    }

    fn push_info(&mut self, s: impl Into<String>) {
        self.push(ReplMsg::info(s));
    }

    fn push_warn(&mut self, s: impl Into<String>) {
        self.push(ReplMsg::warn(s));
    }

    fn push_error(&mut self, s: impl Into<String>) {
        self.push(ReplMsg::error(s));
    }

    fn push_steps(&mut self, s: impl Into<String>) {
        self.push(ReplMsg::steps(s));
    }
}
