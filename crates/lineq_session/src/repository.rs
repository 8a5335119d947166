//! Read-only access to authored problems.

use std::collections::HashSet;

use lineq_ast::{Difficulty, EquationProblem, PracticeMode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Malformed catalogue: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate problem id '{0}'")]
    DuplicateId(String),
}

/// Source of pre-built problems. The core never writes through it.
pub trait ProblemRepository {
    fn problems(&self) -> Vec<&EquationProblem>;

    fn get(&self, id: &str) -> Option<&EquationProblem> {
        self.problems().into_iter().find(|p| p.id == id)
    }

    /// Problems matching the given mode and difficulty; `None` matches anything.
    fn matching(
        &self,
        mode: Option<PracticeMode>,
        difficulty: Option<Difficulty>,
    ) -> Vec<&EquationProblem> {
        self.problems()
            .into_iter()
            .filter(|p| mode.map_or(true, |m| p.mode == m))
            .filter(|p| difficulty.map_or(true, |d| p.difficulty == d))
            .collect()
    }
}

/// In-memory catalogue with unique problem ids.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    problems: Vec<EquationProblem>,
}

impl StaticCatalogue {
    pub fn new(problems: Vec<EquationProblem>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for problem in &problems {
            if !seen.insert(problem.id.as_str()) {
                return Err(CatalogueError::DuplicateId(problem.id.clone()));
            }
        }
        Ok(Self { problems })
    }

    /// Load a JSON array of problems.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let problems: Vec<EquationProblem> = serde_json::from_str(json)?;
        Self::new(problems)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl ProblemRepository for StaticCatalogue {
    fn problems(&self) -> Vec<&EquationProblem> {
        self.problems.iter().collect()
    }
}
