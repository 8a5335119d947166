//! Problems shipped with the tutor.
//!
//! Each problem is written as an equation string plus the commands of its
//! worked solution. The expected steps are produced by replaying those
//! commands through a [`TransformationHistory`], so the notes and key-step
//! flags match what a learner sees when taking the same path.

use anyhow::{bail, Context, Result};
use lineq_ast::{Difficulty, EquationProblem, PracticeMode};
use lineq_engine::{equation_from_sides, is_isolated};
use lineq_parser::{parse_equation, parse_operation};
use lineq_session::{StaticCatalogue, TransformationHistory};

/// Compact authoring form of a problem.
pub struct ProblemSpec {
    pub id: &'static str,
    pub mode: PracticeMode,
    pub difficulty: Difficulty,
    pub equation: &'static str,
    /// Operation commands that solve the equation, in order
    pub solution_path: &'static [&'static str],
    pub hints: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub const BUILTIN_PROBLEMS: &[ProblemSpec] = &[
    ProblemSpec {
        id: "add-one-step",
        mode: PracticeMode::Guided,
        difficulty: Difficulty::Easy,
        equation: "x + 3 = 7",
        solution_path: &["sub 3", "simplify"],
        hints: &[
            "Something is being added to x. What undoes adding?",
            "Subtract 3 from both sides, then simplify.",
        ],
        tags: &["one-step", "addition"],
    },
    ProblemSpec {
        id: "subtract-one-step",
        mode: PracticeMode::Guided,
        difficulty: Difficulty::Easy,
        equation: "x - 4 = 10",
        solution_path: &["add 4", "simplify"],
        hints: &["Add 4 to both sides so the -4 disappears."],
        tags: &["one-step", "subtraction"],
    },
    ProblemSpec {
        id: "divide-one-step",
        mode: PracticeMode::Practice,
        difficulty: Difficulty::Easy,
        equation: "3x = 12",
        solution_path: &["div 3"],
        hints: &["x is multiplied by 3. Divide both sides by 3."],
        tags: &["one-step", "division"],
    },
    ProblemSpec {
        id: "negative-coefficient",
        mode: PracticeMode::Guided,
        difficulty: Difficulty::Medium,
        equation: "-x + 2 = 5",
        solution_path: &["sub 2", "simplify", "mul -1"],
        hints: &[
            "Get rid of the 2 first.",
            "-x = 3 means x is the opposite of 3. Multiply both sides by -1.",
        ],
        tags: &["two-step", "negatives"],
    },
    ProblemSpec {
        id: "two-step",
        mode: PracticeMode::Practice,
        difficulty: Difficulty::Medium,
        equation: "2x + 5 = 17",
        solution_path: &["sub 5", "simplify", "div 2"],
        hints: &[
            "Undo the addition before the multiplication.",
            "After subtracting 5, divide by 2.",
        ],
        tags: &["two-step"],
    },
    ProblemSpec {
        id: "fraction-coefficient",
        mode: PracticeMode::Practice,
        difficulty: Difficulty::Medium,
        equation: "x/2 - 1 = 3",
        solution_path: &["add 1", "simplify", "mul 2"],
        hints: &["Clear the -1, then multiply both sides by 2."],
        tags: &["two-step", "fractions"],
    },
    ProblemSpec {
        id: "two-step-challenge",
        mode: PracticeMode::Challenge,
        difficulty: Difficulty::Medium,
        equation: "2x - 5 = 9",
        solution_path: &["add 5", "simplify", "div 2"],
        hints: &[],
        tags: &["two-step"],
    },
    ProblemSpec {
        id: "decimals",
        mode: PracticeMode::Practice,
        difficulty: Difficulty::Hard,
        equation: "0.5x + 1.5 = 4",
        solution_path: &["sub 1.5", "simplify", "mul 2"],
        hints: &["Subtract 1.5 first. Half of x is then 2.5."],
        tags: &["two-step", "decimals"],
    },
    ProblemSpec {
        id: "like-terms",
        mode: PracticeMode::Challenge,
        difficulty: Difficulty::Hard,
        equation: "3x + 2x - 4 = 11",
        solution_path: &["simplify left", "add 4", "simplify", "div 5"],
        hints: &[],
        tags: &["like-terms"],
    },
    ProblemSpec {
        id: "variable-on-right",
        mode: PracticeMode::Practice,
        difficulty: Difficulty::Hard,
        equation: "12 = 3x - 3",
        solution_path: &["add 3", "simplify", "div 3"],
        hints: &[
            "The variable can live on the right side too.",
            "Add 3, simplify, then divide by 3.",
        ],
        tags: &["two-step"],
    },
];

/// Build a problem from its authoring form, replaying the solution path.
pub fn build_problem(spec: &ProblemSpec) -> Result<EquationProblem> {
    let parsed = parse_equation(spec.equation)
        .with_context(|| format!("problem '{}': bad equation '{}'", spec.id, spec.equation))?;
    let Some(equation) = equation_from_sides(spec.id, parsed.left, parsed.right) else {
        bail!("problem '{}': '{}' has no unique solution", spec.id, spec.equation);
    };

    let mut history = TransformationHistory::new(equation.clone());
    for command in spec.solution_path {
        let operation = parse_operation(command)
            .with_context(|| format!("problem '{}': bad step '{}'", spec.id, command))?;
        history
            .apply_and_push(&operation)
            .with_context(|| format!("problem '{}': step '{}' rejected", spec.id, command))?;
    }
    if !spec.solution_path.is_empty() && is_isolated(history.current_equation()).is_none() {
        bail!(
            "problem '{}': solution path ends at '{}'",
            spec.id,
            history.current_equation()
        );
    }

    Ok(EquationProblem {
        id: spec.id.to_string(),
        mode: spec.mode,
        difficulty: spec.difficulty,
        equation,
        hints: spec.hints.iter().map(|h| h.to_string()).collect(),
        expected_steps: history.steps()[1..].to_vec(),
        tags: spec.tags.iter().map(|t| t.to_string()).collect(),
    })
}

pub fn builtin_catalogue() -> Result<StaticCatalogue> {
    let problems = BUILTIN_PROBLEMS
        .iter()
        .map(build_problem)
        .collect::<Result<Vec<_>>>()?;
    Ok(StaticCatalogue::new(problems)?)
}

pub fn parse_mode(word: &str) -> Option<PracticeMode> {
    PracticeMode::ALL
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(word))
}

pub fn parse_difficulty(word: &str) -> Option<Difficulty> {
    Difficulty::ALL
        .into_iter()
        .find(|d| d.name().eq_ignore_ascii_case(word))
}

/// One-line summary used by `list`.
pub fn problem_line(problem: &EquationProblem) -> String {
    format!(
        "{:<22} {:<9} {:<6}  {}",
        problem.id,
        problem.mode.name(),
        problem.difficulty.name(),
        problem.equation
    )
}
