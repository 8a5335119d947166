use lineq_ast::{format_number, Equation, Operation, OperationKind, Target};

use crate::balance::is_balanced;

/// Plain-language wording of an operation, e.g. "Subtract 3 from both sides".
pub fn describe_operation(operation: &Operation) -> String {
    let target = operation.target;
    let value = operation.value.map(format_number).unwrap_or_else(|| "?".to_string());
    match operation.kind {
        OperationKind::Add => format!("Add {} to {}", value, target),
        OperationKind::Subtract => format!("Subtract {} from {}", value, target),
        OperationKind::Multiply => format!("Multiply {} by {}", target, value),
        OperationKind::Divide => format!("Divide {} by {}", target, value),
        OperationKind::Simplify => match target {
            Target::Both => "Simplify both sides".to_string(),
            _ => format!("Simplify {}", target),
        },
    }
}

/// Note recorded with a step: the author's description when present,
/// otherwise generated wording, plus a remark when balance was just lost.
pub fn step_note(operation: &Operation, before: &Equation, after: &Equation) -> String {
    let mut note = match &operation.description {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => describe_operation(operation),
    };
    if is_balanced(before) && !is_balanced(after) {
        note.push_str(". The two sides are no longer equal");
    }
    note
}
