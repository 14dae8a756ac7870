//! English message templates with positional `{0}` placeholders.
//!
//! Only a handful of common problems carry a template. Every other id gets
//! the fallback text, which names the masked index so the problem can still
//! be traced.

use crate::problem::{ProblemId, ProblemKind, kind_of_id};

const MESSAGE_TEMPLATES: &[(ProblemKind, &str)] = &[
    (ProblemKind::UndefinedType, "{0} cannot be resolved to a type"),
    (ProblemKind::UndefinedName, "{0} cannot be resolved"),
    (ProblemKind::UndefinedField, "{0} cannot be resolved or is not a field"),
    (
        ProblemKind::UndefinedMethod,
        "The method {1}({2}) is undefined for the type {0}",
    ),
    (ProblemKind::ImportNotFound, "The import {0} cannot be resolved"),
    (ProblemKind::UnusedImport, "The import {0} is never used"),
    (
        ProblemKind::LocalVariableIsNeverUsed,
        "The value of the local variable {0} is not used",
    ),
    (
        ProblemKind::ArgumentIsNeverUsed,
        "The value of the parameter {0} is not used",
    ),
    (ProblemKind::UsingDeprecatedType, "The type {0} is deprecated"),
    (
        ProblemKind::UsingDeprecatedMethod,
        "The method {1}({2}) from the type {0} is deprecated",
    ),
    (ProblemKind::UnnecessaryCast, "Unnecessary cast from {0} to {1}"),
    (
        ProblemKind::NullLocalVariableReference,
        "Null pointer access: The variable {0} can only be null at this location",
    ),
    (
        ProblemKind::ParsingError,
        "Syntax error on token \"{0}\", {1} expected",
    ),
    (ProblemKind::DeadCode, "Dead code"),
    (
        ProblemKind::MissingSerialVersion,
        "The serializable class {0} does not declare a static final serialVersionUID field of type long",
    ),
    (
        ProblemKind::RawTypeReference,
        "{0} is a raw type. References to generic type {1} should be parameterized",
    ),
    (
        ProblemKind::FieldHidingField,
        "The field {0}.{1} is hiding a field from type {2}",
    ),
];

pub fn template_of(kind: ProblemKind) -> Option<&'static str> {
    MESSAGE_TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, template)| *template)
}

/// Replaces `{N}` with `args[N]`. Placeholders without an argument are kept.
///
/// # Example
/// ```
/// use problem_registry::messages::format_message;
/// let msg = format_message("The method {1}() is undefined for the type {0}", &["X", "foo"]);
/// assert_eq!(msg, "The method foo() is undefined for the type X");
/// ```
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            Some((args.get(index)?, close))
        });
        match replaced {
            Some((value, close)) => {
                result.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

pub fn missing_message(id: ProblemId) -> String {
    format!(
        "Unable to retrieve the error message for problem id: {}. Check compiler resources.",
        id.index()
    )
}

/// Localized text of a problem, or the fallback when no template exists.
pub fn message_for(kind: ProblemKind, args: &[&str]) -> String {
    match template_of(kind) {
        Some(template) => format_message(template, args),
        None => missing_message(kind.id()),
    }
}

pub fn message_for_id(id: ProblemId, args: &[&str]) -> String {
    match kind_of_id(id) {
        Some(kind) => message_for(kind, args),
        None => missing_message(id),
    }
}

#[cfg(test)]
mod messages_test;
