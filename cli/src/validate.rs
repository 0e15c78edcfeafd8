//! Input limits enforced before any engine call.

use crate::CliError;

pub const GOAL_CHARS: (usize, usize) = (5, 5000);
pub const CONTEXT_MAX_CHARS: usize = 10_000;
pub const PROMPT_CHARS: (usize, usize) = (5, 20_000);
pub const ISSUES_MAX: usize = 10;
pub const ISSUE_MAX_CHARS: usize = 500;
pub const LIST_MAX: usize = 20;
pub const LIST_ITEM_MAX_CHARS: usize = 1000;

fn chars(s: &str) -> usize {
    s.chars().count()
}

fn bounded(field: &str, value: &str, (min, max): (usize, usize)) -> Result<(), CliError> {
    let n = chars(value);
    if n < min || n > max {
        return Err(CliError::Validation(format!(
            "{field} must be {min}-{max} characters (got {n})"
        )));
    }
    Ok(())
}

fn list(field: &str, items: &[String], max_items: usize, max_chars: usize) -> Result<(), CliError> {
    if items.len() > max_items {
        return Err(CliError::Validation(format!(
            "at most {max_items} {field} entries allowed (got {})",
            items.len()
        )));
    }
    if let Some((i, item)) = items.iter().enumerate().find(|(_, s)| chars(s) > max_chars) {
        return Err(CliError::Validation(format!(
            "{field}[{i}] exceeds {max_chars} characters (got {})",
            chars(item)
        )));
    }
    Ok(())
}

pub fn generation(
    goal: &str,
    context: Option<&str>,
    constraints: &[String],
    examples: &[String],
) -> Result<(), CliError> {
    bounded("goal", goal, GOAL_CHARS)?;
    if let Some(context) = context {
        bounded("context", context, (0, CONTEXT_MAX_CHARS))?;
    }
    list("constraint", constraints, LIST_MAX, LIST_ITEM_MAX_CHARS)?;
    list("example", examples, LIST_MAX, LIST_ITEM_MAX_CHARS)
}

pub fn optimization(prompt: &str, issues: &[String]) -> Result<(), CliError> {
    bounded("prompt", prompt, PROMPT_CHARS)?;
    list("issue", issues, ISSUES_MAX, ISSUE_MAX_CHARS)
}
