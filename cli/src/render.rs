//! Plain-text rendering of command results.

use std::fmt::Write;

use promptsmith::models::ComparisonTable;
use promptsmith::{
    CachedRules, GenerationResult, Issue, ModelDescriptor, OptimizationResult, Recipe,
    RecipeMatch,
};

fn bullets(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

pub fn generation(result: &GenerationResult) -> String {
    let mut out = format!(
        "Model: {}  Task type: {}\n",
        result.model, result.task_type
    );
    for variant in result.versions.iter() {
        let _ = write!(
            out,
            "\n=== {} (~{} tokens) ===\n{}\n",
            variant.kind.as_str(),
            variant.token_estimate,
            variant.content
        );
    }
    bullets(&mut out, "Techniques", &result.techniques);
    bullets(&mut out, "Tips", &result.tips);
    out.trim_end().to_string()
}

pub fn issues(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "No issues found.".to_string();
    }
    let mut out = String::from("Issues:");
    for issue in issues {
        let _ = write!(
            out,
            "\n- [{}] {}: {}",
            issue.severity.as_str(),
            issue.code,
            issue.message
        );
        if let Some(fix) = &issue.fix {
            let _ = write!(out, "\n  fix: {fix}");
        }
    }
    out
}

pub fn optimization(result: &OptimizationResult) -> String {
    let mut out = result.optimized_prompt.clone();
    let _ = write!(out, "\n\n{}", issues(&result.issues));
    if !result.changes.is_empty() {
        out.push_str("\n\nChanges:");
        for change in &result.changes {
            let _ = write!(out, "\n- {} ({})", change.description, change.reason);
        }
    }
    let _ = write!(out, "\n\nToken delta: {:+}", result.token_delta);
    out
}

pub fn recipe_matches(matches: &[RecipeMatch]) -> String {
    if matches.is_empty() {
        return "No matching recipe.".to_string();
    }
    matches
        .iter()
        .map(|m| {
            format!(
                "{:<18} {:.2}  {} [{}] -> {}",
                m.recipe.slug,
                m.confidence,
                m.recipe.name,
                m.matched_keywords.join(", "),
                m.recipe.default_model
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recipe_list(recipes: &[&Recipe]) -> String {
    recipes
        .iter()
        .map(|r| format!("{:<18} {:<15} {}", r.slug, r.default_model.as_str(), r.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recipe(recipe: &Recipe) -> String {
    let mut out = format!("{} ({})\n{}\n", recipe.name, recipe.slug, recipe.description);
    let _ = write!(out, "\nDefault model: {}", recipe.default_model);
    if !recipe.alternative_models.is_empty() {
        let alternatives: Vec<&str> = recipe.alternative_models.iter().map(|m| m.as_str()).collect();
        let _ = write!(out, "\nAlternatives: {}", alternatives.join(", "));
    }
    let _ = write!(out, "\nKeywords: {}", recipe.keywords.join(", "));
    if !recipe.follow_up_questions.is_empty() {
        out.push_str("\n\nFollow-up questions:");
        for q in recipe.follow_up_questions {
            let _ = write!(out, "\n- {q}");
        }
    }
    if let Some(template) = recipe.template {
        let _ = write!(out, "\n\nTemplate:\n{template}");
    }
    out
}

pub fn model_list(models: &[&ModelDescriptor]) -> String {
    models
        .iter()
        .map(|m| {
            format!(
                "{:<15} {:<7} {} ({}): {}",
                m.slug.as_str(),
                m.category.as_str(),
                m.name,
                m.producer,
                m.specialization
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rules(rules: &CachedRules) -> String {
    let mut out = format!("{} ({})", rules.model_info.name, rules.model_info.document);
    bullets(&mut out, "Rules", &rules.rules.rules);
    bullets(&mut out, "Avoid", &rules.rules.avoid);
    bullets(&mut out, "Tips", &rules.rules.tips);
    bullets(&mut out, "Checklist", &rules.rules.checklist);
    if !rules.rules.quick_start.is_empty() {
        let _ = write!(out, "\nQuick start:\n{}\n", rules.rules.quick_start);
    }
    out.trim_end().to_string()
}

pub fn comparison(table: &ComparisonTable) -> String {
    let mut out = String::new();
    for (attribute, values) in table {
        let _ = writeln!(out, "{attribute}:");
        for (slug, value) in values {
            let _ = writeln!(out, "  {:<15} {value}", slug.as_str());
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsmith::{optimize, ModelSlug, OptimizationRequest};

    #[test]
    fn optimization_shows_prompt_issues_and_delta() {
        let result = optimize(&OptimizationRequest::new(
            "Think about this problem and solve it",
            ModelSlug::Claude45,
        ));
        let text = optimization(&result);
        assert!(text.starts_with(&result.optimized_prompt));
        assert!(text.contains("[critical] CLAUDE_THINK_WORD"));
        assert!(text.contains("Token delta: "));
    }

    #[test]
    fn empty_results_have_a_message() {
        assert_eq!(issues(&[]), "No issues found.");
        assert_eq!(recipe_matches(&[]), "No matching recipe.");
    }

    #[test]
    fn comparison_lists_every_attribute() {
        let text = comparison(&promptsmith::comparison_table());
        for attribute in ["literalness", "structure", "temperature"] {
            assert!(text.contains(&format!("{attribute}:")));
        }
        assert!(text.contains("DO NOT CHANGE"));
    }
}
