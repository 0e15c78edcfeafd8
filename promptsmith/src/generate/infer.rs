//! Task-type inference from goal text.

use super::TaskType;

/// Keyword groups checked in order; the first group with any match wins.
const GROUPS: &[(TaskType, &[&str])] = &[
    (TaskType::CodeReview, &["code review", "review kodu", "przegla"]),
    (
        TaskType::CodeGeneration,
        &["napisz kod", "write code", "funkcj", "implement"],
    ),
    (TaskType::Analysis, &["analiz", "analy", "research", "badanie"]),
    (
        TaskType::Translation,
        &["przetlumacz", "translat", "tlumaczenie"],
    ),
    (TaskType::Summarization, &["podsumuj", "summariz", "streszcz"]),
    (TaskType::SystemPrompt, &["system prompt", "chatbot", "asystent"]),
    (
        TaskType::ImageGeneration,
        &["obraz", "image", "grafik", "zdjeci"],
    ),
    (
        TaskType::VideoGeneration,
        &["wideo", "video", "animacj", "film"],
    ),
    (TaskType::CreativeWriting, &["pisz", "creat", "write", "story"]),
];

/// Infers the task type of `goal` by lower-cased substring match; `General` when nothing matches.
///
/// Order matters: "write code for an image resizer" is code generation, not image generation.
pub fn infer_task_type(goal: &str) -> TaskType {
    let goal = goal.to_lowercase();
    GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| goal.contains(k)))
        .map(|(task, _)| *task)
        .unwrap_or(TaskType::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_search_is_code_generation() {
        assert_eq!(
            infer_task_type("Write code to implement binary search"),
            TaskType::CodeGeneration
        );
    }

    #[test]
    fn earlier_group_wins() {
        // "review kodu" (code review) beats "funkcj" (code generation)
        assert_eq!(
            infer_task_type("Zrób review kodu tej funkcji"),
            TaskType::CodeReview
        );
        assert_eq!(
            infer_task_type("Write code that resizes an image"),
            TaskType::CodeGeneration
        );
    }

    #[test]
    fn each_group_is_reachable() {
        assert_eq!(infer_task_type("Analyze sales data"), TaskType::Analysis);
        assert_eq!(infer_task_type("Translate to German"), TaskType::Translation);
        assert_eq!(infer_task_type("Podsumuj artykuł"), TaskType::Summarization);
        assert_eq!(infer_task_type("A chatbot for support"), TaskType::SystemPrompt);
        assert_eq!(infer_task_type("An image of a cat"), TaskType::ImageGeneration);
        assert_eq!(infer_task_type("A short video of waves"), TaskType::VideoGeneration);
        assert_eq!(infer_task_type("Tell a story about a fox"), TaskType::CreativeWriting);
    }

    #[test]
    fn unmatched_language_falls_through_to_general() {
        assert_eq!(infer_task_type("Erkläre mir die Quantenphysik"), TaskType::General);
        assert_eq!(infer_task_type(""), TaskType::General);
    }
}
