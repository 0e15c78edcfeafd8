//! Generation over the bundled knowledge for every model.


use std::sync::Arc;

use promptsmith::{
    GenerationEngine, GenerationRequest, ModelSlug, RuleStore, TaskType, Tone, VersionKind,
    DEFAULT_TTL,
};

fn engine() -> GenerationEngine {
    GenerationEngine::new(Arc::new(RuleStore::embedded(DEFAULT_TTL)))
}

#[test]
fn every_model_produces_three_non_empty_variants() {
    let engine = engine();
    for &slug in ModelSlug::ALL.iter() {
        let request = GenerationRequest::new("A lighthouse on a cliff during a storm", slug)
            .with_context("Cover art for a sailing magazine")
            .with_constraints(["muted colours"]);
        let result = engine.generate(&request).unwrap();

        assert_eq!(result.model, slug);
        for variant in result.versions.iter() {
            assert!(!variant.content.trim().is_empty(), "{slug} {:?}", variant.kind);
            assert!(variant.token_estimate > 0, "{slug} {:?}", variant.kind);
        }
        assert!(
            result.versions.extended.token_estimate >= result.versions.minimal.token_estimate,
            "{slug}: extended shorter than minimal"
        );
        assert!(result.tips.len() <= 5);
        assert!(result.techniques.iter().any(|t| t == "Explicit constraints"));
    }
}

#[test]
fn binary_search_goal_is_code_generation() {
    let request =
        GenerationRequest::new("Write code to implement binary search", ModelSlug::Claude45);
    let result = engine().generate(&request).unwrap();

    assert_eq!(result.task_type, TaskType::CodeGeneration);
    assert!(result
        .techniques
        .iter()
        .any(|t| t == "Anti-overengineering directive"));
    assert!(result
        .versions
        .extended
        .content
        .to_lowercase()
        .contains("over"));
}

#[test]
fn explicit_task_type_overrides_inference() {
    let request = GenerationRequest::new("Write code to implement binary search", ModelSlug::Gpt52)
        .with_task_type(TaskType::Analysis);
    let result = engine().generate(&request).unwrap();
    assert_eq!(result.task_type, TaskType::Analysis);
    assert!(!result
        .techniques
        .iter()
        .any(|t| t == "Anti-overengineering directive"));
}

#[test]
fn tone_reaches_extended_llm_variant_only() {
    let request = GenerationRequest::new("Explain ownership in Rust", ModelSlug::Grok41)
        .with_tone(Tone::Concise);
    let result = engine().generate(&request).unwrap();
    let instruction = Tone::Concise.instruction();
    assert!(result.versions.extended.content.contains(instruction));
    assert!(!result.versions.minimal.content.contains(instruction));
}

#[test]
fn tips_come_from_the_model_rules() {
    let engine = engine();
    let request = GenerationRequest::new("Latest EU AI regulation changes", ModelSlug::PerplexityPro);
    let result = engine.generate(&request).unwrap();
    let rules = engine.store().get_rules(ModelSlug::PerplexityPro).unwrap();
    let expected: Vec<String> = rules.rules.tips.iter().take(5).cloned().collect();
    assert_eq!(result.tips, expected);
}

#[test]
fn single_variant_matches_full_generation() {
    let engine = engine();
    let request = GenerationRequest::new("A red fox in fresh snow", ModelSlug::NanoBanana);
    let full = engine.generate(&request).unwrap();
    let single = engine.generate_single(&request, VersionKind::Standard).unwrap();
    assert_eq!(&single, full.versions.get(VersionKind::Standard));
}

#[test]
fn result_serialises_with_camel_case_fields() {
    let request = GenerationRequest::new("Summarize this article", ModelSlug::Gemini3Pro);
    let result = engine().generate(&request).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["model"], "gemini-3-pro");
    assert_eq!(json["taskType"], "summarization");
    assert_eq!(json["versions"]["minimal"]["version"], "minimal");
    assert!(json["versions"]["extended"]["tokenEstimate"].as_u64().unwrap() > 0);
}
