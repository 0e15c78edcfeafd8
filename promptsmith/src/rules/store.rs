//! Rule store: per-model rules parsed from knowledge documents, enhanced, and cached with a TTL.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;

use super::clock::{Clock, SystemClock};
use super::enhance::enhance;
use crate::error::{EngineError, Result};
use crate::knowledge::{
    extract_rules, DirectorySource, EmbeddedSource, ExtractedRules, KnowledgeSource,
};
use crate::models::{ModelDescriptor, ModelSlug};

/// Default cache TTL: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Extracted and enhanced rules for one model, as held in the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRules {
    #[serde(flatten)]
    pub rules: ExtractedRules,
    pub model: ModelSlug,
    pub model_info: &'static ModelDescriptor,
    pub inserted_at: DateTime<Utc>,
}

impl CachedRules {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A negative age means the clock moved backwards; the entry is reloaded.
        match (now - self.inserted_at).to_std() {
            Ok(age) => age < ttl,
            Err(_) => false,
        }
    }
}

/// Where the default store reads documents from and how long entries live.
#[derive(Debug, Clone)]
pub struct RuleStoreConfig {
    pub knowledge_dir: PathBuf,
    pub ttl: Duration,
}

impl RuleStoreConfig {
    pub fn new(knowledge_dir: impl Into<PathBuf>) -> Self {
        Self {
            knowledge_dir: knowledge_dir.into(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Owns the rules cache for all registered models.
///
/// Lookups are lock-free reads on a [`DashMap`]; a miss parses the model's document without
/// holding any map guard, then inserts the result. Two concurrent misses for the same model may
/// both parse; both produce the same value and the last insert wins.
pub struct RuleStore {
    source: Arc<dyn KnowledgeSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    cache: DashMap<ModelSlug, Arc<CachedRules>>,
}

impl RuleStore {
    /// Store reading from `config.knowledge_dir` on the system clock.
    pub fn new(config: RuleStoreConfig) -> Self {
        Self::with_source(
            Arc::new(DirectorySource::new(config.knowledge_dir)),
            Arc::new(SystemClock),
            config.ttl,
        )
    }

    /// Store reading the documents compiled into the binary.
    pub fn embedded(ttl: Duration) -> Self {
        Self::with_source(Arc::new(EmbeddedSource), Arc::new(SystemClock), ttl)
    }

    pub fn with_source(
        source: Arc<dyn KnowledgeSource>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            source,
            clock,
            ttl,
            cache: DashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Membership test against the model registry.
    pub fn is_valid_model(&self, slug: &str) -> bool {
        crate::models::is_valid_model(slug)
    }

    /// Rules for `model`, from cache while fresh, otherwise parsed, enhanced and cached.
    ///
    /// # Errors
    ///
    /// [`EngineError::RulesLoad`] when the model's document cannot be read.
    #[tracing::instrument(skip_all, fields(model = %model))]
    pub fn get_rules(&self, model: ModelSlug) -> Result<Arc<CachedRules>> {
        let descriptor = model.descriptor();
        let now = self.clock.now();

        let cached = self.cache.get(&model).map(|entry| Arc::clone(entry.value()));
        if let Some(entry) = cached {
            if entry.is_fresh(now, self.ttl) {
                tracing::debug!(document = descriptor.document, "rules cache hit");
                return Ok(entry);
            }
        }
        tracing::debug!(document = descriptor.document, "rules cache miss");

        let doc = self.source.load(descriptor.document).map_err(|source| {
            tracing::warn!(document = descriptor.document, error = %source, "failed to load knowledge document");
            EngineError::RulesLoad {
                model: model.to_string(),
                source,
            }
        })?;

        let rules = enhance(model, extract_rules(&doc));
        tracing::info!(
            document = descriptor.document,
            sections = doc.sections.len(),
            rules = rules.rules.len(),
            avoid = rules.avoid.len(),
            tips = rules.tips.len(),
            "parsed knowledge document"
        );

        let entry = Arc::new(CachedRules {
            rules,
            model,
            model_info: descriptor,
            inserted_at: now,
        });
        self.cache.insert(model, Arc::clone(&entry));
        Ok(entry)
    }

    /// Rules for several models at once. Fails on the first model that cannot be loaded.
    pub fn rules_for_models(
        &self,
        models: &[ModelSlug],
    ) -> Result<BTreeMap<ModelSlug, Arc<CachedRules>>> {
        models
            .iter()
            .map(|&m| self.get_rules(m).map(|rules| (m, rules)))
            .collect()
    }

    /// Evicts one model's entry, or every entry when `model` is `None`.
    pub fn clear_cache(&self, model: Option<ModelSlug>) {
        match model {
            Some(m) => {
                self.cache.remove(&m);
            }
            None => self.cache.clear(),
        }
        tracing::debug!(model = ?model.map(|m| m.as_str()), "rules cache cleared");
    }

    /// Number of cached entries, fresh or not.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl std::fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleStore")
            .field("ttl", &self.ttl)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::knowledge::{parse_text, ParseError, ParsedDocument};
    use crate::rules::ManualClock;

    struct CountingSource {
        body: String,
        loads: AtomicUsize,
    }

    impl CountingSource {
        fn new(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: body.to_string(),
                loads: AtomicUsize::new(0),
            })
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl KnowledgeSource for CountingSource {
        fn load(&self, _document: &str) -> std::result::Result<ParsedDocument, ParseError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(parse_text(&self.body))
        }
    }

    struct MissingSource;

    impl KnowledgeSource for MissingSource {
        fn load(&self, document: &str) -> std::result::Result<ParsedDocument, ParseError> {
            Err(ParseError::FileNotFound {
                path: PathBuf::from(document),
            })
        }
    }

    const DOC: &str = "# Doc\n## TL;DR\n### RULES\n- be clear\n### AVOID\n- vagueness\n";

    fn store_with(source: Arc<CountingSource>) -> (RuleStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let store = RuleStore::with_source(source, clock.clone(), DEFAULT_TTL);
        (store, clock)
    }

    #[test]
    fn second_call_within_ttl_hits_cache() {
        let source = CountingSource::new(DOC);
        let (store, _clock) = store_with(source.clone());

        let first = store.get_rules(ModelSlug::Gpt52).unwrap();
        let second = store.get_rules(ModelSlug::Gpt52).unwrap();
        assert_eq!(source.loads(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.model, ModelSlug::Gpt52);
        assert_eq!(first.model_info.slug, ModelSlug::Gpt52);
        assert_eq!(first.rules.rules, vec!["be clear"]);
    }

    /// **Scenario**: an entry expires exactly at `inserted_at + ttl`.
    #[test]
    fn entry_expires_at_ttl_boundary() {
        let source = CountingSource::new(DOC);
        let (store, clock) = store_with(source.clone());

        store.get_rules(ModelSlug::Claude45).unwrap();
        clock.advance(chrono::Duration::seconds(3599));
        store.get_rules(ModelSlug::Claude45).unwrap();
        assert_eq!(source.loads(), 1);

        clock.advance(chrono::Duration::seconds(1));
        let refreshed = store.get_rules(ModelSlug::Claude45).unwrap();
        assert_eq!(source.loads(), 2);
        assert_eq!(refreshed.inserted_at, clock.now());
    }

    #[test]
    fn clock_moving_backwards_expires_entry() {
        let source = CountingSource::new(DOC);
        let (store, clock) = store_with(source.clone());

        store.get_rules(ModelSlug::Gemini3Pro).unwrap();
        clock.advance(chrono::Duration::seconds(-5));
        let reloaded = store.get_rules(ModelSlug::Gemini3Pro).unwrap();
        assert_eq!(source.loads(), 2);
        assert_eq!(reloaded.inserted_at, clock.now());

        store.get_rules(ModelSlug::Gemini3Pro).unwrap();
        assert_eq!(source.loads(), 2);
    }

    #[test]
    fn clear_one_model_keeps_others() {
        let source = CountingSource::new(DOC);
        let (store, _clock) = store_with(source.clone());

        store.get_rules(ModelSlug::Claude45).unwrap();
        store.get_rules(ModelSlug::Gpt52).unwrap();
        assert_eq!(source.loads(), 2);

        store.clear_cache(Some(ModelSlug::Claude45));
        assert_eq!(store.cached_len(), 1);
        store.get_rules(ModelSlug::Claude45).unwrap();
        store.get_rules(ModelSlug::Gpt52).unwrap();
        assert_eq!(source.loads(), 3);
    }

    #[test]
    fn clear_all() {
        let source = CountingSource::new(DOC);
        let (store, _clock) = store_with(source);
        store
            .rules_for_models(&[ModelSlug::Claude45, ModelSlug::NanoBanana])
            .unwrap();
        assert_eq!(store.cached_len(), 2);
        store.clear_cache(None);
        assert_eq!(store.cached_len(), 0);
    }

    #[test]
    fn load_failure_is_wrapped_with_model() {
        let store = RuleStore::with_source(
            Arc::new(MissingSource),
            Arc::new(ManualClock::default()),
            DEFAULT_TTL,
        );
        let err = store.get_rules(ModelSlug::PerplexityPro).unwrap_err();
        match &err {
            EngineError::RulesLoad { model, source } => {
                assert_eq!(model, "perplexity-pro");
                assert!(matches!(source, ParseError::FileNotFound { .. }));
            }
            other => panic!("expected RulesLoad, got {:?}", other),
        }
        assert_eq!(err.status_hint(), 404);
        assert_eq!(store.cached_len(), 0);
    }

    #[test]
    fn enhancement_is_applied_once_per_load() {
        let source = CountingSource::new(DOC);
        let (store, _clock) = store_with(source);
        let rules = store.get_rules(ModelSlug::Claude45).unwrap();
        assert_eq!(rules.rules.avoid.len(), 2);
        assert!(rules.rules.avoid[1].contains("think"));
    }

    #[test]
    fn cached_rules_serialize_flat() {
        let source = CountingSource::new(DOC);
        let (store, _clock) = store_with(source);
        let rules = store.get_rules(ModelSlug::Grok41).unwrap();
        let json = serde_json::to_value(rules.as_ref()).unwrap();
        assert_eq!(json["model"], "grok-4.1");
        assert_eq!(json["modelInfo"]["slug"], "grok-4.1");
        assert_eq!(json["rules"][0], "be clear");
        assert!(json.get("insertedAt").is_some());
        assert!(json.get("quickStart").is_some());
    }

    #[test]
    fn directory_store_reads_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gpt-5.md"), DOC).unwrap();
        let store = RuleStore::new(RuleStoreConfig::new(dir.path()));
        assert_eq!(store.ttl(), DEFAULT_TTL);
        assert!(store.get_rules(ModelSlug::Gpt52).is_ok());
        assert!(matches!(
            store.get_rules(ModelSlug::Claude45),
            Err(EngineError::RulesLoad { .. })
        ));
    }
}
