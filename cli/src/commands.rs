//! Command handlers: parse and validate inputs, call the engine, shape the output.

use std::io::Read;
use std::sync::Arc;

use promptsmith::{
    all_models, all_recipes, analyze, comparison_table, find_all, match_best, models_by_category,
    optimize, recipe_by_slug, recipes_for_model, GenerationEngine, GenerationRequest,
    ModelCategory, ModelSlug, OptimizationRequest, RuleStore, RuleStoreConfig, TaskType, Tone,
    VersionKind,
};
use serde::Serialize;

use crate::{
    render, validate, AnalyzeArgs, Cli, CliError, Command, GenerateArgs, ModelsCommand,
    OptimizeArgs, RecipeCommand,
};

/// What a command produced: envelope data and the plain-text rendering.
#[derive(Debug)]
pub struct Output {
    pub data: serde_json::Value,
    pub text: String,
}

impl Output {
    fn new(data: &impl Serialize, text: String) -> Result<Self, CliError> {
        Ok(Self {
            data: serde_json::to_value(data)?,
            text,
        })
    }
}

pub fn execute(cli: &Cli, settings: &config::Settings) -> Result<Output, CliError> {
    match &cli.cmd {
        Command::Generate(args) => generate(args, rule_store(cli, settings)),
        Command::Optimize(args) => optimize_cmd(args),
        Command::Analyze(args) => analyze_cmd(args),
        Command::Recipe(args) => recipe(&args.sub),
        Command::Models(args) => models(&args.sub, || rule_store(cli, settings)),
    }
}

/// `--knowledge-dir`, then the configured directory, then the built-in documents.
fn rule_store(cli: &Cli, settings: &config::Settings) -> Arc<RuleStore> {
    let ttl = settings.engine.cache_ttl();
    let dir = cli
        .knowledge_dir
        .as_ref()
        .or(settings.engine.knowledge_dir.as_ref());
    match dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "reading knowledge from directory");
            Arc::new(RuleStore::new(RuleStoreConfig::new(dir).with_ttl(ttl)))
        }
        None => Arc::new(RuleStore::embedded(ttl)),
    }
}

fn parse_with<T>(raw: &str, parse: impl FnOnce(&str) -> Result<T, String>) -> Result<T, CliError> {
    parse(raw).map_err(CliError::Validation)
}

fn model(raw: &str) -> Result<ModelSlug, CliError> {
    Ok(raw.parse()?)
}

/// Joins positional words; a lone `-` reads the whole of stdin.
fn prompt_text(words: &[String]) -> Result<String, CliError> {
    if let [only] = words {
        if only == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            return Ok(buf.trim_end_matches(['\r', '\n']).to_string());
        }
    }
    Ok(words.join(" "))
}

fn generate(args: &GenerateArgs, store: Arc<RuleStore>) -> Result<Output, CliError> {
    let goal = args.goal.join(" ");
    validate::generation(
        &goal,
        args.context.as_deref(),
        &args.constraints,
        &args.examples,
    )?;

    let mut request = GenerationRequest::new(goal, model(&args.model)?)
        .with_constraints(args.constraints.iter().cloned())
        .with_examples(args.examples.iter().cloned());
    if let Some(raw) = &args.task_type {
        request = request.with_task_type(parse_with(raw, str::parse::<TaskType>)?);
    }
    if let Some(raw) = &args.tone {
        request = request.with_tone(parse_with(raw, str::parse::<Tone>)?);
    }
    if let Some(context) = &args.context {
        request = request.with_context(context.clone());
    }

    let engine = GenerationEngine::new(store);
    match &args.variant {
        Some(raw) => {
            let kind = parse_with(raw, str::parse::<VersionKind>)?;
            let variant = engine.generate_single(&request, kind)?;
            let text = variant.content.clone();
            Output::new(&variant, text)
        }
        None => {
            let result = engine.generate(&request)?;
            let text = render::generation(&result);
            Output::new(&result, text)
        }
    }
}

fn optimize_cmd(args: &OptimizeArgs) -> Result<Output, CliError> {
    let prompt = prompt_text(&args.prompt)?;
    validate::optimization(&prompt, &args.issues)?;

    let request =
        OptimizationRequest::new(prompt, model(&args.model)?).with_issues(args.issues.iter().cloned());
    let result = optimize(&request);
    let text = render::optimization(&result);
    Output::new(&result, text)
}

fn analyze_cmd(args: &AnalyzeArgs) -> Result<Output, CliError> {
    let prompt = prompt_text(&args.prompt)?;
    validate::optimization(&prompt, &[])?;

    let slug = model(&args.model)?;
    let issues = analyze(&prompt, slug);
    let text = render::issues(&issues);
    Output::new(
        &serde_json::json!({ "model": slug, "issues": issues }),
        text,
    )
}

fn recipe(cmd: &RecipeCommand) -> Result<Output, CliError> {
    match cmd {
        RecipeCommand::Match {
            all,
            threshold,
            text,
        } => {
            let text = text.join(" ");
            if *all {
                let matches = find_all(&text, *threshold);
                let rendered = render::recipe_matches(&matches);
                Output::new(&matches, rendered)
            } else {
                let best = match_best(&text);
                let rendered = render::recipe_matches(best.as_slice());
                Output::new(&best, rendered)
            }
        }
        RecipeCommand::List { model: slug } => {
            let recipes = match slug {
                Some(raw) => recipes_for_model(model(raw)?),
                None => all_recipes().iter().collect(),
            };
            let text = render::recipe_list(&recipes);
            Output::new(&recipes, text)
        }
        RecipeCommand::Show { slug } => {
            let recipe = recipe_by_slug(slug)?;
            Output::new(recipe, render::recipe(recipe))
        }
    }
}

fn models(
    cmd: &ModelsCommand,
    store: impl FnOnce() -> Arc<RuleStore>,
) -> Result<Output, CliError> {
    match cmd {
        ModelsCommand::List { category } => {
            let list = match category {
                Some(raw) => models_by_category(parse_with(raw, str::parse::<ModelCategory>)?),
                None => all_models().iter().collect(),
            };
            let text = render::model_list(&list);
            Output::new(&list, text)
        }
        ModelsCommand::Rules { slug } => {
            let rules = store().get_rules(model(slug)?)?;
            let text = render::rules(&rules);
            Output::new(&*rules, text)
        }
        ModelsCommand::Compare => {
            let table = comparison_table();
            let text = render::comparison(&table);
            Output::new(&table, text)
        }
    }
}
