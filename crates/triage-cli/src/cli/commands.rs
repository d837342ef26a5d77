use std::path::Path;
use std::sync::Arc;

use triage_core::compare::Comparator;
use triage_core::config::EngineConfig;
use triage_core::generate::{PromptOptimizer, ResponseGenerator};
use triage_core::model::CompareRequest;
use triage_core::providers::llm::{FakeClient, LlmClient, OpenAiClient};
use triage_core::scoring::Scorer;
use triage_core::storage::{ComparisonSink, Store};
use triage_scoring::{KeywordHeuristic, LexicalProfile};

use super::args::{
    ChatArgs, Cli, Command, CompareArgs, PolicyArg, ProviderArgs, ScoreArgs, SessionArgs,
    StatsArgs,
};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Compare(args) => compare(args).await,
        Command::Chat(args) => chat(args).await,
        Command::Score(args) => score(&args),
        Command::Session(args) => session(&args),
        Command::Stats(args) => stats(&args),
    }
}

fn scorer_for(policy: PolicyArg) -> Arc<dyn Scorer> {
    match policy {
        PolicyArg::A => Arc::new(KeywordHeuristic),
        PolicyArg::B => Arc::new(LexicalProfile),
    }
}

fn open_sink(path: &Path) -> anyhow::Result<Arc<dyn ComparisonSink>> {
    let store = Store::open(path)?;
    store.init_schema()?;
    Ok(Arc::new(store))
}

fn build_comparator(
    provider: &ProviderArgs,
    policy: PolicyArg,
    db: Option<&Path>,
) -> anyhow::Result<Comparator> {
    let (optimizer_client, generator_client): (Arc<dyn LlmClient>, Arc<dyn LlmClient>) =
        if provider.fake {
            (
                Arc::new(FakeClient::new(provider.model.clone())),
                Arc::new(FakeClient::new(provider.model.clone())),
            )
        } else {
            let api_key = provider
                .api_key
                .clone()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| {
                    anyhow::anyhow!("an API key is required (set OPENAI_API_KEY or pass --fake)")
                })?;
            let cfg = EngineConfig {
                api_key,
                base_url: provider.base_url.clone(),
                chat_model: provider.model.clone(),
                optimizer_model: provider.model.clone(),
                ..EngineConfig::default()
            };
            (
                Arc::new(OpenAiClient::from_config(
                    &cfg,
                    cfg.optimizer_model.clone(),
                    cfg.max_tokens_optimize,
                )?),
                Arc::new(OpenAiClient::from_config(
                    &cfg,
                    cfg.chat_model.clone(),
                    cfg.max_tokens_chat,
                )?),
            )
        };

    let mut comparator = Comparator::new(
        PromptOptimizer::new(optimizer_client),
        ResponseGenerator::new(generator_client),
        scorer_for(policy),
    );
    if let Some(path) = db {
        comparator = comparator.with_sink(open_sink(path)?);
    }
    Ok(comparator)
}

fn request(prompt: String, user: Option<String>) -> CompareRequest {
    let mut req = CompareRequest::new(prompt);
    req.user_id = user;
    req
}

async fn compare(args: CompareArgs) -> anyhow::Result<i32> {
    let comparator = build_comparator(&args.provider, args.policy, args.db.as_deref())?;
    let result = comparator
        .compare(&request(args.prompt, args.user))
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("original  ({:.2}): {}", result.original.score, result.original.prompt);
        println!("optimized ({:.2}): {}", result.optimized.score, result.optimized.prompt);
        println!();
        println!("--- original response ---");
        println!("{}", result.original.response);
        println!("--- optimized response ---");
        println!("{}", result.optimized.response);
    }
    Ok(0)
}

async fn chat(args: ChatArgs) -> anyhow::Result<i32> {
    let comparator = build_comparator(&args.provider, args.policy, args.db.as_deref())?;
    let exchange = comparator.chat(&request(args.prompt, args.user)).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&exchange)?);
    } else {
        println!("score: {:.2}", exchange.score);
        println!("{}", exchange.response);
    }
    Ok(0)
}

fn score(args: &ScoreArgs) -> anyhow::Result<i32> {
    let scorer = scorer_for(args.policy);
    let value = scorer.score(&args.prompt, &args.response);
    println!("{} score: {}", scorer.name(), value);
    Ok(0)
}

fn session(args: &SessionArgs) -> anyhow::Result<i32> {
    let store = Store::open(&args.db)?;
    store.init_schema()?;
    store.record_session(&args.user, args.seconds)?;
    tracing::info!(user = %args.user, seconds = args.seconds, "session recorded");
    Ok(0)
}

fn stats(args: &StatsArgs) -> anyhow::Result<i32> {
    let store = Store::open(&args.db)?;
    store.init_schema()?;
    let stats = store.user_stats()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(0);
    }

    if stats.is_empty() {
        println!("no recorded activity");
        return Ok(0);
    }
    println!(
        "{:<16} {:>11} {:>9} {:>9} {:>6} {:>9} {:>9}",
        "user", "comparisons", "avg orig", "avg opt", "chats", "avg chat", "time (s)"
    );
    for s in stats {
        let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
        println!(
            "{:<16} {:>11} {:>9} {:>9} {:>6} {:>9} {:>9}",
            s.user_id,
            s.comparisons,
            fmt(s.avg_original_score),
            fmt(s.avg_optimized_score),
            s.chats,
            fmt(s.avg_chat_score),
            s.total_session_secs
        );
    }
    Ok(0)
}
