use anyhow::Context;
use clap::Parser;
use problem_processor::config::ConfigManager;
use problem_processor::engines::evolution::{ConsoleProgressCallback, EvolutionRunner};
use problem_processor::engines::mutation::OpenAiGenerator;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Problem statement processor
#[derive(Parser)]
#[command(name = "problem-processor")]
#[command(about = "Evolve technical problem statements with LLM mutations", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(short, long, env = "PROBLEMS_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for candidate sampling and strategy choice
    #[arg(long)]
    seed: Option<u64>,

    /// Model identifier for the text-generation backend
    #[arg(long)]
    agent: Option<String>,

    #[arg(long)]
    num_rounds: Option<usize>,

    /// Problems sampled for mutation per round
    #[arg(long)]
    num_problems: Option<usize>,

    /// Problems retained after each round
    #[arg(long)]
    topk_problems: Option<usize>,

    /// Run one extra round before the counted rounds
    #[arg(long)]
    mutate_on_start: bool,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    #[arg(long)]
    problems_file: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long)]
    templates_dir: Option<PathBuf>,

    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let manager = ConfigManager::new();
    manager.load_layered(cli.config.as_deref())?;
    manager
        .update(|c| {
            if let Some(seed) = cli.seed {
                c.evolution.seed = seed;
            }
            if let Some(num_rounds) = cli.num_rounds {
                c.evolution.num_rounds = num_rounds;
            }
            if let Some(num_problems) = cli.num_problems {
                c.evolution.num_problems = num_problems;
            }
            if let Some(topk) = cli.topk_problems {
                c.evolution.topk_problems = topk;
            }
            if cli.mutate_on_start {
                c.evolution.mutate_on_start = true;
            }
            if let Some(agent) = cli.agent {
                c.generator.agent = agent;
            }
            if let Some(api_key) = cli.openai_api_key {
                c.generator.api_key = api_key;
            }
            if let Some(path) = cli.problems_file {
                c.paths.problems_file = path;
            }
            if let Some(path) = cli.output_dir {
                c.paths.output_dir = path;
            }
            if let Some(path) = cli.templates_dir {
                c.paths.templates_dir = path;
            }
            if let Some(path) = cli.leaderboard {
                c.paths.leaderboard_file = path;
            }
        })
        .context("invalid configuration")?;

    let config = manager.get();
    log::debug!("Configuration: {:?}", config);

    let generator = OpenAiGenerator::from_config(&config.generator)
        .context("failed to set up text generation")?;
    let (mut runner, problems) = EvolutionRunner::start(&config, Arc::new(generator))
        .await
        .context("failed to load problems")?;

    let population = runner.run(problems, &mut ConsoleProgressCallback).await?;

    if let Some(best) = population.first() {
        log::info!("Best problem {} scored {:.4}", best.id, best.score);
    }
    Ok(())
}
