use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use rand::prelude::{SeedableRng, StdRng};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genome_lab::config::{load_config, save_config, Config};
use genome_lab::evolution::{evolve_str, run_trials, EvolutionParams};
use genome_lab::mutation::mutate_str;
use genome_lab::{AssemblySession, GenomeError, Sequence};

#[derive(Parser)]
#[command(
    name = "genome-lab",
    version,
    about = "Fragment assembly, evolutionary search and point mutations on toy DNA strings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (defaults to the built-in demo)
    #[arg(short, long, global = true, env = "GENOME_LAB_CONFIG")]
    config: Option<PathBuf>,

    /// Seed of the random source
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the configured fragments in the given order
    Assemble {
        /// Fragments (or their 1-based numbers) in assembly order; lists the puzzle when empty
        order: Vec<String>,
    },

    /// Show the fragment the target starts with
    Hint,

    /// Evolve a random population towards the target
    Evolve(EvolveArgs),

    /// Run many seeded searches in parallel and summarize them
    Trials {
        #[command(flatten)]
        evolve: EvolveArgs,

        /// Number of independent runs
        #[arg(short = 'n', long)]
        trials: Option<usize>,
    },

    /// Apply one random point mutation to a sequence
    Mutate {
        sequence: String,
    },

    /// Write the default configuration to a file
    InitConfig {
        path: PathBuf,
    },
}

#[derive(Args)]
struct EvolveArgs {
    /// Target sequence
    #[arg(short, long)]
    target: Option<String>,

    #[arg(short, long)]
    population_size: Option<usize>,

    #[arg(short, long)]
    mutation_rate: Option<f64>,

    #[arg(short = 'g', long)]
    max_generations: Option<usize>,
}

impl EvolveArgs {
    /// Command-line values override the configuration.
    fn resolve(&self, config: &Config) -> (String, EvolutionParams) {
        let defaults = config.evolution.params;
        let params = EvolutionParams {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
        };
        let target = self
            .target
            .clone()
            .unwrap_or_else(|| config.evolution.target.clone());
        (target, params)
    }
}

fn main() {
    let log_level = std::env::var("GENOME_LAB_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);

        let exit_code = match e.downcast_ref::<GenomeError>() {
            Some(GenomeError::Config(_)) => 2,
            Some(GenomeError::Io(_)) => 3,
            Some(err) if err.is_validation() => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config.as_ref() {
        Some(path) => load_config(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    let seed = cli
        .seed
        .or(config.evolution.seed)
        .unwrap_or_else(rand::random::<u64>);

    match cli.command {
        Commands::Assemble { order } => assemble(&config, &order),
        Commands::Hint => {
            let session = session_from(&config)?;
            match session.hint() {
                Some(fragment) => println!("The target starts with {}", fragment),
                None => println!("No fragment is a prefix of the target"),
            }
            Ok(())
        }
        Commands::Evolve(args) => {
            let (target, params) = args.resolve(&config);
            info!(seed, "Starting evolutionary search");
            let mut rng = StdRng::seed_from_u64(seed);
            let report = evolve_str(&target, &params, &mut rng)?;
            println!("Best sequence:    {}", report.best);
            println!("Best fitness:     {:.3}", report.best_fitness);
            println!("Generations used: {}", report.generations_used);
            if !report.found() {
                println!("Target not matched within {} generations", params.max_generations);
            }
            Ok(())
        }
        Commands::Trials { evolve, trials } => {
            let (target, params) = evolve.resolve(&config);
            let trials = trials.unwrap_or(config.evolution.trials);
            let summary = run_trials(&Sequence::parse(&target)?, &params, trials, seed)?;
            println!("Trials:        {}", summary.trials);
            println!("Success rate:  {:.1}%", summary.success_rate() * 100.);
            println!("Mean fitness:  {:.3}", summary.mean_best_fitness);
            if let Some(mean) = summary.mean_generations_to_success {
                println!("Mean generations to success: {:.1}", mean);
            }
            Ok(())
        }
        Commands::Mutate { sequence } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mutation = mutate_str(&sequence, &mut rng)?;
            println!("Original DNA:  {}", Sequence::parse(&sequence)?);
            println!("Mutation:      {}", mutation.kind);
            println!("Mutated DNA:   {}", mutation.mutated);
            Ok(())
        }
        Commands::InitConfig { path } => {
            save_config(&path, &config)?;
            println!("Configuration written to {}", path.display());
            Ok(())
        }
    }
}

fn session_from(config: &Config) -> Result<AssemblySession, GenomeError> {
    AssemblySession::from_strs(
        &config.assembly.target,
        &config.assembly.fragments,
        config.assembly.overlap_policy,
    )
}

fn assemble(config: &Config, order: &[String]) -> anyhow::Result<()> {
    let mut session = session_from(config)?;

    if order.is_empty() {
        println!("Target length: {}", session.target().len());
        for (i, fragment) in session.fragments().iter().enumerate() {
            println!("  {}. {}", i + 1, fragment);
        }
        return Ok(());
    }

    for item in order {
        match item.parse::<usize>() {
            Ok(number) if number >= 1 => session.choose_index(number - 1)?,
            _ => session.choose(&Sequence::parse(item)?)?,
        }
    }

    println!("Order:     {}", session.chosen().iter().join(" + "));
    println!("Assembled: {}", session.assembled());
    if !session.is_complete() {
        println!("Remaining: {}", session.remaining().iter().join(", "));
    }
    if session.is_correct() {
        println!("Assembly matches the target");
    } else {
        println!("Assembly does not match the target");
    }
    Ok(())
}
