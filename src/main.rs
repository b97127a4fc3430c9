use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use onoe_hub::data;
use onoe_hub::export::{self, SimulationReport};
use onoe_hub::i18n::Language;
use onoe_hub::models::AnswerSet;
use onoe_hub::myths::{self, NO_MATCH_HINT};
use onoe_hub::quiz::{ScoreResult, score};
use onoe_hub::simulator::{self, DEFAULT_TURNOUT_CHANGE, Simulation};
use onoe_hub::{Hub, HubConfig, HubError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "onoe-hub", version, about = "One Nation One Election voter hub")]
struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON file to load the quiz questions from
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,

    /// Interface language
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// Write logs to this file (the dashboard never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON map of question index (0-based) to chosen option
    Grade {
        #[arg(short, long)]
        answers: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Search the myth buster
    Myths {
        /// Keyword to look for; omit to list everything
        query: Option<String>,
    },

    /// Project five-year costs and turnout for a state
    Simulate {
        #[arg(short, long)]
        state: String,

        #[arg(short, long, default_value_t = DEFAULT_TURNOUT_CHANGE, allow_negative_numbers = true)]
        turnout_change: i32,
    },

    /// Write a simulation report as JSON
    Export {
        #[arg(short, long)]
        state: String,

        #[arg(short, long, default_value_t = DEFAULT_TURNOUT_CHANGE, allow_negative_numbers = true)]
        turnout_change: i32,

        /// Defaults to onoe_sim_<state>.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) -> Result<(), HubError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("onoe_hub=info"));

    match (&cli.log_file, &cli.command) {
        (Some(path), _) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, Some(_)) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        (None, None) => {}
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), HubError> {
    let mut config = match &cli.config {
        Some(path) => HubConfig::load(path)?,
        None => HubConfig::default(),
    };
    if let Some(questions) = cli.questions {
        config.questions = Some(questions);
    }
    if let Some(language) = cli.language {
        config.language = language;
    }

    match cli.command {
        None => Hub::new(&config)?.run(),
        Some(Command::Grade { answers, format }) => grade(&config, &answers, format),
        Some(Command::Myths { query }) => print_myths(query.as_deref().unwrap_or_default(), config.language),
        Some(Command::Simulate {
            state,
            turnout_change,
        }) => {
            let simulation = run_simulation(&state, turnout_change)?;
            print_simulation(&simulation);
            Ok(())
        }
        Some(Command::Export {
            state,
            turnout_change,
            output,
        }) => {
            let simulation = run_simulation(&state, turnout_change)?;
            let path = output.unwrap_or_else(|| export::default_file_name(&simulation.state));
            let states = data::states()?;
            export::write_report(
                &path,
                &SimulationReport {
                    simulation: &simulation,
                    states: &states,
                },
            )?;
            println!("Report saved to {}", path.display());
            Ok(())
        }
    }
}

fn grade(config: &HubConfig, answers_path: &Path, format: Format) -> Result<(), HubError> {
    let bank = config.question_bank()?;
    let thresholds = config.thresholds(bank.len());

    let content = std::fs::read_to_string(answers_path)?;
    let map: BTreeMap<usize, Option<String>> =
        serde_json::from_str(&content).map_err(|source| HubError::Answers {
            path: answers_path.to_path_buf(),
            source,
        })?;
    let answers = AnswerSet::from_map(bank.len(), map)?;

    let result = score(&bank, &answers, &thresholds);
    match format {
        Format::Text => print_result(&result),
        Format::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| HubError::Export(e.into()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn print_result(result: &ScoreResult) {
    println!("Quiz Results");
    for feedback in &result.per_question {
        let number = feedback.index + 1;
        if feedback.is_correct {
            println!("Q{}: Correct! {}", number, feedback.explanation);
        } else {
            println!(
                "Q{}: Incorrect. Your answer: {} | Correct answer: {} | {}",
                number,
                feedback.user_answer.as_deref().unwrap_or("(none)"),
                feedback.correct_answer,
                feedback.explanation
            );
        }
    }
    println!();
    println!(
        "Final score: {}/{} ({:.1}%)",
        result.correct_count, result.total_count, result.percentage
    );
    println!("{} {}", result.tier.headline(), result.tier.advice());
}

fn print_myths(query: &str, language: Language) -> Result<(), HubError> {
    let entries = data::facts()?;
    let matches = myths::search(&entries, query);
    if matches.is_empty() {
        println!("{}", NO_MATCH_HINT);
        return Ok(());
    }

    let source_label = language.labels().source;
    for entry in matches {
        println!("MYTH: {}", entry.myth);
        println!("FACT: {}", entry.fact);
        println!("{}: {}", source_label, entry.source);
        println!();
    }
    Ok(())
}

fn run_simulation(state: &str, turnout_change: i32) -> Result<Simulation, HubError> {
    let states = data::states()?;
    let stats = simulator::find_state(&states, state)
        .ok_or_else(|| HubError::UnknownState(state.to_string()))?;
    Ok(simulator::simulate(stats, turnout_change))
}

fn print_simulation(simulation: &Simulation) {
    println!("Analysis for {}", simulation.state);
    println!(
        "Current System (5 Yrs): ₹{:.0} Cr",
        simulation.current_cost_crore
    );
    println!("ONOE System (5 Yrs):    ₹{:.0} Cr", simulation.onoe_cost_crore);
    println!("Est. Savings (5 Yrs):   ₹{} Cr", simulation.savings_display());
    println!(
        "Projected Turnout:      {:.1}% ({:+}%)",
        simulation.projected_turnout_percent, simulation.turnout_change
    );
}
