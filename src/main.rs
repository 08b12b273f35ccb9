use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use quiz_scoring::{QuizError, Review, format_score, grade_files, load_questions_from_json};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log scoring decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a question bank
    Check {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
    },
    /// Score a submission and print one line per question
    Score {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
        /// JSON file with the submitted answers
        #[arg(short, long)]
        submission: PathBuf,
        /// Print the scores as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Score a submission and browse the results in the terminal
    Review {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
        /// JSON file with the submitted answers
        #[arg(short, long)]
        submission: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Covers both the library target and this binary's own target.
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("quiz_scoring={level},{}={level}", env!("CARGO_CRATE_NAME"))
}

fn run(command: Command) -> Result<(), QuizError> {
    match command {
        Command::Check { questions } => {
            let questions = load_questions_from_json(questions)?;
            println!("{} questions OK", questions.len());
        }
        Command::Score {
            questions,
            submission,
            json,
        } => {
            let graded = grade_files(&questions, &submission)?;
            info!(count = graded.len(), "graded submission");
            if json {
                let out = serde_json::to_string_pretty(&graded).map_err(std::io::Error::from)?;
                println!("{}", out);
            } else {
                for answer in &graded {
                    println!(
                        "{}  {}/{}  {}",
                        answer.question_id,
                        format_score(answer.score),
                        format_score(answer.value),
                        answer.outcome.label()
                    );
                }
            }
        }
        Command::Review {
            questions,
            submission,
        } => {
            let graded = grade_files(&questions, &submission)?;
            Review::new(graded).run()?;
        }
    }

    Ok(())
}
