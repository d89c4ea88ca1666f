use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hr_assistant::chat;
use hr_assistant::session::Session;
use hr_assistant_core::balance::LeaveBalance;
use hr_assistant_core::classifier;
use hr_assistant_core::config;
use hr_assistant_core::config::AppConfig;
use hr_assistant_core::Assistant;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        cfg.documents.dir = dir;
    }

    match cli.command {
        Commands::Ask { query, json } => run_ask(&cfg, &query, json),
        Commands::Classify { query, json } => run_classify(&query, json),
        Commands::Search { query, json } => run_search(&cfg, &query, json),
        Commands::Suggest { query, json } => run_suggest(&query, json),
        Commands::Balance { months, json } => run_balance(months, json),
        Commands::Docs { json } => run_docs(&cfg, json),
        Commands::Chat { export_dir } => run_chat(&cfg, export_dir),
    }
}

#[derive(Parser)]
#[command(name = "hr-assistant")]
#[command(about = "Rule-based HR policy assistant", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory holding the policy text files (overrides config)
    #[arg(long)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask {
        query: String,
        /// Output JSON with the rule, intent and search score
        #[arg(long)]
        json: bool,
    },
    /// Show the intent a question is classified as
    Classify {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the best matching policy section
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Follow-up questions for a query
    Suggest {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Leave balance after a number of months of service
    Balance {
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(0..=120))]
        months: u32,
        #[arg(long)]
        json: bool,
    },
    /// List loaded policy documents
    Docs {
        #[arg(long)]
        json: bool,
    },
    /// Interactive chat session
    Chat {
        /// Where /export writes transcripts
        #[arg(long)]
        export_dir: Option<String>,
    },
}

fn build_assistant(cfg: &AppConfig) -> Result<Assistant> {
    Assistant::from_config(cfg).context("load policy documents")
}

fn run_ask(cfg: &AppConfig, query: &str, json: bool) -> Result<()> {
    let assistant = build_assistant(cfg)?;
    let answer = assistant.answer(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{}", answer.text);
    }
    Ok(())
}

fn run_classify(query: &str, json: bool) -> Result<()> {
    let outcome = classifier::classify(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match outcome.keyword {
            Some(keyword) => println!("{} (matched \"{}\")", outcome.intent, keyword),
            None => println!("{}", outcome.intent),
        }
    }
    Ok(())
}

fn run_search(cfg: &AppConfig, query: &str, json: bool) -> Result<()> {
    let assistant = build_assistant(cfg)?;
    let result = assistant.search(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_match() {
        println!("source: {}, score: {}\n\n{}", result.source, result.score, result.text);
    } else {
        println!("no matching section");
    }
    Ok(())
}

fn run_suggest(query: &str, json: bool) -> Result<()> {
    let intent = classifier::classify_intent(query);
    let suggestions = hr_assistant_core::suggester::suggestions(query, intent);
    if json {
        let out = serde_json::json!({
            "intent": intent,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (i, s) in suggestions.iter().enumerate() {
            println!("{}. {}", i + 1, s);
        }
    }
    Ok(())
}

fn run_balance(months: u32, json: bool) -> Result<()> {
    let balance = LeaveBalance::for_months(months);
    if json {
        println!("{}", serde_json::to_string_pretty(&balance)?);
    } else {
        println!("Annual Leave: {} days", balance.annual);
        println!("Sick Leave: {} days", balance.sick);
        println!("Casual Leave: {} days", balance.casual);
        println!("Total Available: {} days", balance.total);
    }
    Ok(())
}

fn run_docs(cfg: &AppConfig, json: bool) -> Result<()> {
    let assistant = build_assistant(cfg)?;
    let docs = assistant.index().documents();
    if json {
        println!("{}", serde_json::to_string_pretty(docs)?);
    } else if docs.is_empty() {
        println!("no policy documents found in {}", cfg.documents.dir);
    } else {
        for doc in docs {
            println!("{} ({}): {} sections", doc.label, doc.name, doc.sections);
        }
    }
    Ok(())
}

fn run_chat(cfg: &AppConfig, export_dir: Option<String>) -> Result<()> {
    let assistant = build_assistant(cfg)?;
    let mut session = Session::new(assistant);
    let export_dir = export_dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let stdin = io::stdin();
    chat::run(&mut session, stdin.lock(), io::stdout(), &export_dir)
}
