use clap::{Parser as ClapParser, Subcommand};
use graphql_insights::cli::{self, CheckOptions, CliError, EXAMPLE_QUERY};
use graphql_insights::{count_fields, ingest, PoolConfig};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "graphql-insights")]
#[command(about = "Parse GraphQL-like queries and collect field usage from analytics events")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its tree
    Parse {
        /// The query (reads from stdin if piped, else uses an example)
        query: Option<String>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the token stream of a query
    Tokens {
        query: Option<String>,
    },

    /// Count fields that take arguments
    Fields {
        query: Option<String>,
    },

    /// Process JSON-lines analytics events with a worker pool
    Ingest {
        /// Events file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of worker threads
        #[arg(short, long, default_value_t = PoolConfig::default().workers)]
        workers: usize,

        /// Queue capacity
        #[arg(short, long, default_value_t = PoolConfig::default().queue_capacity)]
        capacity: usize,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'graphql-insights docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            query,
            json,
            pretty,
        } => run_parse(query, json, pretty),
        Commands::Tokens { query } => {
            read_query(query).and_then(|q| cli::dump_tokens(&q)).map(|out| print!("{}", out))
        }
        Commands::Fields { query } => read_query(query)
            .map(|q| print!("{}", cli::format_field_usage(&count_fields(&q)))),
        Commands::Ingest {
            input,
            workers,
            capacity,
        } => run_ingest(input, PoolConfig { workers, queue_capacity: capacity }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => {
            cli::get_doc_category(&category).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Argument, then piped stdin, then the built-in example.
fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Ok(EXAMPLE_QUERY.to_string()),
    }
}

fn run_parse(query: Option<String>, json: bool, pretty: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        json,
        pretty,
    };

    let result = cli::execute_check(&options)?;
    print!("{}", result.text());
    if json {
        println!();
    }
    Ok(())
}

fn run_ingest(input: Option<PathBuf>, config: PoolConfig) -> Result<(), CliError> {
    let summary = match input {
        Some(path) => ingest::ingest_lines(BufReader::new(File::open(path)?), config)?,
        None => ingest::ingest_lines(io::stdin().lock(), config)?,
    };
    print!("{}", cli::format_summary(&summary));
    Ok(())
}
