//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal suite of LLM text tools
#[derive(Parser)]
#[command(name = "plume", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Model to use for the direct call path. Uses PLUME_MODEL env if not set.
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for AI and machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chat with the assistant (interactive unless MESSAGE is given)
    Chat {
        /// Single message to send; omit for an interactive session
        message: Option<String>,
        /// Write the transcript to this file when done
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Draft a blog post from a title and keywords
    Blog {
        /// Blog title
        #[arg(long)]
        title: String,
        /// Comma-separated keywords to weave in
        #[arg(long)]
        keywords: String,
        /// Approximate word count
        #[arg(long, default_value_t = 500)]
        words: u32,
        /// Write the draft to this file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write the draft to a filename derived from the title
        #[arg(long)]
        save: bool,
        /// Write display markup to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Preview a CSV file and ask questions about it
    Csv {
        /// CSV file to load
        #[arg(long)]
        file: PathBuf,
        /// Question about the data; omit to just preview
        question: Option<String>,
    },
    /// Generate a SQL query, sample output, and explanation
    Sql {
        /// Natural-language description of the query
        description: String,
        /// SQL dialect
        #[arg(long, default_value = "PostgreSQL")]
        dialect: String,
        /// Optional schema context (tables, columns)
        #[arg(long)]
        context: Option<String>,
        /// Write query + explanation to this file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write query + explanation to sql_query_details.md
        #[arg(long)]
        save: bool,
    },
    /// Explain a code snippet
    Explain {
        /// File containing the code
        #[arg(long)]
        file: PathBuf,
        /// Language of the snippet (default: guessed from the extension)
        #[arg(long)]
        language: Option<String>,
        /// Write the explanation to this file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write display markup to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Fetch a web page and summarize it
    Website {
        /// Page URL (must start with http:// or https://)
        url: String,
        /// Write the summary to this file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write display markup to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Summarize a text or markdown document
    Document {
        /// File to summarize
        file: PathBuf,
        /// Write the summary to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Inspect the configured call paths
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
}

#[derive(Subcommand)]
pub enum ProvidersAction {
    /// List call paths and their configuration status
    List,
    /// Send a short test prompt through the active call path
    Test,
}
