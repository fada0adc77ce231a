// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands share the same crawl options:
// - search: crawl a site, then look up words or wildcard patterns
// - words:  crawl a site, then list every word that was indexed
//
// Rust concepts:
// - Derive macros: clap generates the parser from these structs
// - #[command(flatten)]: reuse one group of arguments in several subcommands
// =============================================================================

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use word_crawler::{CrawlConfig, FailurePolicy, IndexError};

#[derive(Parser, Debug)]
#[command(
    name = "word-crawler",
    version = "0.1.0",
    about = "Crawl a website and search the words on its pages",
    long_about = "word-crawler visits a website breadth-first up to a maximum link depth, \
                  indexes every word it sees, and answers exact or wildcard lookups \
                  with the pages each word appeared on."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the pages that contain each word or pattern
    ///
    /// Use '*' to match any single character: c*t matches cat, cot, cut
    ///
    /// Example: word-crawler search https://example.com rust "c*t" --max-depth 2
    Search {
        #[command(flatten)]
        crawl: CrawlArgs,

        /// Words or wildcard patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// List every indexed word with the number of pages it appears on
    ///
    /// Example: word-crawler words https://example.com --json
    Words {
        #[command(flatten)]
        crawl: CrawlArgs,
    },
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Website URL to start crawling from (e.g., https://example.com)
    pub seed_url: String,

    /// Maximum crawl depth (default: 1)
    ///
    /// Depth 0 = just the starting page
    /// Depth 1 = starting page + the pages it links to
    /// etc.
    #[arg(long, default_value_t = 1)]
    pub max_depth: usize,

    /// Only follow links starting with this prefix (repeatable)
    ///
    /// Defaults to the seed URL's own origin, e.g. https://example.com/
    #[arg(long = "allow", value_name = "PREFIX")]
    pub allow: Vec<String>,

    /// How many pages to fetch at the same time
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Skip pages that fail to load instead of aborting the crawl
    #[arg(long)]
    pub best_effort: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}

impl CrawlArgs {
    // Turns the command-line flags into a library CrawlConfig
    pub fn to_config(&self) -> Result<CrawlConfig, IndexError> {
        let mut config = CrawlConfig::for_seed(&self.seed_url)?
            .with_concurrency(self.concurrency)
            .with_request_timeout(Duration::from_secs(self.timeout_secs));

        if !self.allow.is_empty() {
            config = config.with_allowed_domains(self.allow.clone());
        }
        if self.best_effort {
            config = config.with_failure_policy(FailurePolicy::SkipFailed);
        }

        Ok(config)
    }
}
