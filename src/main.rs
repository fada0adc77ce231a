// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the website and build the word index (library does the work)
// 3. Run the lookups / list the words and print them
// 4. Exit with proper code (0 = found something, 1 = no match, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use serde::Serialize;

use cli::{Cli, Commands, CrawlArgs};
use word_crawler::{
    normalize_key, Crawler, HtmlParser, HttpFetcher, IndexBuilder, WordIndex, WILDCARD,
};

// One row of output: a word and the pages it appears on
#[derive(Debug, Clone, Serialize)]
struct Hit {
    /// The search pattern that produced this row (absent when listing words)
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    word: String,
    pages: usize,
    urls: Vec<String>,
}

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { crawl, patterns } => handle_search(&crawl, &patterns).await,
        Commands::Words { crawl } => handle_words(&crawl).await,
    }
}

// Crawls the site described by `args` and returns the finished index
async fn build(args: &CrawlArgs) -> Result<WordIndex> {
    let config = args.to_config()?;

    if !args.json {
        println!("🔍 Crawling website: {}", args.seed_url);
        println!("📊 Max crawl depth: {}", args.max_depth);
    }

    let fetcher = HttpFetcher::new(&config)?;
    let crawler = Crawler::new(fetcher, HtmlParser::new(), config);

    if !args.json {
        println!(
            "🌐 Following links under: {}",
            crawler.config().allowed_domains.join(", ")
        );
    }

    let builder = IndexBuilder::new(crawler);
    let (index, outcome) = builder.build_with_outcome(&args.seed_url, args.max_depth).await?;

    for skipped in &outcome.skipped {
        eprintln!("⚠️  Skipped: {}", skipped);
    }

    if !args.json {
        println!(
            "📄 Crawled {} page(s), indexed {} word(s)\n",
            outcome.pages.len(),
            index.len()
        );
    }

    Ok(index)
}

// Handles the 'search' subcommand
//
// Patterns containing '*' are wildcard searches; anything else is an exact
// (case-insensitive) lookup. Either way the word is shown the way the index
// stores it, so "It's" comes back as "it_s"
async fn handle_search(args: &CrawlArgs, patterns: &[String]) -> Result<i32> {
    let index = build(args).await?;

    let mut hits = Vec::new();
    let mut misses = Vec::new();

    for pattern in patterns {
        let found = lookup(&index, pattern);
        if found.is_empty() {
            misses.push(pattern.as_str());
        }
        hits.extend(found);
    }

    print_results(&hits, args.json)?;

    if !args.json {
        for pattern in &misses {
            println!("❌ No match for '{}'", pattern);
        }
    }

    if hits.is_empty() {
        Ok(1) // Exit code 1 = nothing matched
    } else {
        Ok(0)
    }
}

// Handles the 'words' subcommand
async fn handle_words(args: &CrawlArgs) -> Result<i32> {
    let index = build(args).await?;

    let hits: Vec<Hit> = index
        .iter()
        .map(|(word, urls)| to_hit(None, word, urls))
        .collect();

    print_results(&hits, args.json)?;

    if hits.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn lookup(index: &WordIndex, pattern: &str) -> Vec<Hit> {
    if pattern.contains(WILDCARD) {
        index
            .wildcard_search(pattern)
            .map(|(word, urls)| to_hit(Some(pattern), word, urls))
            .collect()
    } else {
        index
            .get(pattern)
            .map(|urls| vec![to_hit(Some(pattern), normalize_key(pattern), urls)])
            .unwrap_or_default()
    }
}

fn to_hit<'a>(
    pattern: Option<&str>,
    word: String,
    urls: impl IntoIterator<Item = &'a String>,
) -> Hit {
    let urls: Vec<String> = urls.into_iter().cloned().collect();
    Hit {
        pattern: pattern.map(str::to_string),
        word,
        pages: urls.len(),
        urls,
    }
}

// Prints the results either as a table or JSON
fn print_results(hits: &[Hit], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(hits)?;
        println!("{}", json_output);
    } else {
        print_table(hits);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(hits: &[Hit]) {
    if hits.is_empty() {
        return;
    }

    println!("{:<25} {:<7} {}", "WORD", "PAGES", "URLS");
    println!("{}", "=".repeat(95));

    for hit in hits {
        // Truncate long words so the columns stay aligned
        let word_display = if hit.word.chars().count() > 22 {
            format!("{}...", hit.word.chars().take(22).collect::<String>())
        } else {
            hit.word.clone()
        };

        let mut urls = hit.urls.iter();
        let first = urls.next().map(String::as_str).unwrap_or("");
        println!("{:<25} {:<7} {}", word_display, hit.pages, first);
        for url in urls {
            println!("{:<25} {:<7} {}", "", "", url);
        }
    }

    println!();
    println!("📊 {} word(s) matched", hits.len());
}
