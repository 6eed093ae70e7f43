//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::report::render::{OutputFormat, RenderConfig};

/// pubcloud - scrape PubMed titles, normalize them, and render decade word clouds.
#[derive(Parser, Debug)]
#[command(name = "pubcloud")]
#[command(
    author,
    version,
    about,
    long_about = r#"pubcloud runs a three-stage pipeline over PubMed bibliographic records:

1. fetch     - query PubMed by keyword and persist (title, publication_date) rows as CSV
2. tokens    - normalize titles into token lists, bucketed by publication decade
3. cloud     - render one word-frequency image per decade

Each command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown
- raw: excerpts only (unstable; intended for debugging)

Examples:
    pubcloud fetch '("bilingual*"[All Fields]) AND (1980:2023[pdat])' --out data/all_titles.csv
    pubcloud tokens data/all_titles.csv --stem
    pubcloud stats data/all_titles.csv --top 10
    pubcloud cloud data/all_titles.csv --font www/BreeSerif-Regular.ttf --out-dir output
    pubcloud run '"aphasia"[All Fields]' --font www/BreeSerif-Regular.ttf
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw\n\n\
Tip: Prefer jsonl when you want stable, line-oriented output for piping."
    )]
    pub format: String,

    /// Quiet mode (errors only on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Reduce diagnostic output on stderr. Machine-readable results are still\n\
printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics on stderr, including per-request\n\
E-utilities traffic during fetch."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Tokenizer options shared by tokens/stats/cloud/run.
#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Language for stopwords and stemming (english/swedish).
    #[arg(long, default_value = "english", value_name = "LANG")]
    pub language: String,

    /// Reduce tokens to their base form with a Snowball stemmer.
    #[arg(
        long,
        long_help = "Reduce each token to its base form using the Snowball stemmer for the\n\
selected language. Off by default."
    )]
    pub stem: bool,

    /// Keep stopwords instead of removing them.
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Skip the text-cleaning pass (emoji, contractions, punctuation, digits).
    #[arg(long)]
    pub no_clean: bool,

    /// Keep digit runs instead of replacing them with the word "number".
    #[arg(long)]
    pub keep_numbers: bool,

    /// Additional stopword to exclude (repeatable).
    #[arg(
        long = "stopword",
        value_name = "WORD",
        long_help = "Add an extra stopword on top of the built-in list for the selected\n\
language. Repeat the flag for multiple words.\n\n\
Example: --stopword bilingual --stopword language"
    )]
    pub stopwords: Vec<String>,
}

/// Rendering options shared by cloud/run.
#[derive(Args, Debug, Clone)]
pub struct CloudArgs {
    /// Path to a TTF/OTF font used to draw words.
    #[arg(long, value_name = "PATH")]
    pub font: PathBuf,

    /// Directory where decade images are written.
    #[arg(long, default_value = "./output", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value = "800", value_name = "PX")]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value = "800", value_name = "PX")]
    pub height: u32,

    /// Maximum number of words per cloud.
    #[arg(long, default_value = "75", value_name = "N")]
    pub max_words: usize,

    /// Minimum font size; words that cannot be placed at this size are dropped.
    #[arg(long, default_value = "8", value_name = "PX")]
    pub min_font_size: u32,

    /// Maximum font size; derived from the image height when omitted.
    #[arg(long, value_name = "PX")]
    pub max_font_size: Option<u32>,

    /// Random seed for word placement.
    #[arg(long, default_value = "42", value_name = "SEED")]
    pub seed: u64,

    /// Optional mask image; near-white regions are excluded from layout.
    #[arg(
        long,
        value_name = "PATH",
        long_help = "Path to a mask image. Pixels with near-white luminance are excluded\n\
from word placement, so words fill only the dark shape. The mask is resized\n\
to the output dimensions."
    )]
    pub mask: Option<PathBuf>,
}

/// PubMed retrieval options shared by fetch/run.
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Maximum number of articles to retrieve.
    #[arg(long, default_value = "10000", value_name = "N")]
    pub max_results: usize,

    /// Page size for esearch/esummary requests.
    #[arg(long, default_value = "200", value_name = "N")]
    pub page_size: usize,

    /// Contact email, kindly requested by NCBI for E-utilities traffic.
    #[arg(long, env = "PUBCLOUD_EMAIL", value_name = "EMAIL")]
    pub email: Option<String>,

    /// NCBI API key (raises the rate limit).
    #[arg(long, env = "NCBI_API_KEY", value_name = "KEY")]
    pub api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query PubMed and persist (title, publication_date) rows as CSV.
    #[command(
        long_about = "Search PubMed with an E-utilities query, page through the PMID list,\n\
fetch article summaries, and write one CSV row per article.\n\n\
The query uses regular PubMed search syntax, including field tags and\n\
date ranges.\n\n\
Examples:\n\
  pubcloud fetch '(\"bilingual*\"[All Fields]) AND (1980:2023[pdat])'\n\
  pubcloud fetch '\"stroke rehabilitation\"' --max-results 500 --out data/stroke.csv\n"
    )]
    Fetch {
        /// PubMed search query.
        #[arg(value_name = "QUERY")]
        query: String,

        /// Output CSV path.
        #[arg(long, default_value = "./data/all_titles.csv", value_name = "PATH")]
        out: PathBuf,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Normalize titles into token lists, one result item per article.
    #[command(
        long_about = "Load a fetched CSV, compute each article's publication decade, and run\n\
the title through the normalization pipeline (clean, lowercase, split,\n\
stopword removal, optional stemming). Emits one tokens item per article.\n\n\
Examples:\n\
  pubcloud tokens data/all_titles.csv\n\
  pubcloud tokens data/all_titles.csv --stem --stopword language\n"
    )]
    Tokens {
        /// Input CSV produced by fetch.
        #[arg(value_name = "CSV")]
        input: PathBuf,

        #[command(flatten)]
        tokenize: TokenizeArgs,
    },

    /// Per-decade statistics: articles, tokens, unique tokens, top words.
    #[command(
        long_about = "Aggregate normalized tokens by publication decade and emit one decade\n\
item per bucket with article/token counts and the most frequent words.\n\n\
Example:\n\
  pubcloud stats data/all_titles.csv --top 10\n"
    )]
    Stats {
        /// Input CSV produced by fetch.
        #[arg(value_name = "CSV")]
        input: PathBuf,

        /// Number of top words to report per decade.
        #[arg(long, default_value = "10", value_name = "N")]
        top: usize,

        #[command(flatten)]
        tokenize: TokenizeArgs,
    },

    /// Render one word-frequency image per publication decade.
    #[command(
        long_about = "Load a fetched CSV, normalize titles, bucket token lists by decade,\n\
and render one PNG per decade into --out-dir (named like 1990s.png).\n\n\
Word size is proportional to frequency. Placement is deterministic for a\n\
given --seed. A mask image restricts placement to its dark regions.\n\n\
Examples:\n\
  pubcloud cloud data/all_titles.csv --font www/BreeSerif-Regular.ttf\n\
  pubcloud cloud data/all_titles.csv --font f.ttf --mask www/square.png --max-words 50\n"
    )]
    Cloud {
        /// Input CSV produced by fetch.
        #[arg(value_name = "CSV")]
        input: PathBuf,

        #[command(flatten)]
        tokenize: TokenizeArgs,

        #[command(flatten)]
        cloud: CloudArgs,
    },

    /// Run the whole pipeline: fetch, then render decade clouds.
    #[command(
        long_about = "Fetch articles from PubMed, persist the CSV, and immediately render\n\
decade word clouds from it. Equivalent to fetch followed by cloud.\n\n\
Example:\n\
  pubcloud run '\"bilingual*\"[All Fields]' --font www/BreeSerif-Regular.ttf\n"
    )]
    Run {
        /// PubMed search query.
        #[arg(value_name = "QUERY")]
        query: String,

        /// CSV path where fetched articles are persisted.
        #[arg(long, default_value = "./data/all_titles.csv", value_name = "PATH")]
        out: PathBuf,

        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        tokenize: TokenizeArgs,

        #[command(flatten)]
        cloud: CloudArgs,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    match cli.command {
        Commands::Fetch { query, out, fetch } => {
            crate::flows::fetch::run_fetch(&query, &out, &fetch, render_config)
        }

        Commands::Tokens { input, tokenize } => {
            crate::flows::tokens::run_tokens(&input, &tokenize, render_config)
        }

        Commands::Stats {
            input,
            top,
            tokenize,
        } => crate::flows::stats::run_stats(&input, top, &tokenize, render_config),

        Commands::Cloud {
            input,
            tokenize,
            cloud,
        } => crate::flows::cloud::run_cloud(&input, &tokenize, &cloud, render_config),

        Commands::Run {
            query,
            out,
            fetch,
            tokenize,
            cloud,
        } => crate::flows::run::run_pipeline(&query, &out, &fetch, &tokenize, &cloud, render_config),
    }
}
