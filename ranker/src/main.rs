use anyhow::Result;
use clap::{builder::NonEmptyStringValueParser, Parser, ValueEnum};
use ranker::{load_corpus, render_json, render_text, run_report};
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::{ModelConfig, StandardAnalyzer, VectorSpaceModel};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Rank a directory of documents against a query with the vector space model", long_about = None)]
struct Cli {
    /// Query words; joined with spaces into one query
    #[arg(long, required = true, num_args = 1.., value_parser = NonEmptyStringValueParser::new())]
    query: Vec<String>,
    /// Directory holding one document per file
    #[arg(long, default_value = "./documents")]
    documents: String,
    /// Number of documents reported per strategy
    #[arg(long, default_value_t = 5)]
    top_k: usize,
    /// Weight of the feedback document added to the query
    #[arg(long, default_value_t = 0.5)]
    feedback_weight: f64,
    /// Apply English stemming to documents and query
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Also list documents similar to this document id
    #[arg(long)]
    related: Option<String>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let query = cli.query.join(" ");
    let corpus = load_corpus(&cli.documents)?;
    let config = ModelConfig { top_k: cli.top_k, feedback_weight: cli.feedback_weight };
    let model = VectorSpaceModel::with_analyzer(StandardAnalyzer::new(cli.stem), config, &corpus.texts);

    let report = run_report(&model, &corpus, &query, cli.related.as_deref())?;
    match cli.format {
        Format::Text => print!("{}", render_text(&report)),
        Format::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}
