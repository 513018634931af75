use clap::{Args, Parser, Subcommand};

use biaslens_analysis::{AnalysisRequest, BiasAnalyzer, OpenAiOracle};
use biaslens_extract::PageClient;

#[derive(Debug, Parser)]
#[command(name = "biaslens")]
#[command(about = "News bias analysis from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the bias pipeline on an article and print the result as JSON.
    Analyze(AnalyzeArgs),
    /// Rate a URL's source against the credibility table.
    SourceCheck { url: String },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct AnalyzeArgs {
    /// Article URL to fetch and extract.
    #[arg(long)]
    url: Option<String>,
    /// Path to a file holding raw article text.
    #[arg(long)]
    file: Option<std::path::PathBuf>,
    /// Raw article text.
    #[arg(long)]
    text: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze(args).await,
        Commands::SourceCheck { url } => {
            let rated = biaslens_core::source_rating(&url);
            println!("{}", serde_json::to_string_pretty(&rated)?);
            Ok(())
        }
    }
}

async fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = biaslens_core::load_app_config()?;

    let oracle = OpenAiOracle::new(&config.openai_api_key, &config.oracle_model)
        .with_base_url(&config.oracle_base_url);
    let page_client = PageClient::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
    let analyzer = BiasAnalyzer::new(Box::new(oracle), page_client, config.oracle_temperature);

    let request = if let Some(path) = args.file {
        AnalysisRequest {
            text: Some(std::fs::read_to_string(&path)?),
            url: None,
        }
    } else {
        AnalysisRequest {
            text: args.text,
            url: args.url,
        }
    };

    let result = analyzer.analyze(&request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
