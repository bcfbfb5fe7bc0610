//! skyqa CLI
//!
//! Interactive question-answering assistant over a Neo4j graph of celestial
//! objects. Configuration comes from flags or environment variables; the
//! only mode of operation is the interactive loop.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;

use skyqa::answer::AnswerRouter;
use skyqa::config::{Settings, DEFAULT_NEO4J_URI, DEFAULT_QA_ENDPOINT};
use skyqa::graph::GraphClient;
use skyqa::qa::RemoteQaModel;
use skyqa::shell::Shell;

/// Question answering over a graph of celestial objects
#[derive(Parser)]
#[command(name = "skyqa")]
#[command(about = "Interactive question answering over a Neo4j graph of celestial objects", long_about = None)]
#[command(version)]
struct Cli {
    /// Neo4j bolt URI
    #[arg(long, env = "SKYQA_NEO4J_URI", default_value = DEFAULT_NEO4J_URI)]
    neo4j_uri: String,

    /// Neo4j username
    #[arg(long, env = "SKYQA_NEO4J_USER", default_value = "neo4j")]
    neo4j_user: String,

    /// Neo4j password
    #[arg(long, env = "SKYQA_NEO4J_PASSWORD", default_value = "", hide_env_values = true)]
    neo4j_password: String,

    /// Extractive-QA inference endpoint URL
    #[arg(long, env = "SKYQA_QA_ENDPOINT", default_value = DEFAULT_QA_ENDPOINT)]
    qa_endpoint: String,

    /// Bearer token for the inference endpoint
    #[arg(long, env = "SKYQA_QA_TOKEN", hide_env_values = true)]
    qa_token: Option<String>,

    /// Log file path
    #[arg(long, env = "SKYQA_LOG_FILE", default_value = "skyqa.log")]
    log_file: PathBuf,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            neo4j_uri: self.neo4j_uri,
            neo4j_user: self.neo4j_user,
            neo4j_password: self.neo4j_password,
            qa_endpoint: self.qa_endpoint,
            qa_token: self.qa_token,
            log_file: self.log_file,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings = Cli::parse().into_settings();

    if let Err(err) = skyqa::logging::init(&settings.log_file) {
        eprintln!("Logging konnte nicht initialisiert werden: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(settings).await {
        error!("fatal: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(settings: Settings) -> anyhow::Result<()> {
    settings.validate()?;

    // Startup failures are fatal: no database or no model means no assistant.
    let store = GraphClient::connect(
        &settings.neo4j_uri,
        &settings.neo4j_user,
        &settings.neo4j_password,
    )
    .await?;

    let model = RemoteQaModel::new(settings.qa_endpoint.clone(), settings.qa_token.clone())?;
    model.verify().await?;

    let router = AnswerRouter::new(Arc::new(store), Arc::new(model));
    Shell::new(router).run().await?;
    Ok(())
}
