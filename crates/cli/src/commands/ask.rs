//! Ask command handler: answer a single question.

use clap::Args;
use askdocs_core::{AppConfig, AppError, AppResult};

/// Ask a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Vec<String>,

    /// Print retrieved chunks with scores
    #[arg(long)]
    pub debug: bool,

    /// Output the structured result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let question = self.question.join(" ");
        if question.trim().is_empty() {
            return Err(AppError::Config("No question provided".to_string()));
        }

        let engine = super::bootstrap_engine(config).await?;

        if self.json {
            let result = engine.answer(&question).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        super::run_query(&engine, &question, self.debug).await
    }
}
