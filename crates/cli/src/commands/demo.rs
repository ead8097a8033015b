//! Demo command handler: run the built-in demo questions.

use clap::Args;
use askdocs_core::{AppConfig, AppResult};

/// Questions exercising each corpus document plus edge behavior.
const DEMO_QUESTIONS: &[&str] = &[
    "How do I authenticate my API request?",
    "What is the standard rate limit?",
    "What endpoint retrieves a specific user's profile?",
    "What happens when I exceed the rate limit?",
    "How do I get an enterprise tier rate limit?",
];

/// Run the built-in demo questions
#[derive(Args, Debug)]
pub struct DemoCommand {
    /// Print retrieved chunks with scores
    #[arg(long)]
    pub debug: bool,
}

impl DemoCommand {
    /// Execute the demo command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Running demo questions");

        let engine = super::bootstrap_engine(config).await?;

        println!("Running {} demo questions...\n", DEMO_QUESTIONS.len());
        for question in DEMO_QUESTIONS {
            super::run_query(&engine, question, self.debug).await?;
        }

        Ok(())
    }
}
