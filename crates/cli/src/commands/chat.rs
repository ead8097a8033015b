//! Chat command handler: interactive question loop on stdin.

use clap::Args;
use askdocs_core::{AppConfig, AppResult};
use std::io::{BufRead, Write};

/// Interactive question loop
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Print retrieved chunks with scores
    #[arg(long)]
    pub debug: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    ///
    /// Per-question errors are reported and the loop continues: each
    /// question is an independent unit of failure, and a transient
    /// provider error must not kill the session.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let engine = super::bootstrap_engine(config).await?;

        println!("Ready for your questions. Type 'quit' to exit.\n");

        let stdin = std::io::stdin();
        loop {
            print!("You: ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            let bytes = stdin.lock().read_line(&mut line)?;
            if bytes == 0 {
                // EOF
                println!("\nGoodbye!");
                break;
            }

            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            if matches!(question.to_lowercase().as_str(), "quit" | "exit" | "q") {
                println!("Goodbye!");
                tracing::info!("Session ended by user (quit command)");
                break;
            }

            if let Err(e) = super::run_query(&engine, question, self.debug).await {
                tracing::error!("Query failed: {}", e);
                println!("  Error: {}\n", e);
            }
        }

        Ok(())
    }
}
