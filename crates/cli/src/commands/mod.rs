//! Command handlers for the askdocs CLI.

mod ask;
mod chat;
mod demo;

pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use demo::DemoCommand;

use askdocs_core::{AppConfig, AppResult};
use askdocs_engine::{
    chunk_documents, create_provider, load_documents, ChunkConfig, DocsEngine, Embedder,
};

/// Load the corpus, chunk it, embed everything and build the engine.
///
/// This is the once-per-process startup path shared by every command:
/// index construction happens here, after which the engine only serves
/// queries.
pub async fn bootstrap_engine(config: &AppConfig) -> AppResult<DocsEngine> {
    println!("Loading documents from {:?}...", config.docs_dir);
    let documents = load_documents(&config.docs_dir)?;
    for doc in &documents {
        println!("  Loaded: {} ({} chars)", doc.source_id, doc.content.chars().count());
    }

    let chunk_config = ChunkConfig::default();
    println!(
        "Chunking documents ({} chars, {}-char overlap)...",
        chunk_config.window(),
        chunk_config.overlap()
    );
    let chunks = chunk_documents(&documents, chunk_config);
    println!("  Total chunks created: {}", chunks.len());

    let embedding_provider = create_provider(
        &config.provider,
        &config.embedding_model,
        Some(&config.endpoint),
    )?;
    let embedder = Embedder::new(embedding_provider);

    let llm = askdocs_llm::create_client(&config.provider, Some(&config.endpoint))?;

    let mut engine = DocsEngine::new(embedder, llm, config.model.clone());
    println!("Generating embeddings and building index...");
    engine.build_index(chunks).await?;
    println!("Index ready: {} chunks indexed.\n", engine.chunk_count());

    Ok(engine)
}

/// Run one question through the engine and print the result.
pub async fn run_query(engine: &DocsEngine, question: &str, debug: bool) -> AppResult<()> {
    tracing::info!("USER QUESTION: {}", question);

    println!("{}", "=".repeat(62));
    println!("  Question: {}", question);
    println!("{}", "=".repeat(62));

    let result = engine.answer(question).await?;

    println!("\n  Answer:\n");
    for line in strip_inline_citation(&result.answer).lines() {
        println!("     {}", line);
    }
    println!("\n  Sources: {}", result.sources.join(", "));
    println!();

    if debug {
        println!("  [DEBUG] Retrieved chunks:");
        for retrieved in &result.retrieved_chunks {
            let preview: String = retrieved.chunk.text.chars().take(80).collect();
            println!(
                "    [{}] score={:.4}  preview={:?}",
                retrieved.chunk.source_id,
                retrieved.score,
                preview.trim()
            );
        }
        println!();
    }

    tracing::info!("Answer delivered. Sources: {:?}", result.sources);
    Ok(())
}

/// Remove the model's own inline citation line.
///
/// The prompt instructs the model to end with a `Sources: [...]` line.
/// The structured `sources` field is the authoritative citation list, so
/// the inline line is presentational noise; leaving it in would show
/// citations twice.
fn strip_inline_citation(answer: &str) -> String {
    answer
        .trim()
        .lines()
        .filter(|line| !line.trim_start().to_lowercase().starts_with("sources:"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
