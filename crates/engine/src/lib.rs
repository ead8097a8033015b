//! RAG engine for the Ask Our Docs bot.
//!
//! Pipeline stages:
//! 1. Load     - read .md files, tag each with its filename as source id
//! 2. Chunk    - sliding-window character split (400 chars, 80 overlap)
//! 3. Embed    - one shared embedding provider, unit-normalized vectors
//! 4. Index    - exact flat inner-product index (= cosine similarity)
//! 5. Retrieve - top-k most similar chunks for a given question
//! 6. Generate - grounded prompt + LLM call + citation-safe post-processing
//!
//! Stages 1-4 run once at startup (`DocsEngine::build_index`); stages 5-6
//! run per question (`DocsEngine::answer`). The index is immutable once
//! built; a corpus change requires a full rebuild.

pub mod chunker;
pub mod embeddings;
pub mod engine;
pub mod index;
pub mod loader;
pub mod refusal;
pub mod types;

pub use chunker::{chunk_documents, ChunkConfig, CHUNK_OVERLAP, CHUNK_SIZE};
pub use embeddings::{create_provider, Embedder, EmbeddingProvider};
pub use engine::{DocsEngine, DEFAULT_TOP_K};
pub use index::FlatIndex;
pub use loader::load_documents;
pub use refusal::RefusalDetector;
pub use types::{AnswerResult, Chunk, Document, RetrievalResult};
