//! Document loading from the corpus directory.
//!
//! Reads every `.md` file in the documents directory and tags it with its
//! base name, which becomes the citation label in answers.

use crate::types::Document;
use askdocs_core::{AppError, AppResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files without this extension are ignored.
const DOC_EXTENSION: &str = "md";

/// Load all eligible documents from a directory.
///
/// Files are processed in lexicographic filename order so chunk sequence
/// indices and downstream citation ordering are reproducible across runs.
///
/// # Errors
/// `AppError::NoDocumentsFound` if the directory contains no `.md` files.
/// This is a fatal precondition: the system has nothing to index.
pub fn load_documents(docs_dir: &Path) -> AppResult<Vec<Document>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(docs_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case(DOC_EXTENSION))
                .unwrap_or(false)
        })
        .collect();

    if paths.is_empty() {
        return Err(AppError::NoDocumentsFound(docs_dir.to_path_buf()));
    }

    // Sorted for reproducibility
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = std::fs::read_to_string(&path)?;

        let source_id = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other(format!("Invalid file name: {:?}", path)))?;

        tracing::info!("Loaded {} ({} chars)", source_id, content.chars().count());
        documents.push(Document { source_id, content });
    }

    Ok(documents)
}
