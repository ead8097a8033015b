//! Prompt builder for rendering the grounded prompt.

use crate::types::{ContextSegment, GroundedPrompt, CONTEXT_SEPARATOR, SYSTEM_PROMPT};
use askdocs_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Handlebars template for the user message.
const USER_TEMPLATE: &str = "\
CONTEXT FROM DOCUMENTATION:

{{context}}

------------------------------------------------------------

QUESTION: {{question}}

Answer using only the context above. End your answer by citing the source \
file(s) in [filename.md] format.";

/// Build the context block from retrieved segments.
///
/// Each segment is rendered as a `[Source: <name>]` label followed by its
/// text; segments are joined by a distinct separator. The caller supplies
/// segments in retrieval rank order (highest score first) and that order
/// is preserved, so the model reads the most relevant excerpt first.
pub fn build_context(segments: &[ContextSegment]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .map(|segment| format!("[Source: {}]\n{}", segment.source, segment.text))
        .collect();

    parts.join(CONTEXT_SEPARATOR)
}

/// Build the full grounded prompt for a question.
///
/// # Arguments
/// * `question` - The user's question
/// * `segments` - Retrieved context segments in rank order
///
/// # Returns
/// A `GroundedPrompt` with the fixed system rules and the rendered user
/// message.
pub fn build_grounded_prompt(
    question: &str,
    segments: &[ContextSegment],
) -> AppResult<GroundedPrompt> {
    tracing::debug!(
        "Building grounded prompt with {} context segments",
        segments.len()
    );

    let mut variables = HashMap::new();
    variables.insert("context".to_string(), build_context(segments));
    variables.insert("question".to_string(), question.to_string());

    let user = render_template(USER_TEMPLATE, &variables)?;

    Ok(GroundedPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    })
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}
