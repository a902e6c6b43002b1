use std::sync::Arc;

use lexigem_core::language::Language;
use lexigem_core::markdown::markdown_to_html;
use lexigem_core::prompt::PromptCatalog;
use lexigem_core::types::DefinitionResult;
use lexigem_generator::Generator;

/// Shown for every lookup when no generator could be configured at startup
pub const NOT_CONFIGURED_HTML: &str =
    "<p>Error: The AI model is not configured. Please check the API key.</p>";

/// Turns a word into a rendered dictionary entry. Failures never escape:
/// they come back as an HTML fragment in the result.
pub struct DefinitionService {
    generator: Option<Arc<dyn Generator>>,
    catalog: PromptCatalog,
}

impl DefinitionService {
    pub fn new(generator: Option<Arc<dyn Generator>>, catalog: PromptCatalog) -> Self {
        Self { generator, catalog }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn get_definition(&self, word: &str, language: Language) -> DefinitionResult {
        let Some(generator) = &self.generator else {
            return DefinitionResult::new(NOT_CONFIGURED_HTML);
        };

        let prompt = self.catalog.compose(word, language);

        match generator.generate(&prompt).await {
            Ok(generation) => {
                tracing::debug!(
                    word,
                    language = language.code(),
                    model = %generation.model,
                    "definition generated"
                );
                DefinitionResult::new(markdown_to_html(&generation.text))
            }
            Err(e) => {
                tracing::error!(word, language = language.code(), "generation failed: {e}");
                DefinitionResult::new(apology_html(&e.to_string()))
            }
        }
    }
}

/// The error detail is escaped so it cannot inject markup into the page
fn apology_html(detail: &str) -> String {
    format!(
        "<p>Sorry, an error occurred while trying to generate the definition. Please try again later.</p>\
         <p><i>Error details: {}</i></p>",
        escape_text(detail)
    )
}

/// Escape for element content. URLs and paths in the text stay readable.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
