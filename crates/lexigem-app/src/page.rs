use lexigem_core::language::Language;
use lexigem_core::types::{DefinitionResult, LookupRequest};
use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const INDEX: &str = "index.html";

/// Compiled page templates
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // `.html` names are auto-escaped
        tera.add_raw_template(INDEX, INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, view: &IndexView<'_>) -> Result<String, tera::Error> {
        let context = Context::from_serialize(view)?;
        self.tera.render(INDEX, &context)
    }
}

#[derive(Serialize)]
pub struct LanguageOption {
    code: &'static str,
    label: &'static str,
}

/// Everything the index page shows
#[derive(Serialize)]
pub struct IndexView<'a> {
    /// HTML fragment, inserted unescaped
    result: Option<&'a str>,
    word: &'a str,
    selected_language: Language,
    languages: Vec<LanguageOption>,
}

impl<'a> IndexView<'a> {
    pub fn new(request: &'a LookupRequest, result: Option<&'a DefinitionResult>) -> Self {
        Self {
            result: result.map(|r| r.html.as_str()),
            word: &request.word,
            selected_language: request.language,
            languages: Language::ALL
                .iter()
                .map(|l| LanguageOption {
                    code: l.code(),
                    label: l.label(),
                })
                .collect(),
        }
    }
}
