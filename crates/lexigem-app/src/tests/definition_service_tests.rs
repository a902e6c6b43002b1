use std::sync::Arc;

use lexigem_core::language::Language;
use lexigem_core::markdown::markdown_to_html;
use lexigem_core::prompt::PromptCatalog;
use lexigem_generator::Generator;

use super::{HELLO_ENTRY, MockGenerator};
use crate::service::{DefinitionService, NOT_CONFIGURED_HTML};

fn service_with(mock: &Arc<MockGenerator>) -> DefinitionService {
    let generator: Arc<dyn Generator> = mock.clone();
    DefinitionService::new(Some(generator), PromptCatalog::builtin())
}

#[tokio::test]
async fn prompt_follows_the_requested_language() {
    let mock = Arc::new(MockGenerator::replying(HELLO_ENTRY));
    let service = service_with(&mock);
    let catalog = PromptCatalog::builtin();

    for (word, language) in [("hello", Language::En), ("bonjour", Language::Fr)] {
        service.get_definition(word, language).await;
        assert_eq!(
            mock.last_prompt().as_deref(),
            Some(catalog.compose(word, language).as_str())
        );
    }

    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn unrecognized_language_uses_english_prompt() {
    let mock = Arc::new(MockGenerator::replying(HELLO_ENTRY));
    let service = service_with(&mock);

    service
        .get_definition("Hund", Language::from_code("de"))
        .await;

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.starts_with("You are an expert lexicographer"));
    assert!(prompt.contains("\"Hund\""));
}

#[tokio::test]
async fn response_markdown_is_converted() {
    let mock = Arc::new(MockGenerator::replying(HELLO_ENTRY));
    let service = service_with(&mock);

    let result = service.get_definition("hello", Language::En).await;

    assert_eq!(result.html, markdown_to_html(HELLO_ENTRY));
    assert!(result.html.contains("<strong>Word</strong>: hello"));
}

#[tokio::test]
async fn unconfigured_service_returns_fixed_message() {
    let service = DefinitionService::new(None, PromptCatalog::builtin());

    for (word, language) in [("hello", Language::En), ("bonjour", Language::Fr), ("", Language::En)] {
        let result = service.get_definition(word, language).await;
        assert_eq!(result.html, NOT_CONFIGURED_HTML);
    }
    assert!(!service.is_configured());
}

#[tokio::test]
async fn generation_error_becomes_apology() {
    let mock = Arc::new(MockGenerator::failing("quota exceeded for project"));
    let service = service_with(&mock);

    let result = service.get_definition("bonjour", Language::Fr).await;

    assert!(result.html.contains("Sorry, an error occurred"));
    assert!(result.html.contains("API error: quota exceeded for project"));
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn error_message_with_url_appears_literally() {
    let message = "error sending request for url (https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent)";
    let mock = Arc::new(MockGenerator::failing(message));
    let service = service_with(&mock);

    let result = service.get_definition("hello", Language::En).await;

    assert!(result.html.contains(message));
}
