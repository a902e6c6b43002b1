mod definition_service_tests;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lexigem_generator::{GenerateError, Generation, Generator, ProviderMetadata};

pub(crate) const HELLO_ENTRY: &str = "\
1. **Word**: hello
2. **Part of speech**: Interjection
3. **Concise definition**: A greeting.
";

/// Generator that answers every prompt with canned text or a canned error
/// and remembers what it was asked.
pub(crate) struct MockGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub(crate) fn replying(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    fn new(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(Generation {
                text: text.clone(),
                model: "mock".to_string(),
            }),
            Err(message) => Err(GenerateError::ApiError(message.clone())),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Mock".to_string(),
            model: "mock".to_string(),
        }
    }
}
