use crate::language::Language;

/// Placeholder substituted with the looked-up word
pub const WORD_PLACEHOLDER: &str = "{word}";

const PROMPT_EN: &str = r#"You are an expert lexicographer and usage editor. Produce a complete dictionary-style entry for the word: "{word}".
Return the following sections, labelled and in the order given:
1. **Word**: The word itself.
2. **Part of speech**: e.g., Noun, Verb, Adjective.
3. **Pronunciation**: IPA format if available (e.g., /həˈloʊ/).
4. **Concise definition**: A single, clear sentence.
5. **Expanded definition**: 2–3 sentences providing more detail and context.
6. **Common synonyms**: 3–6 relevant synonyms.
7. **Common antonyms**: If any exist. If not, state "None."
8. **Example sentences**: 3 sentences in different contexts (each ≤ 20 words).
9. **Typical register**: Formal / Neutral / Informal, plus any domain tags (e.g., Medicine, Computing).
10. **Etymology**: A brief, one-line origin of the word.

Format the entire output in Markdown. Ensure each section title is bold.
If the word is nonsensical or cannot be defined, please respond with a polite message indicating that.
"#;

const PROMPT_FR: &str = r#"Vous êtes un lexicographe et rédacteur spécialisé dans l’usage des mots. Produisez une entrée complète de style dictionnaire pour le mot : "{word}".
Retournez les sections suivantes, étiquetées et dans l’ordre indiqué :
1. **Mot**: Le mot lui-même.
2. **Partie du discours**: ex: Nom, Verbe, Adjectif.
3. **Prononciation**: API si disponible (ex: /bɔ̃.ʒuʁ/).
4. **Définition concise**: Une seule phrase claire.
5. **Définition développée**: 2–3 phrases donnant plus de détails et de contexte.
6. **Synonymes courants**: 3–6 synonymes pertinents.
7. **Antonymes courants**: S’il y en a. Sinon, indiquez "Aucun".
8. **Phrases d’exemple**: 3 phrases dans des contextes différents (chaque phrase ≤ 20 mots).
9. **Registre typique**: Formel / Neutre / Informel, et domaines d’usage (ex: médecine, droit) si pertinent.
10. **Étymologie**: Une brève origine du mot (une ligne).

Formatez la sortie complète en Markdown. Assurez-vous que chaque titre de section est en gras.
Si le mot est absurde ou ne peut être défini, veuillez répondre avec un message poli l'indiquant.
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub language: Language,
    pub template: &'static str,
}

impl PromptTemplate {
    /// Substitute the word into the template
    pub fn format(&self, word: &str) -> String {
        self.template.replace(WORD_PLACEHOLDER, word)
    }
}

/// One prompt template per supported language
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    templates: Vec<PromptTemplate>,
}

impl PromptCatalog {
    /// Catalog with the built-in English and French lexicographer prompts
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                PromptTemplate {
                    language: Language::En,
                    template: PROMPT_EN,
                },
                PromptTemplate {
                    language: Language::Fr,
                    template: PROMPT_FR,
                },
            ],
        }
    }

    /// Template for `language`, or the default language's template when the
    /// catalog has none for it.
    pub fn template(&self, language: Language) -> &PromptTemplate {
        self.templates
            .iter()
            .find(|t| t.language == language)
            .or_else(|| self.templates.iter().find(|t| t.language == Language::default()))
            .unwrap_or(&self.templates[0])
    }

    /// Build the prompt sent to the generation API
    pub fn compose(&self, word: &str, language: Language) -> String {
        self.template(language).format(word)
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
