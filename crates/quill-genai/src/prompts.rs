//! Prompt construction for each generation task.
//!
//! Pure and infallible: unknown template or phrase-context identifiers fall
//! back to a generic label instead of failing.

use quill_core::enums::CitationStyle;

/// Section templates offered for drafting, `(id, label)`.
pub const TEMPLATE_TYPES: [(&str, &str); 4] = [
    ("introduction_review", "Introdução (Revisão Sistemática)"),
    ("methodology_experimental", "Metodologia (Estudo Experimental)"),
    ("discussion_generic", "Discussão (Genérico)"),
    ("abstract_research", "Resumo (Artigo de Pesquisa)"),
];

/// Contexts for phrase suggestions, `(id, label)`.
pub const PHRASE_CONTEXTS: [(&str, &str); 4] = [
    ("connecting_ideas", "Conectar Ideias"),
    ("introducing_evidence", "Apresentar Evidências"),
    ("expressing_contrast", "Expressar Contraste"),
    ("concluding_paragraph", "Concluir Parágrafo"),
];

const TEMPLATE_FALLBACK: &str = "um artigo científico";
const PHRASE_FALLBACK: &str = "escrita científica";

/// Shown when an article has neither abstract nor notes.
pub const MISSING_SUMMARY_SOURCE: &str =
    "O artigo não possui texto suficiente (resumo ou anotações) para gerar um sumário.";

/// Shown when review is requested for blank text.
pub const MISSING_REVIEW_TEXT: &str = "Por favor, insira o texto para revisão.";

/// One kind of request the application sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTask<'a> {
    /// Article text to summarize.
    SummarizeArticle(&'a str),
    /// Template identifier from [`TEMPLATE_TYPES`].
    SectionTemplate(&'a str),
    /// Draft text to review.
    ReviewText(&'a str),
    /// Context identifier from [`PHRASE_CONTEXTS`].
    SuggestPhrases(&'a str),
    FormattingGuide(CitationStyle),
}

/// Prompt text plus optional system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub system_instruction: Option<String>,
}

impl Prompt {
    fn new(text: String, system_instruction: &str) -> Self {
        Self {
            text,
            system_instruction: Some(system_instruction.to_string()),
        }
    }

    #[must_use]
    pub fn system(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }
}

/// Build the prompt for `task`.
#[must_use]
pub fn build(task: PromptTask<'_>) -> Prompt {
    match task {
        PromptTask::SummarizeArticle(text) => Prompt::new(
            format!(
                "Resuma o seguinte texto acadêmico em 3-5 frases concisas, destacando os pontos principais:\n\n{text}"
            ),
            "Você é um assistente de pesquisa que cria resumos claros e informativos.",
        ),
        PromptTask::SectionTemplate(id) => {
            let label = template_label(id);
            Prompt::new(
                format!(
                    "Gere uma estrutura de tópicos detalhada ou um modelo inicial para a seção \"{label}\" de um artigo científico. Inclua sugestões de subseções e pontos chave a serem abordados."
                ),
                "Você é um assistente de escrita acadêmica que ajuda a estruturar artigos.",
            )
        }
        PromptTask::ReviewText(text) => Prompt::new(
            format!(
                "Revise o seguinte texto acadêmico para clareza, gramática, ortografia e estilo. Sugira melhorias para torná-lo mais formal e fluído. Retorne o texto revisado e, se possível, uma breve lista de sugestões:\n\n{text}"
            ),
            "Você é um editor acadêmico experiente.",
        ),
        PromptTask::SuggestPhrases(id) => {
            let label = phrase_label(id).to_lowercase();
            Prompt::new(
                format!(
                    "Sugira uma lista de frases ou conectores úteis para {label} em um texto científico. Forneça exemplos práticos."
                ),
                "Você é um assistente de escrita que fornece sugestões de linguagem acadêmica.",
            )
        }
        PromptTask::FormattingGuide(style) => Prompt::new(
            format!(
                "Forneça um guia conciso sobre como formatar referências bibliográficas no estilo {style}, cobrindo os tipos mais comuns (artigo de periódico, livro, capítulo de livro). Destaque os principais elementos e a ordem correta."
            ),
            "Você é um especialista em normas de citação acadêmica.",
        ),
    }
}

impl PromptTask<'_> {
    /// User-facing message recorded when this task's call fails.
    #[must_use]
    pub fn failure_message(&self) -> String {
        match self {
            Self::SummarizeArticle(_) => "Falha ao gerar o resumo. Tente novamente.".to_string(),
            Self::SectionTemplate(_) => "Falha ao gerar o modelo. Tente novamente.".to_string(),
            Self::ReviewText(_) => "Falha ao revisar o texto. Tente novamente.".to_string(),
            Self::SuggestPhrases(_) => "Falha ao sugerir frases. Tente novamente.".to_string(),
            Self::FormattingGuide(style) => {
                format!("Falha ao carregar o guia de formatação para {style}. Tente novamente.")
            }
        }
    }
}

/// Label for a template id, or the generic fallback.
#[must_use]
pub fn template_label(id: &str) -> &'static str {
    lookup(&TEMPLATE_TYPES, id).unwrap_or(TEMPLATE_FALLBACK)
}

/// Label for a phrase-context id, or the generic fallback.
#[must_use]
pub fn phrase_label(id: &str) -> &'static str {
    lookup(&PHRASE_CONTEXTS, id).unwrap_or(PHRASE_FALLBACK)
}

fn lookup(table: &[(&str, &'static str)], id: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(value, _)| *value == id)
        .map(|(_, label)| *label)
}
