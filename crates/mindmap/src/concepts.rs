//! Deterministic lexical analysis of summary text into typed concepts.
//!
//! This is the heuristic path behind the graph builder: no model, only
//! keyword tables evaluated in fixed priority order, so identical input
//! always yields identical concepts.

/// Semantic role of an extracted concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptKind {
    Causal,
    Process,
    Outcome,
    Structural,
    General,
}

impl ConceptKind {
    /// Verb phrase tying a concept of this kind to the central concept.
    pub fn relationship(self) -> &'static str {
        match self {
            ConceptKind::Causal => "causes",
            ConceptKind::Process => "operates through",
            ConceptKind::Outcome => "achieves",
            ConceptKind::Structural => "contains",
            ConceptKind::General => "relates to",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ConceptKind::Causal => "Causal",
            ConceptKind::Process => "Process",
            ConceptKind::Outcome => "Outcome",
            ConceptKind::Structural => "Structural",
            ConceptKind::General => "General",
        }
    }
}

/// Classification rules, first match wins. Causal outranks process
/// outranks outcome outranks structural; anything else is general.
const CLASSIFICATION_RULES: &[(&[&str], ConceptKind)] = &[
    (&["because", "due to", "causes", "results in"], ConceptKind::Causal),
    (&["process", "method", "approach", "technique"], ConceptKind::Process),
    (&["benefit", "advantage", "improves", "enhances"], ConceptKind::Outcome),
    (&["component", "part", "element", "aspect"], ConceptKind::Structural),
];

const TITLE_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "this", "that", "these", "those",
];

/// Phrases that introduce the document's main topic.
const TOPIC_PATTERNS: &[&str] = &[
    "presentation focused on",
    "document covers",
    "training on",
    "overview of",
    "discussion about",
    "analysis of",
];

const TOPIC_SKIP_WORDS: &[&str] = &["the", "this", "that", "with", "from"];

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub title: String,
    pub description: String,
}

/// Secondary idea attached to a concept, owned by it exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportingConcept {
    pub title: String,
    pub explanation: String,
    pub connection: String,
    pub application: Option<Application>,
}

/// One extracted unit of meaning, built from a single sentence and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub title: String,
    pub description: String,
    pub kind: ConceptKind,
    pub relationship: &'static str,
    pub supports: Vec<SupportingConcept>,
}

/// Extract up to 6 concepts from `text`, one per qualifying sentence.
pub fn extract_concepts(text: &str) -> Vec<Concept> {
    let mut concepts = Vec::new();

    for sentence in qualifying_sentences(text).into_iter().take(6) {
        // Fragments this short carry no usable structure.
        if sentence.chars().count() < 20 {
            continue;
        }

        let kind = classify_sentence(sentence);
        concepts.push(Concept {
            title: concept_title(sentence, kind),
            description: concept_description(sentence),
            kind,
            relationship: kind.relationship(),
            supports: supporting_concepts(sentence, kind),
        });
    }

    concepts
}

/// Label for the central node, derived from the first qualifying
/// sentence of `text`.
pub fn main_topic(text: &str) -> String {
    let sentences = qualifying_sentences(text);
    extract_main_topic(sentences.first().copied().unwrap_or("Document Analysis"))
}

/// Sentences worth analyzing: split on '.', trimmed, longer than 15
/// characters.
fn qualifying_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > 15)
        .collect()
}

fn classify_sentence(sentence: &str) -> ConceptKind {
    let lower = sentence.to_lowercase();
    for (keywords, kind) in CLASSIFICATION_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *kind;
        }
    }
    ConceptKind::General
}

fn extract_main_topic(first_sentence: &str) -> String {
    let lower = first_sentence.to_lowercase();

    for pattern in TOPIC_PATTERNS {
        if let Some(pos) = lower.find(pattern) {
            let after = &lower[pos + pattern.len()..];
            let topic: Vec<&str> = after.split_whitespace().take(5).collect();
            if !topic.is_empty() {
                return title_case(&topic.join(" "));
            }
        }
    }

    let meaningful: Vec<&str> = first_sentence
        .split_whitespace()
        .take(6)
        .filter(|w| {
            w.chars().count() > 3 && !TOPIC_SKIP_WORDS.contains(&w.to_lowercase().as_str())
        })
        .take(3)
        .collect();

    if meaningful.is_empty() {
        "Document Overview".to_string()
    } else {
        title_case(&meaningful.join(" "))
    }
}

/// Short label from the sentence's first 8 words, stop words and short
/// words removed, capped at 3 words.
fn concept_title(sentence: &str, kind: ConceptKind) -> String {
    let important: Vec<&str> = sentence
        .split_whitespace()
        .take(8)
        .filter(|w| {
            w.chars().count() > 3 && !TITLE_STOP_WORDS.contains(&w.to_lowercase().as_str())
        })
        .collect();

    match important.len() {
        0 => format!("{} Concept", kind.label()),
        1 => title_case(important[0]),
        _ => title_case(&important[..important.len().min(3)].join(" ")),
    }
}

fn concept_description(sentence: &str) -> String {
    if sentence.chars().count() > 100 {
        let mut truncated: String = sentence.chars().take(100).collect();
        truncated.push_str("...");
        truncated
    } else {
        sentence.to_string()
    }
}

/// 1-2 supporting concepts per sentence, by independent keyword tests;
/// a default support when neither test fires.
fn supporting_concepts(sentence: &str, kind: ConceptKind) -> Vec<SupportingConcept> {
    let lower = sentence.to_lowercase();
    let mut supports = Vec::new();

    if kind == ConceptKind::Process || lower.contains("method") {
        supports.push(SupportingConcept {
            title: "Implementation Steps".to_string(),
            explanation: "How this concept is put into practice".to_string(),
            connection: "broken down into".to_string(),
            application: Some(Application {
                title: "Real-world Application".to_string(),
                description: "Practical use in relevant scenarios".to_string(),
            }),
        });
    }

    if lower.contains("benefit") || lower.contains("advantage") {
        supports.push(SupportingConcept {
            title: "Key Benefits".to_string(),
            explanation: "Why this concept is valuable".to_string(),
            connection: "provides".to_string(),
            application: Some(Application {
                title: "Impact Areas".to_string(),
                description: "Where benefits are most visible".to_string(),
            }),
        });
    }

    if supports.is_empty() {
        supports.push(SupportingConcept {
            title: "Key Details".to_string(),
            explanation: "Important aspects of this concept".to_string(),
            connection: "includes".to_string(),
            application: Some(Application {
                title: "Practical Use".to_string(),
                description: "How this applies in practice".to_string(),
            }),
        });
    }

    supports.truncate(2);
    supports
}

pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
