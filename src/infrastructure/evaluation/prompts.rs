//! Prompt templates for the LLM-backed capabilities
//!
//! Placeholders use the `${name}` form and are filled by [`render`].

use crate::domain::Passage;

pub const GRADER_SYSTEM: &str = "You judge whether a retrieved document contains enough \
information to answer a user's question.

Consider:
- Topical match: does the document address the subject of the question?
- Sufficiency: are the specific facts needed for an answer present?
- Gaps: what would still be missing to answer completely?

Reply with a JSON object:
{\"score\": \"yes\" | \"no\", \"relevance_score\": <0.0-1.0>, \
\"coverage_assessment\": \"<short note>\", \"missing_information\": \"<short note>\"}

Use \"yes\" only when the document alone supports a satisfactory answer.";

pub const GRADER_USER: &str = "QUESTION:
${question}

DOCUMENT:
${document}";

pub const GENERATOR_SYSTEM: &str = "You answer questions using only the supplied context.

- Lead with a direct answer, then supporting detail.
- Use facts from the context and attribute them naturally.
- Do not add facts the context does not contain.
- If the context is insufficient, say what is missing.";

pub const GENERATOR_USER: &str = "CONTEXT:
${context}

QUESTION:
${question}";

pub const GROUNDEDNESS_SYSTEM: &str = "You verify whether an answer is supported by a set of \
source documents. Every factual claim in the answer must be traceable to the documents; \
claims from outside knowledge count as unsupported.

Reply with a JSON object:
{\"binary_score\": true | false, \"confidence\": <0.0-1.0>, \"reasoning\": \"<short note>\"}";

pub const GROUNDEDNESS_USER: &str = "DOCUMENTS:
${context}

ANSWER:
${answer}";

pub const RELEVANCE_SYSTEM: &str = "You judge whether an answer resolves the user's question. \
An answer that is accurate but off-topic, or that leaves the core of the question open, \
does not resolve it.

Reply with a JSON object:
{\"binary_score\": true | false, \"relevance_score\": <0.0-1.0>, \
\"completeness\": \"complete\" | \"partial\" | \"minimal\", \
\"reasoning\": \"<short note>\", \"missing_aspects\": \"<short note>\"}";

pub const RELEVANCE_USER: &str = "QUESTION:
${question}

ANSWER:
${answer}";

/// Substitute `${name}` placeholders
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("${{{}}}", name), value)
    })
}

/// Format passages as a numbered context block
pub fn format_context(passages: &[Passage]) -> String {
    passages
        .iter()
        .enumerate()
        .map(|(i, p)| format!("[{}] (source: {})\n{}", i + 1, p.source, p.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}
