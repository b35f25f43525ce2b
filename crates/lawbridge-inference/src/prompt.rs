//! Prompt construction for the summary generator.
//!
//! The system prompt fixes tone, citation style, length, and the closing
//! disclaimer; the user prompt embeds the retrieved documents as indexed
//! excerpts so the model can cite them by number.

use lawbridge_core::RetrievedDocument;

/// System instruction for the legal summary model.
pub const SYSTEM_PROMPT: &str = r#"You are LawBridge, a legal information assistant that helps everyday people understand legal concepts. Your goal is to provide clear, accurate, and helpful information in plain English.

CRITICAL RULES:
1. Write in simple, plain language that anyone can understand - avoid legal jargon
2. When you must use a legal term, explain it in parentheses
3. ALWAYS cite your sources using [1], [2], etc. corresponding to the provided documents
4. Include at least 2-3 citations in your response
5. Be concise but thorough - aim for 150-300 words
6. Structure your answer with clear paragraphs
7. If the question is unclear, address the most likely interpretation
8. ALWAYS end with a note that this is general information, not legal advice

FORMAT:
- Start directly with the answer (no "Here's what I found" preambles)
- Use citations inline like "tenants have the right to a habitable dwelling [1]"
- Keep paragraphs short and scannable"#;

/// Build the user prompt embedding each document as `[index] "title": content`.
pub fn build_user_prompt(question: &str, documents: &[RetrievedDocument]) -> String {
    let excerpts = documents
        .iter()
        .enumerate()
        .map(|(index, doc)| format!("[{}] \"{}\": {}", index + 1, doc.title, doc.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Question: {question}\n\n\
         Use ONLY the following legal document excerpts to answer. Cite each relevant point with the source number:\n\n\
         {excerpts}\n\n\
         Provide a clear, plain-language answer with citations."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, content: &str) -> RetrievedDocument {
        RetrievedDocument {
            title: title.to_string(),
            content: content.to_string(),
            url: "https://example.test".to_string(),
            score: 0.9,
        }
    }

    #[test]
    fn test_user_prompt_indexes_documents_from_one() {
        let prompt = build_user_prompt(
            "Can I break my lease?",
            &[doc("Lease Law", "Lease content."), doc("SCRA", "Military.")],
        );

        assert!(prompt.starts_with("Question: Can I break my lease?"));
        assert!(prompt.contains("[1] \"Lease Law\": Lease content."));
        assert!(prompt.contains("[2] \"SCRA\": Military."));
    }

    #[test]
    fn test_user_prompt_with_no_documents() {
        let prompt = build_user_prompt("anything", &[]);
        assert!(prompt.contains("Question: anything"));
        assert!(!prompt.contains("[1]"));
    }

    #[test]
    fn test_system_prompt_fixes_contract() {
        assert!(SYSTEM_PROMPT.contains("150-300 words"));
        assert!(SYSTEM_PROMPT.contains("[1], [2]"));
        assert!(SYSTEM_PROMPT.contains("not legal advice"));
    }
}
