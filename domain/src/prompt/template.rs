//! Prompt templates for consultation rounds

use crate::consultation::transcript::Transcript;

/// Opening sentence shared by every round's prompt
const PREAMBLE: &str = "You are participating in a multi-AI consultation.";

/// Templates for generating the prompt of each round
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the prompt for `round`.
    ///
    /// Pure function of its inputs. Round 1 (and round 0, treated the same)
    /// gets the bare question; later rounds also see every answer in the
    /// transcript.
    pub fn for_round(round: u32, question: &str, transcript: &Transcript) -> String {
        if round <= 1 {
            Self::initial_query(question)
        } else {
            Self::follow_up(question, transcript)
        }
    }

    /// Prompt for the first round
    pub fn initial_query(question: &str) -> String {
        format!(
            "{PREAMBLE} Answer the following question thoughtfully and concisely (2-3 paragraphs).\n\n\
             Question: {question}"
        )
    }

    /// Prompt for rounds after the first
    pub fn follow_up(question: &str, transcript: &Transcript) -> String {
        format!(
            "{PREAMBLE} Here is the question and responses from the previous round:\n\n\
             Question: {question}\n\n\
             Previous responses:\n{}\n\n\
             Consider these perspectives. Do you agree, disagree, or have additional insights? \
             Be concise (2-3 paragraphs).",
            Self::format_transcript(transcript)
        )
    }

    /// Render the transcript as labelled blocks.
    ///
    /// Each entry becomes `--- <name> ---\n<text>\n`; blocks are joined by a
    /// newline. Entries with empty text are left out.
    pub fn format_transcript(transcript: &Transcript) -> String {
        transcript
            .iter()
            .filter(|(_, entry)| !entry.text.is_empty())
            .map(|(_, entry)| format!("--- {} ---\n{}\n", entry.name, entry.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultation::{InvocationOutcome, RoundResult};

    fn transcript(entries: &[(&str, &str, &str)]) -> Transcript {
        let mut round = RoundResult::new(1);
        for (key, name, text) in entries {
            round = round.with_outcome(*key, *name, InvocationOutcome::success(*text));
        }
        Transcript::new().advance(&round)
    }

    #[test]
    fn test_initial_query_format() {
        let prompt = PromptTemplate::for_round(1, "What is Rust?", &Transcript::new());
        assert_eq!(
            prompt,
            "You are participating in a multi-AI consultation. Answer the following question \
             thoughtfully and concisely (2-3 paragraphs).\n\nQuestion: What is Rust?"
        );
    }

    #[test]
    fn test_round_one_ignores_transcript() {
        let t = transcript(&[("a", "A", "a1")]);
        let prompt = PromptTemplate::for_round(1, "Q", &t);
        assert!(!prompt.contains("a1"));
        assert!(!prompt.contains("Previous responses"));
    }

    #[test]
    fn test_format_transcript_blocks() {
        let t = transcript(&[("a", "Alpha", "one"), ("b", "Beta", "two")]);
        assert_eq!(
            PromptTemplate::format_transcript(&t),
            "--- Alpha ---\none\n\n--- Beta ---\ntwo\n"
        );
    }

    #[test]
    fn test_format_transcript_skips_empty_text() {
        let t = transcript(&[("a", "Alpha", ""), ("b", "Beta", "two")]);
        assert_eq!(PromptTemplate::format_transcript(&t), "--- Beta ---\ntwo\n");
    }

    #[test]
    fn test_follow_up_embeds_transcript() {
        let t = transcript(&[("a", "A", "a1")]);
        let prompt = PromptTemplate::for_round(2, "Q", &t);

        assert!(prompt.starts_with(
            "You are participating in a multi-AI consultation. Here is the question and \
             responses from the previous round:\n\nQuestion: Q\n\nPrevious responses:\n"
        ));
        assert!(prompt.contains("--- A ---\na1\n"));
        assert!(prompt.ends_with(
            "\n\nConsider these perspectives. Do you agree, disagree, or have additional \
             insights? Be concise (2-3 paragraphs)."
        ));
    }

    #[test]
    fn test_follow_up_with_empty_transcript() {
        let prompt = PromptTemplate::for_round(3, "Q", &Transcript::new());
        assert!(prompt.contains("Previous responses:\n\n\nConsider"));
    }
}
