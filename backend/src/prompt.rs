//! Maps an operation plus a request body to a single prompt string.
//!
//! Validation happens here, before any network call: a rejected request
//! never reaches the generation client.

use crate::error::ApiError;
use crate::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Summarize,
    CorrectGrammar,
    GetInformation,
    GenerateMail,
}

/// Pure function: the same operation and query always produce the same
/// prompt or the same rejection.
pub fn build_prompt(operation: Operation, query: &Query) -> Result<String, ApiError> {
    match operation {
        Operation::Summarize => {
            if query.text.is_empty() {
                return Err(ApiError::Validation(
                    "No text provided for summarization.".to_string(),
                ));
            }
            // The 70-word cap is an advisory hint inside the prompt; the
            // response is never inspected or truncated against it.
            Ok(format!(
                "Summarize the below given text into points not exceeding more than 70 words:\n```{}```",
                query.text
            ))
        }
        Operation::CorrectGrammar => {
            if query.text_to_be_improved.is_empty() {
                return Err(ApiError::Validation(
                    "No text provided for grammar improvement.".to_string(),
                ));
            }
            Ok(format!(
                "Improve the grammar of the below text:\n```{}```",
                query.text_to_be_improved
            ))
        }
        Operation::GetInformation => {
            if query.topic.is_empty() {
                return Err(ApiError::Validation(
                    "No topic provided for information retrieval.".to_string(),
                ));
            }
            Ok(format!(
                "Provide relevant and recent information about the below topic in brief:\n```{}```",
                query.topic
            ))
        }
        Operation::GenerateMail => {
            if query.recipient.is_empty() || query.subject.is_empty() || query.body.is_empty() {
                return Err(ApiError::Validation(
                    "Recipient, subject, and body must be provided.".to_string(),
                ));
            }
            Ok(format!(
                "Generate the below mail\nTo: {}\nSubject: {}\n\n{}",
                query.recipient, query.subject, query.body
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail_query() -> Query {
        Query {
            recipient: "team@example.com".to_string(),
            subject: "Standup".to_string(),
            body: "Moved to 10am.".to_string(),
            ..Query::default()
        }
    }

    #[test]
    fn test_summarize_embeds_text_and_word_cap() {
        let query = Query {
            text: "The quick brown fox jumps.".to_string(),
            ..Query::default()
        };
        let prompt = build_prompt(Operation::Summarize, &query).unwrap();

        assert!(prompt.contains("not exceeding more than 70 words"));
        assert!(prompt.contains("```The quick brown fox jumps.```"));
    }

    #[test]
    fn test_summarize_rejects_empty_text() {
        let err = build_prompt(Operation::Summarize, &Query::default()).unwrap_err();
        assert_eq!(err.to_string(), "No text provided for summarization.");
    }

    #[test]
    fn test_correct_grammar_fences_input() {
        let query = Query {
            text_to_be_improved: "me has cat".to_string(),
            ..Query::default()
        };
        let prompt = build_prompt(Operation::CorrectGrammar, &query).unwrap();

        assert!(prompt.starts_with("Improve the grammar"));
        assert!(prompt.contains("```me has cat```"));
    }

    #[test]
    fn test_correct_grammar_rejects_empty_text() {
        let err = build_prompt(Operation::CorrectGrammar, &Query::default()).unwrap_err();
        assert_eq!(err.to_string(), "No text provided for grammar improvement.");
    }

    #[test]
    fn test_get_information_embeds_topic() {
        let query = Query {
            topic: "rust async runtimes".to_string(),
            ..Query::default()
        };
        let prompt = build_prompt(Operation::GetInformation, &query).unwrap();

        assert!(prompt.contains("relevant and recent information"));
        assert!(prompt.contains("```rust async runtimes```"));
    }

    #[test]
    fn test_get_information_rejects_empty_topic() {
        let err = build_prompt(Operation::GetInformation, &Query::default()).unwrap_err();
        assert_eq!(err.to_string(), "No topic provided for information retrieval.");
    }

    #[test]
    fn test_generate_mail_lays_out_headers_and_body() {
        let prompt = build_prompt(Operation::GenerateMail, &mail_query()).unwrap();

        assert!(prompt.contains("To: team@example.com"));
        assert!(prompt.contains("Subject: Standup"));
        assert!(prompt.ends_with("Moved to 10am."));
    }

    #[test]
    fn test_generate_mail_requires_every_field() {
        let clears: [fn(&mut Query); 3] = [
            |q| q.recipient.clear(),
            |q| q.subject.clear(),
            |q| q.body.clear(),
        ];
        for clear in clears {
            let mut query = mail_query();
            clear(&mut query);
            let err = build_prompt(Operation::GenerateMail, &query).unwrap_err();
            assert_eq!(err.to_string(), "Recipient, subject, and body must be provided.");
        }
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let query = Query {
            text: "same input".to_string(),
            ..Query::default()
        };
        let first = build_prompt(Operation::Summarize, &query).unwrap();
        let second = build_prompt(Operation::Summarize, &query).unwrap();
        assert_eq!(first, second);
    }
}
