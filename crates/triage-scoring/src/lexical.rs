use std::collections::HashSet;

use triage_core::scoring::Scorer;

/// Length/diversity/relevance profile over the response text.
///
/// Three capped, non-negative components (0.4 length + 0.4 diversity +
/// 0.2 relevance), rounded to two decimals. An empty response scores 0.
pub struct LexicalProfile;

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl Scorer for LexicalProfile {
    fn name(&self) -> &'static str {
        "lexical_profile"
    }

    fn score(&self, prompt: &str, response: &str) -> f64 {
        let length = (response.chars().count() as f64 / 1000.0).min(1.0) * 0.4;

        let tokens = tokenize(response);
        let diversity = if tokens.is_empty() {
            0.0
        } else {
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            distinct.len() as f64 / tokens.len() as f64 * 0.4
        };

        let prompt_words: HashSet<String> = tokenize(prompt)
            .into_iter()
            .filter(|w| w.chars().count() > 3)
            .collect();
        let relevance = if prompt_words.is_empty() {
            0.0
        } else {
            let haystack = response.to_lowercase();
            let matched = prompt_words
                .iter()
                .filter(|w| haystack.contains(w.as_str()))
                .count();
            matched as f64 / prompt_words.len() as f64 * 0.2
        };

        ((length + diversity + relevance) * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_scores_zero() {
        assert_eq!(LexicalProfile.score("fever symptoms", ""), 0.0);
        assert_eq!(LexicalProfile.score("", ""), 0.0);
    }

    #[test]
    fn worked_example_rounds_to_058() {
        // 9 tokens, 8 distinct; both prompt words present in the response.
        let score = LexicalProfile.score(
            "fever symptoms",
            "You may have a fever. Fever symptoms include chills.",
        );
        assert_eq!(score, 0.58);
    }

    #[test]
    fn punctuation_only_response_has_zero_diversity() {
        // No tokens at all, so only the length component remains.
        let score = LexicalProfile.score("", "???");
        assert_eq!(score, 0.0);

        let score = LexicalProfile.score("", "?!. ,;:");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn all_unique_tokens_attain_full_diversity() {
        // 5 chars of response keep the length component below rounding
        // visibility only if we account for it explicitly.
        let response = "one two";
        let tokens = tokenize(response);
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        assert_eq!(tokens.len(), distinct.len());

        // length = 7/1000 * 0.4 = 0.0028, diversity = 0.4, relevance = 0
        let score = LexicalProfile.score("", response);
        assert_eq!(score, 0.40);
    }

    #[test]
    fn repeated_tokens_reduce_diversity() {
        let unique = LexicalProfile.score("", "alpha beta gamma delta");
        let repeated = LexicalProfile.score("", "alpha alpha alpha alpha");
        assert!(repeated < unique);
    }

    #[test]
    fn relevance_is_zero_without_long_prompt_words() {
        // No prompt token longer than 3 chars.
        let with_short_prompt = LexicalProfile.score("a an the is", "a an the is mentioned here");
        let with_empty_prompt = LexicalProfile.score("", "a an the is mentioned here");
        assert_eq!(with_short_prompt, with_empty_prompt);
    }

    #[test]
    fn relevance_matches_words_as_substrings() {
        // "fever" appears inside "feverish".
        let score_match = LexicalProfile.score("fever", "feeling feverish today");
        let score_miss = LexicalProfile.score("chills", "feeling feverish today");
        assert!(score_match > score_miss);
    }

    #[test]
    fn bounded_and_deterministic() {
        let long = "word ".repeat(2000);
        let cases: [(&str, &str); 4] = [
            ("fever symptoms", &long),
            ("", "x"),
            ("???", "???"),
            ("fièvre traitement", "la fièvre demande un traitement adapté"),
        ];
        for (prompt, response) in cases {
            let a = LexicalProfile.score(prompt, response);
            let b = LexicalProfile.score(prompt, response);
            assert!(a.is_finite());
            assert!((0.0..=1.0).contains(&a));
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
