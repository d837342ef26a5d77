use triage_core::scoring::Scorer;

/// Additive keyword/length heuristic.
///
/// Starts from a 0.5 base, rewards longer prompts, a question mark, known
/// domain vocabulary, and substantial responses; capped at 0.95. Empty
/// inputs score exactly 0.5.
pub struct KeywordHeuristic;

const MEDICAL_TERMS: [&str; 6] = [
    "symptômes",
    "diagnostic",
    "traitement",
    "maladie",
    "fièvre",
    "douleur",
];

impl Scorer for KeywordHeuristic {
    fn name(&self) -> &'static str {
        "keyword_heuristic"
    }

    fn score(&self, prompt: &str, response: &str) -> f64 {
        let mut score: f64 = 0.5;

        let prompt_len = prompt.chars().count();
        if prompt_len > 10 {
            score += 0.1;
        }
        if prompt_len > 20 {
            score += 0.1;
        }
        if prompt.contains('?') {
            score += 0.1;
        }

        // Each term counts once, however often it appears.
        let lowered = prompt.to_lowercase();
        for term in MEDICAL_TERMS {
            if lowered.contains(term) {
                score += 0.05;
            }
        }

        if response.chars().count() > 100 {
            score += 0.1;
        }

        score.min(0.95)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_score_the_base() {
        assert_eq!(KeywordHeuristic.score("", ""), 0.5);
    }

    #[test]
    fn full_house_hits_the_cap() {
        // len 24 (>10, >20), '?', "fièvre", long response:
        // 0.5 + 0.1 + 0.1 + 0.1 + 0.05 + 0.1, capped at 0.95.
        let response = "x".repeat(150);
        let score = KeywordHeuristic.score("Qu'est-ce que la fièvre?", &response);
        assert_eq!(score, 0.95);
    }

    #[test]
    fn keywords_match_case_insensitively_and_count_once() {
        let base = KeywordHeuristic.score("aaaaaaaaaaaa", "");
        let one = KeywordHeuristic.score("aaaaaaaaaaaa FIÈVRE", "");
        let twice = KeywordHeuristic.score("aaaaaaaaaaaa FIÈVRE fièvre", "");
        assert!((one - base - 0.05).abs() < 1e-9);
        // 21 chars crosses the >20 threshold too, so compare repeated vs single
        // at matched length instead.
        let single_padded = KeywordHeuristic.score("aaaaaaaaaaaa FIÈVRE aaaaaa", "");
        assert_eq!(twice, single_padded);
    }

    #[test]
    fn longer_prompts_never_score_lower() {
        let short = KeywordHeuristic.score("brève", "");
        let medium = KeywordHeuristic.score("une question porte", "");
        let long = KeywordHeuristic.score("une question un peu plus longue", "");
        assert!(medium >= short);
        assert!(long >= medium);
    }

    #[test]
    fn response_length_bonus_applies_past_100_chars() {
        let short = KeywordHeuristic.score("q", &"y".repeat(100));
        let long = KeywordHeuristic.score("q", &"y".repeat(101));
        assert!((long - short - 0.1).abs() < 1e-9);
    }

    #[test]
    fn total_over_arbitrary_input() {
        let long = "é".repeat(10_000);
        let cases: [(&str, &str); 4] = [
            ("", ""),
            ("???", "!!!"),
            ("\u{0}", "\u{10FFFF}"),
            (&long, "x"),
        ];
        for (prompt, response) in cases {
            let score = KeywordHeuristic.score(prompt, response);
            assert!(score.is_finite());
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = KeywordHeuristic.score("Quels symptômes de la maladie?", "une réponse");
        let b = KeywordHeuristic.score("Quels symptômes de la maladie?", "une réponse");
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
