//! Runs of consecutive values in one message (`"7 8 9"`).

use tally_lexicon::LanguageSet;

use crate::outcome::{ParseOutcome, SequenceOutcome};
use crate::tags::TypeTags;
use crate::Interpreter;

impl Interpreter {
    /// Read whitespace-separated values `expected`, `expected + 1`, ...
    ///
    /// Each value is the shortest run of tokens (up to the phrase limit)
    /// whose reading equals the next expected value. Stops at the first
    /// miss or after `max_sequence` values.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_sequence(&self, text: &str, expected: i64) -> SequenceOutcome {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut values = Vec::new();
        let mut type_tags = TypeTags::empty();
        let mut languages = LanguageSet::empty();
        let mut draws = Vec::new();
        let mut last_method = None;

        let mut i = 0;
        while i < tokens.len() && values.len() < self.config.max_sequence {
            let Some(want) = i64::try_from(values.len())
                .ok()
                .and_then(|offset| expected.checked_add(offset))
            else {
                break;
            };
            let Some((width, outcome)) = self.read_next(&tokens[i..], want) else {
                tracing::debug!(expected = want, token = tokens[i], "run ended");
                break;
            };
            i += width;
            values.push(want);
            type_tags |= outcome.type_tags;
            languages |= outcome.languages;
            draws.extend(outcome.random_draws.into_iter().flatten());
            last_method = Some(outcome.method);
        }

        let method = match (values.len(), last_method) {
            (0, _) | (_, None) => "no_consecutive_match".to_owned(),
            (1, Some(method)) => method,
            (_, Some(_)) => {
                type_tags |= TypeTags::MULTIPLE;
                "multiple_consecutive".to_owned()
            }
        };

        SequenceOutcome {
            count: values.len(),
            values,
            type_tags,
            method,
            random_draws: (!draws.is_empty()).then_some(draws),
            languages,
        }
    }

    /// The shortest prefix of `tokens` that reads as `expected`.
    fn read_next(&self, tokens: &[&str], expected: i64) -> Option<(usize, ParseOutcome)> {
        let longest = self.config.max_phrase_words.min(tokens.len());
        (1..=longest).find_map(|width| {
            let outcome = self.parse_single(&tokens[..width].join(" "), expected);
            outcome.is_match(expected).then_some((width, outcome))
        })
    }
}
