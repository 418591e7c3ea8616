use regex::Regex;
use rust_stemmers::Stemmer;

use crate::error::{Error, Result};

/// Unit kind the n-grams are built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramKind {
    /// Part-of-speech tags taken from `word_TAG` tokens.
    Pos,
    /// Stemmed, lowercased words.
    Word,
    /// Function words; all other words collapse to a placeholder.
    FunctionWord,
    /// Individual characters, whitespace runs collapsed to `_`.
    Char,
}

impl NgramKind {
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "POS" => Ok(Self::Pos),
            "Word" => Ok(Self::Word),
            "FW" => Ok(Self::FunctionWord),
            "Char" => Ok(Self::Char),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

/// Placeholder emitted for non-function words so function-word n-grams keep
/// their positional structure.
const CONTENT_WORD: &str = "<w>";

const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their", "of",
    "in", "on", "at", "by", "for", "with", "from", "to", "into", "over", "under", "about", "and",
    "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "as", "than", "be",
    "is", "are", "was", "were", "been", "am", "do", "does", "did", "have", "has", "had", "will",
    "would", "shall", "should", "can", "could", "may", "might", "must", "not", "no", "there",
    "which", "who", "whom", "whose", "what", "when", "where", "how", "why",
];

pub struct NgramTokenizer {
    n: usize,
    kind: NgramKind,
    word_regex: Regex,
    stemmer: Stemmer,
}

impl NgramTokenizer {
    pub fn new(n: usize, kind: NgramKind) -> Result<Self> {
        Ok(Self {
            n,
            kind,
            word_regex: Regex::new(r"\b\w+\b")
                .map_err(|e| Error::Parse(format!("Failed to compile regex: {e}")))?,
            stemmer: Stemmer::create(rust_stemmers::Algorithm::English),
        })
    }

    /// Emits every adjacent n-gram of the document's unit stream. Word-like
    /// units are joined with single spaces, characters directly. A document
    /// shorter than n units yields nothing.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let units = self.units(text);

        if self.n <= 1 {
            return units;
        }

        let separator = if self.kind == NgramKind::Char { "" } else { " " };
        units
            .windows(self.n)
            .map(|gram| gram.join(separator))
            .collect()
    }

    fn units(&self, text: &str) -> Vec<String> {
        match self.kind {
            NgramKind::Word => self
                .word_regex
                .find_iter(text)
                .map(|token| self.stemmer.stem(token.as_str()).to_lowercase())
                .collect(),
            NgramKind::Pos => text
                .split_whitespace()
                .map(|token| {
                    token
                        .rsplit_once('_')
                        .map_or(token, |(_, tag)| tag)
                        .to_string()
                })
                .collect(),
            NgramKind::FunctionWord => self
                .word_regex
                .find_iter(text)
                .map(|token| {
                    let word = token.as_str().to_lowercase();
                    if FUNCTION_WORDS.contains(&word.as_str()) {
                        word
                    } else {
                        CONTENT_WORD.to_string()
                    }
                })
                .collect(),
            NgramKind::Char => text
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
                .chars()
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_units_are_stemmed_and_lowercased() {
        let tokenizer = NgramTokenizer::new(1, NgramKind::Word).expect("Failed to build tokenizer");

        assert_eq!(tokenizer.extract("Running Dogs"), vec!["run", "dog"]);
    }

    #[test]
    fn word_bigrams_join_adjacent_units() {
        let tokenizer = NgramTokenizer::new(2, NgramKind::Word).expect("Failed to build tokenizer");

        assert_eq!(
            tokenizer.extract("the cat sat"),
            vec!["the cat", "cat sat"]
        );
    }

    #[test]
    fn document_shorter_than_n_yields_nothing() {
        let tokenizer = NgramTokenizer::new(3, NgramKind::Word).expect("Failed to build tokenizer");

        assert!(tokenizer.extract("two words").is_empty());
    }

    #[test]
    fn pos_units_keep_only_the_tag() {
        let tokenizer = NgramTokenizer::new(1, NgramKind::Pos).expect("Failed to build tokenizer");

        assert_eq!(
            tokenizer.extract("the_DT dog_NN ran_VBD"),
            vec!["DT", "NN", "VBD"]
        );
    }

    #[test]
    fn untagged_pos_token_passes_through_whole() {
        let tokenizer = NgramTokenizer::new(1, NgramKind::Pos).expect("Failed to build tokenizer");

        assert_eq!(tokenizer.extract("plain"), vec!["plain"]);
    }

    #[test]
    fn function_words_mask_content_words() {
        let tokenizer =
            NgramTokenizer::new(1, NgramKind::FunctionWord).expect("Failed to build tokenizer");

        assert_eq!(
            tokenizer.extract("The dog ran into the garden"),
            vec!["the", "<w>", "<w>", "into", "the", "<w>"]
        );
    }

    #[test]
    fn char_units_collapse_whitespace() {
        let tokenizer = NgramTokenizer::new(2, NgramKind::Char).expect("Failed to build tokenizer");

        assert_eq!(tokenizer.extract("ab  cd"), vec!["ab", "b_", "_c", "cd"]);
    }

    #[test]
    fn ngram_count_matches_window_count() {
        let tokenizer = NgramTokenizer::new(2, NgramKind::Word).expect("Failed to build tokenizer");

        let grams = tokenizer.extract("one two three four");
        assert_eq!(grams.len(), 3);
    }
}
