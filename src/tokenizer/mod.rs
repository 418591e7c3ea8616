mod ngram;
mod tree;

pub use ngram::{NgramKind, NgramTokenizer};
pub use tree::{TreeKind, TreeTokenizer};

use std::collections::HashMap;

use crate::{config::Method, error::Result};

/// Opaque vocabulary term identifier. Stable for the lifetime of one
/// tokenizer; carries no meaning beyond identity.
pub type TermId = u64;

/// Term counts for a single document, produced once by tokenization.
pub type DocumentCounts = HashMap<TermId, u32>;

/// Interns term strings to stable ids and resolves them back to labels.
#[derive(Debug, Default)]
pub struct Vocabulary {
    ids: HashMap<String, TermId>,
    labels: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }

        let id = self.labels.len() as TermId;
        self.ids.insert(term.to_string(), id);
        self.labels.push(term.to_string());
        id
    }

    pub fn label(&self, id: TermId) -> Option<&str> {
        self.labels.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

enum Strategy {
    Ngram(NgramTokenizer),
    Tree(TreeTokenizer),
}

/// Turns raw document text into term counts over a shared vocabulary. The
/// unit strategy is fixed at construction from the configured method; one
/// instance is owned by the pipeline for the whole run so term ids stay
/// comparable across documents and classes.
pub struct Tokenizer {
    vocabulary: Vocabulary,
    strategy: Strategy,
}

impl Tokenizer {
    pub fn from_method(method: &Method) -> Result<Self> {
        let strategy = match *method {
            Method::Ngram { n, kind } => Strategy::Ngram(NgramTokenizer::new(n, kind)?),
            Method::Tree { kind } => Strategy::Tree(TreeTokenizer::new(kind)),
        };

        Ok(Self {
            vocabulary: Vocabulary::new(),
            strategy,
        })
    }

    pub fn tokenize(&mut self, text: &str) -> Result<DocumentCounts> {
        let units = match &self.strategy {
            Strategy::Ngram(tokenizer) => tokenizer.extract(text),
            Strategy::Tree(tokenizer) => tokenizer.extract(text)?,
        };

        let mut counts = DocumentCounts::new();
        for unit in units {
            let count = counts.entry(self.vocabulary.intern(&unit)).or_insert(0);
            *count += 1;
        }

        Ok(counts)
    }

    pub fn label(&self, id: TermId) -> Option<&str> {
        self.vocabulary.label(id)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
