use std::collections::HashMap;

use crate::{
    config::Config,
    corpus,
    error::{Error, Result},
    model::{LanguageModel, SmoothedModel},
    ranker::{self, FeatureScore},
    tokenizer::Tokenizer,
};

/// Runs the full pass: group the corpus by class, count terms into one
/// language model per class, smooth each model, then rank the configured
/// class pair. Progress and per-class token totals go to stderr; phases run
/// strictly in order, each class's model fully built before the next phase
/// reads it.
pub fn run(config: &Config) -> Result<Vec<FeatureScore>> {
    let docs = corpus::load(&config.prefix)?;

    for class in [&config.numerator, &config.denominator] {
        if !docs.contains_key(class.as_str()) {
            return Err(Error::UnknownClass(class.clone()));
        }
    }

    let mut tokenizer = Tokenizer::from_method(&config.method)?;

    eprintln!("Tokenizing...");
    let mut language_models: HashMap<&str, LanguageModel> = HashMap::new();
    for (class, class_docs) in &docs {
        let model = language_models.entry(class).or_default();

        for doc in class_docs {
            let doc_counts = tokenizer.tokenize(&doc.read()?)?;
            model.add_document(&doc_counts);
        }
    }

    eprintln!("Smoothing...");
    let mut smoothed_models: HashMap<&str, SmoothedModel> = HashMap::new();
    for (class, model) in &language_models {
        eprintln!(" {} total tokens in class {class}", model.total());
        smoothed_models.insert(class, model.smooth(class)?);
    }

    eprintln!("Comparing features between classes...");
    eprintln!(
        "calculating p(f|{})/p(f|{})...",
        config.numerator, config.denominator
    );

    ranker::rank(
        &smoothed_models[config.numerator.as_str()],
        &smoothed_models[config.denominator.as_str()],
        tokenizer.vocabulary(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Method;
    use crate::tokenizer::NgramKind;
    use std::{fs, path::Path};

    fn write_doc(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("Failed to get parent dir"))
            .expect("Failed to create class dir");
        fs::write(path, text).expect("Failed to write document");
    }

    fn word_unigram_config(root: &Path, numerator: &str, denominator: &str) -> Config {
        Config {
            prefix: root.to_path_buf(),
            method: Method::Ngram {
                n: 1,
                kind: NgramKind::Word,
            },
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        }
    }

    #[test]
    fn ranks_the_configured_class_pair() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_doc(dir.path(), "a/doc.txt", "shared shared shared distinct");
        write_doc(dir.path(), "b/doc.txt", "shared other other");

        let config = word_unigram_config(dir.path(), "a", "b");
        let features = run(&config).expect("Failed to run pipeline");

        assert_eq!(features.len(), 3);
        // The a-only term leads, the b-only term trails.
        assert_eq!(features[0].label, "distinct");
        assert_eq!(features[2].label, "other");
        assert!(features[0].ratio > 1.0);
        assert!(features[2].ratio < 1.0);
    }

    #[test]
    fn two_runs_produce_identical_feature_lists() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_doc(dir.path(), "a/one.txt", "x y z x");
        write_doc(dir.path(), "a/two.txt", "y q");
        write_doc(dir.path(), "b/one.txt", "z z w");

        let config = word_unigram_config(dir.path(), "a", "b");

        let first = run(&config).expect("Failed to run pipeline");
        let second = run(&config).expect("Failed to run pipeline");

        let first: Vec<(String, f64)> = first.into_iter().map(|f| (f.label, f.ratio)).collect();
        let second: Vec<(String, f64)> = second.into_iter().map(|f| (f.label, f.ratio)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_configured_class_is_fatal() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_doc(dir.path(), "a/doc.txt", "x");

        let config = word_unigram_config(dir.path(), "a", "nope");

        assert!(matches!(
            run(&config),
            Err(Error::UnknownClass(class)) if class == "nope"
        ));
    }

    #[test]
    fn class_of_empty_documents_is_degenerate() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_doc(dir.path(), "a/doc.txt", "x y");
        write_doc(dir.path(), "b/doc.txt", "");

        let config = word_unigram_config(dir.path(), "a", "b");

        assert!(matches!(
            run(&config),
            Err(Error::DegenerateModel { class }) if class == "b"
        ));
    }

    #[test]
    fn works_from_an_index_file_corpus() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_doc(dir.path(), "a/doc.txt", "x x");
        write_doc(dir.path(), "b/doc.txt", "y");
        write_doc(dir.path(), "full-corpus.txt", "a/doc.txt\nb/doc.txt\n");

        let config = word_unigram_config(dir.path(), "a", "b");
        let features = run(&config).expect("Failed to run pipeline");

        assert_eq!(features.len(), 2);
    }
}
