use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::Result;

/// Optional index file listing one corpus-relative document path per line.
const CORPUS_INDEX: &str = "full-corpus.txt";

/// Handle to one corpus document. The text is read lazily so that only one
/// document is in memory at a time while counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

pub type ClassDocs = HashMap<String, Vec<Document>>;

/// Groups the corpus under `root` into documents per class label, where the
/// class label is the part of each document's relative path before the first
/// separator. Paths directly under the root carry no class and are skipped.
pub fn load(root: &Path) -> Result<ClassDocs> {
    let index = root.join(CORPUS_INDEX);

    if index.is_file() {
        load_from_index(root, &index)
    } else {
        load_from_walk(root)
    }
}

fn load_from_index(root: &Path, index: &Path) -> Result<ClassDocs> {
    let mut docs = ClassDocs::new();

    for line in BufReader::new(File::open(index)?).lines() {
        let line = line?;
        let rel = line.trim();
        if rel.is_empty() {
            continue;
        }

        match rel.split_once('/') {
            Some((class, _)) => docs
                .entry(class.to_string())
                .or_default()
                .push(Document::new(root.join(rel))),
            None => eprintln!("Skipping '{rel}': no class directory in path"),
        }
    }

    Ok(docs)
}

fn load_from_walk(root: &Path) -> Result<ClassDocs> {
    let mut docs = ClassDocs::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };

        let mut components = rel.components();
        let class = components
            .next()
            .map(|c| c.as_os_str().to_string_lossy().into_owned());

        // A file straight under the root has a bare filename as its only
        // component, leaving nothing to act as the class label.
        if components.clone().next().is_none() {
            eprintln!("Skipping '{}': no class directory in path", rel.display());
            continue;
        }

        if let Some(class) = class {
            docs.entry(class)
                .or_default()
                .push(Document::new(entry.path().to_path_buf()));
        }
    }

    Ok(docs)
}
