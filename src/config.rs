use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    tokenizer::{NgramKind, TreeKind},
};

/// Tokenization method selected by the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Ngram { n: usize, kind: NgramKind },
    Tree { kind: TreeKind },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Corpus root directory.
    pub prefix: PathBuf,
    pub method: Method,
    /// Class whose probabilities go on top of the ratio.
    pub numerator: String,
    /// Class whose probabilities go underneath.
    pub denominator: String,
}

impl Config {
    pub fn read(path: &Path) -> Result<Self> {
        let raw: HashMap<String, String> =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;

        Self::from_map(&raw)
    }

    pub fn from_map(raw: &HashMap<String, String>) -> Result<Self> {
        let method = match require(raw, "method")? {
            "ngram" => {
                let n = require(raw, "ngram")?;
                let n: usize = n
                    .parse()
                    .map_err(|_| Error::Config(format!("'ngram' is not an integer: {n}")))?;
                if n == 0 {
                    return Err(Error::Config("'ngram' must be at least 1".to_string()));
                }

                Method::Ngram {
                    n,
                    kind: NgramKind::from_tag(require(raw, "ngramOpt")?)?,
                }
            }
            "tree" => Method::Tree {
                kind: TreeKind::from_tag(require(raw, "treeOpt")?)?,
            },
            other => return Err(Error::UnknownMethod(other.to_string())),
        };

        Ok(Self {
            prefix: PathBuf::from(require(raw, "prefix")?),
            method,
            numerator: require(raw, "numerator")?.to_string(),
            denominator: require(raw, "denominator")?.to_string(),
        })
    }
}

fn require<'a>(raw: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    raw.get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::Config(format!("missing required key '{key}'")))
}
