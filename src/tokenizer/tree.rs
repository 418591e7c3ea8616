use crate::error::{Error, Result};

/// Feature kind extracted from each parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    /// Production rules: a node's label plus its children's labels.
    Subtree,
    /// Height of the subtree rooted at each node.
    Depth,
    /// Branching factor of each internal node.
    Branch,
    /// Every node label.
    Tag,
    /// Bracket structure with all labels erased.
    Skeleton,
    /// Bracket structure keeping only the subtree's root label.
    SemiSkeleton,
}

impl TreeKind {
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "Subtree" => Ok(Self::Subtree),
            "Depth" => Ok(Self::Depth),
            "Branch" => Ok(Self::Branch),
            "Tag" => Ok(Self::Tag),
            "Skel" => Ok(Self::Skeleton),
            "Semi" => Ok(Self::SemiSkeleton),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::height)
            .max()
            .unwrap_or_default()
    }
}

/// Extracts features from documents holding one parenthesized parse tree
/// per line, e.g. `(S (NP (DT the) (NN dog)) (VP (VBD ran)))`.
#[derive(Debug)]
pub struct TreeTokenizer {
    kind: TreeKind,
}

impl TreeTokenizer {
    pub fn new(kind: TreeKind) -> Self {
        Self { kind }
    }

    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        let mut features = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let tree = parse(line)
                .map_err(|message| Error::Parse(format!("line {}: {message}", line_no + 1)))?;
            self.collect(&tree, &mut features);
        }

        Ok(features)
    }

    fn collect(&self, node: &Node, out: &mut Vec<String>) {
        match self.kind {
            TreeKind::Tag => out.push(node.label.clone()),
            TreeKind::Depth => out.push(node.height().to_string()),
            TreeKind::Subtree => {
                if !node.is_leaf() {
                    let children: Vec<&str> =
                        node.children.iter().map(|c| c.label.as_str()).collect();
                    out.push(format!("{} -> {}", node.label, children.join(" ")));
                }
            }
            TreeKind::Branch => {
                if !node.is_leaf() {
                    out.push(node.children.len().to_string());
                }
            }
            TreeKind::Skeleton => out.push(skeleton(node)),
            TreeKind::SemiSkeleton => {
                let below: String = node.children.iter().map(skeleton).collect();
                out.push(format!("({}{below})", node.label));
            }
        }

        for child in &node.children {
            self.collect(child, out);
        }
    }
}

fn skeleton(node: &Node) -> String {
    let inner: String = node.children.iter().map(skeleton).collect();
    format!("({inner})")
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Atom(String),
}

fn lex(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut atom = String::new();

    for c in line.chars() {
        match c {
            '(' | ')' => {
                if !atom.is_empty() {
                    tokens.push(Token::Atom(std::mem::take(&mut atom)));
                }
                tokens.push(if c == '(' { Token::Open } else { Token::Close });
            }
            c if c.is_whitespace() => {
                if !atom.is_empty() {
                    tokens.push(Token::Atom(std::mem::take(&mut atom)));
                }
            }
            c => atom.push(c),
        }
    }

    if !atom.is_empty() {
        tokens.push(Token::Atom(atom));
    }

    tokens
}

fn parse(line: &str) -> core::result::Result<Node, String> {
    let tokens = lex(line);
    let mut pos = 0;

    let node = parse_node(&tokens, &mut pos)?;
    if pos != tokens.len() {
        return Err("trailing input after tree".to_string());
    }

    Ok(node)
}

fn parse_node(tokens: &[Token], pos: &mut usize) -> core::result::Result<Node, String> {
    match tokens.get(*pos) {
        Some(Token::Atom(label)) => {
            *pos += 1;
            Ok(Node {
                label: label.clone(),
                children: Vec::new(),
            })
        }
        Some(Token::Open) => {
            *pos += 1;

            let Some(Token::Atom(label)) = tokens.get(*pos) else {
                return Err("expected node label after '('".to_string());
            };
            let label = label.clone();
            *pos += 1;

            let mut children = Vec::new();
            loop {
                match tokens.get(*pos) {
                    Some(Token::Close) => {
                        *pos += 1;
                        break;
                    }
                    Some(_) => children.push(parse_node(tokens, pos)?),
                    None => return Err("unbalanced parentheses: missing ')'".to_string()),
                }
            }

            Ok(Node { label, children })
        }
        Some(Token::Close) => Err("unexpected ')'".to_string()),
        None => Err("empty tree".to_string()),
    }
}
