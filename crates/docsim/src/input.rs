use anyhow::{Context, Result};
use docsim_common::Document;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Where a document's raw text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Read the whole file
    FromFile(PathBuf),
    /// Ask for one line on stdin
    FromPrompt(Document),
}

impl TextSource {
    /// File when a path was given, prompt otherwise
    pub fn from_arg(path: Option<PathBuf>, document: Document) -> Self {
        match path {
            Some(path) => Self::FromFile(path),
            None => Self::FromPrompt(document),
        }
    }

    /// Raw bytes; decoding is left to the similarity pipeline
    pub fn read(&self) -> Result<Vec<u8>> {
        let stdin = std::io::stdin();
        let mut stderr = std::io::stderr();
        self.read_with(&mut stdin.lock(), &mut stderr)
    }

    /// Read using explicit prompt streams
    pub fn read_with<R: BufRead, W: Write>(&self, input: &mut R, prompt: &mut W) -> Result<Vec<u8>> {
        match self {
            Self::FromFile(path) => {
                std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
            }
            Self::FromPrompt(document) => {
                let label = match document {
                    Document::First => "Document 1: ",
                    Document::Second => "Document 2: ",
                };
                write!(prompt, "{}", label)?;
                prompt.flush()?;

                let mut line = Vec::new();
                input
                    .read_until(b'\n', &mut line)
                    .with_context(|| format!("Failed to read {} from stdin", document))?;

                while matches!(line.last(), Some(b'\n' | b'\r')) {
                    line.pop();
                }

                Ok(line)
            }
        }
    }
}
