//! Per-article JSON output
//!
//! Each article is written to its own pretty-printed JSON file named after
//! a slug of its title. Name collisions within a run get a numeric suffix;
//! articles with no usable title fall back to a hash of their URL.

use crate::article::Article;
use crate::OutputResult;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Maximum length of a slug-derived file stem
const MAX_SLUG_CHARS: usize = 100;

/// Writes articles as individual JSON files into a directory
pub struct JsonWriter {
    dir: PathBuf,
    used_stems: HashSet<String>,
}

impl JsonWriter {
    /// Creates the output directory (if needed) and a writer for it
    pub async fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir).await?;
        Ok(Self {
            dir: dir.to_path_buf(),
            used_stems: HashSet::new(),
        })
    }

    /// Writes one article, returning the path of the created file
    pub async fn write_article(&mut self, article: &Article) -> OutputResult<PathBuf> {
        let stem = self.unique_stem(article);
        let path = self.dir.join(format!("{}.json", stem));
        let json = serde_json::to_string_pretty(article)?;
        fs::write(&path, json).await?;
        tracing::debug!(path = %path.display(), "Wrote article JSON");
        Ok(path)
    }

    fn unique_stem(&mut self, article: &Article) -> String {
        let base = article
            .title
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| url_hash_stem(&article.url));

        let mut stem = base.clone();
        let mut suffix = 1;
        while self.used_stems.contains(&stem) {
            stem = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        self.used_stems.insert(stem.clone());
        stem
    }
}

/// Turns a title into a lowercase hyphenated file stem
fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut last_hyphen = true;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
        if slug.len() >= MAX_SLUG_CHARS {
            break;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Stable fallback stem derived from the article URL
fn url_hash_stem(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let hex: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();
    format!("article-{}", hex)
}
