//! Documentation path normalization
//!
//! Provider metadata refers to guides with absolute, repository-rooted paths
//! such as `/docs/apache-airflow-providers-amazon/operators/lambda.rst`.
//! Cross references need either a `provider:page` short form (for pages
//! living in a provider's docs tree) or a page path relative to the main
//! documentation directory, both without the file extension.

use regex::Regex;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Rewrites `/docs/...rst` paths into cross-reference targets
#[derive(Debug, Clone)]
pub struct DocsPathNormalizer {
    prefix: String,
    suffix: String,
    docs_dir: Vec<String>,
    provider_pattern: Regex,
}

impl DocsPathNormalizer {
    /// Build a normalizer from explicit rules.
    ///
    /// * `prefix` - required leading text, e.g. `/docs/`
    /// * `suffix` - required file extension, e.g. `.rst`
    /// * `provider_prefix` - leading text of provider doc trees, e.g.
    ///   `/docs/apache-airflow-providers-`
    /// * `docs_dir` - documentation directory relative to the repository root
    pub fn new(prefix: &str, suffix: &str, provider_prefix: &str, docs_dir: &str) -> Result<Self> {
        let provider_pattern = Regex::new(&format!(
            "^{}([^/]+)/(.+)$",
            regex::escape(provider_prefix)
        ))
        .map_err(|e| Error::invalid_config(format!("Invalid provider docs prefix: {}", e)))?;

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            docs_dir: split_components(docs_dir),
            provider_pattern,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.docs_prefix,
            &settings.docs_suffix,
            &settings.provider_docs_prefix,
            settings.docs_dir.as_str(),
        )
    }

    /// Normalize one documentation path
    pub fn normalize(&self, filepath: &str) -> Result<String> {
        if !filepath.starts_with(&self.prefix) {
            return Err(Error::DocsPathPrefix {
                path: filepath.to_string(),
                prefix: self.prefix.clone(),
            });
        }
        if !filepath.ends_with(&self.suffix) {
            return Err(Error::DocsPathSuffix {
                path: filepath.to_string(),
                suffix: self.suffix.clone(),
            });
        }

        let rewritten = match self.provider_pattern.captures(filepath) {
            Some(caps) => format!("{}:{}", &caps[1], &caps[2]),
            None => self.relative_to_docs_dir(filepath),
        };

        Ok(rewritten
            .strip_suffix(self.suffix.as_str())
            .unwrap_or(&rewritten)
            .to_string())
    }

    /// Normalize every path in a list, failing on the first invalid one
    pub fn normalize_all(&self, paths: &[String]) -> Result<Vec<String>> {
        paths.iter().map(|p| self.normalize(p)).collect()
    }

    /// Resolve the path against the repository root and express it relative
    /// to the documentation directory. Purely lexical.
    fn relative_to_docs_dir(&self, filepath: &str) -> String {
        let target = resolve_lexically(filepath.trim_start_matches('/'));

        let common = self
            .docs_dir
            .iter()
            .zip(target.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; self.docs_dir.len() - common];
        parts.extend(target[common..].iter().map(String::as_str));

        if parts.is_empty() {
            ".".to_string()
        } else {
            parts.join("/")
        }
    }
}

fn split_components(path: &str) -> Vec<String> {
    resolve_lexically(path.trim_matches('/'))
}

/// Collapse `.` and `..` components. Leading `..` that climb above the
/// root are kept.
fn resolve_lexically(path: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ => parts.push("..".to_string()),
            },
            other => parts.push(other.to_string()),
        }
    }
    parts
}
