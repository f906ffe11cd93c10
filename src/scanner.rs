//! Per-document scanning: read a file, extract anchors, resolve their hrefs.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{GooError, Result};
use crate::html::anchor_hrefs;
use crate::models::{CategorySet, PatternRule, ResolvedLink};
use crate::registry::PatternRegistry;
use crate::resolver::resolve_rule;

/// Scans HTML documents with a fixed set of active rules.
#[derive(Debug, Clone)]
pub struct LinkScanner {
    rules: Vec<PatternRule>,
}

impl LinkScanner {
    /// Create a scanner for the rules of `registry` enabled by `active`.
    ///
    /// # Arguments
    /// * `registry` - The pattern rules to match against
    /// * `active` - Categories enabled for this run
    pub fn new(registry: &PatternRegistry, active: &CategorySet) -> Self {
        Self {
            rules: registry.active_rules(active),
        }
    }

    /// Get the active rules.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Resolve all anchors of an HTML document.
    ///
    /// Links are grouped by rule in registry order; within a rule they follow
    /// anchor order.
    pub fn scan_html(&self, text: &str) -> Vec<ResolvedLink> {
        let hrefs = anchor_hrefs(text);
        trace!(anchors = hrefs.len(), "parsed document");

        let links: Vec<ResolvedLink> = self
            .rules
            .iter()
            .flat_map(|rule| {
                hrefs.iter().filter_map(move |href| {
                    href.as_deref()
                        .filter(|h| !h.is_empty())
                        .and_then(|h| resolve_rule(h, rule))
                })
            })
            .collect();

        for link in &links {
            trace!(category = %link.category, url = %link.url, "resolved link");
        }
        links
    }

    /// Read `path` and resolve all anchors in it.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<ResolvedLink>> {
        let bytes = std::fs::read(path).map_err(|source| GooError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let links = self.scan_html(&text);
        debug!(path = %path.display(), links = links.len(), "scanned file");
        Ok(links)
    }
}
