//! Ordered table of known Google URL shapes.

use crate::error::{GooError, Result};
use crate::models::{Category, CategorySet, PatternRule, Template, ID_SLOT};

/// Direct download endpoint shared by Drive files and Colab notebooks.
const USERCONTENT_DOWNLOAD: &str = "https://drive.usercontent.google.com/download?id={id}";

/// Built-in rules in declaration order.
static BUILTIN_RULES: &[PatternRule] = &[
    PatternRule::pass_through("colab.research.google.com/github/", Category::Default),
    PatternRule::pass_through("drive.google.com/drive/folders/", Category::Folder),
    PatternRule::rewrite("drive.google.com/file/d/", Category::Default, USERCONTENT_DOWNLOAD),
    PatternRule::rewrite(
        "docs.google.com/document/d/",
        Category::Document,
        "https://docs.google.com/document/export?format=docx&id={id}",
    ),
    PatternRule::rewrite(
        "docs.google.com/presentation/d/",
        Category::Document,
        "https://docs.google.com/presentation/export?format=pptx&id={id}",
    ),
    PatternRule::rewrite(
        "docs.google.com/spreadsheets/d/",
        Category::Document,
        "https://docs.google.com/spreadsheets/d/{id}/export?format=xlsx",
    ),
    PatternRule::rewrite(
        "colab.research.google.com/drive/",
        Category::Default,
        USERCONTENT_DOWNLOAD,
    ),
];

/// Immutable collection of pattern rules.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    /// Registry holding the known Google Drive, Docs and Colab shapes.
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES.to_vec(),
        }
    }

    /// Create a registry from custom rules, keeping their order.
    pub fn new(rules: Vec<PatternRule>) -> Result<Self> {
        for rule in &rules {
            validate(rule)?;
        }
        Ok(Self { rules })
    }

    /// Rules whose category is in `active`, in declaration order.
    pub fn rules_for<'a>(
        &'a self,
        active: &'a CategorySet,
    ) -> impl Iterator<Item = &'a PatternRule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| active.contains(rule.category))
    }

    /// Owned copy of the active rules, handy to pass into the resolver.
    pub fn active_rules(&self, active: &CategorySet) -> Vec<PatternRule> {
        self.rules_for(active).copied().collect()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(rule: &PatternRule) -> Result<()> {
    if rule.marker.is_empty() {
        return Err(GooError::EmptyMarker);
    }
    if let Template::Url(template) = rule.template {
        if template.matches(ID_SLOT).count() != 1 {
            return Err(GooError::InvalidTemplate(template.to_string()));
        }
    }
    Ok(())
}
