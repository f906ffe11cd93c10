//! Data models for pattern rules and resolved links.

use std::fmt;

use serde::Serialize;

/// Placeholder that a URL template substitutes with the extracted identifier.
pub const ID_SLOT: &str = "{id}";

/// Classification gating which rules are active for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Default,
    Document,
    Folder,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Default => "default",
            Category::Document => "document",
            Category::Folder => "folder",
        };
        f.write_str(name)
    }
}

/// The set of categories enabled for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySet {
    default: bool,
    document: bool,
    folder: bool,
}

impl CategorySet {
    /// An empty set; no rule is active.
    pub const fn empty() -> Self {
        Self {
            default: false,
            document: false,
            folder: false,
        }
    }

    /// Build the active set from the command-line switches.
    ///
    /// `folders_only` replaces the set with `{folder}` and takes precedence
    /// over `folders`, which adds `folder` to `{default, document}`.
    pub fn from_flags(folders: bool, folders_only: bool) -> Self {
        if folders_only {
            return Self::empty().with(Category::Folder);
        }
        let set = Self::default();
        if folders {
            set.with(Category::Folder)
        } else {
            set
        }
    }

    /// Return a copy of this set with `category` enabled.
    pub fn with(mut self, category: Category) -> Self {
        match category {
            Category::Default => self.default = true,
            Category::Document => self.document = true,
            Category::Folder => self.folder = true,
        }
        self
    }

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Default => self.default,
            Category::Document => self.document,
            Category::Folder => self.folder,
        }
    }
}

impl Default for CategorySet {
    /// `{default, document}`
    fn default() -> Self {
        Self::empty()
            .with(Category::Default)
            .with(Category::Document)
    }
}

/// How a matched href turns into an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Emit the original href unchanged.
    PassThrough,
    /// URL with a single `{id}` slot.
    Url(&'static str),
}

impl Template {
    /// Render the output URL for `href`, whose identifier is `id`.
    pub fn render(&self, href: &str, id: &str) -> String {
        match self {
            Template::PassThrough => href.to_string(),
            Template::Url(template) => template.replacen(ID_SLOT, id, 1),
        }
    }
}

/// A known Google URL shape and its transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub marker: &'static str,
    pub category: Category,
    pub template: Template,
}

impl PatternRule {
    /// A rule whose matches are emitted verbatim.
    pub const fn pass_through(marker: &'static str, category: Category) -> Self {
        Self {
            marker,
            category,
            template: Template::PassThrough,
        }
    }

    /// A rule whose matches are rewritten through `template`.
    pub const fn rewrite(marker: &'static str, category: Category, template: &'static str) -> Self {
        Self {
            marker,
            category,
            template: Template::Url(template),
        }
    }
}

/// One output line produced for a matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub href: String,
    pub url: String,
    pub category: Category,
    #[serde(skip)]
    pub marker: &'static str,
    pub id: String,
}

impl fmt::Display for ResolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
