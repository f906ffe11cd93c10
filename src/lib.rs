//! goo_getf - Find links to Google-hosted files in HTML documents.
//!
//! This library provides functionality to:
//! - Extract anchor hrefs from HTML text
//! - Match them against known Drive, Docs and Colab URL shapes
//! - Rewrite matches into direct download or export URLs
//!
//! # Example
//!
//! ```
//! use goo_getf::{CategorySet, LinkScanner, PatternRegistry};
//!
//! let scanner = LinkScanner::new(&PatternRegistry::builtin(), &CategorySet::default());
//! let html = r#"<a href="https://drive.google.com/file/d/1abc/view">report</a>"#;
//!
//! for link in scanner.scan_html(html) {
//!     println!("{}", link);
//! }
//! ```

pub mod error;
pub mod html;
pub mod inputs;
pub mod logging;
pub mod models;
pub mod registry;
pub mod resolver;
pub mod scanner;

// Re-exports for convenience
pub use error::{GooError, Result};
pub use models::{Category, CategorySet, PatternRule, ResolvedLink, Template};
pub use registry::PatternRegistry;
pub use resolver::{extract_id, resolve, resolve_links};
pub use scanner::LinkScanner;
