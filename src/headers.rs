//! # Headers Module
//!
//! This module holds the header text applied to source files and the mapping
//! from a file's extension to the header it receives.
//!
//! The module includes:
//! - [`Category`] for the two recognized kinds of source file
//! - [`HeaderSpec`] for the marker/body pair of a single category
//! - [`HeaderSet`] for the immutable set of headers used during a run
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use headerize::headers::{Category, HeaderSet, HeaderSpec};
//!
//! let headers = HeaderSet::new(
//!   HeaderSpec::new("// LICENSE\n", "// LICENSE\n// Co.\n"),
//!   HeaderSpec::new("<!-- LICENSE -->\n", "<!-- LICENSE -->\n"),
//! );
//!
//! let category = Category::from_path(Path::new("src/main.ts")).expect("ts is recognized");
//! let spec = headers.for_category(category);
//!
//! assert!(!spec.is_present_in("export const x = 1;"));
//! assert_eq!(spec.apply_to("export const x = 1;"), "// LICENSE\n// Co.\nexport const x = 1;");
//! ```

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// The kind of source file a header is applied to.
///
/// The category is derived from the file extension with an exact,
/// case-sensitive comparison, so `main.TS` has no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  /// Plain TypeScript sources (`.ts`)
  TypeScript,
  /// Vue single-file components (`.vue`)
  Vue,
}

impl Category {
  /// Every recognized category.
  pub const ALL: [Self; 2] = [Self::TypeScript, Self::Vue];

  /// The file extension (without the leading dot) for this category.
  pub const fn extension(self) -> &'static str {
    match self {
      Self::TypeScript => "ts",
      Self::Vue => "vue",
    }
  }

  /// Resolves the category of a path from its extension.
  ///
  /// Returns `None` for any extension other than `ts` or `vue`, for files
  /// without an extension and for dotfiles such as `.vue`.
  pub fn from_path(path: &Path) -> Option<Self> {
    let extension = path.extension().and_then(OsStr::to_str)?;
    Self::ALL.into_iter().find(|category| category.extension() == extension)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::TypeScript => write!(f, "TypeScript"),
      Self::Vue => write!(f, "Vue"),
    }
  }
}

/// The header of a single category.
///
/// `marker` is only used to decide whether the header is already present;
/// `body` is the text actually inserted. They are usually identical but may
/// diverge, e.g. when the marker is the first line of a longer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
  marker: String,
  body: String,
}

impl HeaderSpec {
  /// Creates a header from its marker and body text.
  pub fn new(marker: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      marker: marker.into(),
      body: body.into(),
    }
  }

  /// The text tested against the start of a file.
  pub fn marker(&self) -> &str {
    &self.marker
  }

  /// The text inserted at the start of a file lacking the marker.
  pub fn body(&self) -> &str {
    &self.body
  }

  /// Checks whether `content` already starts with the marker.
  ///
  /// This is a literal, case-sensitive prefix comparison. An empty marker
  /// matches every file.
  pub fn is_present_in(&self, content: &str) -> bool {
    content.starts_with(&self.marker)
  }

  /// Returns `content` with the header body prepended.
  pub fn apply_to(&self, content: &str) -> String {
    let mut new_content = String::with_capacity(self.body.len() + content.len());
    new_content.push_str(&self.body);
    new_content.push_str(content);
    new_content
  }
}

/// The headers used during a run, one per [`Category`].
///
/// A `HeaderSet` is built once at startup and only ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
  typescript: HeaderSpec,
  vue: HeaderSpec,
}

impl HeaderSet {
  /// Creates a header set from the TypeScript and Vue headers.
  pub const fn new(typescript: HeaderSpec, vue: HeaderSpec) -> Self {
    Self { typescript, vue }
  }

  /// Returns the header applied to files of `category`.
  pub const fn for_category(&self, category: Category) -> &HeaderSpec {
    match category {
      Category::TypeScript => &self.typescript,
      Category::Vue => &self.vue,
    }
  }
}
