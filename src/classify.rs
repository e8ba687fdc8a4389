//! Path Classification
//!
//! Sorts untracked paths into the categories that decide which commit each
//! file ends up in. Rules are an ordered table evaluated first-match-wins,
//! with [`Category::Other`] as the fallback, so every path lands in exactly
//! one bucket.

use std::fmt;

/// Bucket a path is committed under. Declaration order is commit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    RootConfig,
    Schema,
    Library,
    UiPrimitive,
    Component,
    Route,
    Other,
}

impl Category {
    /// Fixed processing order of the commit loop.
    pub const ORDER: [Category; 7] = [
        Category::RootConfig,
        Category::Schema,
        Category::Library,
        Category::UiPrimitive,
        Category::Component,
        Category::Route,
        Category::Other,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RootConfig => "root-config",
            Self::Schema => "schema",
            Self::Library => "library",
            Self::UiPrimitive => "ui-primitive",
            Self::Component => "component",
            Self::Route => "route",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const ROOT_CONFIG_SUFFIXES: [&str; 4] = [".json", ".js", ".mjs", ".ts"];

fn is_root_config(path: &str) -> bool {
    !path.contains('/')
        && (ROOT_CONFIG_SUFFIXES
            .iter()
            .any(|suffix| path.ends_with(suffix))
            || path.starts_with('.')
            || path == "README.md")
}

fn is_schema(path: &str) -> bool {
    path.starts_with("prisma/")
}

fn is_library(path: &str) -> bool {
    path.starts_with("lib/")
}

fn is_ui_primitive(path: &str) -> bool {
    path.starts_with("components/ui/")
}

// Only reached once `is_ui_primitive` has failed.
fn is_component(path: &str) -> bool {
    path.starts_with("components/")
}

fn is_route(path: &str) -> bool {
    path.starts_with("app/")
}

/// Ordered classification rules; the first predicate that matches wins.
pub const RULES: [(Category, fn(&str) -> bool); 6] = [
    (Category::RootConfig, is_root_config),
    (Category::Schema, is_schema),
    (Category::Library, is_library),
    (Category::UiPrimitive, is_ui_primitive),
    (Category::Component, is_component),
    (Category::Route, is_route),
];

/// Returns the category of a repository-relative path.
///
/// # Examples
///
/// ```
/// use strata::classify::{Category, classify_path};
///
/// assert_eq!(classify_path("tailwind.config.ts"), Category::RootConfig);
/// assert_eq!(classify_path("components/ui/button.tsx"), Category::UiPrimitive);
/// assert_eq!(classify_path("components/navbar.tsx"), Category::Component);
/// assert_eq!(classify_path("public/logo.svg"), Category::Other);
/// ```
#[must_use]
pub fn classify_path(path: &str) -> Category {
    RULES
        .iter()
        .find(|(_, matches)| matches(path))
        .map_or(Category::Other, |(category, _)| *category)
}

/// Untracked paths partitioned into one ordered bucket per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: [Vec<String>; 7],
}

impl Classification {
    /// Classifies every path once, keeping input order within each bucket.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classification = Self::default();

        for path in paths {
            let path = path.into();
            classification.buckets[classify_path(&path).index()].push(path);
        }

        classification
    }

    #[must_use]
    pub fn bucket(&self, category: Category) -> &[String] {
        &self.buckets[category.index()]
    }

    /// Buckets in commit order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ORDER
            .into_iter()
            .map(|category| (category, self.bucket(category)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
