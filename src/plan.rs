//! Commit Plan
//!
//! Turns a [`Classification`] into the ordered list of commits to create,
//! each with its synthesized message.

use std::path::Path;

use crate::{
    classify::{Category, Classification},
    git::CommitMessage,
};

/// Single message shared by every schema file.
pub const SCHEMA_MESSAGE: &str = "setup database schema and seeds";

/// Message of the grouped ui-primitive commit.
pub const UI_PRIMITIVE_MESSAGE: &str = "add shadcn ui design system";

/// Extension stripped from component file names.
const COMPONENT_SUFFIX: &str = ".tsx";

/// One commit to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitUnit {
    /// Stage one path, commit it alone.
    Single {
        category: Category,
        path: String,
        message: CommitMessage,
    },
    /// Stage every path in one call, commit them together.
    Group {
        category: Category,
        paths: Vec<String>,
        message: CommitMessage,
    },
}

impl CommitUnit {
    #[must_use]
    pub fn message(&self) -> &CommitMessage {
        match self {
            Self::Single { message, .. } | Self::Group { message, .. } => message,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Single { category, .. } | Self::Group { category, .. } => *category,
        }
    }

    #[must_use]
    pub fn paths(&self) -> &[String] {
        match self {
            Self::Single { path, .. } => std::slice::from_ref(path),
            Self::Group { paths, .. } => paths,
        }
    }
}

/// Final path component, or the whole path if it has none.
fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Builds the commit message for a file committed on its own.
///
/// # Examples
///
/// ```
/// use strata::{classify::Category, plan::message_for};
///
/// assert_eq!(
///     message_for(Category::Component, "components/charts/bar.tsx").to_string(),
///     "feat: add bar component"
/// );
/// assert_eq!(
///     message_for(Category::Route, "app/dashboard/page.tsx").to_string(),
///     "feat: implement app/dashboard/page.tsx route"
/// );
/// ```
#[must_use]
pub fn message_for(category: Category, path: &str) -> CommitMessage {
    match category {
        Category::RootConfig => match path {
            ".gitignore" => CommitMessage::chore("add gitignore"),
            "package.json" => CommitMessage::chore("add package.json"),
            "README.md" => CommitMessage::docs("add readme"),
            _ => CommitMessage::chore(format!("add {path}")),
        },
        Category::Schema => CommitMessage::feat(SCHEMA_MESSAGE),
        Category::Library => CommitMessage::feat(format!("add {} utility", basename(path))),
        Category::UiPrimitive => CommitMessage::feat(UI_PRIMITIVE_MESSAGE),
        Category::Component => {
            let name = basename(path);
            let name = name.strip_suffix(COMPONENT_SUFFIX).unwrap_or(name);
            CommitMessage::feat(format!("add {name} component"))
        }
        Category::Route => CommitMessage::feat(format!("implement {path} route")),
        Category::Other => CommitMessage::chore(format!("add {path}")),
    }
}

/// Lays out every commit of the run in category order.
///
/// The ui-primitive bucket becomes one [`CommitUnit::Group`] (skipped when
/// empty); every other file becomes its own [`CommitUnit::Single`].
#[must_use]
pub fn build_plan(classification: &Classification) -> Vec<CommitUnit> {
    let mut plan = Vec::with_capacity(classification.len());

    for (category, paths) in classification.iter() {
        if category == Category::UiPrimitive {
            if !paths.is_empty() {
                plan.push(CommitUnit::Group {
                    category,
                    paths: paths.to_vec(),
                    message: CommitMessage::feat(UI_PRIMITIVE_MESSAGE),
                });
            }
            continue;
        }

        plan.extend(paths.iter().map(|path| CommitUnit::Single {
            category,
            path: path.clone(),
            message: message_for(category, path),
        }));
    }

    plan
}
