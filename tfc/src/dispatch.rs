//! Command dispatch: maps parsed arguments to a request and runs it

use std::io::Write;
use std::path::PathBuf;

use colored::*;

use crate::cli::Cli;
use crate::env::Environment;
use crate::error::TfcError;
use crate::index::TemplateIndex;
use crate::render::{render_all, render_category};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Copy {
        template: String,
        name: String,
        dest_dir: Option<PathBuf>,
    },
    ListAll,
    ListCategory(String),
    /// No recognized combination of arguments
    Usage,
}

impl Request {
    /// First matching rule wins: copy, list all, list one category
    pub fn from_cli(cli: &Cli) -> Self {
        match (&cli.template, &cli.name) {
            (Some(template), Some(name)) => Self::Copy {
                template: template.clone(),
                name: name.clone(),
                dest_dir: cli.path.clone(),
            },
            _ if cli.templates => Self::ListAll,
            _ => match &cli.category {
                Some(category) => Self::ListCategory(category.clone()),
                None => Self::Usage,
            },
        }
    }
}

/// Message shown when arguments are missing or do not form a command
pub fn usage_message(app_name: &str) -> String {
    format!("missing argument(s); do `{}` --help to display the help message", app_name)
}

/// Print a user-facing error with the red prefix
pub fn print_error(out: &mut dyn Write, message: impl std::fmt::Display) -> std::io::Result<()> {
    writeln!(out, "{} {}", "Error:".bright_red(), message)
}

/// Run `request` against `index`, writing results to `out`
///
/// Returns the user-facing error on failure; the caller decides how to
/// report it and which exit code to use.
pub fn execute(request: &Request, index: &TemplateIndex, env: &Environment, out: &mut dyn Write) -> eyre::Result<()> {
    let root_label = env.display_path(index.root());

    match request {
        Request::Copy {
            template,
            name,
            dest_dir,
        } => {
            let dest_dir = dest_dir.as_deref().unwrap_or(&env.cwd);
            let outcome = index.copy(template, name, dest_dir)?;
            writeln!(
                out,
                "{} copied:\n{}\nto:\n{}",
                "Success:".bright_green(),
                outcome.source.display(),
                outcome.destination.display()
            )?;
        }
        Request::ListAll => {
            writeln!(out, "{}", render_all(index, &root_label))?;
        }
        Request::ListCategory(name) => {
            writeln!(out, "{}", render_category(index, &root_label, name)?)?;
        }
        Request::Usage => {
            return Err(eyre::eyre!(usage_message(&env.app_name)));
        }
    }

    Ok(())
}

/// Fail when the scan found no categories at all
pub fn ensure_not_empty(index: &TemplateIndex) -> Result<(), TfcError> {
    if index.is_empty() {
        return Err(TfcError::EmptyTemplates {
            path: index.root().to_path_buf(),
        });
    }
    Ok(())
}
