//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// tfc - Template File Copy
#[derive(Parser, Debug, Default)]
#[command(
    name = "tfc",
    about = "Quickly and easily copy files from the Templates folder",
    after_help = "Do tfc -h to display the help message",
    disable_version_flag = true
)]
pub struct Cli {
    /// The type of the file to copy (template file name)
    #[arg(value_name = "TYPE")]
    pub template: Option<String>,

    /// Name of the new file
    pub name: Option<String>,

    /// List all available templates
    #[arg(short, long)]
    pub templates: bool,

    /// List all available templates in a specific category
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,

    /// Where to copy the file; default: current working directory
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Display verbose output
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Path to config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Display the version number
    #[arg(short = 'v', long)]
    pub version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_copy() {
        let cli = Cli::try_parse_from(["tfc", "script.sh", "build"]).unwrap();
        assert_eq!(cli.template.as_deref(), Some("script.sh"));
        assert_eq!(cli.name.as_deref(), Some("build"));
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["tfc", "-t", "-V", "-c", "web", "-p", "/tmp"]).unwrap();
        assert!(cli.templates);
        assert!(cli.verbose);
        assert_eq!(cli.category.as_deref(), Some("web"));
        assert_eq!(cli.path, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_short_v_is_version_not_verbose() {
        let cli = Cli::try_parse_from(["tfc", "-v"]).unwrap();
        assert!(cli.version);
        assert!(!cli.verbose);
    }
}
