//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::listing::search::DEFAULT_LIMIT;

/// Folio portfolio renderer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Site root containing `pages/` (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every manifest page and the listing pages
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Render a single route to stdout or a file
    #[command(visible_alias = "r")]
    Render {
        /// Route to render: `/base/CLASS/ID` or `?class=CLASS&id=ID`
        route: String,

        /// Write the page to this file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Regenerate `pages/manifest.json` from the page documents
    #[command(visible_alias = "m")]
    Manifest {
        /// Print the manifest instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Search the manifest like the site's search box
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Regenerate the manifest before rendering
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub manifest: Option<bool>,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Text to look for in title, type, date and class
    pub text: Option<String>,

    /// Only search this class
    #[arg(short, long = "class")]
    pub class: Option<String>,

    /// Only search this type (requires --class)
    #[arg(short = 't', long = "type", requires = "class")]
    pub kind: Option<String>,

    /// Maximum number of results
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Output JSON instead of text rows
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["folio", "build", "--clean", "-m", "false"]).unwrap();
        match cli.command {
            Commands::Build { build_args } => {
                assert!(build_args.clean);
                assert_eq!(build_args.manifest, Some(false));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_render_with_global_flags() {
        let cli = Cli::try_parse_from(["folio", "-r", "site", "render", "/DE/foo", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Render { .. }));
        assert_eq!(cli.root, Some(PathBuf::from("site")));
    }

    #[test]
    fn test_query_type_requires_class() {
        assert!(Cli::try_parse_from(["folio", "query", "-t", "Lab"]).is_err());
        assert!(Cli::try_parse_from(["folio", "query", "-k", "Lab"]).is_err());
        let cli =
            Cli::try_parse_from(["folio", "query", "solder", "-c", "DE", "-t", "Lab"]).unwrap();
        match cli.command {
            Commands::Query { args } => {
                assert_eq!(args.text.as_deref(), Some("solder"));
                assert_eq!(args.kind.as_deref(), Some("Lab"));
                assert_eq!(args.class.as_deref(), Some("DE"));
                assert_eq!(args.limit, DEFAULT_LIMIT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
