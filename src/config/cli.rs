use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "project-catalog")]
#[command(about = "Render, search and inspect a project catalog")]
pub struct CliConfig {
    /// Path to a TOML catalog file. The built-in catalog is used when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, value_enum, default_value = "html")]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render every project card
    List,
    /// Case-insensitive search over titles, descriptions and technologies
    Search { query: String },
    /// Projects using exactly this technology (case-sensitive)
    Filter { tech: String },
    /// Distinct technologies in the catalog
    Techs,
    /// Render the detail view of one project
    View { id: u32 },
    /// Write a standalone index.html
    Render {
        #[arg(short, long, default_value = "./public")]
        output: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "project-catalog",
            "search",
            "voting",
            "--format",
            "json",
            "-c",
            "catalog.toml",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config.as_deref(), Some("catalog.toml"));
        assert!(matches!(cli.command, Command::Search { ref query } if query == "voting"));
    }

    #[test]
    fn test_log_json_flag_after_subcommand() {
        let cli = CliConfig::try_parse_from(["project-catalog", "list", "--log-json"]).unwrap();
        assert!(cli.log_json);
        assert!(!cli.verbose);

        let cli = CliConfig::try_parse_from(["project-catalog", "list"]).unwrap();
        assert!(!cli.log_json);
    }

    #[test]
    fn test_render_default_output() {
        let cli = CliConfig::try_parse_from(["project-catalog", "render"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(matches!(cli.command, Command::Render { ref output } if output == "./public"));
    }

    #[test]
    fn test_view_requires_numeric_id() {
        assert!(CliConfig::try_parse_from(["project-catalog", "view", "abc"]).is_err());
    }
}
