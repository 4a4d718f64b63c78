use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "Turn quick-capture task text into structured fields")]
#[command(long_about = "taskline - natural language task parser

Extracts dates, times, priority, duration, location, tags and a category
from a single line of task text, leaving the plain title behind.

QUICK START:
  taskline parse \"Call John at 2pm tomorrow\"
  taskline parse -o json \"Buy groceries urgent #errands\"
  cat tasks.txt | taskline parse -o json
  taskline examples --parse

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskline <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config value, which is
    /// 'pretty' unless changed.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log extraction details to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse task text into structured fields
    ///
    /// With TEXT, the words are joined with spaces and parsed as one task.
    /// Without TEXT, each non-empty line of stdin is parsed separately.
    ///
    /// # Examples
    ///
    ///   taskline parse "Call John at 2pm tomorrow"
    ///   taskline parse Meeting with team this Friday at 10am
    ///   taskline parse --today 2024-03-15 "review next week"
    ///   printf 'a tomorrow\nb urgent\n' | taskline parse -o json
    ///
    /// # Supported Patterns
    ///
    ///   Times:      at 3pm, at 9:30am, 14:00, morning, evening
    ///   Dates:      today, tomorrow, friday, next week, 3/15, december 10
    ///   Priority:   urgent, asap, !!, low priority, later
    ///   Duration:   for 2 hours, takes 30 min
    ///   Location:   at gym, in Room 4, @office
    ///   Tags:       #tag1 #tag2
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Show example inputs
    Examples(ExamplesArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskline completions bash > ~/.local/share/bash-completion/completions/taskline
    ///   taskline completions zsh > ~/.zsh/completions/_taskline
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Task text; read from stdin when omitted
    pub text: Vec<String>,

    /// Resolve relative dates as if today were this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Skip suggestion generation
    #[arg(long)]
    pub no_suggestions: bool,
}

/// Arguments for the examples command.
#[derive(Args)]
pub struct ExamplesArgs {
    /// Parse each example and show the result
    #[arg(long)]
    pub parse: bool,

    /// Resolve relative dates as if today were this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", requires = "parse")]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
