use clap::{Parser, Subcommand, ValueEnum};

use relabel_core::LabelId;

/// relabel — look up TACRED relation labels and their classifier class ids.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Output format.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "RELABEL_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the class id of each relation label.
    Encode {
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Print the relation label of each class id.
    Decode {
        #[arg(required = true, allow_negative_numbers = true)]
        ids: Vec<LabelId>,
    },

    /// Print the whole vocabulary in class-id order.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `label<TAB>id` line per entry.
    Text,
    /// A JSON array of `{"label", "id"}` objects.
    Json,
}
