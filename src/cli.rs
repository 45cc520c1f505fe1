use clap::Parser;
use std::path::PathBuf;

/// Taskmate - a terminal assistant for todos, deadlines and events
#[derive(Debug, Parser)]
#[command(name = "taskmate")]
#[command(about = "A terminal assistant for todos, deadlines and events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Task file to use, overriding the config
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Run a single command and exit (if not specified, enters interactive mode)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if one was given
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
