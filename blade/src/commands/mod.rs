mod generate;

use clap::{ArgAction, Parser};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for bladesmith_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "blade")]
#[command(version)]
#[command(about = "Generate Laravel scaffolding from a JSON column schema")]
pub(crate) struct Cli {
    #[command(flatten)]
    command: GenerateCommand,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.command.run()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["blade", "-vv", "User.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_schema_is_required() {
        assert!(Cli::try_parse_from(["blade"]).is_err());
    }
}
