use crate::loan::{run_loan_quote, run_loan_schedule, LoanQuoteArgs, LoanScheduleArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dreamhome::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DreamHome Loan Desk",
    about = "Serve and run the DreamHome home-loan calculator from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute EMI schedules and pre-approval quotes offline
    Loan {
        #[command(subcommand)]
        command: LoanCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LoanCommand {
    /// Print the EMI, totals and yearly amortization table
    Schedule(LoanScheduleArgs),
    /// Print an indicative pre-approval quote
    Quote(LoanQuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Loan {
            command: LoanCommand::Schedule(args),
        } => run_loan_schedule(args),
        Command::Loan {
            command: LoanCommand::Quote(args),
        } => run_loan_quote(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["dreamhome-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_schedule_with_separated_amounts() {
        let cli = Cli::try_parse_from([
            "dreamhome-api",
            "loan",
            "schedule",
            "--amount",
            "10,00,000",
            "--rate",
            "8.5",
            "--tenure",
            "20",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Loan {
                command: LoanCommand::Schedule(args),
            }) => {
                assert_eq!(args.amount, 1_000_000.0);
                assert_eq!(args.down_payment, 0.0);
            }
            other => panic!("expected loan schedule, got {other:?}"),
        }
    }
}
