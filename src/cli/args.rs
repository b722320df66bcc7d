use std::path::PathBuf;

use chrono::NaiveDate;

use crate::errors::LedgerError;

/// Parsed command line for the reporting binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Report(ReportArgs),
    Statement(StatementArgs),
    Parties(PartiesArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    pub snapshot: PathBuf,
    pub party: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Use the first-of-previous-month..today window when no bounds are given.
    pub default_window: bool,
    /// Keep INVOICE rows visible with a separate invoiced column.
    pub include_invoices: bool,
    pub json: bool,
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementArgs {
    pub snapshot: PathBuf,
    pub client: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub json: bool,
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartiesArgs {
    pub snapshot: PathBuf,
}

pub const USAGE: &str = "\
Usage: freight_ledger_cli <command> [options]

Commands:
  report     Cash-flow ledger with running balance
  statement  Per-client Dr/Cr statement
  parties    List the distinct party names in a snapshot
  help       Show this message

Common options:
  --snapshot <path>     Dataset snapshot JSON (required)
  --from <YYYY-MM-DD>   Inclusive start date
  --to <YYYY-MM-DD>     Inclusive end date
  --json                Print the result as JSON
  --export <path>       Also write the result to a JSON file

Report options:
  --party <name>        Filter to one resolved party name (default: ALL)
  --default-window      First of previous month through today
  --include-invoices    Keep INVOICE rows with a separate invoiced column

Statement options:
  --client <id|name>    Client to build the statement for (required)";

pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, LedgerError> {
    let mut args = args.into_iter();
    let command = match args.next() {
        Some(command) => command,
        None => return Ok(Command::Help),
    };

    match command.as_str() {
        "report" => parse_report(args).map(Command::Report),
        "statement" => parse_statement(args).map(Command::Statement),
        "parties" => parse_parties(args).map(Command::Parties),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(LedgerError::InvalidArgs(format!("unknown command `{other}`"))),
    }
}

fn parse_report(mut args: impl Iterator<Item = String>) -> Result<ReportArgs, LedgerError> {
    let mut snapshot = None;
    let mut party = None;
    let mut from = None;
    let mut to = None;
    let mut default_window = false;
    let mut include_invoices = false;
    let mut json = false;
    let mut export = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--snapshot" => snapshot = Some(PathBuf::from(value(&mut args, &flag)?)),
            "--party" => party = Some(value(&mut args, &flag)?),
            "--from" => from = Some(parse_date(&value(&mut args, &flag)?)?),
            "--to" => to = Some(parse_date(&value(&mut args, &flag)?)?),
            "--default-window" => default_window = true,
            "--include-invoices" => include_invoices = true,
            "--json" => json = true,
            "--export" => export = Some(PathBuf::from(value(&mut args, &flag)?)),
            other => return Err(unknown_flag(other)),
        }
    }

    Ok(ReportArgs {
        snapshot: require_snapshot(snapshot)?,
        party,
        from,
        to,
        default_window,
        include_invoices,
        json,
        export,
    })
}

fn parse_statement(mut args: impl Iterator<Item = String>) -> Result<StatementArgs, LedgerError> {
    let mut snapshot = None;
    let mut client = None;
    let mut from = None;
    let mut to = None;
    let mut json = false;
    let mut export = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--snapshot" => snapshot = Some(PathBuf::from(value(&mut args, &flag)?)),
            "--client" => client = Some(value(&mut args, &flag)?),
            "--from" => from = Some(parse_date(&value(&mut args, &flag)?)?),
            "--to" => to = Some(parse_date(&value(&mut args, &flag)?)?),
            "--json" => json = true,
            "--export" => export = Some(PathBuf::from(value(&mut args, &flag)?)),
            other => return Err(unknown_flag(other)),
        }
    }

    let client = client
        .ok_or_else(|| LedgerError::InvalidArgs("statement requires --client".to_string()))?;

    Ok(StatementArgs {
        snapshot: require_snapshot(snapshot)?,
        client,
        from,
        to,
        json,
        export,
    })
}

fn parse_parties(mut args: impl Iterator<Item = String>) -> Result<PartiesArgs, LedgerError> {
    let mut snapshot = None;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--snapshot" => snapshot = Some(PathBuf::from(value(&mut args, &flag)?)),
            other => return Err(unknown_flag(other)),
        }
    }
    Ok(PartiesArgs {
        snapshot: require_snapshot(snapshot)?,
    })
}

fn value(args: &mut dyn Iterator<Item = String>, flag: &str) -> Result<String, LedgerError> {
    args.next()
        .ok_or_else(|| LedgerError::InvalidArgs(format!("{flag} expects a value")))
}

fn require_snapshot(snapshot: Option<PathBuf>) -> Result<PathBuf, LedgerError> {
    snapshot.ok_or_else(|| LedgerError::InvalidArgs("--snapshot is required".to_string()))
}

fn unknown_flag(flag: &str) -> LedgerError {
    LedgerError::InvalidArgs(format!("unknown option `{flag}`"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    raw.trim()
        .parse::<NaiveDate>()
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}
