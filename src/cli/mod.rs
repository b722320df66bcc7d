//! Non-interactive command line front end over the reporting core.

pub mod args;
pub mod output;
pub mod table;

use chrono::Utc;

use crate::config::{default_window, ConfigManager, ReportConfig};
use crate::errors::LedgerError;
use crate::ledger::{
    build_report, build_statement, client_name_map, party_options, CashFlowReport,
    ClientStatement, InvoicePolicy, PartyFilter, ReportFilter,
};
use crate::storage::{DatasetSnapshot, JsonStore, SnapshotSource};
use crate::utils::format_money;

pub use args::{Command, PartiesArgs, ReportArgs, StatementArgs, USAGE};

/// Parses and executes one CLI invocation.
pub fn run(raw_args: impl IntoIterator<Item = String>) -> Result<(), LedgerError> {
    match args::parse(raw_args)? {
        Command::Report(report_args) => run_report(&report_args),
        Command::Statement(statement_args) => run_statement(&statement_args),
        Command::Parties(parties_args) => run_parties(&parties_args),
        Command::Help => {
            output::info(USAGE);
            Ok(())
        }
    }
}

fn load_config() -> ReportConfig {
    ConfigManager::new()
        .and_then(|manager| manager.load())
        .unwrap_or_default()
}

fn run_report(args: &ReportArgs) -> Result<(), LedgerError> {
    let store = JsonStore::new();
    let snapshot = store.load_snapshot(&args.snapshot)?;
    let config = load_config();

    let (start, end) = if args.default_window && args.from.is_none() && args.to.is_none() {
        let (start, end) = default_window(Utc::now().date_naive());
        (Some(start), Some(end))
    } else {
        (args.from, args.to)
    };

    let invoice_policy = if args.include_invoices {
        InvoicePolicy::TrackSeparately
    } else {
        config.invoice_policy
    };

    let filter = ReportFilter {
        party: args
            .party
            .as_deref()
            .map(PartyFilter::party)
            .unwrap_or_default(),
        start,
        end,
        invoice_policy,
    };

    let job_clients = client_name_map(&snapshot.jobs);
    let report = build_report(&snapshot.transactions, &job_clients, &filter);
    tracing::info!(rows = report.rows.len(), "cash-flow report built");

    if let Some(path) = &args.export {
        store.export(&report, path)?;
        output::success(format!("Report exported to {}", path.display()));
    }

    if args.json {
        output::info(serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &config, invoice_policy);
    }
    Ok(())
}

fn print_report(report: &CashFlowReport, config: &ReportConfig, policy: InvoicePolicy) {
    let decimals = config.decimal_places;
    output::section("Cash Flow Report");
    output::info(table::report_table(report, config, policy));
    output::info("");
    output::section("Summary");
    output::info(format!(
        "Total received: {} {}",
        format_money(report.total_received, decimals),
        config.currency
    ));
    output::info(format!(
        "Total paid:     {} {}",
        format_money(report.total_paid, decimals),
        config.currency
    ));
    output::info(format!(
        "Net balance:    {} {}",
        format_money(report.net_balance, decimals),
        config.currency
    ));
}

fn run_statement(args: &StatementArgs) -> Result<(), LedgerError> {
    let store = JsonStore::new();
    let snapshot = store.load_snapshot(&args.snapshot)?;
    let config = load_config();

    let client = snapshot
        .find_client(&args.client)
        .ok_or_else(|| LedgerError::InvalidRef(format!("client `{}` not found", args.client)))?;

    let statement = build_statement(client, &snapshot.transactions, args.from, args.to);
    tracing::info!(
        client = %client.name,
        entries = statement.entries.len(),
        "client statement built"
    );

    if let Some(path) = &args.export {
        store.export(&statement, path)?;
        output::success(format!("Statement exported to {}", path.display()));
    }

    if args.json {
        output::info(serde_json::to_string_pretty(&statement)?);
    } else {
        print_statement(&statement, &config);
    }
    Ok(())
}

fn print_statement(statement: &ClientStatement, config: &ReportConfig) {
    output::section(format!("Ledger Statement - {}", statement.client.name));
    if let Some(address) = &statement.client.address {
        output::info(address);
    }
    if let Some(vat) = &statement.client.vat_number {
        output::info(format!("VAT: {vat}"));
    }
    output::info("");
    output::info(table::statement_table(statement, config));
    output::info("");
    output::info(format!(
        "Final balance: {} {} {}",
        format_money(statement.final_balance, config.decimal_places),
        config.currency,
        statement.final_side
    ));
}

fn run_parties(args: &PartiesArgs) -> Result<(), LedgerError> {
    let snapshot: DatasetSnapshot = JsonStore::new().load_snapshot(&args.snapshot)?;
    let job_clients = client_name_map(&snapshot.jobs);
    let parties = party_options(&snapshot.transactions, &job_clients);
    output::section("Parties");
    for party in &parties {
        output::info(party);
    }
    output::info(format!("{} parties", parties.len()));
    Ok(())
}
