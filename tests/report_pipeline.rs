mod common;

use freight_ledger::ledger::{
    build_report, client_name_map, party_options, InvoicePolicy, PartyFilter, ReportFilter,
};

use common::sample_snapshot;

#[test]
fn full_pipeline_over_the_sample_snapshot() {
    let snapshot = sample_snapshot();
    let job_clients = client_name_map(&snapshot.jobs);
    let report = build_report(
        &snapshot.transactions,
        &job_clients,
        &ReportFilter::default(),
    );

    // Invoice excluded by default; the unknown code stays but moves nothing.
    assert_eq!(report.rows.len(), 4);
    let balances: Vec<f64> = report.rows.iter().map(|row| row.balance).collect();
    assert_eq!(balances, vec![100.0, 60.0, 310.5, 310.5]);
    assert_eq!(report.total_received, 350.5);
    assert_eq!(report.total_paid, 40.0);
    assert_eq!(report.net_balance, 310.5);
}

#[test]
fn party_filter_combines_case_variants_and_restarts_balance() {
    let snapshot = sample_snapshot();
    let job_clients = client_name_map(&snapshot.jobs);
    let filter = ReportFilter {
        party: PartyFilter::party("acme trading"),
        ..ReportFilter::default()
    };
    let report = build_report(&snapshot.transactions, &job_clients, &filter);

    // " ACME TRADING " and "Acme Trading" are one identity; the Beta rows are
    // gone from rows and totals alike.
    assert_eq!(report.rows.len(), 3);
    assert!(report
        .rows
        .iter()
        .all(|row| row.resolved_name == "ACME TRADING"));
    assert_eq!(report.total_received, 100.0);
    assert_eq!(report.total_paid, 40.0);
    assert_eq!(report.rows.last().unwrap().balance, 60.0);
}

#[test]
fn job_linked_rows_take_the_client_name_from_the_job() {
    let snapshot = sample_snapshot();
    let job_clients = client_name_map(&snapshot.jobs);
    let filter = ReportFilter {
        party: PartyFilter::party("Beta Logistics"),
        invoice_policy: InvoicePolicy::TrackSeparately,
        ..ReportFilter::default()
    };
    let report = build_report(&snapshot.transactions, &job_clients, &filter);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].received, 250.5);
    assert_eq!(report.rows[1].invoice_amt, 300.0);
    assert_eq!(report.rows[1].balance, 250.5);
    assert_eq!(report.net_balance, 250.5);
}

#[test]
fn dropdown_options_are_sorted_and_deduplicated() {
    let snapshot = sample_snapshot();
    let job_clients = client_name_map(&snapshot.jobs);
    let options = party_options(&snapshot.transactions, &job_clients);
    assert_eq!(
        options,
        vec!["ACME TRADING".to_string(), "BETA LOGISTICS".to_string()]
    );
}
