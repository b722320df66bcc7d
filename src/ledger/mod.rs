//! Ledger domain: wire-shaped records, party name resolution, transaction
//! classification, and the report/statement computations built on them.

pub mod classify;
pub mod job;
pub mod names;
pub mod report;
pub mod statement;
pub mod transaction;

pub use classify::{bucket_amounts, classify, BucketAmounts, CashBucket};
pub use job::{client_name_map, Client, ClientRef, Job};
pub use names::{
    normalize_party, party_options, resolve_party, GENERAL_PARTY, UNKNOWN_PARTY,
};
pub use report::{
    build_report, CashFlowReport, InvoicePolicy, LedgerRow, PartyFilter, ReportFilter,
};
pub use statement::{build_statement, BalanceSide, ClientStatement, StatementEntry};
pub use transaction::{TransType, Transaction};
