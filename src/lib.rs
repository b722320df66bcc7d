#![doc(test(attr(deny(warnings))))]

//! Freight Ledger is the reporting core of a freight-forwarding back office:
//! party name resolution, cash/bank transaction classification, filtered
//! running-balance ledgers, and per-client Dr/Cr statements, computed over a
//! dataset snapshot fetched from the office's REST backend.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Freight Ledger tracing initialized.");
    });
}
