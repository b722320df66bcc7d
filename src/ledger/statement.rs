use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classify::{classify, CashBucket};
use super::job::Client;
use super::transaction::Transaction;

/// Which side of the account the running balance currently sits on.
/// `Dr` means the client owes the office, `Cr` means the office owes the
/// client (or the client is in credit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSide {
    Dr,
    Cr,
}

impl fmt::Display for BalanceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceSide::Dr => write!(f, "Dr"),
            BalanceSide::Cr => write!(f, "Cr"),
        }
    }
}

/// One line of a client ledger statement.
#[derive(Debug, Clone, Serialize)]
pub struct StatementEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub voucher_no: Option<String>,
    pub particulars: String,
    pub debit: f64,
    pub credit: f64,
    /// Unsigned running balance; the sign lives in `side`.
    pub running_balance: f64,
    pub side: BalanceSide,
}

/// A reconciliation statement for one client: every transaction posted to the
/// client's account with a double-entry running balance.
#[derive(Debug, Clone, Serialize)]
pub struct ClientStatement {
    pub client: Client,
    pub entries: Vec<StatementEntry>,
    pub final_balance: f64,
    pub final_side: BalanceSide,
}

fn side_of(balance: f64) -> BalanceSide {
    if balance >= 0.0 {
        BalanceSide::Dr
    } else {
        BalanceSide::Cr
    }
}

fn particulars(txn: &Transaction) -> String {
    let description = txn.description.as_deref().unwrap_or("");
    match txn.job {
        Some(job_id) => format!("Job #{job_id} - {description}"),
        None => description.to_string(),
    }
}

/// Builds the statement for `client` over an optional inclusive date range.
///
/// Sign convention: receipts and invoices post to the debit column and raise
/// the balance (the client owes the office for invoiced work and is credited
/// cash back through payments); payments post to credit and lower it. Unknown
/// transaction types post to neither column and leave the balance untouched.
pub fn build_statement(
    client: &Client,
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ClientStatement {
    let mut selected: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| txn.client == Some(client.id))
        .filter(|txn| {
            start.map_or(true, |start| txn.date >= start)
                && end.map_or(true, |end| txn.date <= end)
        })
        .collect();
    selected.sort_by_key(|txn| (txn.date, txn.id));

    let mut entries = Vec::with_capacity(selected.len());
    let mut balance = 0.0_f64;
    for txn in selected {
        let amount = txn.amount.abs();
        let (debit, credit) = match classify(txn.trans_type) {
            CashBucket::Inflow | CashBucket::Accrual => {
                balance += amount;
                (amount, 0.0)
            }
            CashBucket::Outflow => {
                balance -= amount;
                (0.0, amount)
            }
            CashBucket::Neutral => (0.0, 0.0),
        };
        entries.push(StatementEntry {
            id: txn.id,
            date: txn.date,
            voucher_no: txn.voucher_no.clone(),
            particulars: particulars(txn),
            debit,
            credit,
            running_balance: balance.abs(),
            side: side_of(balance),
        });
    }

    ClientStatement {
        client: client.clone(),
        entries,
        final_balance: balance.abs(),
        final_side: side_of(balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::TransType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn acme() -> Client {
        Client {
            id: 1,
            name: "Acme Trading".to_string(),
            address: Some("PO Box 12, Muscat".to_string()),
            vat_number: Some("OM1100223344".to_string()),
        }
    }

    #[test]
    fn invoices_and_receipts_debit_payments_credit() {
        let txns = vec![
            Transaction::new(1, date(2024, 3, 1), TransType::Invoice, 300.0).with_client(1),
            Transaction::new(2, date(2024, 3, 5), TransType::BankReceive, 100.0).with_client(1),
            Transaction::new(3, date(2024, 3, 9), TransType::BankPay, 500.0).with_client(1),
        ];
        let statement = build_statement(&acme(), &txns, None, None);
        assert_eq!(statement.entries.len(), 3);

        assert_eq!(statement.entries[0].debit, 300.0);
        assert_eq!(statement.entries[0].running_balance, 300.0);
        assert_eq!(statement.entries[0].side, BalanceSide::Dr);

        assert_eq!(statement.entries[1].debit, 100.0);
        assert_eq!(statement.entries[1].running_balance, 400.0);

        assert_eq!(statement.entries[2].credit, 500.0);
        assert_eq!(statement.entries[2].running_balance, 100.0);
        assert_eq!(statement.entries[2].side, BalanceSide::Cr);

        assert_eq!(statement.final_balance, 100.0);
        assert_eq!(statement.final_side, BalanceSide::Cr);
    }

    #[test]
    fn only_the_requested_client_is_posted() {
        let txns = vec![
            Transaction::new(1, date(2024, 3, 1), TransType::CashReceive, 50.0).with_client(1),
            Transaction::new(2, date(2024, 3, 2), TransType::CashReceive, 70.0).with_client(2),
            Transaction::new(3, date(2024, 3, 3), TransType::CashReceive, 90.0),
        ];
        let statement = build_statement(&acme(), &txns, None, None);
        assert_eq!(statement.entries.len(), 1);
        assert_eq!(statement.entries[0].id, 1);
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let txns = vec![
            Transaction::new(1, date(2024, 3, 1), TransType::CashReceive, 10.0).with_client(1),
            Transaction::new(2, date(2024, 3, 15), TransType::CashReceive, 10.0).with_client(1),
            Transaction::new(3, date(2024, 3, 31), TransType::CashReceive, 10.0).with_client(1),
            Transaction::new(4, date(2024, 4, 1), TransType::CashReceive, 10.0).with_client(1),
        ];
        let statement =
            build_statement(&acme(), &txns, Some(date(2024, 3, 1)), Some(date(2024, 3, 31)));
        let ids: Vec<i64> = statement.entries.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn particulars_reference_the_job_when_linked() {
        let txns = vec![
            Transaction::new(1, date(2024, 3, 1), TransType::Invoice, 10.0)
                .with_client(1)
                .with_job(42)
                .with_description("Freight charges"),
            Transaction::new(2, date(2024, 3, 2), TransType::CashReceive, 10.0)
                .with_client(1)
                .with_description("On account"),
        ];
        let statement = build_statement(&acme(), &txns, None, None);
        assert_eq!(statement.entries[0].particulars, "Job #42 - Freight charges");
        assert_eq!(statement.entries[1].particulars, "On account");
    }

    #[test]
    fn unknown_types_do_not_move_the_balance() {
        let txns = vec![
            Transaction::new(1, date(2024, 3, 1), TransType::CashReceive, 40.0).with_client(1),
            Transaction::new(2, date(2024, 3, 2), TransType::Unknown, 999.0).with_client(1),
        ];
        let statement = build_statement(&acme(), &txns, None, None);
        assert_eq!(statement.entries[1].debit, 0.0);
        assert_eq!(statement.entries[1].credit, 0.0);
        assert_eq!(statement.entries[1].running_balance, 40.0);
    }
}
