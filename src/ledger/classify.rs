use super::transaction::TransType;

/// Economic effect of a transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashBucket {
    /// Money came in (cash or bank receipt).
    Inflow,
    /// Money went out (cash or bank payment).
    Outflow,
    /// Invoice accrual: money owed, not money moved.
    Accrual,
    /// Unknown codes land here and contribute zero everywhere.
    Neutral,
}

pub fn classify(trans_type: TransType) -> CashBucket {
    match trans_type {
        TransType::CashReceive | TransType::BankReceive => CashBucket::Inflow,
        TransType::CashPay | TransType::BankPay => CashBucket::Outflow,
        TransType::Invoice => CashBucket::Accrual,
        TransType::Unknown => CashBucket::Neutral,
    }
}

/// Per-transaction magnitudes after classification. At most one of the three
/// figures is non-zero for any transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketAmounts {
    pub received: f64,
    pub paid: f64,
    pub invoiced: f64,
}

/// Assigns the transaction amount to its bucket. The stored amount is taken as
/// an absolute value first so a signed wire value cannot double-invert the
/// direction already encoded by the type code.
pub fn bucket_amounts(trans_type: TransType, amount: f64) -> BucketAmounts {
    let magnitude = amount.abs();
    match classify(trans_type) {
        CashBucket::Inflow => BucketAmounts {
            received: magnitude,
            ..BucketAmounts::default()
        },
        CashBucket::Outflow => BucketAmounts {
            paid: magnitude,
            ..BucketAmounts::default()
        },
        CashBucket::Accrual => BucketAmounts {
            invoiced: magnitude,
            ..BucketAmounts::default()
        },
        CashBucket::Neutral => BucketAmounts::default(),
    }
}
