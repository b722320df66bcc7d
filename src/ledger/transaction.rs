use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Transaction type codes used by the back office.
///
/// The four cash-movement codes (`CR`, `BR`, `CP`, `BP`) cover cash/bank
/// receipts and payments; `INVOICE` is a non-cash accrual entry raised when a
/// job is invoiced. Any other wire code deserializes to [`TransType::Unknown`]
/// instead of failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransType {
    CashReceive,
    BankReceive,
    CashPay,
    BankPay,
    Invoice,
    Unknown,
}

impl TransType {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "CR" => TransType::CashReceive,
            "BR" => TransType::BankReceive,
            "CP" => TransType::CashPay,
            "BP" => TransType::BankPay,
            "INVOICE" => TransType::Invoice,
            _ => TransType::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TransType::CashReceive => "CR",
            TransType::BankReceive => "BR",
            TransType::CashPay => "CP",
            TransType::BankPay => "BP",
            TransType::Invoice => "INVOICE",
            TransType::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for TransType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TransType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(TransType::from_code(&code))
    }
}

/// A cash/bank/accrual movement as served by the backend transaction endpoint.
///
/// The struct mirrors the wire shape and is read-only from the reporting
/// core's perspective; every derived figure lives on
/// [`LedgerRow`](crate::ledger::report::LedgerRow) instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub trans_type: TransType,
    /// Monetary magnitude. Direction is never encoded in the sign; it is
    /// derived entirely from `trans_type`. Malformed wire values coerce to 0.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(default)]
    pub job: Option<i64>,
    #[serde(default)]
    pub client: Option<i64>,
    #[serde(default)]
    pub voucher_no: Option<String>,
    #[serde(default)]
    pub display_party_name: Option<String>,
    #[serde(default)]
    pub party_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub cheque_no: Option<String>,
}

impl Transaction {
    pub fn new(id: i64, date: NaiveDate, trans_type: TransType, amount: f64) -> Self {
        Self {
            id,
            date,
            trans_type,
            amount,
            job: None,
            client: None,
            voucher_no: None,
            display_party_name: None,
            party_name: None,
            description: None,
            bank_name: None,
            cheque_no: None,
        }
    }

    pub fn with_party(mut self, name: impl Into<String>) -> Self {
        self.party_name = Some(name.into());
        self
    }

    pub fn with_display_party(mut self, name: impl Into<String>) -> Self {
        self.display_party_name = Some(name.into());
        self
    }

    pub fn with_job(mut self, job_id: i64) -> Self {
        self.job = Some(job_id);
        self
    }

    pub fn with_client(mut self, client_id: i64) -> Self {
        self.client = Some(client_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_voucher(mut self, voucher_no: impl Into<String>) -> Self {
        self.voucher_no = Some(voucher_no.into());
        self
    }
}

/// Accepts bare ISO dates (`2024-01-31`) or full timestamps
/// (`2024-01-31T10:22:00Z`); any time-of-day component is discarded because it
/// carries no meaning for ledger ordering.
fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_wire_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date `{raw}`")))
}

pub(crate) fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date);
    }
    let day = trimmed.get(..10)?;
    day.parse::<NaiveDate>().ok()
}

/// `Number(x) || 0` semantics: numbers pass through, numeric strings parse,
/// everything else (null, garbage text) becomes 0 without failing the row.
fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    let parsed = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        Raw::Other(_) => 0.0,
    };
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Ok(0.0)
    }
}
