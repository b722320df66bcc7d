use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::InvoicePolicy;
use crate::utils::{ensure_dir, write_atomic};

const CONFIG_FILE: &str = "config.json";

/// Report preferences persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How INVOICE accruals participate in the cash-flow report.
    #[serde(default)]
    pub invoice_policy: InvoicePolicy,
    /// Currency code used when rendering amounts.
    pub currency: String,
    /// Decimal places for rendered amounts. OMR uses three.
    pub decimal_places: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            invoice_policy: InvoicePolicy::default(),
            currency: "OMR".into(),
            decimal_places: 3,
        }
    }
}

/// Default report window: first day of the previous month through `today`,
/// both inclusive.
pub fn default_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today);
    (start, today)
}

/// Loads and saves the report configuration under a base directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("freight_ledger");
        Self::from_base(base)
    }

    pub fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<ReportConfig, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(ReportConfig::default())
        }
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
