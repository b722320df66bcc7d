use std::{fs, path::Path, sync::Once};

use crate::errors::LedgerError;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("freight_ledger=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Creates the directory (and parents) if it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes `data` to `path` by staging to a temporary sibling file first.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Formats a monetary value with fixed decimals and thousands separators,
/// e.g. `format_money(-1234.5, 3)` -> `"-1,234.500"`.
pub fn format_money(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formatting_groups_thousands() {
        assert_eq!(format_money(0.0, 3), "0.000");
        assert_eq!(format_money(125.5, 3), "125.500");
        assert_eq!(format_money(1234.5, 3), "1,234.500");
        assert_eq!(format_money(1234567.0, 2), "1,234,567.00");
        assert_eq!(format_money(-1234.5, 3), "-1,234.500");
    }

    #[test]
    fn money_formatting_handles_zero_decimals() {
        assert_eq!(format_money(1234.6, 0), "1,235");
    }
}
