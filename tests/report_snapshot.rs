use std::collections::HashMap;

use chrono::NaiveDate;
use freight_ledger::ledger::{build_report, ReportFilter, TransType, Transaction};

#[test]
fn report_json_shape_is_stable() {
    let date = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    let txns = vec![
        Transaction::new(1, date(1), TransType::CashReceive, 100.0)
            .with_party("Acme")
            .with_voucher("CR-001"),
        Transaction::new(2, date(2), TransType::CashPay, 40.0)
            .with_party("Acme")
            .with_voucher("CP-001"),
    ];
    let report = build_report(&txns, &HashMap::new(), &ReportFilter::default());
    let json = serde_json::to_string_pretty(&report).unwrap();

    insta::assert_snapshot!(json, @r###"
    {
      "rows": [
        {
          "id": 1,
          "date": "2024-01-01",
          "trans_type": "CR",
          "voucher_no": "CR-001",
          "description": null,
          "resolved_name": "ACME",
          "received": 100.0,
          "paid": 0.0,
          "invoice_amt": 0.0,
          "balance": 100.0
        },
        {
          "id": 2,
          "date": "2024-01-02",
          "trans_type": "CP",
          "voucher_no": "CP-001",
          "description": null,
          "resolved_name": "ACME",
          "received": 0.0,
          "paid": 40.0,
          "invoice_amt": 0.0,
          "balance": 60.0
        }
      ],
      "total_received": 100.0,
      "total_paid": 40.0,
      "net_balance": 60.0
    }
    "###);
}
