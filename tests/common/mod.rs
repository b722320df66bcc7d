use freight_ledger::storage::DatasetSnapshot;

/// A small but representative office dataset: two clients, one job, cash and
/// bank movements on both sides, one invoice accrual, and one unknown code.
pub const SNAPSHOT_JSON: &str = r#"{
    "transactions": [
        {"id": 1, "date": "2024-01-01", "trans_type": "CR", "amount": "100.000",
         "voucher_no": "CR-001", "party_name": "Acme Trading", "client": 1},
        {"id": 2, "date": "2024-01-02", "trans_type": "CP", "amount": 40,
         "voucher_no": "CP-001", "party_name": " ACME TRADING ", "client": 1},
        {"id": 3, "date": "2024-01-03", "trans_type": "BR", "amount": 250.5,
         "voucher_no": "BR-001", "job": 11, "client": 2},
        {"id": 4, "date": "2024-01-04", "trans_type": "INVOICE", "amount": 300,
         "voucher_no": "INV-001", "job": 11, "client": 2,
         "description": "Freight charges"},
        {"id": 5, "date": "2024-01-05", "trans_type": "XYZ", "amount": 999,
         "party_name": "Acme Trading", "client": 1}
    ],
    "jobs": [
        {"id": 11, "client_details": {"id": 2, "name": "Beta Logistics"}}
    ],
    "clients": [
        {"id": 1, "name": "Acme Trading", "address": "PO Box 12, Muscat",
         "vat_number": "OM1100223344"},
        {"id": 2, "name": "Beta Logistics"}
    ]
}"#;

pub fn sample_snapshot() -> DatasetSnapshot {
    serde_json::from_str(SNAPSHOT_JSON).expect("fixture snapshot parses")
}
