mod common;

use common::product_id;
use dlm_license::{LicenseRecord, LicenseStatus};
use pretty_assertions::assert_eq;

#[test]
fn new_record_is_empty_and_inactive() {
    let record = LicenseRecord::new(product_id());
    assert_eq!(record.key(), "");
    assert_eq!(record.email(), "");
    assert_eq!(record.status(), LicenseStatus::Inactive);
    assert!(!record.is_active());
}

#[test]
fn credentials_are_trimmed() {
    let mut record = LicenseRecord::new(product_id());
    record.set_key("  KEY-1 \n");
    record.set_email(" a@b.c ");
    assert_eq!(record.key(), "KEY-1");
    assert_eq!(record.email(), "a@b.c");
}

#[test]
fn status_strings() {
    assert_eq!(LicenseStatus::Active.as_str(), "active");
    assert_eq!(LicenseStatus::Inactive.to_string(), "inactive");
    assert_eq!(LicenseStatus::Inactivate.to_string(), "inactivate");
    assert_eq!(LicenseStatus::default(), LicenseStatus::Inactive);
}

#[test]
fn record_serialized_form() {
    let record = LicenseRecord::with_credentials(product_id(), "K", "e@x.io");
    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "product_id": "dlm-email-lock",
            "key": "K",
            "email": "e@x.io",
            "status": "inactive"
        })
    );
}

#[test]
fn record_deserializes_with_missing_fields() {
    let record: LicenseRecord =
        serde_json::from_str(r#"{"product_id":"dlm-email-lock"}"#).unwrap();
    assert_eq!(record, LicenseRecord::new(product_id()));
}

#[test]
fn record_rejects_unknown_status() {
    let parsed: Result<LicenseRecord, _> =
        serde_json::from_str(r#"{"product_id":"dlm-email-lock","status":"expired"}"#);
    assert!(parsed.is_err());
}
