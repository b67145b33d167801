//! End-to-end scenarios against the built-in registration form

use anyhow::Result;
use cafe_onboard::form::{
    validate, FieldInput, FieldPath, FieldValue, FormController, FormSchema, FormState,
    SubmissionSink, SubmitOutcome,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Default)]
struct RecordingSink {
    payloads: Vec<FormState>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, payload: &FormState) -> Result<()> {
        self.payloads.push(payload.clone());
        Ok(())
    }
}

fn path(raw: &str) -> FieldPath {
    FieldPath::parse(raw).unwrap()
}

fn controller() -> FormController<RecordingSink> {
    FormController::new(
        FormSchema::cafe_registration().unwrap(),
        RecordingSink::default(),
    )
}

fn fill(form: &mut FormController<RecordingSink>, entries: &[(&str, &str)]) {
    for (p, value) in entries {
        form.on_field_change(&path(p), FieldInput::text(*value))
            .unwrap();
    }
}

/// Every required field with a valid value
const REQUIRED: &[(&str, &str)] = &[
    ("cafe_name", "Pixel Den"),
    ("owner_name", "Asha Rao"),
    ("contact_info.phone", "+91 98765 43210"),
    ("contact_info.email", "asha@pixelden.in"),
    ("business_registration_details.registration_number", "KA-2024-0192"),
    ("business_registration_details.registration_date", "2024-01-15"),
    ("physicalAddress.addressLine1", "12 MG Road"),
    ("physicalAddress.pincode", "560001"),
    ("physicalAddress.state", "Karnataka"),
    ("physicalAddress.country", "India"),
    ("timing.opening_time", "09:00 am"),
    ("timing.closing_time", "11:00 pm"),
    ("slot_duration", "60"),
];

#[test]
fn test_complete_form_is_submitted_once() {
    let mut form = controller();
    fill(&mut form, REQUIRED);
    form.on_field_change(&path("amenities.24/7"), FieldInput::Checked(true))
        .unwrap();

    assert_eq!(form.on_submit(), SubmitOutcome::Submitted);
    assert_eq!(form.errors().leaf_count(), 0);

    let payloads = &form.sink().payloads;
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0], *form.values());

    let json = serde_json::to_value(&payloads[0]).unwrap();
    assert_eq!(json["physicalAddress"]["pincode"], json!(560001.0));
    assert_eq!(json["contact_info"]["email"], json!("asha@pixelden.in"));
    assert_eq!(json["amenities"]["24/7"], json!(true));
}

#[test]
fn test_missing_owner_and_short_phone_block_submission() {
    let mut form = controller();
    let entries: Vec<(&str, &str)> = REQUIRED
        .iter()
        .copied()
        .filter(|(p, _)| *p != "owner_name")
        .map(|(p, v)| if p == "contact_info.phone" { (p, "123") } else { (p, v) })
        .collect();
    fill(&mut form, &entries);

    assert_eq!(form.on_submit(), SubmitOutcome::Rejected { error_count: 2 });
    assert_eq!(
        serde_json::to_value(form.errors()).unwrap(),
        json!({
            "owner_name": "Owner Name is required",
            "contact_info": { "phone": "Invalid phone number" }
        })
    );
    assert!(form.sink().payloads.is_empty());
}

#[test]
fn test_empty_form_reports_every_required_field() {
    let mut form = controller();
    assert_eq!(
        form.on_submit(),
        SubmitOutcome::Rejected {
            error_count: REQUIRED.len()
        }
    );
    assert_eq!(
        form.error(&path("slot_duration")),
        Some("Slot Duration (mins) is required")
    );
}

#[test]
fn test_pincode_number_rule() {
    let schema = FormSchema::cafe_registration().unwrap();
    let pincode = path("physicalAddress.pincode");
    let check = |value: FieldValue| {
        let mut state = FormState::new();
        state.set(&pincode, value).unwrap();
        validate(&schema, &state).errors.get(&pincode).cloned()
    };

    assert_eq!(check(FieldValue::Number(0.0)), None);
    assert_eq!(
        check(FieldValue::Number(-1.0)),
        Some("Pincode must be a positive number".to_string())
    );
    assert_eq!(
        check(FieldValue::Text("abc".to_string())),
        Some("Pincode must be a positive number".to_string())
    );
}

#[test]
fn test_non_numeric_input_is_reported_not_rejected() {
    let mut form = controller();
    fill(&mut form, REQUIRED);
    fill(&mut form, &[("available_games.ps5.total_slot", "lots")]);

    assert_eq!(form.on_submit(), SubmitOutcome::Rejected { error_count: 1 });
    assert_eq!(
        form.error(&path("available_games.ps5.total_slot")),
        Some("PS5 Slots must be a positive number")
    );
}

#[test]
fn test_email_and_date_formats() {
    let mut form = controller();
    fill(&mut form, REQUIRED);
    fill(
        &mut form,
        &[
            ("contact_info.email", "a@b"),
            ("business_registration_details.registration_date", "15-01-2024"),
            ("vendor_account_email", "a@b.com"),
        ],
    );

    form.on_submit();
    assert_eq!(
        form.error(&path("contact_info.email")),
        Some("Invalid email format")
    );
    assert_eq!(
        form.error(&path("business_registration_details.registration_date")),
        Some("Invalid date format (YYYY-MM-DD)")
    );
    assert_eq!(form.error(&path("vendor_account_email")), None);

    // Format-only check: impossible calendar dates pass
    fill(
        &mut form,
        &[
            ("contact_info.email", "a@b.com"),
            ("business_registration_details.registration_date", "2024-13-40"),
        ],
    );
    assert!(form.on_submit().is_submitted());
}

#[test]
fn test_validation_is_idempotent() {
    let schema = FormSchema::cafe_registration().unwrap();
    let mut state = FormState::new();
    state
        .set(&path("contact_info.phone"), FieldValue::Text("12".to_string()))
        .unwrap();
    assert_eq!(validate(&schema, &state), validate(&schema, &state));
}

#[test]
fn test_earlier_snapshot_is_unaffected_by_edits() {
    let mut form = controller();
    fill(&mut form, &[("cafe_name", "Before")]);
    let snapshot = form.snapshot();
    fill(&mut form, &[("cafe_name", "After"), ("owner_name", "Asha")]);

    assert_eq!(
        snapshot.get(&path("cafe_name")),
        Some(&FieldValue::Text("Before".to_string()))
    );
    assert_eq!(snapshot.get(&path("owner_name")), None);
}
