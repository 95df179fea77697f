use super::*;

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Nice portfolio".into(),
    }
}

#[test]
fn anchors_resolve_case_insensitively_with_optional_hash() {
    assert_eq!(SectionId::from_anchor("projects"), Some(SectionId::Projects));
    assert_eq!(SectionId::from_anchor("#Contact"), Some(SectionId::Contact));
    assert_eq!(SectionId::from_anchor("blog"), None);
    assert_eq!(SectionId::from_anchor(""), None);
}

#[test]
fn section_order_matches_declaration_order() {
    let positions: Vec<usize> = SectionId::ALL.iter().map(|s| s.position()).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(SectionId::default(), SectionId::About);
}

#[test]
fn section_ids_serialize_as_anchor_names() {
    let json = serde_json::to_string(&SectionId::Certifications).expect("json");
    assert_eq!(json, "\"certifications\"");
}

#[test]
fn full_message_passes_validation() {
    assert_eq!(message().validate(), Ok(()));
}

#[test]
fn first_missing_field_is_reported_in_form_order() {
    let mut msg = message();
    msg.subject.clear();
    msg.message.clear();
    assert_eq!(
        msg.validate(),
        Err(ContactValidationError::MissingField {
            field: ContactField::Subject
        })
    );
}

#[test]
fn blank_field_counts_as_missing() {
    let mut msg = message();
    msg.name = "   ".into();
    assert_eq!(
        msg.validate(),
        Err(ContactValidationError::MissingField {
            field: ContactField::Name
        })
    );
}

#[test]
fn malformed_email_is_rejected() {
    for bad in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
        let mut msg = message();
        msg.email = bad.into();
        let err = msg.validate().expect_err("should fail");
        assert_eq!(err.field(), ContactField::Email, "{bad}");
    }
}

#[test]
fn length_cap_names_offending_field() {
    let mut msg = message();
    msg.message = "x".repeat(33);
    assert_eq!(
        msg.validate_lengths(32),
        Err(ContactValidationError::TooLong {
            field: ContactField::Message,
            limit: 32
        })
    );
}
