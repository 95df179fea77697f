use super::*;

#[test]
fn submission_flattens_message_fields() {
    let submission = ContactSubmission {
        message: ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        },
    };
    let value = serde_json::to_value(&submission).expect("json");
    assert_eq!(value["name"], "Ada");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["subject"], "Hi");
    assert_eq!(value["message"], "Hello there");
}

#[test]
fn receipt_without_simulated_flag_defaults_to_false() {
    let receipt = ContactReceipt::issue();
    let mut value = serde_json::to_value(&receipt).expect("json");
    value.as_object_mut().expect("object").remove("simulated");
    let parsed: ContactReceipt = serde_json::from_value(value).expect("parse");
    assert!(!parsed.simulated);
    assert_eq!(parsed.receipt_id, receipt.receipt_id);
}
