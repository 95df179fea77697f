use super::*;

fn ctx() -> RelayContext {
    RelayContext::new(&Settings {
        max_field_bytes: 64,
        ..Settings::default()
    })
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "  Ada ".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Short note".into(),
    }
}

#[test]
fn accepted_message_gets_a_fresh_receipt() {
    let ctx = ctx();
    let first = accept_contact(&ctx, &message()).expect("accepted");
    let second = accept_contact(&ctx, &message()).expect("accepted");
    assert_ne!(first.receipt_id, second.receipt_id);
    assert!(!first.simulated);
    assert_eq!(ctx.accepted_count(), 2);
}

#[test]
fn whitespace_only_field_is_treated_as_missing() {
    let ctx = ctx();
    let mut msg = message();
    msg.subject = "   ".into();
    let err = accept_contact(&ctx, &msg).expect_err("rejected");
    assert!(matches!(err.code, ErrorCode::Validation));
    assert!(err.message.contains("subject"), "{}", err.message);
    assert_eq!(ctx.accepted_count(), 0);
}

#[test]
fn oversized_field_is_rejected() {
    let ctx = ctx();
    let mut msg = message();
    msg.message = "x".repeat(65);
    let err = accept_contact(&ctx, &msg).expect_err("too long");
    assert!(err.message.contains("exceeds 64 bytes"), "{}", err.message);
}
