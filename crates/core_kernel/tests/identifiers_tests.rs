//! Unit tests for strongly-typed identifiers

use core_kernel::{CreditGrantId, CustomerId, OrderId, PaymentId};
use uuid::Uuid;

#[test]
fn test_display_carries_prefix() {
    assert!(OrderId::new().to_string().starts_with("ORD-"));
    assert!(CustomerId::new().to_string().starts_with("CUS-"));
    assert!(CreditGrantId::new().to_string().starts_with("SCG-"));
    assert!(PaymentId::new().to_string().starts_with("PAY-"));
}

#[test]
fn test_parse_accepts_prefixed_and_bare_forms() {
    let id = OrderId::new();

    let prefixed: OrderId = id.to_string().parse().unwrap();
    assert_eq!(prefixed, id);

    let bare: OrderId = id.as_uuid().to_string().parse().unwrap();
    assert_eq!(bare, id);
}

#[test]
fn test_uuid_conversions() {
    let uuid = Uuid::new_v4();
    let id = CreditGrantId::from(uuid);
    let back: Uuid = id.into();
    assert_eq!(uuid, back);
}

#[test]
fn test_serde_is_transparent() {
    let id = CustomerId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));

    let back: CustomerId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
