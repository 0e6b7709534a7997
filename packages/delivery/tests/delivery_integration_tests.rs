// ABOUTME: Integration tests for the delivery schedule manager
// ABOUTME: Covers add/edit/delete flows, form pre-fill and snapshot isolation

use std::sync::Arc;

use pretty_assertions::assert_eq;
use producthub_core::SequentialIdGenerator;
use producthub_delivery::{
    DeliveryFormInput, DeliveryManager, DeliveryPriority, DeliveryStatus, Selection,
};

fn seeded() -> DeliveryManager {
    DeliveryManager::seeded(Box::new(SequentialIdGenerator::starting_at(100)))
}

// ==============================================================================
// ADD
// ==============================================================================

#[test]
fn test_add_delivery_parses_features() {
    let mut manager = seeded();
    let item = manager
        .add_delivery(DeliveryFormInput {
            product_id: "2".to_string(),
            product_name: "Mobile Banking App".to_string(),
            version: "v1.6.0".to_string(),
            features: "a, b ,, c".to_string(),
            estimated_date: "2024-08-01".to_string(),
            status: DeliveryStatus::Testing,
            priority: DeliveryPriority::High,
            description: "Card controls".to_string(),
        })
        .unwrap();

    assert_eq!(item.features, vec!["a", "b", "c"]);
    assert_eq!(item.description.as_deref(), Some("Card controls"));
    assert_eq!(manager.get_by_id(&item.id), Some(&item));
}

#[test]
fn test_add_delivery_reports_every_missing_field() {
    let mut manager = seeded();
    let err = manager.add_delivery(DeliveryFormInput::default()).unwrap_err();
    assert_eq!(
        err.invalid_fields(),
        vec!["productName", "version", "features", "estimatedDate"]
    );
    assert_eq!(manager.len(), 3);
}

#[test]
fn test_add_delivery_accepts_whitespace_input() {
    let mut manager = seeded();
    let item = manager
        .add_delivery(DeliveryFormInput {
            product_id: String::new(),
            product_name: "   ".to_string(),
            version: "v0.1.0".to_string(),
            features: " , ".to_string(),
            estimated_date: "2024-10-01".to_string(),
            status: DeliveryStatus::Planned,
            priority: DeliveryPriority::Low,
            description: String::new(),
        })
        .unwrap();

    assert_eq!(item.product_name, "   ");
    assert!(item.features.is_empty());
    assert_eq!(item.description, None);
    assert_eq!(manager.len(), 4);
}

// ==============================================================================
// EDIT
// ==============================================================================

#[test]
fn test_edit_then_read_matches_form() {
    let mut manager = seeded();
    let original = manager.get_by_id("2").cloned().unwrap();

    let mut form = DeliveryFormInput::from(&original);
    form.version = "v1.5.1".to_string();
    form.features = "Biometric login, Savings goals,".to_string();
    form.status = DeliveryStatus::InProgress;
    form.priority = DeliveryPriority::High;
    form.description = String::new();

    let edited = manager.edit_delivery("2", form).unwrap();
    let read_back = manager.get_by_id("2").unwrap();

    assert_eq!(read_back, &edited);
    assert_eq!(read_back.id, "2");
    assert_eq!(read_back.product_id, original.product_id);
    assert_eq!(read_back.version, "v1.5.1");
    assert_eq!(read_back.features, vec!["Biometric login", "Savings goals"]);
    assert_eq!(read_back.status, DeliveryStatus::InProgress);
    assert_eq!(read_back.priority, DeliveryPriority::High);
    assert_eq!(read_back.description, None);
}

#[test]
fn test_edit_ignores_product_id_in_form() {
    let mut manager = seeded();
    let mut form = DeliveryFormInput::from(manager.get_by_id("3").unwrap());
    form.product_id = "999".to_string();

    let edited = manager.edit_delivery("3", form).unwrap();
    assert_eq!(edited.product_id, "1");
}

#[test]
fn test_status_can_move_backwards() {
    let mut manager = seeded();
    let mut form = DeliveryFormInput::from(manager.get_by_id("1").unwrap());
    form.status = DeliveryStatus::Planned;

    let edited = manager.edit_delivery("1", form).unwrap();
    assert_eq!(edited.status, DeliveryStatus::Planned);
}

#[test]
fn test_edit_prefill_round_trip_is_stable() {
    let mut manager = seeded();
    let original = manager.get_by_id("1").cloned().unwrap();

    let edited = manager
        .edit_delivery("1", DeliveryFormInput::from(&original))
        .unwrap();
    assert_eq!(edited, original);
}

#[test]
fn test_edit_keeps_whitespace_description() {
    let mut manager = seeded();
    let mut form = DeliveryFormInput::from(manager.get_by_id("1").unwrap());
    form.description = "  ".to_string();

    manager.edit_delivery("1", form.clone()).unwrap();
    let read_back = DeliveryFormInput::from(manager.get_by_id("1").unwrap());

    assert_eq!(read_back.description, "  ");
    assert_eq!(read_back, form);
}

// ==============================================================================
// DELETE
// ==============================================================================

#[test]
fn test_delete_missing_delivery_is_noop() {
    let mut manager = seeded();
    let before = manager.snapshot();

    assert!(!manager.delete_delivery("missing-id"));
    assert_eq!(manager.len(), 3);
    assert!(Arc::ptr_eq(&before, &manager.snapshot()));
}

#[test]
fn test_delete_keeps_remaining_order() {
    let mut manager = seeded();
    assert!(manager.delete_delivery("2"));

    let ids: Vec<&str> = manager.deliveries().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

// ==============================================================================
// FILTERS & SNAPSHOTS
// ==============================================================================

#[test]
fn test_filtered_tracks_mutations() {
    let mut manager = seeded();
    let mut form = DeliveryFormInput::from(manager.get_by_id("3").unwrap());
    form.status = DeliveryStatus::Released;
    manager.edit_delivery("3", form).unwrap();

    let released = manager.filtered(&Selection::Only(DeliveryStatus::Released), &Selection::All);
    assert_eq!(released.len(), 1);
    assert_eq!(released[0].version, "v2.2.0");
}

#[test]
fn test_snapshot_survives_edit_and_delete() {
    let mut manager = seeded();
    let before = manager.snapshot();

    let mut form = DeliveryFormInput::from(manager.get_by_id("1").unwrap());
    form.version = "v3.0.0".to_string();
    manager.edit_delivery("1", form).unwrap();
    manager.delete_delivery("2");

    assert_eq!(before.len(), 3);
    assert_eq!(before[0].version, "v2.1.0");
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.deliveries()[0].version, "v3.0.0");
}

#[test]
fn test_delivery_serializes_with_wire_names() {
    let manager = seeded();
    let json = serde_json::to_value(&manager.deliveries()[0]).unwrap();

    assert_eq!(json["productId"], "1");
    assert_eq!(json["estimatedDate"], "2024-04-15");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["priority"], "high");
}
