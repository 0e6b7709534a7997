// ABOUTME: Integration tests for the product collection manager
// ABOUTME: Covers voting, feedback, creation, search and snapshot isolation

use std::sync::Arc;

use pretty_assertions::assert_eq;
use producthub_core::SequentialIdGenerator;
use producthub_products::{
    compute_satisfaction, Product, ProductInput, ProductStatus, ProductsManager, VoteDirection,
};

fn seeded() -> ProductsManager {
    ProductsManager::seeded(Box::new(SequentialIdGenerator::starting_at(1000)))
}

fn single_product(upvotes: u32, downvotes: u32) -> ProductsManager {
    let product = Product {
        id: "1".to_string(),
        name: "Release Radar".to_string(),
        description: "Tracks upcoming launches".to_string(),
        pm_name: "Jordan Lee".to_string(),
        launch_date: "2024-02-01".to_string(),
        upvotes,
        downvotes,
        feedback: vec!["Handy".to_string()],
        status: ProductStatus::Active,
        delivery_schedule: None,
    };
    ProductsManager::with_products(vec![product], Box::new(SequentialIdGenerator::new()))
}

// ==============================================================================
// SATISFACTION
// ==============================================================================

#[test]
fn test_satisfaction_scenario_after_upvote() {
    let mut manager = single_product(5, 5);
    assert_eq!(compute_satisfaction(&manager.products()[0]), 50);

    let updated = manager.vote("1", VoteDirection::Upvote).unwrap();
    assert_eq!(updated.upvotes, 6);
    assert_eq!(updated.downvotes, 5);
    assert_eq!(compute_satisfaction(&updated), 55);
}

#[test]
fn test_satisfaction_zero_without_votes() {
    let manager = single_product(0, 0);
    assert_eq!(compute_satisfaction(&manager.products()[0]), 0);
}

// ==============================================================================
// VOTING
// ==============================================================================

#[test]
fn test_upvote_changes_only_upvotes() {
    let mut manager = seeded();
    let before = manager.get_by_id("2").cloned().unwrap();

    let after = manager.vote("2", VoteDirection::Upvote).unwrap();

    assert_eq!(after.upvotes, before.upvotes + 1);
    assert_eq!(after.downvotes, before.downvotes);
    assert_eq!(after.feedback, before.feedback);
    assert_eq!(after.id, before.id);
    assert_eq!(manager.get_by_id("2"), Some(&after));
}

#[test]
fn test_downvote_changes_only_downvotes() {
    let mut manager = seeded();
    let before = manager.get_by_id("3").cloned().unwrap();

    let after = manager.vote("3", VoteDirection::Downvote).unwrap();

    assert_eq!(after.downvotes, before.downvotes + 1);
    assert_eq!(after.upvotes, before.upvotes);
}

#[test]
fn test_votes_accumulate() {
    let mut manager = single_product(0, 0);
    for _ in 0..3 {
        manager.vote("1", VoteDirection::Upvote).unwrap();
    }
    manager.vote("1", VoteDirection::Downvote).unwrap();

    let product = manager.get_by_id("1").unwrap();
    assert_eq!((product.upvotes, product.downvotes), (3, 1));
    assert_eq!(compute_satisfaction(product), 75);
}

#[test]
fn test_vote_missing_product_is_not_found() {
    let mut manager = seeded();
    let err = manager.vote("404", VoteDirection::Upvote).unwrap_err();
    assert_eq!(err.to_string(), "Product not found: 404");
}

// ==============================================================================
// FEEDBACK
// ==============================================================================

#[test]
fn test_feedback_appends_in_order_with_duplicates() {
    let mut manager = seeded();
    manager.add_feedback("1", "Needs SSO").unwrap();
    let product = manager.add_feedback("1", "Needs SSO").unwrap();

    assert_eq!(
        product.feedback,
        vec![
            "Great insights dashboard",
            "Would love mobile app",
            "Needs SSO",
            "Needs SSO"
        ]
    );
}

#[test]
fn test_empty_feedback_is_rejected_without_change() {
    let mut manager = seeded();

    for text in ["", "   ", "\n\t"] {
        let err = manager.add_feedback("1", text).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["feedback"]);
    }

    assert_eq!(manager.get_by_id("1").unwrap().feedback.len(), 2);
}

#[test]
fn test_feedback_missing_product_is_not_found() {
    let mut manager = seeded();
    let err = manager.add_feedback("404", "Hello").unwrap_err();
    assert!(err.is_not_found());
}

// ==============================================================================
// CREATION
// ==============================================================================

#[test]
fn test_add_product_with_required_fields() {
    let mut manager = seeded();
    let product = manager
        .add_product(ProductInput {
            name: "Partner Portal".to_string(),
            description: "Self-service portal for resellers".to_string(),
            pm_name: "Alex Kim".to_string(),
            launch_date: "2024-11-01".to_string(),
            ..ProductInput::default()
        })
        .unwrap();

    assert_eq!(product.id, "1000");
    assert_eq!(product.status, ProductStatus::Planned);
    assert_eq!((product.upvotes, product.downvotes), (0, 0));
    assert!(product.feedback.is_empty());
    assert_eq!(manager.products()[0].id, "1000");
    assert_eq!(manager.len(), 4);
}

#[test]
fn test_rapid_creates_get_distinct_ids() {
    let mut manager = ProductsManager::new(Box::new(SequentialIdGenerator::new()));
    let mut ids = Vec::new();
    for i in 0..5 {
        let product = manager
            .add_product(ProductInput {
                name: format!("Product {}", i),
                description: "d".to_string(),
                pm_name: "pm".to_string(),
                launch_date: "2024-01-01".to_string(),
                ..ProductInput::default()
            })
            .unwrap();
        ids.push(product.id);
    }

    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    // Most recent first
    assert_eq!(manager.products()[0].name, "Product 4");
}

#[test]
fn test_add_product_reports_all_missing_fields() {
    let mut manager = seeded();
    let err = manager.add_product(ProductInput::default()).unwrap_err();
    assert_eq!(
        err.invalid_fields(),
        vec!["name", "description", "pmName", "launchDate"]
    );
    assert_eq!(manager.len(), 3);
}

// ==============================================================================
// SEARCH & SNAPSHOTS
// ==============================================================================

#[test]
fn test_search_bank_finds_only_banking_app() {
    let manager = seeded();
    let found = manager.search("bank");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Mobile Banking App");
}

#[test]
fn test_search_reflects_new_products() {
    let mut manager = seeded();
    manager
        .add_product(ProductInput {
            name: "Bank Reconciliation".to_string(),
            description: "Ledger matching".to_string(),
            pm_name: "Sam Ortiz".to_string(),
            launch_date: "2024-12-01".to_string(),
            ..ProductInput::default()
        })
        .unwrap();

    let names: Vec<String> = manager.search("BANK").into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Bank Reconciliation", "Mobile Banking App"]);
}

#[test]
fn test_snapshots_are_not_affected_by_later_mutations() {
    let mut manager = seeded();
    let before = manager.snapshot();

    manager.vote("1", VoteDirection::Upvote).unwrap();
    manager.add_feedback("1", "More exports please").unwrap();

    let after = manager.snapshot();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before[0].upvotes, 24);
    assert_eq!(before[0].feedback.len(), 2);
    assert_eq!(after[0].upvotes, 25);
    assert_eq!(after[0].feedback.len(), 3);
}

#[test]
fn test_product_serializes_with_camel_case_fields() {
    let manager = seeded();
    let json = serde_json::to_value(&manager.products()[2]).unwrap();

    assert_eq!(json["pmName"], "Emily Rodriguez");
    assert_eq!(json["launchDate"], "2024-06-10");
    assert_eq!(json["status"], "Beta");
    assert!(json["deliverySchedule"].is_null());

    let json = serde_json::to_value(&manager.products()[0]).unwrap();
    assert_eq!(json["deliverySchedule"]["nextRelease"], "v2.1.0");
}
