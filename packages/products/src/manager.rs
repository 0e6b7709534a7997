use std::fmt;
use std::sync::Arc;

use producthub_core::{
    validate_feedback_text, validate_product_input, DeliverySchedule, IdGenerator, ManagerError,
    ManagerResult, Product, ProductInput, VoteDirection,
};
use tracing::{debug, info, warn};

use crate::search::search_products;
use crate::seed::seed_products;

const ENTITY: &str = "Product";

/// Owns the session's product collection.
///
/// Mutations never touch a published snapshot: the collection lives behind an
/// `Arc` and is cloned on write whenever a caller still holds an older one.
pub struct ProductsManager {
    products: Arc<Vec<Product>>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for ProductsManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductsManager")
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}

impl ProductsManager {
    /// Create a manager with an empty portfolio
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_products(Vec::new(), ids)
    }

    /// Create a manager over an existing collection, keeping its order
    pub fn with_products(products: Vec<Product>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            products: Arc::new(products),
            ids,
        }
    }

    /// Create a manager holding the seed portfolio
    pub fn seeded(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_products(seed_products(), ids)
    }

    /// The current collection; later mutations do not alter it
    pub fn snapshot(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product for the detail view
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        let product = self.products.iter().find(|p| p.id == id);
        if product.is_none() {
            debug!("Product {} not found", id);
        }
        product
    }

    pub fn search(&self, term: &str) -> Vec<Product> {
        let found = search_products(&self.products, term);
        debug!(
            "Search '{}' matched {} of {} products",
            term,
            found.len(),
            self.products.len()
        );
        found
    }

    /// Adds a product to the front of the portfolio
    pub fn add_product(&mut self, data: ProductInput) -> ManagerResult<Product> {
        let validation_errors = validate_product_input(&data);
        if !validation_errors.is_empty() {
            warn!(
                "Rejected new product: {} invalid field(s)",
                validation_errors.len()
            );
            return Err(ManagerError::Validation(validation_errors));
        }

        let product = Product {
            id: self.fresh_id(),
            name: data.name,
            description: data.description,
            pm_name: data.pm_name,
            launch_date: data.launch_date,
            upvotes: 0,
            downvotes: 0,
            feedback: Vec::new(),
            status: data.status,
            delivery_schedule: data.delivery_schedule,
        };

        Arc::make_mut(&mut self.products).insert(0, product.clone());

        info!("Added product '{}' with ID {}", product.name, product.id);
        Ok(product)
    }

    /// Records one vote; there is no way to retract it
    pub fn vote(&mut self, id: &str, direction: VoteDirection) -> ManagerResult<Product> {
        let product = self.update_product(id, |product| match direction {
            VoteDirection::Upvote => product.upvotes = product.upvotes.saturating_add(1),
            VoteDirection::Downvote => product.downvotes = product.downvotes.saturating_add(1),
        })?;

        info!(
            "Recorded {} for '{}' ({} up / {} down)",
            direction, product.name, product.upvotes, product.downvotes
        );
        Ok(product)
    }

    /// Appends free-text feedback to a product
    pub fn add_feedback(&mut self, id: &str, text: &str) -> ManagerResult<Product> {
        let validation_errors = validate_feedback_text(text);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let product = self.update_product(id, |product| product.feedback.push(text.to_string()))?;

        info!(
            "Added feedback to '{}' ({} entries)",
            product.name,
            product.feedback.len()
        );
        Ok(product)
    }

    /// Replaces (or clears) the delivery schedule shown on a product card
    pub fn update_delivery_schedule(
        &mut self,
        id: &str,
        schedule: Option<DeliverySchedule>,
    ) -> ManagerResult<Product> {
        let product = self.update_product(id, |product| product.delivery_schedule = schedule)?;

        info!("Updated delivery schedule for '{}'", product.name);
        Ok(product)
    }

    fn update_product<F>(&mut self, id: &str, apply: F) -> ManagerResult<Product>
    where
        F: FnOnce(&mut Product),
    {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            warn!("Product {} not found", id);
            return Err(ManagerError::not_found(ENTITY, id));
        };

        let products = Arc::make_mut(&mut self.products);
        let product = products
            .get_mut(index)
            .ok_or_else(|| ManagerError::not_found(ENTITY, id))?;
        apply(product);
        Ok(product.clone())
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.products.iter().any(|p| p.id == id) {
                return id;
            }
            debug!("Generated product ID {} already in use, drawing another", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use producthub_core::{ProductStatus, SequentialIdGenerator};

    fn manager() -> ProductsManager {
        ProductsManager::seeded(Box::new(SequentialIdGenerator::starting_at(100)))
    }

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: "Self-serve onboarding flows".to_string(),
            pm_name: "Dana Brooks".to_string(),
            launch_date: "2024-10-01".to_string(),
            status: ProductStatus::Planned,
            delivery_schedule: None,
        }
    }

    #[test]
    fn test_add_product_prepends_with_fresh_counters() {
        let mut manager = manager();
        let product = manager.add_product(input("Onboarding Studio")).unwrap();

        assert_eq!(product.id, "100");
        assert_eq!(product.upvotes, 0);
        assert_eq!(product.downvotes, 0);
        assert!(product.feedback.is_empty());
        assert_eq!(manager.len(), 4);
        assert_eq!(manager.products()[0], product);
    }

    #[test]
    fn test_add_product_skips_ids_already_taken() {
        let mut manager = ProductsManager::seeded(Box::new(SequentialIdGenerator::new()));
        let product = manager.add_product(input("Onboarding Studio")).unwrap();
        assert_eq!(product.id, "4");
    }

    #[test]
    fn test_add_product_validation_leaves_collection_untouched() {
        let mut manager = manager();
        let before = manager.snapshot();

        let err = manager
            .add_product(ProductInput {
                description: String::new(),
                ..input("Onboarding Studio")
            })
            .unwrap_err();

        assert_eq!(err.invalid_fields(), vec!["description"]);
        assert!(Arc::ptr_eq(&before, &manager.snapshot()));
    }

    #[test]
    fn test_vote_unknown_product() {
        let mut manager = manager();
        let err = manager.vote("missing", VoteDirection::Upvote).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_feedback_is_validated_before_lookup() {
        let mut manager = manager();
        let err = manager.add_feedback("missing", "   ").unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["feedback"]);
    }

    #[test]
    fn test_update_delivery_schedule() {
        let mut manager = manager();
        let schedule = DeliverySchedule {
            next_release: "v0.9.0".to_string(),
            features: vec!["Tone presets".to_string()],
            estimated_date: "2024-09-01".to_string(),
        };

        let product = manager
            .update_delivery_schedule("3", Some(schedule.clone()))
            .unwrap();
        assert_eq!(product.delivery_schedule, Some(schedule));

        let cleared = manager.update_delivery_schedule("3", None).unwrap();
        assert_eq!(cleared.delivery_schedule, None);
    }

    #[test]
    fn test_get_by_id() {
        let manager = manager();
        assert_eq!(manager.get_by_id("2").unwrap().name, "Mobile Banking App");
        assert!(manager.get_by_id("99").is_none());
    }
}
