use std::fmt;
use std::sync::Arc;

use producthub_core::{
    parse_features, validate_delivery_form, DeliveryFormInput, DeliveryItem, DeliveryPriority,
    DeliveryStatus, IdGenerator, ManagerError, ManagerResult, Selection,
};
use tracing::{debug, info, warn};

use crate::filters::filter_by_status_and_priority;
use crate::seed::seed_deliveries;

const ENTITY: &str = "Delivery";

/// Owns the session's delivery schedule.
///
/// Same copy-on-write layout as the product manager: published snapshots
/// are never mutated in place.
pub struct DeliveryManager {
    deliveries: Arc<Vec<DeliveryItem>>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for DeliveryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryManager")
            .field("deliveries", &self.deliveries.len())
            .finish_non_exhaustive()
    }
}

fn optional_description(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl DeliveryManager {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_deliveries(Vec::new(), ids)
    }

    pub fn with_deliveries(deliveries: Vec<DeliveryItem>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            deliveries: Arc::new(deliveries),
            ids,
        }
    }

    /// Create a manager holding the seed schedule
    pub fn seeded(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_deliveries(seed_deliveries(), ids)
    }

    pub fn snapshot(&self) -> Arc<Vec<DeliveryItem>> {
        Arc::clone(&self.deliveries)
    }

    pub fn deliveries(&self) -> &[DeliveryItem] {
        &self.deliveries
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DeliveryItem> {
        self.deliveries.iter().find(|d| d.id == id)
    }

    /// Deliveries narrowed by status and priority, in schedule order
    pub fn filtered(
        &self,
        status: &Selection<DeliveryStatus>,
        priority: &Selection<DeliveryPriority>,
    ) -> Vec<DeliveryItem> {
        filter_by_status_and_priority(&self.deliveries, status, priority)
    }

    /// Appends a new delivery to the end of the schedule.
    ///
    /// A blank `product_id` gets a freshly generated one, since the form
    /// only carries the product's display name.
    pub fn add_delivery(&mut self, form: DeliveryFormInput) -> ManagerResult<DeliveryItem> {
        let validation_errors = validate_delivery_form(&form);
        if !validation_errors.is_empty() {
            warn!(
                "Rejected new delivery: {} invalid field(s)",
                validation_errors.len()
            );
            return Err(ManagerError::Validation(validation_errors));
        }

        let id = self.fresh_id();
        let product_id = if form.product_id.is_empty() {
            self.ids.next_id()
        } else {
            form.product_id
        };

        let item = DeliveryItem {
            id,
            product_id,
            product_name: form.product_name,
            version: form.version,
            features: parse_features(&form.features),
            estimated_date: form.estimated_date,
            status: form.status,
            priority: form.priority,
            description: optional_description(form.description),
        };

        Arc::make_mut(&mut self.deliveries).push(item.clone());

        info!(
            "Added delivery {} for '{}' with ID {}",
            item.version, item.product_name, item.id
        );
        Ok(item)
    }

    /// Overwrites the editable fields of a delivery; id and product id stay.
    ///
    /// The form is applied as given, without required-field checks.
    pub fn edit_delivery(
        &mut self,
        id: &str,
        form: DeliveryFormInput,
    ) -> ManagerResult<DeliveryItem> {
        let Some(index) = self.deliveries.iter().position(|d| d.id == id) else {
            warn!("Delivery {} not found", id);
            return Err(ManagerError::not_found(ENTITY, id));
        };

        let deliveries = Arc::make_mut(&mut self.deliveries);
        let item = deliveries
            .get_mut(index)
            .ok_or_else(|| ManagerError::not_found(ENTITY, id))?;

        item.product_name = form.product_name;
        item.version = form.version;
        item.features = parse_features(&form.features);
        item.estimated_date = form.estimated_date;
        item.status = form.status;
        item.priority = form.priority;
        item.description = optional_description(form.description);

        info!("Updated delivery {} ({})", item.id, item.version);
        Ok(item.clone())
    }

    /// Removes a delivery. Returns `false`, leaving the schedule untouched,
    /// when no delivery has that id.
    pub fn delete_delivery(&mut self, id: &str) -> bool {
        if !self.deliveries.iter().any(|d| d.id == id) {
            debug!("Delivery {} not found, nothing to delete", id);
            return false;
        }

        Arc::make_mut(&mut self.deliveries).retain(|d| d.id != id);
        info!("Deleted delivery {}", id);
        true
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.deliveries.iter().any(|d| d.id == id) {
                return id;
            }
            debug!("Generated delivery ID {} already in use, drawing another", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use producthub_core::SequentialIdGenerator;

    fn manager() -> DeliveryManager {
        DeliveryManager::seeded(Box::new(SequentialIdGenerator::starting_at(10)))
    }

    fn form() -> DeliveryFormInput {
        DeliveryFormInput {
            product_id: "3".to_string(),
            product_name: "AI Content Generator".to_string(),
            version: "v0.9.0".to_string(),
            features: "Tone presets, Brand glossary".to_string(),
            estimated_date: "2024-09-01".to_string(),
            status: DeliveryStatus::Planned,
            priority: DeliveryPriority::Low,
            description: String::new(),
        }
    }

    #[test]
    fn test_add_delivery_appends_to_end() {
        let mut manager = manager();
        let item = manager.add_delivery(form()).unwrap();

        assert_eq!(item.id, "10");
        assert_eq!(item.product_id, "3");
        assert_eq!(item.features, vec!["Tone presets", "Brand glossary"]);
        assert_eq!(item.description, None);
        assert_eq!(manager.deliveries().last(), Some(&item));
        assert_eq!(manager.len(), 4);
    }

    #[test]
    fn test_add_delivery_generates_missing_product_id() {
        let mut manager = manager();
        let item = manager
            .add_delivery(DeliveryFormInput {
                product_id: "  ".to_string(),
                ..form()
            })
            .unwrap();

        assert_eq!(item.id, "10");
        assert_eq!(item.product_id, "11");
    }

    #[test]
    fn test_add_delivery_skips_ids_already_taken() {
        let mut manager = DeliveryManager::seeded(Box::new(SequentialIdGenerator::new()));
        let item = manager.add_delivery(form()).unwrap();
        assert_eq!(item.id, "4");
    }

    #[test]
    fn test_add_delivery_rejects_missing_fields() {
        let mut manager = manager();
        let before = manager.snapshot();

        let err = manager
            .add_delivery(DeliveryFormInput {
                version: String::new(),
                features: String::new(),
                ..form()
            })
            .unwrap_err();

        assert_eq!(err.invalid_fields(), vec!["version", "features"]);
        assert!(Arc::ptr_eq(&before, &manager.snapshot()));
    }

    #[test]
    fn test_edit_missing_delivery_is_not_found() {
        let mut manager = manager();
        let err = manager.edit_delivery("99", form()).unwrap_err();
        assert_eq!(err.to_string(), "Delivery not found: 99");
    }

    #[test]
    fn test_delete_delivery_reports_removal() {
        let mut manager = manager();
        assert!(manager.delete_delivery("2"));
        assert!(!manager.delete_delivery("2"));
        assert_eq!(manager.len(), 2);
    }
}
