// ABOUTME: Session state shared by every dashboard command
// ABOUTME: Bundles the managers and turns their results into user notifications

use chrono::NaiveDate;
use producthub_core::{
    DeliveryFormInput, DeliveryItem, DeliveryPriority, DeliveryStatus, ManagerError, Product,
    ProductInput, RoadmapFeature, Selection, VoteDirection,
};
use producthub_delivery::{
    seed_delivery_rates, DeliveryManager, DeliveryRate, Roadmap, RoadmapFilter, TimelineEntry,
};
use producthub_feedback::{FeedbackFilter, FeedbackItem, FeedbackStats, FeedbackView};
use producthub_products::{
    ranked_by_satisfaction, satisfaction_breakdown, PortfolioSummary, ProductsManager,
    SatisfactionEntry,
};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::notification::{
    Notifier, DELIVERY_ADDED, DELIVERY_DELETED, DELIVERY_UPDATED, FEEDBACK_SUBMITTED,
    PRODUCT_ADDED, REQUIRED_FIELDS,
};

/// Landing page numbers plus the per-product satisfaction list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub summary: PortfolioSummary,
    pub recent_products: Vec<SatisfactionEntry>,
}

/// Everything shown on the analytics page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: PortfolioSummary,
    pub ranking: Vec<SatisfactionEntry>,
    pub feedback: FeedbackStats,
}

/// The feedback page: filtered items and statistics over all of them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPage {
    pub items: Vec<FeedbackItem>,
    pub stats: FeedbackStats,
}

#[derive(Debug)]
pub struct DashboardState {
    pub products: ProductsManager,
    pub deliveries: DeliveryManager,
    pub roadmap: Roadmap,
    pub rates: Vec<DeliveryRate>,
    pub feedback: FeedbackView,
    today: NaiveDate,
}

fn report_validation<T>(
    result: Result<T, ManagerError>,
    notifier: &mut dyn Notifier,
) -> AppResult<T> {
    result.map_err(|error| {
        if let ManagerError::Validation(_) = error {
            notifier.error(REQUIRED_FIELDS);
        }
        AppError::from(error)
    })
}

impl DashboardState {
    /// Builds the session from configuration: seeded or empty collections,
    /// one id generator per collection and the effective date.
    pub fn from_config(config: &Config) -> Self {
        let ids = config.id_strategy;
        let today = config.today();

        if config.seed {
            DashboardState {
                products: ProductsManager::seeded(ids.generator()),
                deliveries: DeliveryManager::seeded(ids.generator()),
                roadmap: Roadmap::seeded(),
                rates: seed_delivery_rates(),
                feedback: FeedbackView::seeded(),
                today,
            }
        } else {
            DashboardState {
                products: ProductsManager::new(ids.generator()),
                deliveries: DeliveryManager::new(ids.generator()),
                roadmap: Roadmap::default(),
                rates: Vec::new(),
                feedback: FeedbackView::default(),
                today,
            }
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // ==========================================================================
    // PRODUCTS
    // ==========================================================================

    pub fn overview(&self) -> Overview {
        Overview {
            summary: PortfolioSummary::from_products(self.products.products()),
            recent_products: satisfaction_breakdown(self.products.products()),
        }
    }

    pub fn product_detail(&self, id: &str) -> AppResult<&Product> {
        self.products
            .get_by_id(id)
            .ok_or_else(|| AppError::ProductNotFound(id.to_string()))
    }

    pub fn add_product(
        &mut self,
        input: ProductInput,
        notifier: &mut dyn Notifier,
    ) -> AppResult<Product> {
        let product = report_validation(self.products.add_product(input), notifier)?;
        notifier.success(PRODUCT_ADDED);
        Ok(product)
    }

    pub fn vote(&mut self, id: &str, direction: VoteDirection) -> AppResult<Product> {
        Ok(self.products.vote(id, direction)?)
    }

    /// Blank feedback is rejected without a toast, as the feedback box does
    pub fn submit_feedback(
        &mut self,
        id: &str,
        text: &str,
        notifier: &mut dyn Notifier,
    ) -> AppResult<Product> {
        let product = self.products.add_feedback(id, text)?;
        notifier.success(FEEDBACK_SUBMITTED);
        Ok(product)
    }

    // ==========================================================================
    // DELIVERIES
    // ==========================================================================

    pub fn deliveries(
        &self,
        status: &Selection<DeliveryStatus>,
        priority: &Selection<DeliveryPriority>,
    ) -> Vec<DeliveryItem> {
        self.deliveries.filtered(status, priority)
    }

    pub fn add_delivery(
        &mut self,
        form: DeliveryFormInput,
        notifier: &mut dyn Notifier,
    ) -> AppResult<DeliveryItem> {
        let item = report_validation(self.deliveries.add_delivery(form), notifier)?;
        notifier.success(DELIVERY_ADDED);
        Ok(item)
    }

    /// The form an edit starts from
    pub fn delivery_form(&self, id: &str) -> AppResult<DeliveryFormInput> {
        self.deliveries
            .get_by_id(id)
            .map(DeliveryFormInput::from)
            .ok_or_else(|| AppError::from(ManagerError::not_found("Delivery", id)))
    }

    pub fn edit_delivery(
        &mut self,
        id: &str,
        form: DeliveryFormInput,
        notifier: &mut dyn Notifier,
    ) -> AppResult<DeliveryItem> {
        let item = self.deliveries.edit_delivery(id, form)?;
        notifier.success(DELIVERY_UPDATED);
        Ok(item)
    }

    /// Deleting an unknown id changes nothing and stays silent
    pub fn delete_delivery(&mut self, id: &str, notifier: &mut dyn Notifier) -> bool {
        let removed = self.deliveries.delete_delivery(id);
        if removed {
            notifier.success(DELIVERY_DELETED);
        }
        removed
    }

    // ==========================================================================
    // ROADMAP
    // ==========================================================================

    pub fn roadmap(&self, filter: &RoadmapFilter) -> Vec<RoadmapFeature> {
        self.roadmap.filter(filter)
    }

    pub fn timeline(&self, product: &str) -> Vec<TimelineEntry> {
        self.roadmap.timeline(product, self.today)
    }

    // ==========================================================================
    // FEEDBACK & ANALYTICS
    // ==========================================================================

    pub fn feedback_page(&mut self, filter: FeedbackFilter) -> FeedbackPage {
        self.feedback.set_filter(filter);
        FeedbackPage {
            items: self.feedback.visible(),
            stats: self.feedback.stats(),
        }
    }

    pub fn analytics(&self) -> AnalyticsReport {
        let products = self.products.products();
        debug!("Building analytics for {} products", products.len());
        AnalyticsReport {
            summary: PortfolioSummary::from_products(products),
            ranking: ranked_by_satisfaction(products),
            feedback: self.feedback.stats(),
        }
    }
}
