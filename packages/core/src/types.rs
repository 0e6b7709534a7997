// ABOUTME: Entity model for products, deliveries, feedback and roadmap features
// ABOUTME: Closed enumerations carry their wire names and display labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::ParseEnumError;

/// Enumerations that can be parsed back from their wire name or display label.
trait Labelled: IntoEnumIterator + Copy + fmt::Display {
    const KIND: &'static str;

    fn wire_name(self) -> &'static str;
}

fn parse_labelled<T: Labelled>(input: &str) -> Result<T, ParseEnumError> {
    let needle = input.trim();
    T::iter()
        .find(|variant| {
            variant.wire_name().eq_ignore_ascii_case(needle)
                || variant.to_string().eq_ignore_ascii_case(needle)
        })
        .ok_or_else(|| ParseEnumError::new(T::KIND, input))
}

// ==============================================================================
// PRODUCTS
// ==============================================================================

/// Lifecycle stage of a product in the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ProductStatus {
    Active,
    Beta,
    Planned,
    Sunset,
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Planned
    }
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Beta => "Beta",
            ProductStatus::Planned => "Planned",
            ProductStatus::Sunset => "Sunset",
        }
    }
}

impl Labelled for ProductStatus {
    const KIND: &'static str = "product status";

    fn wire_name(self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

/// Next planned release attached to a product card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySchedule {
    pub next_release: String,
    pub features: Vec<String>,
    pub estimated_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pm_name: String,
    pub launch_date: String,
    pub upvotes: u32,
    pub downvotes: u32,
    /// Free-text feedback, oldest first
    pub feedback: Vec<String>,
    pub status: ProductStatus,
    pub delivery_schedule: Option<DeliverySchedule>,
}

/// Fields a user supplies when adding a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub pm_name: String,
    pub launch_date: String,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub delivery_schedule: Option<DeliverySchedule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Upvote => write!(f, "upvote"),
            VoteDirection::Downvote => write!(f, "downvote"),
        }
    }
}

impl FromStr for VoteDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upvote" | "up" | "+" => Ok(VoteDirection::Upvote),
            "downvote" | "down" | "-" => Ok(VoteDirection::Downvote),
            _ => Err(ParseEnumError::new("vote direction", s)),
        }
    }
}

// ==============================================================================
// DELIVERIES
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Planned,
    InProgress,
    Testing,
    Released,
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        DeliveryStatus::Planned
    }
}

impl DeliveryStatus {
    pub fn label(self) -> &'static str {
        match self {
            DeliveryStatus::Planned => "Planned",
            DeliveryStatus::InProgress => "In Progress",
            DeliveryStatus::Testing => "Testing",
            DeliveryStatus::Released => "Released",
        }
    }
}

impl Labelled for DeliveryStatus {
    const KIND: &'static str = "delivery status";

    fn wire_name(self) -> &'static str {
        match self {
            DeliveryStatus::Planned => "planned",
            DeliveryStatus::InProgress => "in_progress",
            DeliveryStatus::Testing => "testing",
            DeliveryStatus::Released => "released",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeliveryStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryPriority {
    Low,
    Medium,
    High,
}

impl Default for DeliveryPriority {
    fn default() -> Self {
        DeliveryPriority::Medium
    }
}

impl DeliveryPriority {
    pub fn label(self) -> &'static str {
        match self {
            DeliveryPriority::Low => "Low",
            DeliveryPriority::Medium => "Medium",
            DeliveryPriority::High => "High",
        }
    }
}

impl Labelled for DeliveryPriority {
    const KIND: &'static str = "delivery priority";

    fn wire_name(self) -> &'static str {
        match self {
            DeliveryPriority::Low => "low",
            DeliveryPriority::Medium => "medium",
            DeliveryPriority::High => "high",
        }
    }
}

impl fmt::Display for DeliveryPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeliveryPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

/// A planned release of one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItem {
    pub id: String,
    /// Weak reference; never checked against the product collection
    pub product_id: String,
    pub product_name: String,
    pub version: String,
    pub features: Vec<String>,
    pub estimated_date: String,
    pub status: DeliveryStatus,
    pub priority: DeliveryPriority,
    pub description: Option<String>,
}

/// Raw delivery form: features arrive as one comma-separated string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryFormInput {
    #[serde(default)]
    pub product_id: String,
    pub product_name: String,
    pub version: String,
    pub features: String,
    pub estimated_date: String,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub priority: DeliveryPriority,
    #[serde(default)]
    pub description: String,
}

impl From<&DeliveryItem> for DeliveryFormInput {
    fn from(item: &DeliveryItem) -> Self {
        DeliveryFormInput {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            version: item.version.clone(),
            features: crate::utils::join_features(&item.features),
            estimated_date: item.estimated_date.clone(),
            status: item.status,
            priority: item.priority,
            description: item.description.clone().unwrap_or_default(),
        }
    }
}

// ==============================================================================
// FEEDBACK
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl Labelled for Sentiment {
    const KIND: &'static str = "sentiment";

    fn wire_name(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sentiment {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    #[serde(rename = "ui/ux")]
    UiUx,
    FeatureRequest,
    Performance,
    Quality,
    Integration,
}

impl FeedbackCategory {
    pub fn label(self) -> &'static str {
        match self {
            FeedbackCategory::UiUx => "UI/UX",
            FeedbackCategory::FeatureRequest => "Feature Request",
            FeedbackCategory::Performance => "Performance",
            FeedbackCategory::Quality => "Quality",
            FeedbackCategory::Integration => "Integration",
        }
    }
}

impl Labelled for FeedbackCategory {
    const KIND: &'static str = "feedback category";

    fn wire_name(self) -> &'static str {
        match self {
            FeedbackCategory::UiUx => "ui/ux",
            FeedbackCategory::FeatureRequest => "feature_request",
            FeedbackCategory::Performance => "performance",
            FeedbackCategory::Quality => "quality",
            FeedbackCategory::Integration => "integration",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeedbackCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub feedback: String,
    pub date: String,
    pub sentiment: Sentiment,
    pub category: FeedbackCategory,
    pub user_id: String,
}

// ==============================================================================
// ROADMAP
// ==============================================================================

/// Work stage of an upcoming roadmap feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum FeatureStage {
    Planning,
    Design,
    #[serde(rename = "In Development")]
    InDevelopment,
    Testing,
}

impl FeatureStage {
    pub fn label(self) -> &'static str {
        match self {
            FeatureStage::Planning => "Planning",
            FeatureStage::Design => "Design",
            FeatureStage::InDevelopment => "In Development",
            FeatureStage::Testing => "Testing",
        }
    }
}

impl Labelled for FeatureStage {
    const KIND: &'static str = "feature stage";

    fn wire_name(self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for FeatureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeatureStage {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum RoadmapPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl RoadmapPriority {
    pub fn label(self) -> &'static str {
        match self {
            RoadmapPriority::Critical => "Critical",
            RoadmapPriority::High => "High",
            RoadmapPriority::Medium => "Medium",
            RoadmapPriority::Low => "Low",
        }
    }
}

impl Labelled for RoadmapPriority {
    const KIND: &'static str = "roadmap priority";

    fn wire_name(self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for RoadmapPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoadmapPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

/// An upcoming feature on the cross-product roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapFeature {
    pub id: String,
    /// Product name, not id
    pub product: String,
    pub feature: String,
    pub description: String,
    pub target_date: String,
    pub stage: FeatureStage,
    pub priority: RoadmapPriority,
    /// Completion percentage, 0..=100
    pub progress: u8,
    /// Quarter label such as "Q3 2024"
    pub quarter: String,
}
