// ABOUTME: Badge variants for every status-like enumeration
// ABOUTME: Exhaustive lookup tables consumed by the presentation layer

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::constants::{SATISFACTION_EXCELLENT_MIN, SATISFACTION_GOOD_MIN};
use crate::types::{
    DeliveryPriority, DeliveryStatus, FeatureStage, ProductStatus, RoadmapPriority, Sentiment,
};

/// Visual emphasis of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub variant: BadgeVariant,
    pub label: &'static str,
}

impl Badge {
    const fn new(variant: BadgeVariant, label: &'static str) -> Self {
        Badge { variant, label }
    }
}

impl ProductStatus {
    pub fn badge(self) -> Badge {
        let variant = match self {
            ProductStatus::Active => BadgeVariant::Default,
            ProductStatus::Beta => BadgeVariant::Secondary,
            ProductStatus::Planned => BadgeVariant::Outline,
            ProductStatus::Sunset => BadgeVariant::Destructive,
        };
        Badge::new(variant, self.label())
    }
}

impl DeliveryStatus {
    pub fn badge(self) -> Badge {
        let variant = match self {
            DeliveryStatus::Planned => BadgeVariant::Outline,
            DeliveryStatus::InProgress => BadgeVariant::Secondary,
            DeliveryStatus::Testing | DeliveryStatus::Released => BadgeVariant::Default,
        };
        Badge::new(variant, self.label())
    }
}

impl DeliveryPriority {
    pub fn badge(self) -> Badge {
        let variant = match self {
            DeliveryPriority::High => BadgeVariant::Destructive,
            DeliveryPriority::Medium => BadgeVariant::Secondary,
            DeliveryPriority::Low => BadgeVariant::Outline,
        };
        Badge::new(variant, self.label())
    }
}

impl Sentiment {
    pub fn badge(self) -> Badge {
        let variant = match self {
            Sentiment::Positive => BadgeVariant::Default,
            Sentiment::Negative => BadgeVariant::Destructive,
            Sentiment::Neutral => BadgeVariant::Secondary,
        };
        Badge::new(variant, self.label())
    }
}

impl RoadmapPriority {
    pub fn badge(self) -> Badge {
        let variant = match self {
            RoadmapPriority::Critical => BadgeVariant::Destructive,
            RoadmapPriority::High => BadgeVariant::Default,
            RoadmapPriority::Medium => BadgeVariant::Secondary,
            RoadmapPriority::Low => BadgeVariant::Outline,
        };
        Badge::new(variant, self.label())
    }
}

impl FeatureStage {
    pub fn badge(self) -> Badge {
        let variant = match self {
            FeatureStage::Testing | FeatureStage::InDevelopment => BadgeVariant::Default,
            FeatureStage::Design | FeatureStage::Planning => BadgeVariant::Secondary,
        };
        Badge::new(variant, self.label())
    }
}

/// Rating band for a product's satisfaction percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionTier {
    Excellent,
    Good,
    NeedsAttention,
}

impl SatisfactionTier {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= SATISFACTION_EXCELLENT_MIN {
            SatisfactionTier::Excellent
        } else if percent >= SATISFACTION_GOOD_MIN {
            SatisfactionTier::Good
        } else {
            SatisfactionTier::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SatisfactionTier::Excellent => "Excellent",
            SatisfactionTier::Good => "Good",
            SatisfactionTier::NeedsAttention => "Needs Attention",
        }
    }

    pub fn badge(self) -> Badge {
        let variant = match self {
            SatisfactionTier::Excellent => BadgeVariant::Default,
            SatisfactionTier::Good => BadgeVariant::Secondary,
            SatisfactionTier::NeedsAttention => BadgeVariant::Destructive,
        };
        Badge::new(variant, self.label())
    }
}
