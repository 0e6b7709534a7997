use producthub_core::{
    DeliveryItem, DeliveryPriority, DeliveryStatus, FeatureStage, RoadmapFeature, RoadmapPriority,
};

use crate::rates::DeliveryRate;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Schedule every session starts with
pub fn seed_deliveries() -> Vec<DeliveryItem> {
    vec![
        DeliveryItem {
            id: "1".to_string(),
            product_id: "1".to_string(),
            product_name: "Customer Analytics Platform".to_string(),
            version: "v2.1.0".to_string(),
            features: strings(&["Mobile app", "Advanced filtering", "Real-time alerts"]),
            estimated_date: "2024-04-15".to_string(),
            status: DeliveryStatus::InProgress,
            priority: DeliveryPriority::High,
            description: Some(
                "Major release focusing on mobile experience and enhanced analytics capabilities"
                    .to_string(),
            ),
        },
        DeliveryItem {
            id: "2".to_string(),
            product_id: "2".to_string(),
            product_name: "Mobile Banking App".to_string(),
            version: "v1.5.0".to_string(),
            features: strings(&["Biometric login", "Investment tracking", "Bill pay automation"]),
            estimated_date: "2024-05-01".to_string(),
            status: DeliveryStatus::Planned,
            priority: DeliveryPriority::Medium,
            description: Some("Security and financial planning enhancements".to_string()),
        },
        DeliveryItem {
            id: "3".to_string(),
            product_id: "1".to_string(),
            product_name: "Customer Analytics Platform".to_string(),
            version: "v2.2.0".to_string(),
            features: strings(&["API integrations", "Custom dashboards", "Team collaboration"]),
            estimated_date: "2024-06-30".to_string(),
            status: DeliveryStatus::Planned,
            priority: DeliveryPriority::Medium,
            description: Some(
                "Enterprise features for team collaboration and third-party integrations"
                    .to_string(),
            ),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn feature(
    id: &str,
    product: &str,
    name: &str,
    description: &str,
    target_date: &str,
    stage: FeatureStage,
    priority: RoadmapPriority,
    progress: u8,
    quarter: &str,
) -> RoadmapFeature {
    RoadmapFeature {
        id: id.to_string(),
        product: product.to_string(),
        feature: name.to_string(),
        description: description.to_string(),
        target_date: target_date.to_string(),
        stage,
        priority,
        progress,
        quarter: quarter.to_string(),
    }
}

/// Upcoming features across the portfolio
pub fn seed_roadmap() -> Vec<RoadmapFeature> {
    vec![
        feature(
            "1",
            "Customer Analytics Platform",
            "Advanced Machine Learning Insights",
            "AI-powered predictive analytics for customer behavior patterns",
            "2024-08-15",
            FeatureStage::InDevelopment,
            RoadmapPriority::High,
            65,
            "Q3 2024",
        ),
        feature(
            "2",
            "Mobile Banking App",
            "Biometric Authentication 2.0",
            "Enhanced security with face ID and voice recognition",
            "2024-07-30",
            FeatureStage::Testing,
            RoadmapPriority::Critical,
            85,
            "Q3 2024",
        ),
        feature(
            "3",
            "AI Content Generator",
            "Multi-language Support",
            "Generate content in 15+ languages with cultural adaptation",
            "2024-09-20",
            FeatureStage::Design,
            RoadmapPriority::Medium,
            25,
            "Q3 2024",
        ),
        feature(
            "4",
            "Customer Analytics Platform",
            "Real-time Dashboard Widgets",
            "Customizable widgets for live data monitoring",
            "2024-10-15",
            FeatureStage::Planning,
            RoadmapPriority::Medium,
            10,
            "Q4 2024",
        ),
        feature(
            "5",
            "Mobile Banking App",
            "Investment Portfolio Tracker",
            "Integrated investment tracking and portfolio management",
            "2024-11-30",
            FeatureStage::Planning,
            RoadmapPriority::High,
            5,
            "Q4 2024",
        ),
    ]
}

/// Historical delivery performance per product
pub fn seed_delivery_rates() -> Vec<DeliveryRate> {
    vec![
        DeliveryRate {
            product: "Customer Analytics Platform".to_string(),
            delivered: 8,
            planned: 10,
            velocity: 2.1,
        },
        DeliveryRate {
            product: "Mobile Banking App".to_string(),
            delivered: 12,
            planned: 15,
            velocity: 2.5,
        },
        DeliveryRate {
            product: "AI Content Generator".to_string(),
            delivered: 5,
            planned: 8,
            velocity: 1.8,
        },
    ]
}
