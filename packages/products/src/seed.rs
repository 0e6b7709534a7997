use producthub_core::{DeliverySchedule, Product, ProductStatus};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Portfolio every session starts with
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Customer Analytics Platform".to_string(),
            description: "Advanced analytics platform providing real-time insights into customer behavior and product usage patterns.".to_string(),
            pm_name: "Sarah Johnson".to_string(),
            launch_date: "2024-01-15".to_string(),
            upvotes: 24,
            downvotes: 3,
            feedback: strings(&["Great insights dashboard", "Would love mobile app"]),
            status: ProductStatus::Active,
            delivery_schedule: Some(DeliverySchedule {
                next_release: "v2.1.0".to_string(),
                features: strings(&["Mobile app", "Advanced filtering", "Real-time alerts"]),
                estimated_date: "2024-04-15".to_string(),
            }),
        },
        Product {
            id: "2".to_string(),
            name: "Mobile Banking App".to_string(),
            description: "Next-generation mobile banking application with AI-powered financial insights and seamless user experience.".to_string(),
            pm_name: "Michael Chen".to_string(),
            launch_date: "2024-03-22".to_string(),
            upvotes: 18,
            downvotes: 2,
            feedback: strings(&["Love the UI/UX", "Fast and reliable"]),
            status: ProductStatus::Active,
            delivery_schedule: Some(DeliverySchedule {
                next_release: "v1.5.0".to_string(),
                features: strings(&["Biometric login", "Investment tracking", "Bill pay automation"]),
                estimated_date: "2024-05-01".to_string(),
            }),
        },
        Product {
            id: "3".to_string(),
            name: "AI Content Generator".to_string(),
            description: "Machine learning powered content generation tool for marketing teams to create engaging content at scale.".to_string(),
            pm_name: "Emily Rodriguez".to_string(),
            launch_date: "2024-06-10".to_string(),
            upvotes: 12,
            downvotes: 5,
            feedback: strings(&["Still needs refinement", "Good concept"]),
            status: ProductStatus::Beta,
            delivery_schedule: None,
        },
    ]
}
