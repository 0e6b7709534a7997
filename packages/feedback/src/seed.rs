use producthub_core::{FeedbackCategory, FeedbackItem, Sentiment};

struct Entry {
    id: &'static str,
    product_id: &'static str,
    product_name: &'static str,
    feedback: &'static str,
    date: &'static str,
    sentiment: Sentiment,
    category: FeedbackCategory,
    user_id: &'static str,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        id: "1",
        product_id: "1",
        product_name: "Customer Analytics Platform",
        feedback: "Amazing insights and very intuitive interface! The dashboard has completely transformed how we analyze customer data.",
        date: "2024-12-01",
        sentiment: Sentiment::Positive,
        category: FeedbackCategory::UiUx,
        user_id: "user123",
    },
    Entry {
        id: "2",
        product_id: "1",
        product_name: "Customer Analytics Platform",
        feedback: "Would love to see more customization options for the dashboard widgets. Current templates are good but limited.",
        date: "2024-11-28",
        sentiment: Sentiment::Neutral,
        category: FeedbackCategory::FeatureRequest,
        user_id: "user456",
    },
    Entry {
        id: "3",
        product_id: "2",
        product_name: "Mobile Banking App",
        feedback: "Love the UI/UX design! It's clean, modern and very easy to navigate. Best banking app I've used.",
        date: "2024-12-02",
        sentiment: Sentiment::Positive,
        category: FeedbackCategory::UiUx,
        user_id: "user789",
    },
    Entry {
        id: "4",
        product_id: "2",
        product_name: "Mobile Banking App",
        feedback: "Fast and reliable transactions. No issues with performance even during peak hours.",
        date: "2024-11-30",
        sentiment: Sentiment::Positive,
        category: FeedbackCategory::Performance,
        user_id: "user101",
    },
    Entry {
        id: "5",
        product_id: "3",
        product_name: "AI Content Generator",
        feedback: "Still needs refinement in content accuracy. Sometimes generates off-brand content that requires heavy editing.",
        date: "2024-11-25",
        sentiment: Sentiment::Negative,
        category: FeedbackCategory::Quality,
        user_id: "user202",
    },
    Entry {
        id: "6",
        product_id: "3",
        product_name: "AI Content Generator",
        feedback: "Good concept overall, but could use better integration with our existing content management system.",
        date: "2024-11-22",
        sentiment: Sentiment::Neutral,
        category: FeedbackCategory::Integration,
        user_id: "user303",
    },
];

/// Feedback collected before the session started
pub fn seed_feedback() -> Vec<FeedbackItem> {
    ENTRIES
        .iter()
        .map(|entry| FeedbackItem {
            id: entry.id.to_string(),
            product_id: entry.product_id.to_string(),
            product_name: entry.product_name.to_string(),
            feedback: entry.feedback.to_string(),
            date: entry.date.to_string(),
            sentiment: entry.sentiment,
            category: entry.category,
            user_id: entry.user_id.to_string(),
        })
        .collect()
}
