pub mod analytics;
pub mod deliveries;
pub mod feedback;
pub mod output;
pub mod products;
pub mod roadmap;
