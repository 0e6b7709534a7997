use producthub_core::{DeliveryItem, DeliveryStatus};
use serde::{Deserialize, Serialize};

/// Delivered versus planned feature counts for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRate {
    pub product: String,
    pub delivered: u32,
    pub planned: u32,
    /// Features shipped per month; display only
    pub velocity: f64,
}

impl DeliveryRate {
    /// Share of planned features that shipped, as a percentage rounded half
    /// up to one decimal place (5 of 8 is 62.5)
    pub fn rate_percent(&self) -> f64 {
        if self.planned == 0 {
            return 0.0;
        }
        let delivered = u64::from(self.delivered);
        let planned = u64::from(self.planned);
        let tenths = (delivered * 2000 + planned) / (planned * 2);
        tenths as f64 / 10.0
    }

    /// Derives counts from the schedule: every feature of a released item
    /// counts as delivered, every feature of any item as planned.
    ///
    /// Velocity is not tracked by the schedule and is left at zero.
    pub fn from_deliveries(product: &str, items: &[DeliveryItem]) -> Self {
        let (delivered, planned) = items
            .iter()
            .filter(|item| item.product_name == product)
            .fold((0u32, 0u32), |(delivered, planned), item| {
                let count = u32::try_from(item.features.len()).unwrap_or(u32::MAX);
                let shipped = if item.status == DeliveryStatus::Released {
                    count
                } else {
                    0
                };
                (
                    delivered.saturating_add(shipped),
                    planned.saturating_add(count),
                )
            });

        DeliveryRate {
            product: product.to_string(),
            delivered,
            planned,
            velocity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_deliveries, seed_delivery_rates};
    use rstest::rstest;

    fn rate(delivered: u32, planned: u32) -> DeliveryRate {
        DeliveryRate {
            product: "Test".to_string(),
            delivered,
            planned,
            velocity: 1.0,
        }
    }

    #[rstest]
    #[case(8, 10, 80.0)]
    #[case(12, 15, 80.0)]
    #[case(5, 8, 62.5)]
    #[case(1, 3, 33.3)]
    #[case(2, 3, 66.7)]
    #[case(0, 4, 0.0)]
    #[case(3, 0, 0.0)]
    fn test_rate_percent(#[case] delivered: u32, #[case] planned: u32, #[case] expected: f64) {
        assert_eq!(rate(delivered, planned).rate_percent(), expected);
    }

    #[test]
    fn test_seeded_rates() {
        let percents: Vec<f64> = seed_delivery_rates()
            .iter()
            .map(DeliveryRate::rate_percent)
            .collect();
        assert_eq!(percents, vec![80.0, 80.0, 62.5]);
    }

    #[test]
    fn test_from_deliveries_counts_released_features() {
        let mut items = seed_deliveries();
        items[0].status = DeliveryStatus::Released;

        let rate = DeliveryRate::from_deliveries("Customer Analytics Platform", &items);
        assert_eq!(rate.delivered, 3);
        assert_eq!(rate.planned, 6);
        assert_eq!(rate.rate_percent(), 50.0);

        let empty = DeliveryRate::from_deliveries("AI Content Generator", &items);
        assert_eq!((empty.delivered, empty.planned), (0, 0));
        assert_eq!(empty.rate_percent(), 0.0);
    }
}
