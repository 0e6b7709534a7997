use producthub_core::Product;

/// Share of upvotes among all votes as a whole percentage, rounded half up.
///
/// Products nobody has voted on report 0.
pub fn compute_satisfaction(product: &Product) -> u8 {
    satisfaction_percent(product.upvotes, product.downvotes)
}

pub fn satisfaction_percent(upvotes: u32, downvotes: u32) -> u8 {
    let up = u64::from(upvotes);
    let total = up + u64::from(downvotes);
    if total == 0 {
        return 0;
    }

    // floor(up / total * 100 + 0.5) in integer arithmetic
    let rounded = (up * 200 + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}
