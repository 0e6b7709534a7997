use producthub_core::Product;

/// Case-insensitive substring match against name, description or PM name
pub fn matches_search(product: &Product, term: &str) -> bool {
    let needle = term.to_lowercase();
    contains_lowercase(product, &needle)
}

/// Products matching `term`, in collection order. An empty term keeps everything.
pub fn search_products(products: &[Product], term: &str) -> Vec<Product> {
    if term.is_empty() {
        return products.to_vec();
    }

    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| contains_lowercase(product, &needle))
        .cloned()
        .collect()
}

fn contains_lowercase(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.pm_name.to_lowercase().contains(needle)
}
