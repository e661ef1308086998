use crate::{
    dto::search::Filter,
    models::{Numeric, Product},
};

/// Keeps the products that satisfy every active constraint, in input order.
pub fn search<I>(products: I, filter: &Filter) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    products
        .into_iter()
        .filter(|product| matches(product, filter))
        .collect()
}

pub fn matches(product: &Product, filter: &Filter) -> bool {
    // An empty category constrains nothing.
    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        if product.category.as_deref() != Some(category) {
            return false;
        }
    }

    // Unknown or unreadable prices are never excluded by a price bound.
    let price = product.price.and_then(|p| p.as_f64());
    if let (Some(min), Some(price)) = (filter.min_price, price) {
        if price < min {
            return false;
        }
    }
    if let (Some(max), Some(price)) = (filter.max_price, price) {
        if price > max {
            return false;
        }
    }

    if filter.in_stock_only == Some(true) && !in_stock(product.stock) {
        return false;
    }

    true
}

fn in_stock(stock: Option<Numeric>) -> bool {
    matches!(stock, Some(Numeric::Value(qty)) if qty > 0.0)
}
