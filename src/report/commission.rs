//! Per-sale commission calculation.
//!
//! This module computes the commission earned on a single sale from its
//! product's sale price and commission percentage.

use rust_decimal::Decimal;

use crate::models::Sale;

/// Computes the commission for a single sale.
///
/// The commission is `sale_price × commission_percentage / 100`, with an
/// absent product, price, or percentage defaulting to zero. The result is
/// kept at full precision: rounding to two decimal places happens once per
/// summary row at report emission, not per sale, so that rounding error
/// does not compound across accumulation.
///
/// # Example
///
/// ```
/// use commission_engine::models::{Product, Sale};
/// use commission_engine::report::commission_of;
/// use rust_decimal::Decimal;
///
/// let sale = Sale {
///     id: None,
///     date: Some("2024-02-10".to_string()),
///     product: Some(Product {
///         id: None,
///         name: None,
///         manufacturer: None,
///         sale_price: Some(Decimal::new(1000, 0)),
///         commission_percentage: Some(Decimal::new(5, 0)),
///     }),
///     sales_person: None,
///     customer: None,
/// };
/// assert_eq!(commission_of(&sale), Decimal::new(50, 0));
/// ```
pub fn commission_of(sale: &Sale) -> Decimal {
    let Some(product) = &sale.product else {
        return Decimal::ZERO;
    };

    let price = product.sale_price.unwrap_or(Decimal::ZERO);
    let percent = product.commission_percentage.unwrap_or(Decimal::ZERO);

    price * percent / Decimal::ONE_HUNDRED
}
