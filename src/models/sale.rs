//! Sale model and related types.
//!
//! This module defines the Sale struct and its associated sub-entities
//! (Product, SalesPerson, Customer) as they arrive from the retail store
//! API. Sub-entities are optional associations rather than required
//! relations: a sale with no product or no salesperson is valid input and
//! degrades to default values at the point of use.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product attached to a sale.
///
/// Only `sale_price` and `commission_percentage` feed the commission
/// computation; the descriptive fields are carried for completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product.
    #[serde(default)]
    pub id: Option<String>,
    /// The product name (e.g., "Roadster 500").
    #[serde(default)]
    pub name: Option<String>,
    /// The product manufacturer.
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// The sale price of the product.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// The commission percentage paid on a sale of this product.
    #[serde(default)]
    pub commission_percentage: Option<Decimal>,
}

/// A salesperson attached to a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPerson {
    /// Unique identifier for the salesperson.
    #[serde(default)]
    pub id: Option<String>,
    /// The salesperson's first name.
    pub first_name: String,
    /// The salesperson's last name.
    pub last_name: String,
    /// The salesperson's address.
    #[serde(default)]
    pub address: Option<String>,
    /// The salesperson's phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The date the salesperson started.
    #[serde(default)]
    pub start_date: Option<String>,
}

impl SalesPerson {
    /// Returns the display name used as the report grouping key.
    ///
    /// Note that this is a denormalized name, not a stable identifier: two
    /// distinct salespeople sharing a first and last name collide into one
    /// report row.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer attached to a sale. Not used by the report computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier for the customer.
    #[serde(default)]
    pub id: Option<String>,
    /// The customer's first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// The customer's last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// The customer's address.
    #[serde(default)]
    pub address: Option<String>,
}

/// A single sale transaction.
///
/// The `date` field is kept as the raw string from the upstream API so that
/// unparseable values degrade to "no quarter" instead of failing
/// deserialization of the whole sale list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier for the sale.
    #[serde(default)]
    pub id: Option<String>,
    /// The transaction timestamp, as received.
    #[serde(default)]
    pub date: Option<String>,
    /// The product sold, if known.
    #[serde(default)]
    pub product: Option<Product>,
    /// The salesperson credited with the sale, if known.
    #[serde(default)]
    pub sales_person: Option<SalesPerson>,
    /// The purchasing customer, if known.
    #[serde(default)]
    pub customer: Option<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_sale() {
        let json = r#"{
            "id": "sale_001",
            "date": "2024-02-10",
            "product": {
                "id": "prod_001",
                "name": "Roadster 500",
                "manufacturer": "Velocity",
                "salePrice": 1000,
                "commissionPercentage": 5
            },
            "salesPerson": {
                "id": "sp_001",
                "firstName": "Ann",
                "lastName": "Lee",
                "address": "12 Hill St",
                "phone": "555-0101",
                "startDate": "2020-01-01"
            },
            "customer": {
                "firstName": "Cam",
                "lastName": "Diaz"
            }
        }"#;

        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.id.as_deref(), Some("sale_001"));
        assert_eq!(sale.date.as_deref(), Some("2024-02-10"));

        let product = sale.product.unwrap();
        assert_eq!(product.sale_price, Some(dec("1000")));
        assert_eq!(product.commission_percentage, Some(dec("5")));

        let person = sale.sales_person.unwrap();
        assert_eq!(person.display_name(), "Ann Lee");
    }

    #[test]
    fn test_deserialize_sale_with_missing_associations() {
        let json = r#"{ "date": "2024-02-10" }"#;

        let sale: Sale = serde_json::from_str(json).unwrap();
        assert!(sale.product.is_none());
        assert!(sale.sales_person.is_none());
        assert!(sale.customer.is_none());
    }

    #[test]
    fn test_deserialize_sale_with_null_product() {
        let json = r#"{ "date": "2024-02-10", "product": null }"#;

        let sale: Sale = serde_json::from_str(json).unwrap();
        assert!(sale.product.is_none());
    }

    #[test]
    fn test_sale_price_accepts_string_decimals() {
        let json = r#"{
            "date": "2024-02-10",
            "product": { "salePrice": "1499.99", "commissionPercentage": "2.5" }
        }"#;

        let sale: Sale = serde_json::from_str(json).unwrap();
        let product = sale.product.unwrap();
        assert_eq!(product.sale_price, Some(dec("1499.99")));
        assert_eq!(product.commission_percentage, Some(dec("2.5")));
    }

    #[test]
    fn test_sale_roundtrip() {
        let sale = Sale {
            id: Some("sale_001".to_string()),
            date: Some("2024-02-10".to_string()),
            product: Some(Product {
                id: None,
                name: Some("Roadster 500".to_string()),
                manufacturer: None,
                sale_price: Some(dec("1000")),
                commission_percentage: Some(dec("5")),
            }),
            sales_person: Some(SalesPerson {
                id: None,
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                address: None,
                phone: None,
                start_date: None,
            }),
            customer: None,
        };

        let json = serde_json::to_string(&sale).unwrap();
        let deserialized: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(sale, deserialized);
    }
}
