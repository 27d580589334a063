//! Composite identities.
//!
//! Value types with structural equality; two keys built from the same
//! fields are the same key.

use serde::{Deserialize, Serialize};

use super::TelephoneType;

/// Identity of a telephone row: at most one number per employee and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephoneKey {
    pub employee_id: i64,
    pub telephone_type: TelephoneType,
}

impl TelephoneKey {
    pub fn new(employee_id: i64, telephone_type: TelephoneType) -> Self {
        Self {
            employee_id,
            telephone_type,
        }
    }
}

impl From<TelephoneKey> for (i64, TelephoneType) {
    fn from(key: TelephoneKey) -> Self {
        (key.employee_id, key.telephone_type)
    }
}

/// Identity of an order line: one row per order and product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemKey {
    pub order_id: i64,
    pub product_id: i64,
}

impl OrderItemKey {
    pub fn new(order_id: i64, product_id: i64) -> Self {
        Self {
            order_id,
            product_id,
        }
    }
}

impl From<OrderItemKey> for (i64, i64) {
    fn from(key: OrderItemKey) -> Self {
        (key.order_id, key.product_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_compare_by_value() {
        assert_eq!(
            TelephoneKey::new(7, TelephoneType::Mobile),
            TelephoneKey::new(7, TelephoneType::Mobile)
        );
        assert_ne!(
            TelephoneKey::new(7, TelephoneType::Mobile),
            TelephoneKey::new(7, TelephoneType::Work)
        );
        assert_ne!(OrderItemKey::new(1, 2), OrderItemKey::new(2, 1));
    }

    #[test]
    fn equal_keys_collapse_in_a_set() {
        let keys: HashSet<_> = [
            TelephoneKey::new(1, TelephoneType::Home),
            TelephoneKey::new(1, TelephoneType::Home),
            TelephoneKey::new(1, TelephoneType::Work),
        ]
        .into_iter()
        .collect();

        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn key_converts_into_primary_key_tuple() {
        let tuple: (i64, i64) = OrderItemKey::new(10, 20).into();
        assert_eq!(tuple, (10, 20));
    }
}
