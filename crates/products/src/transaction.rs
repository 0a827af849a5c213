use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, Entity, ProductId, TransactionId};

/// Kind of stock movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Stock received; quantity change must be positive.
    Inbound,
    /// Stock shipped out; quantity change must be negative.
    Outbound,
    /// Manual correction; quantity change is unconstrained.
    Adjustment,
}

/// Immutable record of a stock-changing event.
///
/// Transactions are created by callers, validated here, applied by the
/// inventory manager, and appended to its history. They are never mutated or
/// deleted afterwards. No `Deserialize`: transactions enter the system
/// through [`Transaction::create`] so the sign rules always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    product_id: ProductId,
    quantity_change: i64,
    kind: TransactionKind,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction, generating a fresh identifier and timestamp.
    ///
    /// Fails with [`DomainError::Validation`] when the quantity change's sign
    /// does not match the kind: `Inbound` requires a positive change,
    /// `Outbound` a negative one.
    pub fn create(
        product_id: ProductId,
        quantity_change: i64,
        kind: TransactionKind,
    ) -> DomainResult<Self> {
        match kind {
            TransactionKind::Inbound if quantity_change <= 0 => {
                return Err(DomainError::validation(
                    "inbound transactions require a positive quantity change",
                ));
            }
            TransactionKind::Outbound if quantity_change >= 0 => {
                return Err(DomainError::validation(
                    "outbound transactions require a negative quantity change",
                ));
            }
            _ => {}
        }

        Ok(Self {
            id: TransactionId::new(),
            product_id,
            quantity_change,
            kind,
            created_at: Utc::now(),
        })
    }

    pub fn id_typed(&self) -> TransactionId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity_change(&self) -> i64 {
        self.quantity_change
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new()
    }

    #[test]
    fn inbound_with_positive_change_constructs() {
        let product_id = test_product_id();
        let tx = Transaction::create(product_id, 50, TransactionKind::Inbound).unwrap();

        assert_eq!(tx.product_id(), product_id);
        assert_eq!(tx.quantity_change(), 50);
        assert_eq!(tx.kind(), TransactionKind::Inbound);
    }

    #[test]
    fn inbound_rejects_zero_and_negative_change() {
        for change in [0, -1, -50] {
            let err =
                Transaction::create(test_product_id(), change, TransactionKind::Inbound)
                    .unwrap_err();
            match err {
                DomainError::Validation(msg) => assert!(msg.contains("inbound")),
                _ => panic!("Expected Validation error for inbound change {change}"),
            }
        }
    }

    #[test]
    fn outbound_rejects_zero_and_positive_change() {
        for change in [0, 1, 50] {
            let err =
                Transaction::create(test_product_id(), change, TransactionKind::Outbound)
                    .unwrap_err();
            match err {
                DomainError::Validation(msg) => assert!(msg.contains("outbound")),
                _ => panic!("Expected Validation error for outbound change {change}"),
            }
        }
    }

    #[test]
    fn adjustment_accepts_any_sign() {
        for change in [-100, 0, 100] {
            let tx =
                Transaction::create(test_product_id(), change, TransactionKind::Adjustment)
                    .unwrap();
            assert_eq!(tx.quantity_change(), change);
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: sign rules hold for every quantity change.
            #[test]
            fn sign_rules_hold(change in i64::MIN / 2..i64::MAX / 2) {
                let inbound =
                    Transaction::create(ProductId::new(), change, TransactionKind::Inbound);
                prop_assert_eq!(inbound.is_ok(), change > 0);

                let outbound =
                    Transaction::create(ProductId::new(), change, TransactionKind::Outbound);
                prop_assert_eq!(outbound.is_ok(), change < 0);

                let adjustment =
                    Transaction::create(ProductId::new(), change, TransactionKind::Adjustment);
                prop_assert!(adjustment.is_ok());
            }
        }
    }
}
