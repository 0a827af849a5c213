use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, Entity, ProductId};

/// Default safety stock threshold for products that do not specify one.
pub const DEFAULT_SAFETY_STOCK_THRESHOLD: i64 = 10;

/// Input record for creating a [`Product`].
///
/// `sku`, `name` and `price` are required; the remaining fields carry
/// defaults (no description, zero stock, threshold of
/// [`DEFAULT_SAFETY_STOCK_THRESHOLD`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents). Must be non-zero.
    pub price: u64,
    pub description: Option<String>,
    pub initial_stock: i64,
    pub safety_stock_threshold: i64,
}

impl NewProduct {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: u64) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            description: None,
            initial_stock: 0,
            safety_stock_threshold: DEFAULT_SAFETY_STOCK_THRESHOLD,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_initial_stock(mut self, stock: i64) -> Self {
        self.initial_stock = stock;
        self
    }

    pub fn with_safety_stock_threshold(mut self, threshold: i64) -> Self {
        self.safety_stock_threshold = threshold;
        self
    }
}

/// Catalog entity: Product.
///
/// Identity and metadata are fixed at construction; `current_stock` is the
/// only mutable field and is updated exclusively by the inventory manager
/// when it applies transactions. No `Deserialize`: entities enter the system
/// through [`Product::create`] so the validation invariants always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    description: Option<String>,
    current_stock: i64,
    safety_stock_threshold: i64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product, generating a fresh identifier and timestamp.
    ///
    /// Fails with [`DomainError::Validation`] if the SKU is empty or contains
    /// non-alphanumeric characters, the price is zero, or the safety stock
    /// threshold is negative. No partial object is produced on failure.
    pub fn create(new: NewProduct) -> DomainResult<Self> {
        if new.price == 0 {
            return Err(DomainError::validation("product price must be positive"));
        }
        if new.safety_stock_threshold < 0 {
            return Err(DomainError::validation(
                "safety stock threshold cannot be negative",
            ));
        }
        if new.sku.is_empty() || !new.sku.chars().all(char::is_alphanumeric) {
            return Err(DomainError::validation("SKU must be alphanumeric"));
        }

        Ok(Self {
            id: ProductId::new(),
            sku: new.sku,
            name: new.name,
            price: new.price,
            description: new.description,
            current_stock: new.initial_stock,
            safety_stock_threshold: new.safety_stock_threshold,
            created_at: Utc::now(),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn safety_stock_threshold(&self) -> i64 {
        self.safety_stock_threshold
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True when current stock is at or below the safety threshold.
    pub fn is_stock_low(&self) -> bool {
        self.current_stock <= self.safety_stock_threshold
    }

    /// Overwrite the stock level.
    ///
    /// Stock changes flow through the inventory manager's transaction
    /// application; this is the mutation point it uses.
    pub fn set_current_stock(&mut self, stock: i64) {
        self.current_stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
