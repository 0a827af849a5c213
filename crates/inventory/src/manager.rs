use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use stockledger_core::{DomainError, DomainResult, ProductId};
use stockledger_products::{Product, Transaction, TransactionKind};

use crate::alert::{AlertSeverity, AlertSink, TracingAlertSink};
use crate::status::{CheckOutcome, StatusProbe, StatusProbeError};

/// Owns the product catalog and the append-only transaction history.
///
/// The catalog maps product id to product; a separate insertion-order list
/// backs the `list_products` ordering contract. All stock mutation flows
/// through [`apply_transaction`](Self::apply_transaction).
pub struct InventoryManager {
    products: HashMap<ProductId, Product>,
    insertion_order: Vec<ProductId>,
    history: Vec<Transaction>,
    alerts: Box<dyn AlertSink>,
}

impl InventoryManager {
    /// Create a manager that delivers alerts through [`TracingAlertSink`].
    pub fn new() -> Self {
        Self::with_alert_sink(Box::new(TracingAlertSink))
    }

    /// Create a manager with an injected alert sink.
    pub fn with_alert_sink(alerts: Box<dyn AlertSink>) -> Self {
        Self {
            products: HashMap::new(),
            insertion_order: Vec::new(),
            history: Vec::new(),
            alerts,
        }
    }

    /// Register a product in the catalog.
    ///
    /// Fails with [`DomainError::DuplicateKey`] if a product with the same id
    /// is already registered; the catalog is unchanged in that case.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id_typed();
        if self.products.contains_key(&id) {
            return Err(DomainError::duplicate_key(format!(
                "product with id {id} already exists"
            )));
        }

        tracing::info!(product_id = %id, name = product.name(), "added product");
        self.insertion_order.push(id);
        self.products.insert(id, product);
        Ok(())
    }

    /// Look up a product by id. Absence is not an error.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// All registered products, in insertion order.
    pub fn list_products(&self) -> Vec<&Product> {
        self.insertion_order
            .iter()
            .map(|id| &self.products[id])
            .collect()
    }

    /// The append-only transaction history, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Apply a stock-changing transaction and record it in the history.
    ///
    /// Fails with [`DomainError::NotFound`] before any mutation if the
    /// referenced product is not registered. Otherwise the quantity change is
    /// added to the product's stock (saturating at the `i64` bounds); an
    /// `Outbound` transaction that would drive stock negative is clamped to
    /// zero (a floor, not an error). The transaction is appended to the
    /// history either way, and a single warning alert is emitted if the
    /// resulting stock is at or below the product's safety threshold.
    pub fn apply_transaction(&mut self, transaction: Transaction) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(&transaction.product_id())
            .ok_or(DomainError::NotFound)?;

        tracing::info!(
            product_id = %transaction.product_id(),
            quantity_change = transaction.quantity_change(),
            kind = ?transaction.kind(),
            "updating stock"
        );

        // Saturating: quantity changes are unbounded (Adjustment accepts any
        // magnitude), so extreme values pin at the i64 bounds instead of
        // wrapping.
        let mut stock = product
            .current_stock()
            .saturating_add(transaction.quantity_change());
        if stock < 0 && transaction.kind() == TransactionKind::Outbound {
            tracing::error!(
                product = product.name(),
                "stock went negative, capped at 0"
            );
            stock = 0;
        }
        product.set_current_stock(stock);

        let low_stock_alert = product.is_stock_low().then(|| {
            format!(
                "Stock for {} (ID: {}) is at {}, which is at or below the safety threshold of {}",
                product.name(),
                product.id_typed(),
                product.current_stock(),
                product.safety_stock_threshold()
            )
        });

        self.history.push(transaction);

        if let Some(message) = low_stock_alert {
            self.alerts.notify(AlertSeverity::Warning, &message);
        }
        Ok(())
    }

    /// The `n` products with the highest stock, strictly descending.
    ///
    /// Uses a bounded size-`n` min-heap over the catalog, O(len · log n).
    /// Equal stock levels order by ascending product id (UUIDv7, so oldest
    /// product first). `n == 0` yields an empty vector; `n` beyond the
    /// catalog size yields every product.
    pub fn top_n_by_stock(&self, n: usize) -> Vec<&Product> {
        if n == 0 {
            return Vec::new();
        }

        // Rank key: higher stock wins, smaller id wins among equal stock.
        // The heap keeps the n best keys seen, evicting its minimum.
        let mut heap: BinaryHeap<Reverse<(i64, Reverse<ProductId>)>> =
            BinaryHeap::with_capacity(n);
        for product in self.products.values() {
            let key = (product.current_stock(), Reverse(product.id_typed()));
            if heap.len() < n {
                heap.push(Reverse(key));
            } else if let Some(&Reverse(min)) = heap.peek() {
                if key > min {
                    heap.pop();
                    heap.push(Reverse(key));
                }
            }
        }

        let mut ranked: Vec<(i64, Reverse<ProductId>)> =
            heap.into_iter().map(|Reverse(key)| key).collect();
        ranked.sort_by(|a, b| b.cmp(a));
        ranked
            .into_iter()
            .map(|(_, Reverse(id))| &self.products[&id])
            .collect()
    }

    /// Check a product against the external status collaborator and map the
    /// outcome.
    ///
    /// Pure passthrough: no catalog mutation, no retry. `Ok(200)` maps to
    /// [`CheckOutcome::Processed`], `Ok(400)` and validation failures to
    /// [`CheckOutcome::FailedValidation`], runtime failures to
    /// [`CheckOutcome::ErrorRuntime`], anything else to
    /// [`CheckOutcome::Unexpected`].
    pub fn check_and_process(
        &self,
        probe: &mut dyn StatusProbe,
        product_id: &ProductId,
    ) -> CheckOutcome {
        match probe.check_status(product_id) {
            Ok(200) => CheckOutcome::Processed,
            Ok(400) => CheckOutcome::FailedValidation,
            Ok(code) => {
                tracing::warn!(code, product_id = %product_id, "unexpected status code");
                CheckOutcome::Unexpected
            }
            Err(StatusProbeError::Validation(_)) => CheckOutcome::FailedValidation,
            Err(StatusProbeError::Runtime(_)) => CheckOutcome::ErrorRuntime,
        }
    }

    /// Fetch the external status for each product in turn.
    ///
    /// Sequential and fire-and-forget: results are not aggregated and a slow
    /// item simply delays the next one.
    pub fn batch_status_check(&self, probe: &mut dyn StatusProbe, product_ids: &[ProductId]) {
        for product_id in product_ids {
            probe.fetch_status(product_id);
        }
    }
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new()
    }
}
