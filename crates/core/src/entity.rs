//! Inventory entity capability: identity + mutable stock quantity.

use crate::id::ItemId;

/// Capability set a type must expose to be stored in a keyed repository.
///
/// Everything else on the implementing type (brand, expiry date, ...) is opaque
/// payload the repository never inspects.
pub trait InventoryEntity {
    /// Stable identity. Must not change once the item is stored.
    fn id(&self) -> ItemId;

    /// Human-readable name, used for presentation only.
    fn name(&self) -> &str;

    /// Current stock quantity (never negative while stored).
    fn quantity(&self) -> i64;

    /// Replace the stock quantity.
    ///
    /// Repositories call this only after validating `quantity`; implementors
    /// should not expose another way to mutate it.
    fn set_quantity(&mut self, quantity: i64);
}
