//! Warehouse workflow over two independent repositories.

use chrono::{Days, NaiveDate};

use warehouse_core::{InventoryEntity, ItemId, RepositoryResult, apply_delta};

use crate::item::{ElectronicItem, GroceryItem};
use crate::repository::InventoryRepository;

/// Owns one repository per item category. Each has its own identity space.
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: InventoryRepository<ElectronicItem>,
    groceries: InventoryRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate both repositories with the demo stock.
    ///
    /// Grocery expiry dates are relative to `today`.
    pub fn seed(&mut self, today: NaiveDate) -> RepositoryResult<()> {
        self.electronics
            .insert(ElectronicItem::new(ItemId::new(111), "Laptop", 5, "Asus", 50))?;
        self.electronics
            .insert(ElectronicItem::new(ItemId::new(222), "Printer", 10, "Samsung", 150))?;

        self.groceries
            .insert(GroceryItem::new(ItemId::new(101), "Bread", 40, days_after(today, 10)))?;
        self.groceries
            .insert(GroceryItem::new(ItemId::new(102), "Cereals", 90, days_after(today, 33)))?;

        tracing::info!(
            electronics = self.electronics.len(),
            groceries = self.groceries.len(),
            "warehouse seeded"
        );
        Ok(())
    }

    pub fn electronics(&self) -> &InventoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut InventoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &InventoryRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut InventoryRepository<GroceryItem> {
        &mut self.groceries
    }

    /// Ids of groceries past their expiry date on `on`, ascending.
    pub fn expired_groceries(&self, on: NaiveDate) -> Vec<ItemId> {
        let mut expired: Vec<ItemId> = self
            .groceries
            .iter()
            .filter(|item| item.is_expired(on))
            .map(|item| item.id())
            .collect();
        expired.sort();
        expired
    }

    /// Add `amount` units to the item stored under `id` and return the new
    /// quantity. A negative `amount` draws stock down; the result must stay
    /// non-negative.
    pub fn increase_stock<T: InventoryEntity>(
        repo: &mut InventoryRepository<T>,
        id: ItemId,
        amount: i64,
    ) -> RepositoryResult<i64> {
        let current = repo.get_by_id(id)?.quantity();
        let next = apply_delta(current, amount)?;
        repo.update_quantity(id, next)?;
        tracing::info!(%id, amount, quantity = next, "stock updated");
        Ok(next)
    }

    pub fn remove_item_by_id<T: InventoryEntity>(
        repo: &mut InventoryRepository<T>,
        id: ItemId,
    ) -> RepositoryResult<T> {
        let item = repo.remove(id)?;
        tracing::info!(%id, "item removed");
        Ok(item)
    }

    /// One display line per item, ordered by id.
    pub fn format_items<T: InventoryEntity>(repo: &InventoryRepository<T>) -> Vec<String> {
        let mut items: Vec<&T> = repo.iter().collect();
        items.sort_by_key(|item| item.id());
        items
            .into_iter()
            .map(|item| {
                format!(
                    "{} - Name: {}, Quantity: {}",
                    item.id(),
                    item.name(),
                    item.quantity()
                )
            })
            .collect()
    }
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
