//! Warehouse demo workflow: seed, report, exercise the error paths, then save
//! and reload a snapshot.

use std::io::Write;

use anyhow::Context;
use chrono::{Days, NaiveDate};

use warehouse_core::ItemId;
use warehouse_infra::{AppConfig, JsonSnapshotStore};
use warehouse_inventory::{ElectronicItem, GroceryItem, InventoryRepository, WarehouseManager};

/// Run the full workflow, writing the human-readable report to `out`.
pub fn run(config: &AppConfig, today: NaiveDate, out: &mut impl Write) -> anyhow::Result<()> {
    let mut manager = WarehouseManager::new();
    manager.seed(today).context("seeding warehouse")?;

    writeln!(out, "Grocery items:")?;
    print_items(out, manager.groceries())?;

    writeln!(out, "\nElectronic items:")?;
    print_items(out, manager.electronics())?;

    let horizon = today
        .checked_add_days(Days::new(config.expiry_horizon_days))
        .unwrap_or(NaiveDate::MAX);
    let expired = manager.expired_groceries(horizon);
    if expired.is_empty() {
        writeln!(out, "\nNo groceries expired by {horizon}.")?;
    } else {
        let ids: Vec<String> = expired.iter().map(|id| id.to_string()).collect();
        writeln!(out, "\nGroceries expired by {horizon}: {}", ids.join(", "))?;
    }

    writeln!(out, "\nAdding a duplicate electronic item:")?;
    let duplicate = ElectronicItem::new(ItemId::new(111), "Laptop", 5, "Asus", 50);
    if let Err(err) = manager.electronics_mut().insert(duplicate) {
        writeln!(out, "Error: {err}")?;
    }

    writeln!(out, "\nRestocking electronic item 222 by {}:", config.restock_amount)?;
    match WarehouseManager::increase_stock(
        manager.electronics_mut(),
        ItemId::new(222),
        config.restock_amount,
    ) {
        Ok(qty) => writeln!(out, "Stock updated successfully (now {qty}).")?,
        Err(err) => writeln!(out, "{err}")?,
    }

    writeln!(out, "\nSetting a negative quantity on electronic item 111:")?;
    if let Err(err) = manager.electronics_mut().update_quantity(ItemId::new(111), -3) {
        writeln!(out, "Error: {err}")?;
    }

    writeln!(out, "\nRemoving grocery item 2:")?;
    remove_and_report(out, manager.groceries_mut(), ItemId::new(2))?;

    writeln!(out, "\nRemoving grocery item 101:")?;
    remove_and_report(out, manager.groceries_mut(), ItemId::new(101))?;

    let store = JsonSnapshotStore::new(&config.snapshot_path);
    store
        .save(manager.groceries())
        .context("saving grocery snapshot")?;

    let reloaded: InventoryRepository<GroceryItem> =
        store.load().context("reloading grocery snapshot")?;
    writeln!(out, "\nGrocery items reloaded from {}:", store.path().display())?;
    print_items(out, &reloaded)?;

    Ok(())
}

fn print_items<T>(out: &mut impl Write, repo: &InventoryRepository<T>) -> std::io::Result<()>
where
    T: warehouse_core::InventoryEntity,
{
    for line in WarehouseManager::format_items(repo) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn remove_and_report<T>(
    out: &mut impl Write,
    repo: &mut InventoryRepository<T>,
    id: ItemId,
) -> std::io::Result<()>
where
    T: warehouse_core::InventoryEntity,
{
    match WarehouseManager::remove_item_by_id(repo, id) {
        Ok(_) => writeln!(out, "Item removed successfully."),
        Err(err) => writeln!(out, "{err}"),
    }
}
