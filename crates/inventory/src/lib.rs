//! Inventory domain module.
//!
//! Keyed repositories with validated mutation, the concrete item kinds stored
//! in them, and the warehouse workflow on top. Pure domain logic (no IO).

pub mod item;
pub mod manager;
pub mod repository;
pub mod shared;

pub use item::{ElectronicItem, GroceryItem};
pub use manager::WarehouseManager;
pub use repository::InventoryRepository;
pub use shared::SharedRepository;
