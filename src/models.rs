use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ValidationError;

/// Server-assigned identifier of an ATK record.
pub type AtkId = u64;

/// One active inventory record as returned by `GET /api/atk`.
///
/// The backend speaks Indonesian field names (`nama`, `jenis`, `qty`);
/// the English names are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtkItem {
    pub id: AtkId,
    #[serde(rename = "nama", alias = "name")]
    pub name: String,
    #[serde(rename = "jenis", alias = "category")]
    pub category: String,
    #[serde(rename = "qty", alias = "quantity")]
    pub quantity: u32,
}

impl AtkItem {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.quantity)
    }
}

/// Request body for create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtkPayload {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "jenis")]
    pub category: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

/// Stock colouring used by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

impl StockLevel {
    pub const LOW_THRESHOLD: u32 = 5;
    pub const MEDIUM_THRESHOLD: u32 = 20;

    pub fn from_quantity(quantity: u32) -> Self {
        if quantity < Self::LOW_THRESHOLD {
            StockLevel::Low
        } else if quantity < Self::MEDIUM_THRESHOLD {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Low => "rendah",
            StockLevel::Medium => "sedang",
            StockLevel::High => "aman",
        }
    }
}

/// Whether the modal form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit,
}

impl EditMode {
    pub fn title(&self) -> &'static str {
        match self {
            EditMode::Create => "Tambah ATK Baru",
            EditMode::Edit => "Edit ATK",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            EditMode::Create => "Tambah",
            EditMode::Edit => "Simpan Perubahan",
        }
    }
}

/// Working copy behind the modal form.
///
/// Fields hold raw user input; `quantity` stays a string until [`EditBuffer::validate`]
/// so that half-typed values never crash the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    pub id: AtkId,
    pub name: String,
    pub category: String,
    pub quantity: String,
}

impl EditBuffer {
    /// Blank template used by "create": `id = 0`, empty fields, quantity `0`.
    pub fn blank() -> Self {
        Self {
            id: 0,
            name: String::new(),
            category: String::new(),
            quantity: "0".to_string(),
        }
    }

    pub fn from_item(item: &AtkItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    /// Checks required fields and turns the buffer into a request body.
    pub fn validate(&self) -> Result<AtkPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let raw_quantity = self.quantity.trim();
        let quantity = raw_quantity
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidQuantity(raw_quantity.to_string()))?;
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity(quantity));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| ValidationError::InvalidQuantity(raw_quantity.to_string()))?;

        Ok(AtkPayload {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
        })
    }
}

/// Summary cards shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_stock: u64,
    pub distinct_categories: usize,
}

impl InventoryStats {
    pub fn from_items(items: &[AtkItem]) -> Self {
        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
        Self {
            total_items: items.len(),
            total_stock: items.iter().map(|i| u64::from(i.quantity)).sum(),
            distinct_categories: categories.len(),
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
