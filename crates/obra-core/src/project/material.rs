//! Budget line items

use super::MaterialId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material line item in a project budget.
///
/// Fields are read-only. `total` is computed from `quantity * unit_price`
/// when the material is built and can never be set on its own; an edit is a
/// remove followed by an add. A material whose total does not fit in a
/// [`Decimal`] cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MaterialRecord", into = "MaterialRecord")]
pub struct Material {
    id: MaterialId,
    name: String,
    unit: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Decimal,
}

impl Material {
    /// Build a material, computing its total.
    ///
    /// Returns `None` when `quantity * unit_price` overflows.
    pub fn try_new(
        id: MaterialId,
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Option<Self> {
        let total = quantity.checked_mul(unit_price)?;
        Some(Self {
            id,
            name: name.into(),
            unit: unit.into(),
            quantity,
            unit_price,
            total,
        })
    }

    pub fn id(&self) -> &MaterialId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit-of-measure label (e.g. "kg", "Saco 50kg")
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Always equal to `quantity * unit_price`
    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Input for a new material before it is accepted into a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
}

impl MaterialDraft {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
            unit_price,
        }
    }
}

/// Serialized shape of a material; `total` is optional on input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialRecord {
    id: MaterialId,
    name: String,
    #[serde(default)]
    unit: String,
    quantity: Decimal,
    unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total: Option<Decimal>,
}

impl TryFrom<MaterialRecord> for Material {
    type Error = String;

    fn try_from(record: MaterialRecord) -> Result<Self, Self::Error> {
        let Some(material) = Material::try_new(
            record.id.clone(),
            record.name,
            record.unit,
            record.quantity,
            record.unit_price,
        ) else {
            return Err(format!(
                "material '{}' total overflows: {} * {}",
                record.id, record.quantity, record.unit_price
            ));
        };
        match record.total {
            Some(total) if total != material.total => Err(format!(
                "material '{}' has total {} but quantity * unit price is {}",
                material.id, total, material.total
            )),
            _ => Ok(material),
        }
    }
}

impl From<Material> for MaterialRecord {
    fn from(material: Material) -> Self {
        Self {
            id: material.id,
            name: material.name,
            unit: material.unit,
            quantity: material.quantity,
            unit_price: material.unit_price,
            total: Some(material.total),
        }
    }
}

#[cfg(test)]
#[path = "material_test.rs"]
mod tests;
