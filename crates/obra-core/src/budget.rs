//! Materials budget derivations
//!
//! Pure functions over a materials list. They never touch the store; the
//! caller routes the resulting list through
//! [`ProjectStore::replace_materials`](crate::store::ProjectStore::replace_materials).

use crate::project::{Material, MaterialDraft, MaterialId};
use rust_decimal::Decimal;
use std::fmt;

/// Why a material draft was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRejection {
    /// Name is empty or whitespace
    EmptyName,
    /// Quantity is zero or negative
    NonPositiveQuantity,
    /// Unit price is negative
    NegativeUnitPrice,
    /// The store had no resolvable active project to add to
    NoActiveProject,
    /// The line total or the budget total would not fit in a `Decimal`
    Overflow,
}

impl fmt::Display for DraftRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DraftRejection::EmptyName => "material name must not be empty",
            DraftRejection::NonPositiveQuantity => "quantity must be greater than zero",
            DraftRejection::NegativeUnitPrice => "unit price must not be negative",
            DraftRejection::NoActiveProject => "no project selected",
            DraftRejection::Overflow => "total is too large",
        };
        f.write_str(reason)
    }
}

/// Outcome of [`add_material`]
#[derive(Debug, Clone, PartialEq)]
pub enum AddMaterial {
    /// The draft became `material`, appended at the end of `materials`
    Accepted {
        materials: Vec<Material>,
        material: Material,
    },
    /// The draft was dropped; `materials` equals the input list
    Rejected {
        materials: Vec<Material>,
        reason: DraftRejection,
    },
}

impl AddMaterial {
    /// The resulting list, whether or not the draft was accepted
    pub fn materials(&self) -> &[Material] {
        match self {
            AddMaterial::Accepted { materials, .. } | AddMaterial::Rejected { materials, .. } => {
                materials
            }
        }
    }

    pub fn into_materials(self) -> Vec<Material> {
        match self {
            AddMaterial::Accepted { materials, .. } | AddMaterial::Rejected { materials, .. } => {
                materials
            }
        }
    }

    /// The newly created material, if accepted
    pub fn added(&self) -> Option<&Material> {
        match self {
            AddMaterial::Accepted { material, .. } => Some(material),
            AddMaterial::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<DraftRejection> {
        match self {
            AddMaterial::Accepted { .. } => None,
            AddMaterial::Rejected { reason, .. } => Some(*reason),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, AddMaterial::Accepted { .. })
    }
}

/// Check a draft without building anything
pub fn validate_draft(draft: &MaterialDraft) -> Result<(), DraftRejection> {
    if draft.name.trim().is_empty() {
        return Err(DraftRejection::EmptyName);
    }
    if draft.quantity <= Decimal::ZERO {
        return Err(DraftRejection::NonPositiveQuantity);
    }
    if draft.unit_price < Decimal::ZERO {
        return Err(DraftRejection::NegativeUnitPrice);
    }
    Ok(())
}

/// Sum of each material's stored `total`.
///
/// Saturates at the `Decimal` bounds. Lists grown through [`add_material`]
/// always fit; see [`checked_total`].
pub fn compute_total(materials: &[Material]) -> Decimal {
    materials
        .iter()
        .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.total()))
}

/// Sum of each material's stored `total`, or `None` on overflow
pub fn checked_total(materials: &[Material]) -> Option<Decimal> {
    materials
        .iter()
        .try_fold(Decimal::ZERO, |acc, m| acc.checked_add(m.total()))
}

/// Append a material built from `draft` to a copy of `existing`.
///
/// Invalid drafts are rejected silently: the returned list is an unchanged
/// copy of `existing` and no material is created.
pub fn add_material(existing: &[Material], draft: MaterialDraft) -> AddMaterial {
    if let Err(reason) = validate_draft(&draft) {
        return reject(existing, &draft, reason);
    }

    let id = fresh_id(existing);
    let Some(material) = Material::try_new(
        id,
        draft.name.as_str(),
        draft.unit.as_str(),
        draft.quantity,
        draft.unit_price,
    ) else {
        return reject(existing, &draft, DraftRejection::Overflow);
    };
    if checked_total(existing)
        .and_then(|total| total.checked_add(material.total()))
        .is_none()
    {
        return reject(existing, &draft, DraftRejection::Overflow);
    }

    let mut materials = Vec::with_capacity(existing.len() + 1);
    materials.extend_from_slice(existing);
    materials.push(material.clone());

    AddMaterial::Accepted {
        materials,
        material,
    }
}

fn reject(existing: &[Material], draft: &MaterialDraft, reason: DraftRejection) -> AddMaterial {
    log::debug!("Rejected material draft '{}': {}", draft.name, reason);
    AddMaterial::Rejected {
        materials: existing.to_vec(),
        reason,
    }
}

/// Copy of `existing` without the material whose id is `id`.
///
/// Absent ids leave the list unchanged.
pub fn remove_material(existing: &[Material], id: &str) -> Vec<Material> {
    existing.iter().filter(|m| m.id() != id).cloned().collect()
}

fn fresh_id(existing: &[Material]) -> MaterialId {
    loop {
        let id = MaterialId::generate();
        if existing.iter().all(|m| m.id() != &id) {
            return id;
        }
    }
}

#[cfg(test)]
#[path = "budget_test.rs"]
mod tests;
