use super::*;
use rust_decimal_macros::dec;

fn seeded() -> Vec<Material> {
    vec![
        Material::try_new(MaterialId::new("m1"), "Cimento CP-II", "Saco 50kg", dec!(5000), dec!(35.00)).unwrap(),
        Material::try_new(MaterialId::new("m2"), "Aço CA-50 10mm", "kg", dec!(12000), dec!(8.50)).unwrap(),
    ]
}

fn brick() -> MaterialDraft {
    MaterialDraft::new("Brick", "un", dec!(1000), dec!(1.2))
}

#[test]
fn test_compute_total() {
    assert_eq!(compute_total(&seeded()), dec!(277000));
    assert_eq!(compute_total(&[]), dec!(0));
}

#[test]
fn test_compute_total_is_order_independent() {
    let mut materials = seeded();
    materials.push(Material::try_new(MaterialId::new("m3"), "Areia", "m³", dec!(3.5), dec!(119.99)).unwrap());
    let forward = compute_total(&materials);
    materials.reverse();
    assert_eq!(compute_total(&materials), forward);
    materials.rotate_left(1);
    assert_eq!(compute_total(&materials), forward);
}

#[test]
fn test_add_material_appends_with_exact_total() {
    let outcome = add_material(&seeded(), brick());
    assert!(outcome.is_accepted());

    let added = outcome.added().unwrap().clone();
    assert_eq!(added.total(), dec!(1200));
    assert_eq!(added.total(), added.quantity() * added.unit_price());
    assert_ne!(added.id(), "m1");
    assert_ne!(added.id(), "m2");

    let materials = outcome.into_materials();
    assert_eq!(materials.len(), 3);
    assert_eq!(materials.last(), Some(&added));
    assert_eq!(&materials[..2], &seeded()[..]);
    assert_eq!(compute_total(&materials), dec!(278200));
}

#[test]
fn test_add_material_rejects_empty_name() {
    let existing = seeded();
    let outcome = add_material(&existing, MaterialDraft::new("", "un", dec!(10), dec!(1)));
    assert_eq!(outcome.rejection(), Some(DraftRejection::EmptyName));
    assert!(outcome.added().is_none());
    assert_eq!(outcome.materials(), &existing[..]);
}

#[test]
fn test_add_material_treats_whitespace_only_name_as_empty() {
    let existing = seeded();
    for name in ["   ", "\t", " \n "] {
        let outcome = add_material(&existing, MaterialDraft::new(name, "un", dec!(10), dec!(1)));
        assert_eq!(outcome.rejection(), Some(DraftRejection::EmptyName));
        assert_eq!(outcome.materials(), &existing[..]);
    }
}

#[test]
fn test_add_material_rejects_non_positive_quantity() {
    let existing = seeded();
    for quantity in [dec!(0), dec!(-3)] {
        let outcome = add_material(&existing, MaterialDraft::new("Brick", "un", quantity, dec!(1.2)));
        assert_eq!(outcome.rejection(), Some(DraftRejection::NonPositiveQuantity));
        assert_eq!(outcome.materials(), &existing[..]);
    }
}

#[test]
fn test_add_material_rejects_negative_price() {
    let outcome = add_material(&[], MaterialDraft::new("Brick", "un", dec!(1), dec!(-1)));
    assert_eq!(outcome.rejection(), Some(DraftRejection::NegativeUnitPrice));
    assert!(outcome.materials().is_empty());
}

#[test]
fn test_add_material_accepts_free_item() {
    let outcome = add_material(&[], MaterialDraft::new("Amostra", "un", dec!(2), dec!(0)));
    assert_eq!(outcome.added().unwrap().total(), dec!(0));
}

#[test]
fn test_add_material_rejects_overflowing_line_total() {
    let huge = dec!(99999999999999999999);
    let existing = seeded();
    let outcome = add_material(&existing, MaterialDraft::new("X", "un", huge, huge));
    assert_eq!(outcome.rejection(), Some(DraftRejection::Overflow));
    assert_eq!(outcome.materials(), &existing[..]);
}

#[test]
fn test_add_material_rejects_overflowing_budget_total() {
    let line = MaterialDraft::new("Aço", "kg", Decimal::MAX, dec!(1));
    let first = add_material(&[], line.clone());
    assert!(first.is_accepted());

    let second = add_material(first.materials(), line);
    assert_eq!(second.rejection(), Some(DraftRejection::Overflow));
    assert_eq!(second.materials().len(), 1);
}

#[test]
fn test_totals_do_not_panic_on_overflow() {
    let steel = |id: &str| {
        Material::try_new(MaterialId::new(id), "Aço", "kg", Decimal::MAX, dec!(1)).unwrap()
    };
    let materials = vec![steel("m1"), steel("m2")];
    assert_eq!(checked_total(&materials), None);
    assert_eq!(compute_total(&materials), Decimal::MAX);
    assert_eq!(checked_total(&seeded()), Some(dec!(277000)));
}

#[test]
fn test_remove_material() {
    let remaining = remove_material(&seeded(), "m1");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), "m2");
    assert_eq!(compute_total(&remaining), dec!(102000));
}

#[test]
fn test_remove_absent_material_is_noop() {
    let existing = seeded();
    assert_eq!(remove_material(&existing, "m42"), existing);
    let once = remove_material(&existing, "m2");
    assert_eq!(remove_material(&once, "m2"), once);
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        DraftRejection::NonPositiveQuantity.to_string(),
        "quantity must be greater than zero"
    );
    assert_eq!(DraftRejection::NoActiveProject.to_string(), "no project selected");
    assert_eq!(DraftRejection::Overflow.to_string(), "total is too large");
}
