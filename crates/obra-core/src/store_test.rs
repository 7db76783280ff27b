use super::*;
use crate::budget::{compute_total, DraftRejection};
use crate::project::MaterialId;
use rust_decimal_macros::dec;

fn store() -> ProjectStore {
    ProjectStore::new(SeedFile::builtin().projects)
}

fn sand() -> Material {
    Material::try_new(MaterialId::new("m9"), "Areia média", "m³", dec!(40), dec!(120)).unwrap()
}

#[test]
fn test_new_store_has_no_selection() {
    let store = store();
    assert_eq!(store.projects().len(), 2);
    assert!(store.active_project_id().is_none());
    assert!(store.active_project().is_none());
}

#[test]
fn test_select_project_resolves_active() {
    let mut store = store();
    store.select_project("2");
    assert_eq!(store.active_project().unwrap().name, "Casa Vale Verde");
    store.select_project("1");
    assert_eq!(store.active_project().unwrap().id, "1");
}

#[test]
fn test_select_unknown_project_resolves_to_none() {
    let mut store = store();
    store.select_project("999");
    assert_eq!(store.active_project_id().unwrap(), "999");
    assert!(store.active_project().is_none());
}

#[test]
fn test_clear_selection() {
    let mut store = store();
    store.select_project("1");
    store.clear_selection();
    assert!(store.active_project().is_none());
}

#[test]
fn test_replace_materials_targets_only_active_project() {
    let mut store = store();
    store.select_project("2");
    let before = store.snapshot();

    assert!(store.replace_materials("2", vec![sand()]));

    let after = store.snapshot();
    assert!(!before.same_as(&after));
    assert_eq!(after.get("2").unwrap().materials, vec![sand()]);
    assert_eq!(after.get("1"), before.get("1"));
    // Everything except the materials is left alone.
    let mut expected = before.get("2").unwrap().clone();
    expected.materials = vec![sand()];
    assert_eq!(after.get("2"), Some(&expected));
}

#[test]
fn test_replace_materials_ignores_other_ids() {
    let mut store = store();
    store.select_project("1");
    let before = store.snapshot();

    assert!(!store.replace_materials("2", vec![sand()]));
    assert!(!store.replace_materials("999", Vec::new()));

    assert!(before.same_as(&store.snapshot()));
    assert!(store.get_project("2").unwrap().materials.is_empty());
    assert_eq!(store.get_project("1").unwrap().materials.len(), 2);
}

#[test]
fn test_replace_materials_without_selection_is_noop() {
    let mut store = store();
    let before = store.snapshot();
    assert!(!store.replace_materials("1", Vec::new()));
    assert!(before.same_as(&store.snapshot()));
}

#[test]
fn test_replace_materials_with_stale_selection_is_noop() {
    let mut store = store();
    store.select_project("999");
    let before = store.snapshot();
    assert!(!store.replace_materials("999", vec![sand()]));
    assert!(before.same_as(&store.snapshot()));
    assert_eq!(&store.projects()[..], &before[..]);
}

#[test]
fn test_old_snapshot_keeps_old_data() {
    let mut store = store();
    store.select_project("1");
    let before = store.snapshot();
    store.replace_materials("1", Vec::new());
    assert_eq!(before.get("1").unwrap().materials.len(), 2);
    assert!(store.active_project().unwrap().materials.is_empty());
}

#[test]
fn test_add_and_remove_through_store() {
    let mut store = store();
    store.select_project("1");

    let outcome = store.add_material(MaterialDraft::new("Brick", "un", dec!(1000), dec!(1.2)));
    let added = outcome.added().unwrap().clone();
    let materials = &store.active_project().unwrap().materials;
    assert_eq!(materials.len(), 3);
    assert_eq!(compute_total(materials), dec!(278200));

    assert!(store.remove_material("m1"));
    assert!(!store.remove_material("m1"));
    let materials = &store.active_project().unwrap().materials;
    assert_eq!(materials.len(), 2);
    assert_eq!(materials[1], added);
    assert_eq!(compute_total(materials), dec!(103200));
}

#[test]
fn test_add_material_rejected_draft_leaves_snapshot() {
    let mut store = store();
    store.select_project("1");
    let before = store.snapshot();
    let outcome = store.add_material(MaterialDraft::new("", "un", dec!(1), dec!(1)));
    assert_eq!(outcome.rejection(), Some(DraftRejection::EmptyName));
    assert!(before.same_as(&store.snapshot()));
}

#[test]
fn test_add_material_without_active_project() {
    let mut store = store();
    store.select_project("999");
    let outcome = store.add_material(MaterialDraft::new("Brick", "un", dec!(1), dec!(1)));
    assert_eq!(outcome.rejection(), Some(DraftRejection::NoActiveProject));
    assert!(store.projects().iter().all(|p| p.id != "999"));
}

#[test]
fn test_from_seed_rejects_duplicate_ids() {
    let mut seed = SeedFile::builtin();
    let copy = seed.projects[0].clone();
    seed.projects.push(copy);
    let err = ProjectStore::from_seed(seed).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateProject { ref id } if id == "1"));
}

#[test]
fn test_from_seed_validates_records() {
    let mut seed = SeedFile::builtin();
    seed.projects[1].area = dec!(-1);
    assert!(matches!(
        ProjectStore::from_seed(seed),
        Err(CoreError::InvalidProject { .. })
    ));
}

#[test]
fn test_select_empty_id_clears_selection() {
    let mut store = store();
    store.select_project("1");
    store.select_project("");
    assert!(store.active_project_id().is_none());
    assert!(store.active_project().is_none());

    let before = store.snapshot();
    assert!(!store.replace_materials("", Vec::new()));
    assert!(before.same_as(&store.snapshot()));
}
