use super::*;
use crate::seed::SeedFile;

fn names(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_empty_filter_keeps_everything_in_order() {
    let projects = SeedFile::builtin().projects;
    let found = filter_projects(&projects, &ProjectFilter::default());
    assert_eq!(names(&found), vec!["Edifício Horizonte", "Casa Vale Verde"]);

    let found = filter_projects(&projects, &ProjectFilter::default().with_term(""));
    assert_eq!(found.len(), 2);
}

#[test]
fn test_term_matches_name_case_insensitively() {
    let projects = SeedFile::builtin().projects;
    let found = filter_projects(&projects, &ProjectFilter::default().with_term("HORIZ"));
    assert_eq!(names(&found), vec!["Edifício Horizonte"]);
}

#[test]
fn test_term_matches_client() {
    let projects = SeedFile::builtin().projects;
    let found = filter_projects(&projects, &ProjectFilter::default().with_term("oliveira"));
    assert_eq!(names(&found), vec!["Casa Vale Verde"]);
}

#[test]
fn test_term_does_not_match_address() {
    let projects = SeedFile::builtin().projects;
    let found = filter_projects(&projects, &ProjectFilter::default().with_term("Paulista"));
    assert!(found.is_empty());
}

#[test]
fn test_status_filter() {
    let projects = SeedFile::builtin().projects;
    let filter = ProjectFilter::default().with_status(ProjectStatus::Planning);
    assert_eq!(names(&filter_projects(&projects, &filter)), vec!["Casa Vale Verde"]);

    let filter = ProjectFilter::default()
        .with_status(ProjectStatus::Active)
        .with_term("vale");
    assert!(filter_projects(&projects, &filter).is_empty());
}
