use super::*;
use shared::{domain::CourseId, error::ErrorCode};

fn course(id: &str, title: &str, mode: DeliveryMode, category: &str, institute: &str) -> Course {
    Course {
        id: CourseId::new(id),
        title: title.to_string(),
        description: format!("{title} description"),
        institute: institute.to_string(),
        category: category.to_string(),
        mode,
        instructor: "Ana Silva".to_string(),
        price: 100,
        duration: "2 weeks".to_string(),
        location: (mode == DeliveryMode::Offline).then(|| "Lisbon".to_string()),
    }
}

fn fixture() -> Vec<Course> {
    vec![
        course("a", "Qigong Basics", DeliveryMode::Online, "Qigong", "East Hall"),
        course("b", "Sound Bath", DeliveryMode::Offline, "Sound", "West Hall"),
        course("c", "Qigong Flow", DeliveryMode::Offline, "Qigong", "West Hall"),
    ]
}

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.0.clone()).collect()
}

#[test]
fn selection_parses_sentinels_as_all() {
    assert_eq!(Selection::from_label(None), Selection::All);
    assert_eq!(Selection::from_label(Some("")), Selection::All);
    assert_eq!(Selection::from_label(Some("all")), Selection::All);
    assert_eq!(
        Selection::from_label(Some("All")),
        Selection::Only("All".to_string())
    );
    assert_eq!(Selection::from_mode(Some("all")).expect("mode"), Selection::All);
    assert_eq!(
        Selection::from_mode(Some("offline")).expect("mode"),
        Selection::Only(DeliveryMode::Offline)
    );
}

#[test]
fn unknown_mode_in_query_is_rejected() {
    let query = CourseQuery {
        mode: Some("hybrid".to_string()),
        ..CourseQuery::default()
    };
    let err = CourseFilter::from_query(&query).expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::Validation));
}

#[test]
fn default_filter_is_inactive_and_passes_everything() {
    let courses = fixture();
    let filter = CourseFilter::default();
    assert!(!filter.is_active());
    assert_eq!(ids(&filter.apply(&courses)), vec!["a", "b", "c"]);
}

#[test]
fn search_matches_instructor_case_insensitively() {
    let courses = fixture();
    let filter = CourseFilter::default().with_search("ANA sil");
    assert!(filter.is_active());
    assert_eq!(filter.apply(&courses).len(), 3);
}

#[test]
fn search_matches_description_substring() {
    let courses = fixture();
    let filter = CourseFilter::default().with_search("bath desc");
    assert_eq!(ids(&filter.apply(&courses)), vec!["b"]);
}

#[test]
fn whitespace_search_is_still_a_constraint() {
    let courses = fixture();
    let filter = CourseFilter::default().with_search("  ");
    assert!(filter.is_active());
    assert!(filter.apply(&courses).is_empty());
}

#[test]
fn criteria_combine_with_and() {
    let courses = fixture();
    let filter = CourseFilter::default()
        .with_category("Qigong")
        .with_institute("West Hall");
    assert_eq!(ids(&filter.apply(&courses)), vec!["c"]);

    let none = filter.with_mode(DeliveryMode::Online);
    assert!(none.apply(&courses).is_empty());
}

#[test]
fn matches_agrees_with_apply() {
    let courses = fixture();
    let filter = CourseFilter::default()
        .with_search("qigong")
        .with_mode(DeliveryMode::Offline);
    let applied = ids(&filter.apply(&courses));
    let matched: Vec<String> = courses
        .iter()
        .filter(|c| filter.matches(c))
        .map(|c| c.id.0.clone())
        .collect();
    assert_eq!(applied, matched);
    assert_eq!(applied, vec!["c"]);
}

#[test]
fn category_match_is_exact() {
    let courses = fixture();
    let filter = CourseFilter::default().with_category("qigong");
    assert!(filter.apply(&courses).is_empty());
}

#[test]
fn cleared_filter_equals_default() {
    assert_eq!(CourseFilter::cleared(), CourseFilter::default());
}
