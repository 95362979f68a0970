use super::*;

fn online(id: &str) -> Course {
    Course {
        id: CourseId::new(id),
        title: format!("course {id}"),
        description: String::new(),
        institute: "Inst".to_string(),
        category: "Cat".to_string(),
        mode: DeliveryMode::Online,
        instructor: "Instructor".to_string(),
        price: 50,
        duration: "1 week".to_string(),
        location: None,
    }
}

#[test]
fn sample_catalog_is_valid() {
    let catalog = Catalog::sample().expect("catalog");
    assert_eq!(catalog.len(), 6);
    assert!(!catalog.is_empty());
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::new(vec![online("1"), online("1")]).expect_err("should fail");
    assert_eq!(
        err,
        CatalogError::DuplicateId {
            id: CourseId::new("1")
        }
    );
}

#[test]
fn rejects_in_person_course_without_location() {
    let mut course = online("1");
    course.mode = DeliveryMode::Offline;
    let err = Catalog::new(vec![course]).expect_err("should fail");
    assert!(matches!(err, CatalogError::MissingLocation { .. }));
}

#[test]
fn rejects_online_course_with_location() {
    let mut course = online("1");
    course.location = Some("Porto".to_string());
    let err = Catalog::new(vec![course]).expect_err("should fail");
    assert!(matches!(err, CatalogError::UnexpectedLocation { .. }));
}

#[test]
fn rejects_zero_price() {
    let mut course = online("1");
    course.price = 0;
    let err = Catalog::new(vec![course]).expect_err("should fail");
    assert_eq!(err.to_string(), "course 1 has a zero price");
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = Catalog::new(Vec::new()).expect("catalog");
    assert!(catalog.is_empty());
    assert!(catalog.filter(&CourseFilter::default()).is_empty());
    assert!(catalog.categories().is_empty());
}

#[test]
fn get_finds_course_by_id() {
    let catalog = Catalog::sample().expect("catalog");
    let course = catalog.get(&CourseId::new("3")).expect("course");
    assert_eq!(course.title, "Reiki Healing Level 1");
    assert!(catalog.get(&CourseId::new("42")).is_none());
}

#[test]
fn facets_are_distinct_in_first_appearance_order() {
    let catalog = Catalog::sample().expect("catalog");
    assert_eq!(
        catalog.categories(),
        vec!["Yoga", "Ayurveda", "Energy Healing", "Meditation"]
    );
    assert_eq!(
        catalog.institutes(),
        vec![
            "Peaceful Yoga Center",
            "Healing Light Institute",
            "Mindful Living Center",
            "Flow Studio",
            "Nature's Wisdom School",
        ]
    );

    let facets = serde_json::to_value(catalog.facets()).expect("json");
    assert_eq!(facets["modes"], serde_json::json!(["online", "offline"]));
}

#[test]
fn courses_for_institute_uses_exact_name() {
    let catalog = Catalog::sample().expect("catalog");
    assert_eq!(catalog.courses_for_institute("Flow Studio").len(), 1);
    assert!(catalog.courses_for_institute("flow studio").is_empty());
}
