use std::collections::HashSet;

use shared::{
    domain::{Course, CourseId, DeliveryMode},
    protocol::Facets,
};
use thiserror::Error;
use tracing::debug;

pub mod filter;
pub mod sample;

pub use filter::{CourseFilter, Selection};
pub use sample::DEFAULT_DASHBOARD_INSTITUTE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate course id {id}")]
    DuplicateId { id: CourseId },
    #[error("in-person course {id} has no location")]
    MissingLocation { id: CourseId },
    #[error("online course {id} must not carry a location")]
    UnexpectedLocation { id: CourseId },
    #[error("course {id} has a zero price")]
    ZeroPrice { id: CourseId },
}

/// An ordered, immutable set of courses.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, zero prices and a location
    /// that disagrees with the delivery mode.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !seen.insert(&course.id) {
                return Err(CatalogError::DuplicateId {
                    id: course.id.clone(),
                });
            }
            if course.price == 0 {
                return Err(CatalogError::ZeroPrice {
                    id: course.id.clone(),
                });
            }
            match (course.mode, course.location.is_some()) {
                (DeliveryMode::Offline, false) => {
                    return Err(CatalogError::MissingLocation {
                        id: course.id.clone(),
                    })
                }
                (DeliveryMode::Online, true) => {
                    return Err(CatalogError::UnexpectedLocation {
                        id: course.id.clone(),
                    })
                }
                _ => {}
            }
        }
        Ok(Self { courses })
    }

    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(sample::sample_courses())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    pub fn filter(&self, criteria: &CourseFilter) -> Vec<&Course> {
        let visible = criteria.apply(&self.courses);
        debug!(
            total = self.courses.len(),
            visible = visible.len(),
            active = criteria.is_active(),
            "filtered catalog"
        );
        visible
    }

    pub fn courses_for_institute(&self, institute: &str) -> Vec<&Course> {
        self.filter(&CourseFilter::default().with_institute(institute))
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.courses.iter().map(|course| course.category.as_str()))
    }

    /// Distinct institute names in first-appearance order.
    pub fn institutes(&self) -> Vec<String> {
        distinct(self.courses.iter().map(|course| course.institute.as_str()))
    }

    pub fn facets(&self) -> Facets {
        Facets {
            categories: self.categories(),
            institutes: self.institutes(),
            modes: DeliveryMode::ALL.to_vec(),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
