//! Course filtering.
//!
//! A [`CourseFilter`] holds four independent criteria. Each active criterion
//! becomes one narrowing stage; stages are AND'd, commute with each other and
//! never reorder the catalog.

use shared::{
    domain::{Course, DeliveryMode},
    error::ApiException,
    protocol::CourseQuery,
};

/// Wire value that means "do not constrain on this dimension".
const MATCH_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_only(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl Selection<String> {
    /// Absent, empty and `all` select everything; anything else is an exact label.
    pub fn from_label(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(MATCH_ALL) => Selection::All,
            Some(label) => Selection::Only(label.to_string()),
        }
    }
}

impl Selection<DeliveryMode> {
    pub fn from_mode(raw: Option<&str>) -> Result<Self, ApiException> {
        match raw {
            None | Some("") | Some(MATCH_ALL) => Ok(Selection::All),
            Some(mode) => Ok(Selection::Only(mode.parse()?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseFilter {
    pub search: String,
    pub category: Selection<String>,
    pub mode: Selection<DeliveryMode>,
    pub institute: Selection<String>,
}

impl CourseFilter {
    pub fn from_query(query: &CourseQuery) -> Result<Self, ApiException> {
        Ok(Self {
            search: query.search.clone().unwrap_or_default(),
            category: Selection::from_label(query.category.as_deref()),
            mode: Selection::from_mode(query.mode.as_deref())?,
            institute: Selection::from_label(query.institute.as_deref()),
        })
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Selection::Only(category.into());
        self
    }

    pub fn with_mode(mut self, mode: DeliveryMode) -> Self {
        self.mode = Selection::Only(mode);
        self
    }

    pub fn with_institute(mut self, institute: impl Into<String>) -> Self {
        self.institute = Selection::Only(institute.into());
        self
    }

    /// True when any criterion constrains the result.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.category.is_all()
            || !self.mode.is_all()
            || !self.institute.is_all()
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.stages().iter().all(|stage| stage.admits(course))
    }

    /// Narrows `courses` stage by stage, keeping input order.
    pub fn apply<'c, I>(&self, courses: I) -> Vec<&'c Course>
    where
        I: IntoIterator<Item = &'c Course>,
    {
        let mut visible: Vec<&'c Course> = courses.into_iter().collect();
        for stage in self.stages() {
            if visible.is_empty() {
                break;
            }
            visible.retain(|course| stage.admits(course));
        }
        visible
    }

    fn stages(&self) -> Vec<Stage<'_>> {
        let mut stages = Vec::with_capacity(4);
        if !self.search.is_empty() {
            stages.push(Stage::Search(self.search.to_lowercase()));
        }
        if let Some(category) = self.category.as_only() {
            stages.push(Stage::Category(category));
        }
        if let Some(mode) = self.mode.as_only() {
            stages.push(Stage::Mode(*mode));
        }
        if let Some(institute) = self.institute.as_only() {
            stages.push(Stage::Institute(institute));
        }
        stages
    }
}

enum Stage<'a> {
    /// Needle is already lowercased.
    Search(String),
    Category(&'a str),
    Mode(DeliveryMode),
    Institute(&'a str),
}

impl Stage<'_> {
    fn admits(&self, course: &Course) -> bool {
        match self {
            Stage::Search(needle) => [&course.title, &course.description, &course.instructor]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            Stage::Category(category) => course.category == *category,
            Stage::Mode(mode) => course.mode == *mode,
            Stage::Institute(institute) => course.institute == *institute,
        }
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
