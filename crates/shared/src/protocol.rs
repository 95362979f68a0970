use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Course, CourseId, DeliveryMode, PaymentMethod};

pub mod routes {
    use crate::domain::CourseId;

    pub const HOME: &str = "/";
    pub const HEALTHZ: &str = "/healthz";
    pub const INSTITUTE_REGISTER: &str = "/institute/register";
    pub const INSTITUTE_LOGIN: &str = "/institute/login";
    pub const INSTITUTE_DASHBOARD: &str = "/institute/dashboard";
    pub const STUDENT_AUTH: &str = "/student/auth";
    pub const STUDENT_LOGIN: &str = "/student/auth/login";
    pub const STUDENT_REGISTER: &str = "/student/auth/register";
    pub const COURSES: &str = "/courses";
    pub const ENROLL: &str = "/enroll/:course_id";
    pub const PAYMENT_SUCCESS: &str = "/payment-success";

    pub fn enroll_route(course_id: &CourseId) -> String {
        format!("/enroll/{course_id}")
    }
}

pub const SUPPORT_EMAIL: &str = "support@zenflow.com";
pub const ONLINE_GROUP_LINK: &str = "https://chat.whatsapp.com/online-wellness-group";
pub const OFFLINE_GROUP_LINK: &str = "https://chat.whatsapp.com/offline-wellness-group";

pub fn class_group_link(mode: DeliveryMode) -> &'static str {
    match mode {
        DeliveryMode::Online => ONLINE_GROUP_LINK,
        DeliveryMode::Offline => OFFLINE_GROUP_LINK,
    }
}

/// Stand-in for a toast: a short title plus one line of detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Raw browse criteria as they arrive from a query string or the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub institutes: Vec<String>,
    pub modes: Vec<DeliveryMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub courses: Vec<Course>,
    pub total: usize,
    pub facets: Facets,
    pub filters_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowAccepted {
    pub redirect: String,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstituteRegisterRequest {
    #[serde(default, alias = "instituteName")]
    pub institute_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        alias = "contactNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentAuthAction {
    #[default]
    Login,
    Register,
}

/// Body of the combined student auth form; `name` only matters on register.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentAuthRequest {
    #[serde(default)]
    pub action: StudentAuthAction,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub institute: String,
    pub courses: Vec<Course>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeOption {
    pub mode: DeliveryMode,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentView {
    pub course: Course,
    pub modes: Vec<ModeOption>,
    pub payment_methods: Vec<PaymentOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrollRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DeliveryMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// What the enrollment step hands to the payment-success step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentConfirmation {
    pub course: String,
    pub mode: DeliveryMode,
    pub instructor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentReceipt {
    pub course_id: CourseId,
    pub confirmation: EnrollmentConfirmation,
    pub amount: u32,
    pub payment_method: PaymentMethod,
    pub reference: Uuid,
    pub enrolled_at: DateTime<Utc>,
    pub redirect: String,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentSuccessQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

impl From<&EnrollmentConfirmation> for PaymentSuccessQuery {
    fn from(value: &EnrollmentConfirmation) -> Self {
        Self {
            course: Some(value.course.clone()),
            mode: Some(value.mode.as_str().to_string()),
            instructor: Some(value.instructor.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSuccessView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DeliveryMode>,
    /// The mode exactly as supplied, kept even when it is not a known mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub group_link: String,
    pub support_email: String,
    pub notice: Notice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLink {
    pub label: String,
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    pub audience: String,
    pub links: Vec<RouteLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalIndex {
    pub name: String,
    pub tagline: String,
    pub portals: Vec<Portal>,
}
