use std::{sync::Arc, time::Duration};

use catalog::{Catalog, CourseFilter, DEFAULT_DASHBOARD_INSTITUTE};
use chrono::Utc;
use shared::{
    domain::{Course, CourseId, DeliveryMode, PaymentMethod},
    error::ApiError,
    protocol::{
        class_group_link, routes, BrowseResponse, CourseQuery, CredentialsRequest,
        DashboardQuery, DashboardView, EnrollRequest, EnrollmentConfirmation, EnrollmentReceipt,
        EnrollmentView, FlowAccepted, InstituteRegisterRequest, ModeOption, Notice,
        PaymentOption, PaymentSuccessQuery, PaymentSuccessView, Portal, PortalIndex, RouteLink,
        StudentAuthAction, StudentAuthRequest, StudentRegisterRequest, SUPPORT_EMAIL,
    },
};
use tracing::{debug, info};
use uuid::Uuid;

/// Fixed waits standing in for backend round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPacing {
    pub institute_registration: Duration,
    pub auth: Duration,
    pub payment: Duration,
}

impl FlowPacing {
    pub fn instant() -> Self {
        Self {
            institute_registration: Duration::ZERO,
            auth: Duration::ZERO,
            payment: Duration::ZERO,
        }
    }
}

impl Default for FlowPacing {
    fn default() -> Self {
        Self {
            institute_registration: Duration::from_millis(2000),
            auth: Duration::from_millis(1500),
            payment: Duration::from_millis(2000),
        }
    }
}

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
    pub pacing: FlowPacing,
}

impl ApiContext {
    pub fn new(catalog: Catalog, pacing: FlowPacing) -> Self {
        Self {
            catalog: Arc::new(catalog),
            pacing,
        }
    }
}

pub fn portal_index() -> PortalIndex {
    PortalIndex {
        name: "ZenFlow".to_string(),
        tagline: "Connect wellness institutes with students seeking courses".to_string(),
        portals: vec![
            Portal {
                audience: "institute".to_string(),
                links: vec![
                    link("Register Institute", "POST", routes::INSTITUTE_REGISTER),
                    link("Institute Login", "POST", routes::INSTITUTE_LOGIN),
                    link("Institute Dashboard", "GET", routes::INSTITUTE_DASHBOARD),
                ],
            },
            Portal {
                audience: "student".to_string(),
                links: vec![
                    link("Student Sign In / Sign Up", "POST", routes::STUDENT_AUTH),
                    link("Student Login", "POST", routes::STUDENT_LOGIN),
                    link("Student Registration", "POST", routes::STUDENT_REGISTER),
                    link("Browse Courses", "GET", routes::COURSES),
                ],
            },
        ],
    }
}

fn link(label: &str, method: &str, path: &str) -> RouteLink {
    RouteLink {
        label: label.to_string(),
        method: method.to_string(),
        path: path.to_string(),
    }
}

pub fn browse_courses(ctx: &ApiContext, query: &CourseQuery) -> Result<BrowseResponse, ApiError> {
    let filter = CourseFilter::from_query(query)?;
    let courses: Vec<Course> = ctx.catalog.filter(&filter).into_iter().cloned().collect();
    Ok(BrowseResponse {
        total: courses.len(),
        courses,
        facets: ctx.catalog.facets(),
        filters_active: filter.is_active(),
    })
}

pub fn institute_dashboard(ctx: &ApiContext, query: &DashboardQuery) -> DashboardView {
    let institute = query
        .institute
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DASHBOARD_INSTITUTE)
        .to_string();
    let courses: Vec<Course> = ctx
        .catalog
        .courses_for_institute(&institute)
        .into_iter()
        .cloned()
        .collect();
    DashboardView {
        total: courses.len(),
        institute,
        courses,
    }
}

pub fn enrollment_view(ctx: &ApiContext, course_id: &CourseId) -> Result<EnrollmentView, ApiError> {
    let course = find_course(ctx, course_id)?;
    let modes = DeliveryMode::ALL
        .iter()
        .map(|mode| ModeOption {
            mode: *mode,
            label: mode.label().to_string(),
            detail: mode_detail(*mode, course),
        })
        .collect();
    let payment_methods = PaymentMethod::ALL
        .iter()
        .map(|method| PaymentOption {
            method: *method,
            label: method.label().to_string(),
        })
        .collect();
    Ok(EnrollmentView {
        course: course.clone(),
        modes,
        payment_methods,
    })
}

fn mode_detail(mode: DeliveryMode, course: &Course) -> String {
    match (mode, course.location.as_deref()) {
        (DeliveryMode::Online, _) => "Join from anywhere via video call".to_string(),
        (DeliveryMode::Offline, Some(location)) => format!("Attend at {location}"),
        (DeliveryMode::Offline, None) => format!("Attend at {}", course.institute),
    }
}

/// Simulated payment: validates the selection, waits, then confirms.
pub async fn enroll(
    ctx: &ApiContext,
    course_id: &CourseId,
    request: EnrollRequest,
) -> Result<EnrollmentReceipt, ApiError> {
    let course = find_course(ctx, course_id)?;
    let (Some(mode), Some(payment_method)) = (request.mode, request.payment_method) else {
        return Err(ApiError::validation(
            "Please select both course mode and payment method",
        ));
    };

    debug!(%course_id, %mode, "processing simulated payment");
    simulate(ctx.pacing.payment).await;

    let receipt = EnrollmentReceipt {
        course_id: course.id.clone(),
        confirmation: EnrollmentConfirmation {
            course: course.title.clone(),
            mode,
            instructor: course.instructor.clone(),
        },
        amount: course.price,
        payment_method,
        reference: Uuid::new_v4(),
        enrolled_at: Utc::now(),
        redirect: routes::PAYMENT_SUCCESS.to_string(),
        notice: Notice::new(
            "Payment Successful!",
            "Enrollment completed. Redirecting to success page...",
        ),
    };
    info!(%course_id, %mode, reference = %receipt.reference, amount = receipt.amount, "enrollment completed");
    Ok(receipt)
}

pub fn payment_success(query: &PaymentSuccessQuery) -> PaymentSuccessView {
    // Unknown or missing modes fall back to the online group.
    let mode_label = non_blank(query.mode.as_deref());
    let mode = mode_label
        .as_deref()
        .and_then(|raw| raw.parse::<DeliveryMode>().ok());
    PaymentSuccessView {
        course: non_blank(query.course.as_deref()),
        mode,
        mode_label,
        instructor: non_blank(query.instructor.as_deref()),
        group_link: class_group_link(mode.unwrap_or(DeliveryMode::Online)).to_string(),
        support_email: SUPPORT_EMAIL.to_string(),
        notice: Notice::new(
            "Congratulations! Your enrollment is complete.",
            "Your payment has been processed successfully. You're now enrolled in the course.",
        ),
    }
}

pub async fn register_institute(
    ctx: &ApiContext,
    request: InstituteRegisterRequest,
) -> Result<FlowAccepted, ApiError> {
    if !all_present(&[&request.institute_name, &request.email, &request.password]) {
        return Err(ApiError::validation("Please fill in all required fields"));
    }
    simulate(ctx.pacing.institute_registration).await;
    info!(institute = %request.institute_name.trim(), "institute registered");
    Ok(FlowAccepted {
        redirect: routes::INSTITUTE_DASHBOARD.to_string(),
        notice: Notice::new(
            "Registration Successful!",
            "Welcome to ZenFlow. Redirecting to your dashboard...",
        ),
    })
}

pub async fn login_institute(
    ctx: &ApiContext,
    request: CredentialsRequest,
) -> Result<FlowAccepted, ApiError> {
    require_credentials(&request)?;
    simulate(ctx.pacing.auth).await;
    info!("institute signed in");
    Ok(FlowAccepted {
        redirect: routes::INSTITUTE_DASHBOARD.to_string(),
        notice: Notice::new("Login Successful!", "Welcome back to your dashboard"),
    })
}

pub async fn login_student(
    ctx: &ApiContext,
    request: CredentialsRequest,
) -> Result<FlowAccepted, ApiError> {
    require_credentials(&request)?;
    simulate(ctx.pacing.auth).await;
    info!("student signed in");
    Ok(FlowAccepted {
        redirect: routes::COURSES.to_string(),
        notice: Notice::new("Login Successful!", "Welcome back! Redirecting to courses..."),
    })
}

pub async fn register_student(
    ctx: &ApiContext,
    request: StudentRegisterRequest,
) -> Result<FlowAccepted, ApiError> {
    if !all_present(&[&request.name, &request.email, &request.password]) {
        return Err(ApiError::validation("Please fill in all fields"));
    }
    simulate(ctx.pacing.auth).await;
    info!("student registered");
    Ok(FlowAccepted {
        redirect: routes::COURSES.to_string(),
        notice: Notice::new(
            "Registration Successful!",
            "Welcome to ZenFlow! Redirecting to courses...",
        ),
    })
}

/// Single-form student auth; `action` picks the login or register flow.
pub async fn student_auth(
    ctx: &ApiContext,
    request: StudentAuthRequest,
) -> Result<FlowAccepted, ApiError> {
    let StudentAuthRequest {
        action,
        name,
        email,
        password,
    } = request;
    match action {
        StudentAuthAction::Login => login_student(ctx, CredentialsRequest { email, password }).await,
        StudentAuthAction::Register => {
            register_student(
                ctx,
                StudentRegisterRequest {
                    name,
                    email,
                    password,
                },
            )
            .await
        }
    }
}

fn require_credentials(request: &CredentialsRequest) -> Result<(), ApiError> {
    if !all_present(&[&request.email, &request.password]) {
        return Err(ApiError::validation("Please enter both email and password"));
    }
    Ok(())
}

fn find_course<'a>(ctx: &'a ApiContext, course_id: &CourseId) -> Result<&'a Course, ApiError> {
    ctx.catalog
        .get(course_id)
        .ok_or_else(|| ApiError::not_found("course not found"))
}

fn all_present(fields: &[&String]) -> bool {
    fields.iter().all(|field| !field.trim().is_empty())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
