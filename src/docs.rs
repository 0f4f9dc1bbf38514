use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::gate::AUTH_COOKIE;
use crate::modules::applications::model::{
    Application, ApplicationStatus, CreateApplicationDto, UpdateApplicationStatusDto,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, MessageResponse};
use crate::modules::dashboard::model::{ApplicationStatusCount, DashboardSummary};
use crate::modules::scholarships::model::{CreateScholarshipDto, Scholarship, UpdateScholarshipDto};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::me,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::scholarships::controller::create_scholarship,
        crate::modules::scholarships::controller::get_scholarships,
        crate::modules::scholarships::controller::get_scholarship,
        crate::modules::scholarships::controller::update_scholarship,
        crate::modules::scholarships::controller::delete_scholarship,
        crate::modules::applications::controller::create_application,
        crate::modules::applications::controller::get_applications,
        crate::modules::applications::controller::get_application,
        crate::modules::applications::controller::get_applications_for_student,
        crate::modules::applications::controller::update_application_status,
        crate::modules::applications::controller::delete_application,
        crate::modules::dashboard::controller::get_summary,
        crate::modules::dashboard::controller::get_applications_by_status,
    ),
    components(
        schemas(
            User,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Scholarship,
            CreateScholarshipDto,
            UpdateScholarshipDto,
            Application,
            ApplicationStatus,
            CreateApplicationDto,
            UpdateApplicationStatusDto,
            DashboardSummary,
            ApplicationStatusCount,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Cookie-session login and logout"),
        (name = "Users", description = "User account management"),
        (name = "Students", description = "Student record management"),
        (name = "Scholarships", description = "Scholarship catalog management"),
        (name = "Applications", description = "Scholarship application workflow"),
        (name = "Dashboard", description = "Aggregate reporting for staff")
    ),
    info(
        title = "ScholarTrack API",
        version = "0.1.0",
        description = "Scholarship tracking REST API built with Rust, Axum, and PostgreSQL featuring cookie-based JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE))),
            )
        }
    }
}
