pub mod auth;
pub mod categories;
pub mod certificates;
pub mod course_content;
pub mod courses;
pub mod enrollments;
pub mod users;

pub use auth::AuthService;
pub use categories::CategoryService;
pub use certificates::CertificateService;
pub use course_content::CourseContentService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use users::UserService;
