pub mod auth;

pub mod users;

pub mod categories;

pub mod courses;

pub mod enrollments;

pub mod certificates;

pub mod system;

pub mod frontend;

pub use auth::configure_auth_routes;
pub use categories::configure_category_routes;
pub use certificates::configure_certificate_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use frontend::configure_frontend_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
