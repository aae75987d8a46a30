pub use super::categories::Entity as Categories;
pub use super::certificates::Entity as Certificates;
pub use super::course_modules::Entity as CourseModules;
pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::lessons::Entity as Lessons;
pub use super::users::Entity as Users;
