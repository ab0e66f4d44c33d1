use crate::model::{Grade, Project, Student};

pub use self::sql::SqlStore;

#[cfg(test)]
pub mod memory;
mod sql;

/// Access to the students, projects and grades tables. Every operation is a
/// single query, and every insertion is committed before returning.
#[allow(async_fn_in_trait)]
pub trait Store {
    async fn student_by_github(&mut self, github: &str) -> Result<Option<Student>, sqlx::Error>;

    async fn add_student(&mut self, student: &Student) -> Result<(), sqlx::Error>;

    async fn project_by_title(&mut self, title: &str) -> Result<Option<Project>, sqlx::Error>;

    async fn add_project(&mut self, project: &Project) -> Result<(), sqlx::Error>;

    async fn grade_for(&mut self, github: &str, title: &str) -> Result<Option<i32>, sqlx::Error>;

    async fn add_grade(&mut self, grade: &Grade) -> Result<(), sqlx::Error>;

    /// All grades of a student, in the order the database returns them.
    async fn grades_for_student(&mut self, github: &str) -> Result<Vec<Grade>, sqlx::Error>;

    async fn close(self) -> Result<(), sqlx::Error>
    where
        Self: Sized;
}
