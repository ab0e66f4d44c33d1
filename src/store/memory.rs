use super::Store;
use crate::model::{Grade, Project, Student};

/// Store keeping everything in insertion order, with the same uniqueness
/// constraints as the database schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub students: Vec<Student>,
    pub projects: Vec<Project>,
    pub grades: Vec<Grade>,
    /// Make every operation fail, as a lost connection would.
    pub broken: bool,
}

impl MemoryStore {
    fn check(&self) -> Result<(), sqlx::Error> {
        if self.broken {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

fn duplicate(what: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!("duplicate key value for {what}"))
}

impl Store for MemoryStore {
    async fn student_by_github(&mut self, github: &str) -> Result<Option<Student>, sqlx::Error> {
        self.check()?;
        Ok(self.students.iter().find(|s| s.github == github).cloned())
    }

    async fn add_student(&mut self, student: &Student) -> Result<(), sqlx::Error> {
        self.check()?;
        if self.students.iter().any(|s| s.github == student.github) {
            return Err(duplicate(&student.github));
        }
        self.students.push(student.clone());
        Ok(())
    }

    async fn project_by_title(&mut self, title: &str) -> Result<Option<Project>, sqlx::Error> {
        self.check()?;
        Ok(self.projects.iter().find(|p| p.title == title).cloned())
    }

    async fn add_project(&mut self, project: &Project) -> Result<(), sqlx::Error> {
        self.check()?;
        if self.projects.iter().any(|p| p.title == project.title) {
            return Err(duplicate(&project.title));
        }
        self.projects.push(project.clone());
        Ok(())
    }

    async fn grade_for(&mut self, github: &str, title: &str) -> Result<Option<i32>, sqlx::Error> {
        self.check()?;
        Ok(self
            .grades
            .iter()
            .find(|g| {
                g.student_github == github
                    && g.project_title == title
                    && self.projects.iter().any(|p| p.title == title)
            })
            .map(|g| g.grade))
    }

    async fn add_grade(&mut self, grade: &Grade) -> Result<(), sqlx::Error> {
        self.check()?;
        self.grades.push(grade.clone());
        Ok(())
    }

    async fn grades_for_student(&mut self, github: &str) -> Result<Vec<Grade>, sqlx::Error> {
        self.check()?;
        Ok(self
            .grades
            .iter()
            .filter(|g| g.student_github == github)
            .cloned()
            .collect())
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
