use super::Store;
use crate::model::{Grade, Project, Student};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::{debug, trace};

/// Store backed by a single database connection. Queries are written with
/// `$N` placeholders, which PostgreSQL and SQLite understand.
pub struct SqlStore {
    conn: AnyConnection,
    question_marks: bool,
}

impl SqlStore {
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();
        let conn = AnyConnection::connect_with(&AnyConnectOptions::from_str(url)?).await?;
        let question_marks = conn.backend_name() == "MySQL";
        debug!(backend = conn.backend_name(), "connected to database");
        Ok(Self {
            conn,
            question_marks,
        })
    }

    fn sql<'q>(&self, query: &'q str) -> Cow<'q, str> {
        if self.question_marks {
            Cow::Owned(question_mark_placeholders(query))
        } else {
            Cow::Borrowed(query)
        }
    }
}

/// Replace `$1`, `$2`… by `?`. Arguments must be used in order.
fn question_mark_placeholders(query: &str) -> String {
    let mut result = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek().is_some_and(char::is_ascii_digit) {
            while chars.next_if(char::is_ascii_digit).is_some() {}
            result.push('?');
        } else {
            result.push(c);
        }
    }
    result
}

impl Store for SqlStore {
    async fn student_by_github(&mut self, github: &str) -> Result<Option<Student>, sqlx::Error> {
        let sql = self.sql("SELECT first_name, last_name, github FROM students WHERE github = $1");
        sqlx::query(&sql)
            .bind(github)
            .try_map(|row: AnyRow| {
                Ok(Student::new(
                    row.try_get("first_name")?,
                    row.try_get("last_name")?,
                    row.try_get("github")?,
                ))
            })
            .fetch_optional(&mut self.conn)
            .await
    }

    async fn add_student(&mut self, student: &Student) -> Result<(), sqlx::Error> {
        let sql =
            self.sql("INSERT INTO students (first_name, last_name, github) VALUES ($1, $2, $3)");
        let mut trans = self.conn.begin().await?;
        sqlx::query(&sql)
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(&student.github)
            .execute(&mut *trans)
            .await?;
        trans.commit().await?;
        trace!(%student, "student added");
        Ok(())
    }

    async fn project_by_title(&mut self, title: &str) -> Result<Option<Project>, sqlx::Error> {
        let sql = self.sql("SELECT title, description, max_grade FROM projects WHERE title = $1");
        sqlx::query(&sql)
            .bind(title)
            .try_map(|row: AnyRow| {
                Ok(Project::new(
                    row.try_get("title")?,
                    row.try_get("description")?,
                    row.try_get("max_grade")?,
                ))
            })
            .fetch_optional(&mut self.conn)
            .await
    }

    async fn add_project(&mut self, project: &Project) -> Result<(), sqlx::Error> {
        let sql =
            self.sql("INSERT INTO projects (title, description, max_grade) VALUES ($1, $2, $3)");
        let mut trans = self.conn.begin().await?;
        sqlx::query(&sql)
            .bind(&project.title)
            .bind(&project.description)
            .bind(project.max_grade)
            .execute(&mut *trans)
            .await?;
        trans.commit().await?;
        trace!(%project, max_grade = project.max_grade, "project added");
        Ok(())
    }

    async fn grade_for(&mut self, github: &str, title: &str) -> Result<Option<i32>, sqlx::Error> {
        let sql = self.sql(
            "SELECT grades.grade FROM grades \
             INNER JOIN projects ON grades.project_title = projects.title \
             WHERE projects.title = $1 AND grades.student_github = $2",
        );
        sqlx::query(&sql)
            .bind(title)
            .bind(github)
            .try_map(|row: AnyRow| row.try_get("grade"))
            .fetch_optional(&mut self.conn)
            .await
    }

    async fn add_grade(&mut self, grade: &Grade) -> Result<(), sqlx::Error> {
        let sql = self
            .sql("INSERT INTO grades (student_github, project_title, grade) VALUES ($1, $2, $3)");
        let mut trans = self.conn.begin().await?;
        sqlx::query(&sql)
            .bind(&grade.student_github)
            .bind(&grade.project_title)
            .bind(grade.grade)
            .execute(&mut *trans)
            .await?;
        trans.commit().await?;
        trace!(
            github = grade.student_github.as_str(),
            title = grade.project_title.as_str(),
            grade = grade.grade,
            "grade added"
        );
        Ok(())
    }

    async fn grades_for_student(&mut self, github: &str) -> Result<Vec<Grade>, sqlx::Error> {
        let sql = self.sql(
            "SELECT student_github, project_title, grade FROM grades WHERE student_github = $1",
        );
        sqlx::query(&sql)
            .bind(github)
            .try_map(|row: AnyRow| {
                Ok(Grade::new(
                    row.try_get("student_github")?,
                    row.try_get("project_title")?,
                    row.try_get("grade")?,
                ))
            })
            .fetch_all(&mut self.conn)
            .await
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        debug!("closing database connection");
        self.conn.close().await
    }
}

#[test]
fn test_question_mark_placeholders() {
    assert_eq!(
        question_mark_placeholders("INSERT INTO t (a, b) VALUES ($1, $2)"),
        "INSERT INTO t (a, b) VALUES (?, ?)"
    );
    assert_eq!(
        question_mark_placeholders("SELECT a FROM t WHERE b = $12 AND c = '$'"),
        "SELECT a FROM t WHERE b = ? AND c = '$'"
    );
}
