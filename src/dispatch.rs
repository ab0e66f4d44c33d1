use crate::command::Command;
use crate::display::{PROMPT, display_reply};
use crate::errors::{CommandError, Missing};
use crate::model::{Grade, Project, Student};
use crate::store::Store;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// Outcome of a successful command, to be displayed to the user.
#[derive(Debug, Eq, PartialEq)]
pub enum Reply {
    Student(Student),
    StudentAdded(Student),
    Project(Project),
    ProjectAdded(Project),
    Grade(i32),
    GradeAdded(Grade),
    Grades(Vec<Grade>),
    Help,
    Quit,
}

pub struct Dispatcher<S> {
    store: S,
}

impl<S: Store> Dispatcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub async fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        debug!(?command, "executing command");
        let reply = match command {
            Command::Student { github } => {
                let student = self.store.student_by_github(&github).await?;
                Reply::Student(student.ok_or(CommandError::NotFound(Missing::Student(github)))?)
            }
            Command::NewStudent(student) => {
                self.store.add_student(&student).await?;
                info!(%student, "new student");
                Reply::StudentAdded(student)
            }
            Command::Project { title } => {
                let project = self.store.project_by_title(&title).await?;
                Reply::Project(project.ok_or(CommandError::NotFound(Missing::Project(title)))?)
            }
            Command::AddProject(project) => {
                self.store.add_project(&project).await?;
                info!(%project, "new project");
                Reply::ProjectAdded(project)
            }
            Command::Grade { github, title } => {
                let grade = self.store.grade_for(&github, &title).await?;
                Reply::Grade(grade.ok_or(CommandError::NotFound(Missing::Grade { github, title }))?)
            }
            Command::AddGrade(grade) => {
                self.store.add_grade(&grade).await?;
                info!(
                    github = grade.student_github.as_str(),
                    title = grade.project_title.as_str(),
                    grade = grade.grade,
                    "new grade"
                );
                Reply::GradeAdded(grade)
            }
            Command::AllGrades { github } => {
                Reply::Grades(self.store.grades_for_student(&github).await?)
            }
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    /// Parse and execute one input line. Blank lines do nothing.
    pub async fn handle_line(&mut self, line: &str) -> Result<Option<Reply>, CommandError> {
        match Command::parse(line)? {
            Some(command) => Ok(Some(self.execute(command).await?)),
            None => Ok(None),
        }
    }

    /// Prompt for commands and execute them until `quit` or the end of the
    /// input. Failed commands are reported and do not stop the loop.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> eyre::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut buf = Vec::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                writeln!(out)?;
                debug!("end of input");
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!(bytes = buf.len(), "rejected line which is not valid UTF-8");
                writeln!(out, "Invalid Entry. Input is not valid UTF-8.")?;
                continue;
            };
            let line = line.trim_end();
            match self.handle_line(line).await {
                Ok(Some(Reply::Quit)) => break,
                Ok(Some(reply)) => display_reply(out, &reply)?,
                Ok(None) => (),
                Err(e) => {
                    if let CommandError::Store(ref error) = e {
                        warn!(%error, line, "database operation failed");
                    } else {
                        debug!(error = %e, line, "rejected command");
                    }
                    writeln!(out, "{e}")?;
                }
            }
        }
        Ok(())
    }
}
