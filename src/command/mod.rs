use crate::errors::CommandError;
use crate::model::{Grade, Project, Student};

pub use self::quoted::{ParseError, ProjectArgs};

mod quoted;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandKind {
    Student,
    NewStudent,
    Project,
    Grade,
    AddGrade,
    AllGrades,
    AddProject,
    Help,
    Quit,
}

pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "student",
        kind: CommandKind::Student,
        usage: "student <github>",
    },
    CommandSpec {
        name: "new_student",
        kind: CommandKind::NewStudent,
        usage: "new_student <first_name> <last_name> <github>",
    },
    CommandSpec {
        name: "project",
        kind: CommandKind::Project,
        usage: "project <title>",
    },
    CommandSpec {
        name: "grade",
        kind: CommandKind::Grade,
        usage: "grade <github> <title>",
    },
    CommandSpec {
        name: "add_grade",
        kind: CommandKind::AddGrade,
        usage: "add_grade <github> <title> <grade>",
    },
    CommandSpec {
        name: "get_all_grades_for_student",
        kind: CommandKind::AllGrades,
        usage: "get_all_grades_for_student <github>",
    },
    CommandSpec {
        name: "add_project",
        kind: CommandKind::AddProject,
        usage: "add_project \"<title>\" \"<description>\" <max_grade>",
    },
    CommandSpec {
        name: "help",
        kind: CommandKind::Help,
        usage: "help",
    },
    CommandSpec {
        name: "quit",
        kind: CommandKind::Quit,
        usage: "quit",
    },
];

impl CommandSpec {
    pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|c| c.name == name)
    }

    /// Split the arguments into exactly `N` fields. Titles may be quoted.
    fn fields<const N: usize>(&self, args: &[&str]) -> Result<[String; N], CommandError> {
        quoted::split_fields(args)
            .map_err(|source| self.parse_error(source))?
            .try_into()
            .map_err(|_| CommandError::Usage { usage: self.usage })
    }

    fn integer(&self, field: &'static str, token: &str) -> Result<i32, CommandError> {
        quoted::parse_integer(field, token).map_err(|source| self.parse_error(source))
    }

    fn parse_error(&self, source: ParseError) -> CommandError {
        CommandError::Parse {
            source,
            usage: self.usage,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Student { github: String },
    NewStudent(Student),
    Project { title: String },
    Grade { github: String, title: String },
    AddGrade(Grade),
    AllGrades { github: String },
    AddProject(Project),
    Help,
    Quit,
}

impl Command {
    /// Parse an input line. A blank line yields no command.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let spec =
            CommandSpec::lookup(name).ok_or_else(|| CommandError::Unknown(name.to_owned()))?;
        let args = tokens.collect::<Vec<_>>();
        let command = match spec.kind {
            CommandKind::Student => {
                let [github] = spec.fields::<1>(&args)?;
                Self::Student { github }
            }
            CommandKind::NewStudent => {
                let [first_name, last_name, github] = spec.fields::<3>(&args)?;
                Self::NewStudent(Student::new(first_name, last_name, github))
            }
            CommandKind::Project => {
                let [title] = spec.fields::<1>(&args)?;
                Self::Project { title }
            }
            CommandKind::Grade => {
                let [github, title] = spec.fields::<2>(&args)?;
                Self::Grade { github, title }
            }
            CommandKind::AddGrade => {
                let [github, title, grade] = spec.fields::<3>(&args)?;
                let grade = spec.integer("grade", &grade)?;
                Self::AddGrade(Grade::new(github, title, grade))
            }
            CommandKind::AllGrades => {
                let [github] = spec.fields::<1>(&args)?;
                Self::AllGrades { github }
            }
            CommandKind::AddProject => {
                let ProjectArgs {
                    title,
                    description,
                    max_grade,
                } = quoted::parse_project_args(&args).map_err(|source| spec.parse_error(source))?;
                Self::AddProject(Project::new(title, description, max_grade))
            }
            CommandKind::Help => {
                let [] = spec.fields::<0>(&args)?;
                Self::Help
            }
            CommandKind::Quit => {
                let [] = spec.fields::<0>(&args)?;
                Self::Quit
            }
        };
        Ok(Some(command))
    }
}
