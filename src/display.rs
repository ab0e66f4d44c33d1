use crate::command::COMMANDS;
use crate::dispatch::Reply;
use crate::model::{Grade, Project, Student};
use std::io::{self, Write};

pub const PROMPT: &str = "HBA Database> ";

fn display_student(out: &mut impl Write, s: &Student) -> io::Result<()> {
    writeln!(
        out,
        "Student: {} {}\nGitHub account: {}",
        s.first_name, s.last_name, s.github
    )
}

fn display_project(out: &mut impl Write, p: &Project) -> io::Result<()> {
    writeln!(
        out,
        "Project description: {}\nMax grade: {}",
        p.description, p.max_grade
    )
}

fn display_grade(out: &mut impl Write, grade: i32) -> io::Result<()> {
    writeln!(out, "Grade: {grade}")
}

fn display_grades(out: &mut impl Write, grades: &[Grade]) -> io::Result<()> {
    for g in grades {
        writeln!(out, "Project title: {}, Grade: {}", g.project_title, g.grade)?;
    }
    Ok(())
}

fn display_student_added(out: &mut impl Write, s: &Student) -> io::Result<()> {
    writeln!(out, "Successfully added student: {}", s.full_name())
}

fn display_project_added(out: &mut impl Write, p: &Project) -> io::Result<()> {
    writeln!(out, "Successfully added project: {}", p.title)
}

fn display_grade_added(out: &mut impl Write, g: &Grade) -> io::Result<()> {
    writeln!(
        out,
        "Successfully added grade for: {} on project {}",
        g.student_github, g.project_title
    )
}

fn display_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    for c in COMMANDS {
        writeln!(out, "  {}", c.usage)?;
    }
    Ok(())
}

pub fn display_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Student(s) => display_student(out, s),
        Reply::StudentAdded(s) => display_student_added(out, s),
        Reply::Project(p) => display_project(out, p),
        Reply::ProjectAdded(p) => display_project_added(out, p),
        Reply::Grade(grade) => display_grade(out, *grade),
        Reply::GradeAdded(g) => display_grade_added(out, g),
        Reply::Grades(grades) => display_grades(out, grades),
        Reply::Help => display_help(out),
        Reply::Quit => Ok(()),
    }
}
