/// Grade obtained by a student on a project. Neither side is checked for
/// existence here, this is left to the database constraints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grade {
    pub student_github: String,
    pub project_title: String,
    pub grade: i32,
}

impl Grade {
    pub fn new(student_github: String, project_title: String, grade: i32) -> Self {
        Self {
            student_github,
            project_title,
            grade,
        }
    }
}
