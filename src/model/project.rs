use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub max_grade: i32,
}

impl Project {
    pub fn new(title: String, description: String, max_grade: i32) -> Self {
        Self {
            title,
            description,
            max_grade,
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
