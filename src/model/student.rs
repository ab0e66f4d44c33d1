use std::fmt;

/// A student, keyed by their GitHub account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub github: String,
}

impl Student {
    pub fn new(first_name: String, last_name: String, github: String) -> Self {
        Self {
            first_name,
            last_name,
            github,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.github)
    }
}

#[test]
fn test_display() {
    let s = Student::new("Ada".into(), "Lovelace".into(), "ada123".into());
    assert_eq!(s.full_name(), "Ada Lovelace");
    assert_eq!(s.to_string(), "Ada Lovelace (ada123)");
}
