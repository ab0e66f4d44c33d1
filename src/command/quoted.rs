//! Reassembly of arguments made of several whitespace separated tokens.
//!
//! A field is either a single bare token, or a span of tokens whose first one
//! starts with a double quote and whose last one ends with a double quote
//! (both can be the same token). Quotes cannot be escaped and cannot appear
//! anywhere else inside a token. Since the line has already been split on
//! whitespace, words of a quoted field are joined back with single spaces.

use thiserror::Error;

const QUOTE: char = '"';

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("unterminated quoted {0}")]
    Unterminated(&'static str),
    #[error("unexpected quote in {field} at {token}")]
    StrayQuote { field: &'static str, token: String },
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{field} must be an integer, not {value}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("unexpected {0} after the last argument")]
    Trailing(String),
}

#[derive(Debug, Eq, PartialEq)]
pub struct ProjectArgs {
    pub title: String,
    pub description: String,
    pub max_grade: i32,
}

#[derive(Default)]
struct Field {
    words: Vec<String>,
    started: bool,
}

impl Field {
    /// Feed the next token and return `true` once the field is complete.
    fn push(&mut self, token: &str, name: &'static str) -> Result<bool, ParseError> {
        let (body, closed) = if self.started {
            match token.strip_suffix(QUOTE) {
                Some(body) => (body, true),
                None => (token, false),
            }
        } else {
            self.started = true;
            match token.strip_prefix(QUOTE) {
                Some(rest) => match rest.strip_suffix(QUOTE) {
                    Some(body) => (body, true),
                    None => (rest, false),
                },
                None => (token, true),
            }
        };
        if body.contains(QUOTE) {
            return Err(ParseError::StrayQuote {
                field: name,
                token: token.to_owned(),
            });
        }
        if !body.is_empty() {
            self.words.push(body.to_owned());
        }
        Ok(closed)
    }

    fn finish(self) -> String {
        self.words.join(" ")
    }
}

pub fn parse_integer(field: &'static str, token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::NotAnInteger {
        field,
        value: token.to_owned(),
    })
}

/// Group tokens into fields.
pub fn split_fields(tokens: &[&str]) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut field = Field::default();
    for token in tokens {
        if field.push(token, "argument")? {
            fields.push(std::mem::take(&mut field).finish());
        }
    }
    if field.started {
        return Err(ParseError::Unterminated("argument"));
    }
    Ok(fields)
}

enum State {
    Title(Field),
    Description { title: String, field: Field },
    MaxGrade { title: String, description: String },
    Done(ProjectArgs),
}

/// Parse `"<title>" "<description>" <max_grade>`.
pub fn parse_project_args(tokens: &[&str]) -> Result<ProjectArgs, ParseError> {
    let mut state = State::Title(Field::default());
    for &token in tokens {
        state = match state {
            State::Title(mut field) => {
                if field.push(token, "title")? {
                    let title = field.finish();
                    if title.is_empty() {
                        return Err(ParseError::Missing("title"));
                    }
                    State::Description {
                        title,
                        field: Field::default(),
                    }
                } else {
                    State::Title(field)
                }
            }
            State::Description { title, mut field } => {
                if field.push(token, "description")? {
                    State::MaxGrade {
                        title,
                        description: field.finish(),
                    }
                } else {
                    State::Description { title, field }
                }
            }
            State::MaxGrade { title, description } => State::Done(ProjectArgs {
                title,
                description,
                max_grade: parse_integer("max grade", token)?,
            }),
            State::Done(_) => return Err(ParseError::Trailing(token.to_owned())),
        };
    }
    match state {
        State::Title(field) if field.started => Err(ParseError::Unterminated("title")),
        State::Title(_) => Err(ParseError::Missing("title")),
        State::Description { field, .. } if field.started => {
            Err(ParseError::Unterminated("description"))
        }
        State::Description { .. } => Err(ParseError::Missing("description")),
        State::MaxGrade { .. } => Err(ParseError::Missing("max grade")),
        State::Done(args) => Ok(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    fn project(s: &str) -> Result<ProjectArgs, ParseError> {
        parse_project_args(&tokens(s))
    }

    #[test]
    fn test_multi_word_fields() {
        assert_eq!(
            project(r#""Intro Project" "A basic first project" 100"#),
            Ok(ProjectArgs {
                title: "Intro Project".into(),
                description: "A basic first project".into(),
                max_grade: 100,
            })
        );
    }

    #[test]
    fn test_single_word_fields() {
        let args = project(r#""Markov" "Chains" 50"#).unwrap();
        assert_eq!(args.title, "Markov");
        assert_eq!(args.description, "Chains");
        assert_eq!(args.max_grade, 50);
        let args = project("Markov Chains 50").unwrap();
        assert_eq!((&args.title[..], &args.description[..]), ("Markov", "Chains"));
    }

    #[test]
    fn test_collapsed_whitespace() {
        let args = project("\"Blockly   game\"   \"Build  a\tgame\" 20").unwrap();
        assert_eq!(args.title, "Blockly game");
        assert_eq!(args.description, "Build a game");
    }

    #[test]
    fn test_empty_description() {
        let args = project(r#""Quiz" "" 10"#).unwrap();
        assert_eq!(args.description, "");
        let args = project(r#""Quiz" " " 10"#).unwrap();
        assert_eq!(args.description, "");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(project(r#"" " " " 5"#), Err(ParseError::Missing("title")));
        assert_eq!(project(r#""" "Basics" 5"#), Err(ParseError::Missing("title")));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            project(r#""Intro Project 100"#),
            Err(ParseError::Unterminated("title"))
        );
        assert_eq!(
            project(r#""Intro" "A basic project 100"#),
            Err(ParseError::Unterminated("description"))
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(project(""), Err(ParseError::Missing("title")));
        assert_eq!(project(r#""Intro""#), Err(ParseError::Missing("description")));
        assert_eq!(
            project(r#""Intro" "Basics""#),
            Err(ParseError::Missing("max grade"))
        );
    }

    #[test]
    fn test_bad_max_grade() {
        assert_eq!(
            project(r#""Intro" "Basics" lots"#),
            Err(ParseError::NotAnInteger {
                field: "max grade",
                value: "lots".into()
            })
        );
    }

    #[test]
    fn test_trailing() {
        assert_eq!(
            project(r#""Intro" "Basics" 10 20"#),
            Err(ParseError::Trailing("20".into()))
        );
    }

    #[test]
    fn test_stray_quote() {
        assert!(matches!(
            project(r#""In"tro" "Basics" 10"#),
            Err(ParseError::StrayQuote { field: "title", .. })
        ));
        assert!(matches!(
            project(r#"Intro "Bas"ics" 10"#),
            Err(ParseError::StrayQuote {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(
            split_fields(&tokens(r#"ada123 "Intro Project" 95"#)),
            Ok(vec!["ada123".into(), "Intro Project".into(), "95".into()])
        );
        assert_eq!(split_fields(&[]), Ok(vec![]));
        assert_eq!(
            split_fields(&tokens(r#"ada123 "Intro Project"#)),
            Err(ParseError::Unterminated("argument"))
        );
    }
}
