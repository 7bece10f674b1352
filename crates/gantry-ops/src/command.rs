//! The script command language.
//!
//! One command per line, whitespace-separated, keyword first. Keywords are
//! matched ignoring case; component names are taken verbatim and stay
//! case-sensitive. Blank lines and `#` comments parse to nothing.

use thiserror::Error;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `DEPEND name [dep...]` — declare a component's direct dependencies.
    Depend { name: String, deps: Vec<String> },
    /// `INSTALL name` — install a component and its dependencies.
    Install { name: String },
    /// `REMOVE name` — remove a component if no longer needed.
    Remove { name: String },
    /// `LIST` — list installed components with reference counts.
    List,
    /// `TREE name` — render the declared dependency tree.
    Tree { name: String },
    /// `USES name` — list components that depend on a component.
    Uses { name: String },
    /// `END` — finish the session.
    End,
}

/// A line that could not be parsed. Parse failures are soft: the session
/// reports them and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` takes exactly one component name")]
    ExpectedName(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArgs(String),
    #[error("`DEPEND` needs a component name")]
    MissingName,
}

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match keyword.to_ascii_uppercase().as_str() {
        "DEPEND" => match args.split_first() {
            Some((name, deps)) => Command::Depend {
                name: name.to_string(),
                deps: deps.iter().map(|d| d.to_string()).collect(),
            },
            None => return Err(ParseError::MissingName),
        },
        "INSTALL" => Command::Install {
            name: single_name(keyword, &args)?,
        },
        "REMOVE" => Command::Remove {
            name: single_name(keyword, &args)?,
        },
        "TREE" => Command::Tree {
            name: single_name(keyword, &args)?,
        },
        "USES" => Command::Uses {
            name: single_name(keyword, &args)?,
        },
        "LIST" => no_args(keyword, &args, Command::List)?,
        "END" => no_args(keyword, &args, Command::End)?,
        _ => return Err(ParseError::Unknown(keyword.to_string())),
    };
    Ok(Some(command))
}

fn single_name(keyword: &str, args: &[&str]) -> Result<String, ParseError> {
    match args {
        [name] => Ok(name.to_string()),
        _ => Err(ParseError::ExpectedName(keyword.to_ascii_uppercase())),
    }
}

fn no_args(keyword: &str, args: &[&str], command: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::UnexpectedArgs(keyword.to_ascii_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depend_with_deps() {
        assert_eq!(
            parse("DEPEND app lib1 lib2").unwrap(),
            Some(Command::Depend {
                name: "app".to_string(),
                deps: vec!["lib1".to_string(), "lib2".to_string()],
            })
        );
    }

    #[test]
    fn depend_without_deps() {
        assert_eq!(
            parse("DEPEND app").unwrap(),
            Some(Command::Depend {
                name: "app".to_string(),
                deps: vec![],
            })
        );
    }

    #[test]
    fn keywords_are_case_insensitive_names_are_not() {
        assert_eq!(
            parse("install App").unwrap(),
            Some(Command::Install {
                name: "App".to_string()
            })
        );
    }

    #[test]
    fn blank_lines_and_comments_parse_to_nothing() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# a comment").unwrap(), None);
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            parse("FROBNICATE app"),
            Err(ParseError::Unknown("FROBNICATE".to_string()))
        );
    }

    #[test]
    fn arity_errors() {
        assert_eq!(parse("DEPEND"), Err(ParseError::MissingName));
        assert_eq!(
            parse("INSTALL a b"),
            Err(ParseError::ExpectedName("INSTALL".to_string()))
        );
        assert_eq!(
            parse("remove"),
            Err(ParseError::ExpectedName("REMOVE".to_string()))
        );
        assert_eq!(
            parse("LIST everything"),
            Err(ParseError::UnexpectedArgs("LIST".to_string()))
        );
    }

    #[test]
    fn list_and_end() {
        assert_eq!(parse("list").unwrap(), Some(Command::List));
        assert_eq!(parse("END").unwrap(), Some(Command::End));
    }
}
