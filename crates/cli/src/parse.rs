//! Line tokenizing and verb dispatch. Tokenizing is delegated to `shlex`
//! so quoted and bare tokens both work (`addent alice` and
//! `addent "alice"`); verb dispatch is a plain match over the five-verb
//! grammar.

use graphmon_core::Command;

/// Split one input line into tokens, honoring shell-style quoting.
/// Returns `None` on unbalanced quotes (malformed, discarded without
/// error).
pub fn tokenize(line: &str) -> Option<Vec<String>> {
    shlex::split(line)
}

/// Parse a tokenized line into a [`Command`]. Returns `None` for unknown
/// verbs or a wrong argument count — such lines are silently ignored by
/// the caller.
pub fn parse_command(tokens: &[String]) -> Option<Command> {
    let (verb, args) = tokens.split_first()?;
    match (verb.as_str(), args) {
        ("addent", [name]) => Some(Command::AddEnt { name: name.clone() }),
        ("delent", [name]) => Some(Command::DelEnt { name: name.clone() }),
        ("addrel", [origin, dest, relation]) => Some(Command::AddRel {
            origin: origin.clone(),
            dest: dest.clone(),
            relation: relation.clone(),
        }),
        ("delrel", [origin, dest, relation]) => Some(Command::DelRel {
            origin: origin.clone(),
            dest: dest.clone(),
            relation: relation.clone(),
        }),
        ("report", []) => Some(Command::Report),
        ("end", []) => Some(Command::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_quoted_and_bare_args_alike() {
        assert_eq!(
            tokenize(r#"addent "alice""#).unwrap(),
            vec!["addent".to_string(), "alice".to_string()]
        );
        assert_eq!(
            tokenize("addent alice").unwrap(),
            vec!["addent".to_string(), "alice".to_string()]
        );
    }

    #[test]
    fn unbalanced_quotes_tokenize_to_none() {
        assert!(tokenize(r#"addent "alice"#).is_none());
    }

    #[test]
    fn parses_every_verb() {
        let tokens = tokenize(r#"addrel "a" "b" "knows""#).unwrap();
        assert_eq!(
            parse_command(&tokens),
            Some(Command::AddRel {
                origin: "a".into(),
                dest: "b".into(),
                relation: "knows".into(),
            })
        );
        assert_eq!(parse_command(&tokenize("report").unwrap()), Some(Command::Report));
        assert_eq!(parse_command(&tokenize("end").unwrap()), Some(Command::End));
    }

    #[test]
    fn unknown_verb_is_none() {
        assert_eq!(parse_command(&tokenize(r#"frobnicate "x""#).unwrap()), None);
    }

    #[test]
    fn wrong_arg_count_is_none() {
        assert_eq!(parse_command(&tokenize(r#"addent "a" "b""#).unwrap()), None);
        assert_eq!(parse_command(&tokenize("report extra").unwrap()), None);
    }

    #[test]
    fn empty_line_has_no_verb() {
        assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_command(&tokenize("").unwrap()), None);
    }
}
