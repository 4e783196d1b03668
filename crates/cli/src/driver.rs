//! Driver loop: reads stdin line by line, tokenizes, dispatches to
//! [`GraphStore`], and writes `report` output. Stops on `end` or EOF.

use std::io::{BufRead, Write};

use graphmon_core::{Command, GraphResult, GraphStore, Output};

use crate::parse::{parse_command, tokenize};

/// Run the read-evaluate-print loop until `end` or EOF.
///
/// Unknown verbs, malformed argument counts, and unbalanced quotes are
/// silently discarded — the loop never stops because of them, only
/// because of `end` or exhausted input.
pub fn run<R: BufRead, W: Write>(store: &mut GraphStore, input: R, mut output: W) -> GraphResult<()> {
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let tokens = match tokenize(&line) {
            Some(t) => t,
            None => {
                tracing::debug!(%line, "unbalanced quotes, discarding line");
                continue;
            }
        };

        let Some(command) = parse_command(&tokens) else {
            tracing::debug!(%line, "unrecognized command, discarding line");
            continue;
        };

        if command == Command::End {
            tracing::trace!("end command received, terminating loop");
            break;
        }

        match store.dispatch(command)? {
            Output::Report(text) => {
                output.write_all(text.as_bytes()).ok();
            }
            Output::Noop => {}
        }
    }

    tracing::debug!(
        entity_count = store.entity_count(),
        entities = ?store.entity_names_sorted(),
        "read loop finished, final entity set"
    );
    if tracing::enabled!(tracing::Level::TRACE) {
        let entries: Vec<_> = store.entity_entries().collect();
        tracing::trace!(?entries, "final id -> name entries");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmon_core::StoreConfig;

    fn store() -> GraphStore {
        GraphStore::new(StoreConfig {
            entity_capacity: 8,
            relation_capacity: 8,
            inner_capacity: 8,
        })
    }

    #[test]
    fn runs_scenario_one_end_to_end() {
        let input = b"addent \"alice\"\naddent \"bob\"\naddrel \"alice\" \"bob\" \"knows\"\nreport\n" as &[u8];
        let mut output = Vec::new();
        run(&mut store(), input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "\"knows\" \"bob\" 1;\n");
    }

    #[test]
    fn stops_on_end_without_processing_further_lines() {
        let input = b"addent \"a\"\nend\naddent \"b\"\nreport\n" as &[u8];
        let mut output = Vec::new();
        let mut s = store();
        run(&mut s, input, &mut output).unwrap();
        assert!(output.is_empty());
        assert!(s.is_registered("a"));
        assert!(!s.is_registered("b"));
    }

    #[test]
    fn ignores_malformed_lines_without_stopping() {
        let input = b"frobnicate \"x\"\naddent \"a\" \"b\"\naddent \"a\"\nreport\n" as &[u8];
        let mut output = Vec::new();
        run(&mut store(), input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "none\n");
    }

    #[test]
    fn runs_to_eof_when_no_end_command() {
        let input = b"addent \"a\"\naddent \"b\"\naddrel \"a\" \"b\" \"r\"\nreport\n" as &[u8];
        let mut output = Vec::new();
        run(&mut store(), input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "\"r\" \"b\" 1;\n");
    }
}
