//! Sources that supply ordered coordinate-move strings to a game

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from reading or decoding a move file
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to read move file: {0}")]
    Io(#[from] std::io::Error),
    #[error("move file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("move file must contain a JSON list")]
    NotAList,
    #[error("move at index {0} is not a string")]
    NotAString(usize),
}

/// A source of coordinate moves ("e2e4"), first to play first
pub trait MoveSource {
    /// Produce the ordered moves
    fn load(&self) -> Result<Vec<String>>;
}

/// Loads moves from a file holding a JSON array of strings
///
/// The expected format is `["e2e4", "e7e5", "g1f3"]`.
pub struct JsonFileMoveSource {
    path: PathBuf,
}

impl JsonFileMoveSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MoveSource for JsonFileMoveSource {
    fn load(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;
        parse_move_list(&contents)
    }
}

fn parse_move_list(contents: &str) -> Result<Vec<String>> {
    let data: Value = serde_json::from_str(contents)?;
    let Value::Array(entries) = data else {
        return Err(Error::NotAList);
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(notation) => Ok(notation),
            _ => Err(Error::NotAString(index)),
        })
        .collect()
}

/// Wraps an in-memory list of moves behind the [`MoveSource`] interface
pub struct InMemoryMoveSource {
    moves: Vec<String>,
}

impl InMemoryMoveSource {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }
}

impl MoveSource for InMemoryMoveSource {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.moves.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_list_of_strings() {
        let moves = parse_move_list(r#"["e2e4", "e7e5", "g1f3"]"#).unwrap();
        assert_eq!(moves, ["e2e4", "e7e5", "g1f3"]);
    }

    #[test]
    fn test_empty_list_is_allowed() {
        assert_eq!(parse_move_list("[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_top_level_must_be_a_list() {
        for contents in [r#"{"moves": []}"#, r#""e2e4""#, "42"] {
            assert!(matches!(parse_move_list(contents), Err(Error::NotAList)));
        }
    }

    #[test]
    fn test_non_string_element_is_named_by_index() {
        let err = parse_move_list(r#"["e2e4", 7, "g1f3"]"#).unwrap_err();
        assert!(matches!(err, Error::NotAString(1)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_move_list(r#"["e2e4""#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = JsonFileMoveSource::new("/nonexistent/moves.json");
        assert!(matches!(source.load(), Err(Error::Io(_))));
    }

    #[test]
    fn test_in_memory_source_round_trips() {
        let source = InMemoryMoveSource::new(["e2e4", "e7e5"]);
        assert_eq!(source.load().unwrap(), ["e2e4", "e7e5"]);
    }
}
