use std::num::ParseIntError;

use thiserror::Error;

const CMD_SUFFIX: &str = "/cmd";
const RELATIVE_PREFIX: &str = "./";
const NAME_MARKER: &str = "process";

/// Name and numeric id derived from the path the program was invoked with
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProcessIdentity {
    pub name: String,
    pub id: i64,
}

/// The digits left after stripping the path decorations were not an integer
#[derive(Debug, Error)]
#[error("parsing {input:?}: {source}")]
pub struct ParseError {
    pub input: String,
    #[source]
    pub source: ParseIntError,
}

impl ProcessIdentity {
    /// Extract the identity from a path such as `./process3/cmd`.
    ///
    /// The name keeps the `process` marker (`process3`), while the id is parsed from what remains
    /// once every occurrence of the marker is removed.
    pub fn extract(path: &str) -> Result<Self, ParseError> {
        let trimmed = path.strip_suffix(CMD_SUFFIX).unwrap_or(path);
        let name = trimmed.strip_prefix(RELATIVE_PREFIX).unwrap_or(trimmed);

        let digits = name.replace(NAME_MARKER, "");
        let id = digits.parse::<i64>().map_err(|source| ParseError {
            input: digits.clone(),
            source,
        })?;

        Ok(Self {
            name: name.to_string(),
            id,
        })
    }
}

impl std::fmt::Display for ProcessIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (id {})", self.name, self.id)
    }
}
