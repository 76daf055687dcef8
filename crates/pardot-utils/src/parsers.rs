use crate::errors::{ParseError, Result, UtilsError};

/// Pardot expects id lists as comma separated integers without spaces.
pub struct IdListParser;

impl IdListParser {
    /// Strip all whitespace from a comma separated id list.
    pub fn normalize(&self, ids: &str) -> String {
        ids.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Parse an id list into integers, rejecting empty or non-numeric entries.
    pub fn parse(&self, ids: &str) -> Result<Vec<u64>> {
        let normalized = self.normalize(ids);
        if normalized.is_empty() {
            return Err(UtilsError::Parse(ParseError::InvalidFormat(
                "Empty id list".to_string(),
            )));
        }

        normalized
            .split(',')
            .map(|id| {
                id.parse::<u64>().map_err(|_| {
                    UtilsError::Parse(ParseError::InvalidValue(format!(
                        "'{}' is not a valid id",
                        id
                    )))
                })
            })
            .collect()
    }
}

// Convenience functions
pub fn parse_id_list(ids: &str) -> Result<Vec<u64>> {
    IdListParser.parse(ids)
}

/// Join ids into the form Pardot expects.
pub fn join_ids<I, T>(ids: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
