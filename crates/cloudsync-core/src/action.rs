use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::AppError;

/// Transfer action requested by a notification
///
/// Parsing is exact and case-sensitive: only `put` and `delete` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Put,
    Delete,
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "put" => Ok(Action::Put),
            "delete" => Ok(Action::Delete),
            _ => Err(AppError::UnknownAction(s.to_string())),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Action::Put => write!(f, "put"),
            Action::Delete => write!(f, "delete"),
        }
    }
}
