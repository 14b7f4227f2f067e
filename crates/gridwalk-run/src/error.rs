use std::fmt;

use gridwalk_core::GridError;

/// Why a run was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Another run is still in flight on this controller.
    Busy,
    /// The grid cannot be searched.
    Grid(GridError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => f.write_str("a run is already in progress"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Busy => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for RunError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
