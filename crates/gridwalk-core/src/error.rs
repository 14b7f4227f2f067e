//! Error types shared by every run.

use std::fmt;

use crate::geom::Pos;

/// Which of the two designated cells an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// A grid that cannot be searched because an endpoint is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The endpoint lies outside the `size` × `size` grid.
    EndpointOutOfBounds {
        endpoint: Endpoint,
        pos: Pos,
        size: i32,
    },
    /// The endpoint sits on a wall.
    EndpointBlocked { endpoint: Endpoint, pos: Pos },
}

impl GridError {
    /// The endpoint the error refers to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::EndpointOutOfBounds { endpoint, .. } | Self::EndpointBlocked { endpoint, .. } => {
                *endpoint
            }
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointOutOfBounds {
                endpoint,
                pos,
                size,
            } => write!(f, "{endpoint} {pos} is outside the {size}x{size} grid"),
            Self::EndpointBlocked { endpoint, pos } => write!(f, "{endpoint} {pos} is a wall"),
        }
    }
}

impl std::error::Error for GridError {}

/// An algorithm identifier that names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}
