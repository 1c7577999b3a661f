//! Error types.
//!
//! The simulation itself cannot fail; only setting up the graphics backend can.

use std::fmt;

/// Errors raised while preparing GPU resources for drawing.
#[derive(Debug)]
pub enum RenderError {
    /// The additive-blend line material failed to compile or link.
    Material(macroquad::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Material(e) => write!(f, "Failed to build line material: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Material(e) => Some(e),
        }
    }
}

impl From<macroquad::Error> for RenderError {
    fn from(e: macroquad::Error) -> Self {
        RenderError::Material(e)
    }
}
