use crate::error::{Error, Result};

/// Size or aspect-ratio specification for a multi-level feature pyramid.
///
/// Callers state explicitly whether a parameter list is shared by every level
/// or given per level; the generator never infers this from the shape of the
/// input.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelParams {
    /// One flat list of values, applied identically to every pyramid level.
    Shared(Vec<f32>),
    /// One list of values per pyramid level.
    ///
    /// A single nested list is broadcast across all levels; any other length
    /// must match the number of levels exactly.
    PerLevel(Vec<Vec<f32>>),
}

impl LevelParams {
    /// Normalize into exactly `num_levels` per-level lists.
    ///
    /// `name` identifies the parameter in error messages.
    pub fn broadcast(self, num_levels: usize, name: &'static str) -> Result<Vec<Vec<f32>>> {
        match self {
            LevelParams::Shared(values) => {
                if values.is_empty() {
                    return Err(Error::EmptyParameter { name });
                }
                Ok(vec![values; num_levels])
            }
            LevelParams::PerLevel(levels) => {
                if levels.is_empty() || levels.iter().any(Vec::is_empty) {
                    return Err(Error::EmptyParameter { name });
                }
                if levels.len() == 1 {
                    return Ok(vec![levels[0].clone(); num_levels]);
                }
                if levels.len() != num_levels {
                    return Err(Error::LevelCount {
                        name,
                        got: levels.len(),
                        expected: num_levels,
                    });
                }
                Ok(levels)
            }
        }
    }
}

impl From<Vec<f32>> for LevelParams {
    fn from(values: Vec<f32>) -> Self {
        LevelParams::Shared(values)
    }
}

impl From<Vec<Vec<f32>>> for LevelParams {
    fn from(levels: Vec<Vec<f32>>) -> Self {
        LevelParams::PerLevel(levels)
    }
}
