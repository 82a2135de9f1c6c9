//! Ordered list of resolutions offered to the user.

use std::ops::Index;

use thiserror::Error;

use super::{DisplayService, ResolutionMode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Display reported no resolutions")]
    Empty,
}

/// Resolutions in reverse enumeration order, highest first when the backend
/// enumerates lowest first. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionCatalog {
    modes: Vec<ResolutionMode>,
}

impl ResolutionCatalog {
    pub fn from_enumeration(mut modes: Vec<ResolutionMode>) -> Result<Self, CatalogError> {
        if modes.is_empty() {
            return Err(CatalogError::Empty);
        }
        modes.reverse();
        Ok(Self { modes })
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResolutionMode> {
        self.modes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolutionMode> {
        self.modes.iter()
    }

    /// First entry whose width and height match.
    ///
    /// Refresh rate is not compared, so with several rates at the same size
    /// the first listed one wins even if another rate is active.
    pub fn position_of_size(&self, width: u32, height: u32) -> Option<usize> {
        self.modes.iter().position(|mode| mode.same_size(width, height))
    }

    pub fn labels(&self) -> Vec<String> {
        self.modes.iter().map(ResolutionMode::to_string).collect()
    }
}

impl Index<usize> for ResolutionCatalog {
    type Output = ResolutionMode;

    fn index(&self, index: usize) -> &Self::Output {
        &self.modes[index]
    }
}

/// Build the catalog and find the entry matching the current display size.
pub fn build_catalog(
    display: &dyn DisplayService,
) -> Result<(ResolutionCatalog, usize), CatalogError> {
    let catalog = ResolutionCatalog::from_enumeration(display.list_modes())?;
    let (width, height) = (display.current_width(), display.current_height());
    let initial = match catalog.position_of_size(width, height) {
        Some(index) => index,
        None => {
            tracing::warn!(
                width,
                height,
                "Current display size not in catalog, selecting first entry"
            );
            0
        }
    };
    tracing::debug!(modes = catalog.len(), initial, "Resolution catalog built");
    Ok((catalog, initial))
}
