//! Named grid lookup.

use std::collections::HashMap;

use tabula_grid::grid::{DataGrid, GridDefinition};
use tabula_grid::{GridError, GridResult};

/// Grids served by the endpoint, keyed by name.
#[derive(Debug, Default)]
pub struct GridRegistry {
    grids: HashMap<String, DataGrid>,
}

impl GridRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `grid` under its name.
    ///
    /// Returns an error if the name is already taken.
    pub fn register(&mut self, grid: DataGrid) -> GridResult<()> {
        if self.grids.contains_key(grid.name()) {
            return Err(GridError::InvalidDefinition {
                message: format!("grid '{}' is defined more than once", grid.name()),
            });
        }
        self.grids.insert(grid.name().to_string(), grid);
        Ok(())
    }

    /// Builds a registry from grid definitions.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = GridDefinition>,
    ) -> GridResult<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(DataGrid::from_definition(definition)?)?;
        }
        Ok(registry)
    }

    /// Parses a JSON array of grid definitions.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let definitions: Vec<GridDefinition> =
            serde_json::from_str(json).map_err(|e| GridError::InvalidDefinition {
                message: e.to_string(),
            })?;
        Self::from_definitions(definitions)
    }

    /// Looks up a grid by name.
    pub fn get(&self, name: &str) -> Option<&DataGrid> {
        self.grids.get(name)
    }

    /// Returns the registered grid names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grids.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Returns true if no grid is registered.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
