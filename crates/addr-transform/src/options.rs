use addr_standards::ExpansionTables;

use crate::ids::INITIAL_ID;

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Ids are allocated starting one below this value.
    pub initial_id: i64,
    pub tables: ExpansionTables,
}

impl PipelineOptions {
    pub fn new(tables: ExpansionTables) -> Self {
        Self {
            initial_id: INITIAL_ID,
            tables,
        }
    }

    #[must_use]
    pub fn with_initial_id(mut self, initial_id: i64) -> Self {
        self.initial_id = initial_id;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new(ExpansionTables::builtin())
    }
}
