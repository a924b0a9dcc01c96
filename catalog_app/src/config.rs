use catalog_types::RecordKind;
use serde::Deserialize;

/// Names of the tables each record kind is stored in.
///
/// Read from `RUBRICS_TABLE`, `SERIES_TABLE`, `SERIES_RUBRICS_TABLE`,
/// `EPISODES_TABLE` and `FREE_EPISODES_TABLE`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[allow(clippy::struct_field_names)]
pub struct CatalogTables {
    pub rubrics_table: String,
    pub series_table: String,
    pub series_rubrics_table: String,
    pub episodes_table: String,
    pub free_episodes_table: String,
}

impl CatalogTables {
    #[must_use]
    pub fn table_name(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Rubrics => &self.rubrics_table,
            RecordKind::Series => &self.series_table,
            RecordKind::SeriesRubrics => &self.series_rubrics_table,
            RecordKind::Episodes => &self.episodes_table,
            RecordKind::FreeEpisodes => &self.free_episodes_table,
        }
    }

    /// The record kind stored in `table`, if any.
    #[must_use]
    pub fn kind_of(&self, table: &str) -> Option<RecordKind> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| self.table_name(*kind) == table)
    }
}
