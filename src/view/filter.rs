//! Table rows and the search filter.

use crate::model::{Client, ClientId};
use serde::Serialize;

/// A client as the table renders it, with the row identity `key` alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    #[serde(flatten)]
    pub record: Client,
    pub key: ClientId,
}

impl From<&Client> for TableRow {
    fn from(client: &Client) -> Self {
        Self {
            record: client.clone(),
            key: client.id,
        }
    }
}

/// Whether the row's JSON form contains `term`, case-sensitively.
///
/// This matches against the whole serialized row, field names and `key` included,
/// not against individual fields.
pub fn matches(row: &TableRow, term: &str) -> bool {
    serde_json::to_string(row)
        .map(|json| json.contains(term))
        .unwrap_or(false)
}

/// Builds table rows in source order, keeping those that match `term`.
pub fn filter_rows(clients: &[Client], term: Option<&str>) -> Vec<TableRow> {
    clients
        .iter()
        .map(TableRow::from)
        .filter(|row| term.map_or(true, |t| t.is_empty() || matches(row, t)))
        .collect()
}
