//! Column metadata for the model table.
//!
//! Every column key is bound to its label, sortability and value accessor in
//! [`COLUMNS`]. Unknown key strings are rejected when parsed, so sorting never
//! looks a field up by name at runtime.

use std::fmt;
use std::str::FromStr;

use crate::record::ModelRecord;

/// Column keys of the model table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    ModelName,
    ModelType,
    Description,
    CreatedOn,
    LastTrainedOn,
    Status,
    Action,
}

/// Static description of one table column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sortable: bool,
    /// Display width hint for terminal rendering.
    pub width: u16,
    accessor: Option<fn(&ModelRecord) -> &str>,
}

impl ColumnSpec {
    /// String value of this column for `record`, or `None` for columns
    /// without a value (the action column).
    pub fn value<'a>(&self, record: &'a ModelRecord) -> Option<&'a str> {
        self.accessor.map(|get| get(record))
    }
}

fn display_name(r: &ModelRecord) -> &str {
    &r.display_name
}

fn model_type(r: &ModelRecord) -> &str {
    &r.model_type
}

fn description(r: &ModelRecord) -> &str {
    &r.description
}

fn created_on(r: &ModelRecord) -> &str {
    &r.created_on
}

fn last_trained_on(r: &ModelRecord) -> &str {
    &r.last_trained_on
}

fn status(r: &ModelRecord) -> &str {
    r.status.as_str()
}

/// All columns, indexed by `ColumnKey as usize`.
pub static COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec {
        key: ColumnKey::ModelName,
        label: "Model Name",
        sortable: true,
        width: 22,
        accessor: Some(display_name),
    },
    ColumnSpec {
        key: ColumnKey::ModelType,
        label: "Model Type",
        sortable: true,
        width: 12,
        accessor: Some(model_type),
    },
    ColumnSpec {
        key: ColumnKey::Description,
        label: "Description",
        sortable: true,
        width: 26,
        accessor: Some(description),
    },
    ColumnSpec {
        key: ColumnKey::CreatedOn,
        label: "Created On",
        sortable: true,
        width: 12,
        accessor: Some(created_on),
    },
    ColumnSpec {
        key: ColumnKey::LastTrainedOn,
        label: "Last Trained On",
        sortable: true,
        width: 16,
        accessor: Some(last_trained_on),
    },
    ColumnSpec {
        key: ColumnKey::Status,
        label: "Status",
        sortable: true,
        width: 10,
        accessor: Some(status),
    },
    ColumnSpec {
        key: ColumnKey::Action,
        label: "Action",
        sortable: false,
        width: 6,
        accessor: None,
    },
];

impl ColumnKey {
    pub fn all() -> &'static [ColumnKey] {
        &[
            ColumnKey::ModelName,
            ColumnKey::ModelType,
            ColumnKey::Description,
            ColumnKey::CreatedOn,
            ColumnKey::LastTrainedOn,
            ColumnKey::Status,
            ColumnKey::Action,
        ]
    }

    /// Wire name of the key, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::ModelName => "modelName",
            ColumnKey::ModelType => "modelType",
            ColumnKey::Description => "description",
            ColumnKey::CreatedOn => "createdOn",
            ColumnKey::LastTrainedOn => "lastTrainedOn",
            ColumnKey::Status => "status",
            ColumnKey::Action => "action",
        }
    }

    pub fn spec(&self) -> &'static ColumnSpec {
        &COLUMNS[self.index()]
    }

    /// Position of the column in display order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<ColumnKey> {
        Self::all().get(index).copied()
    }

    pub fn is_sortable(&self) -> bool {
        self.spec().sortable
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized column key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ColumnKey::all().iter().map(|k| k.as_str()).collect();
        write!(
            f,
            "unknown column '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownColumn {}

impl FromStr for ColumnKey {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ModelStatus;

    #[test]
    fn columns_are_indexed_by_key() {
        for (i, spec) in COLUMNS.iter().enumerate() {
            assert_eq!(spec.key.index(), i);
            assert_eq!(ColumnKey::from_index(i), Some(spec.key));
        }
        assert_eq!(ColumnKey::from_index(COLUMNS.len()), None);
    }

    #[test]
    fn only_action_is_unsortable_and_valueless() {
        for spec in &COLUMNS {
            assert_eq!(spec.sortable, spec.key != ColumnKey::Action);
            assert_eq!(spec.accessor.is_some(), spec.sortable);
        }
    }

    #[test]
    fn parses_known_keys_and_rejects_others() {
        for key in ColumnKey::all() {
            assert_eq!(key.as_str().parse::<ColumnKey>(), Ok(*key));
        }
        let err = "name".parse::<ColumnKey>().unwrap_err();
        assert_eq!(err, UnknownColumn("name".to_string()));
        assert!(err.to_string().contains("modelName"));
    }

    #[test]
    fn model_name_reads_display_name_not_id() {
        let record = ModelRecord {
            display_name: "Model C".to_string(),
            id: "#5000003".to_string(),
            model_type: "Extraction".to_string(),
            description: "Description for Model C".to_string(),
            created_on: "29/02/2024".to_string(),
            last_trained_on: "01/03/2024".to_string(),
            status: ModelStatus::Inactive,
        };
        assert_eq!(ColumnKey::ModelName.spec().value(&record), Some("Model C"));
        assert_eq!(
            ColumnKey::LastTrainedOn.spec().value(&record),
            Some("01/03/2024")
        );
        assert_eq!(ColumnKey::Status.spec().value(&record), Some("Inactive"));
        assert_eq!(ColumnKey::Action.spec().value(&record), None);
    }
}
