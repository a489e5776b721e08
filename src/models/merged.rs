use serde::Serialize;

use super::canton::CantonRecord;

/// One canton with its aligned data value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    #[serde(flatten)]
    pub canton: CantonRecord,
    pub value: f64,
}

/// Result of merging the canton reference table with the dataset's value
/// column. Never longer than the reference table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergedTable {
    pub rows: Vec<MergedRow>,
}

impl MergedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MergedRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a MergedTable {
    type Item = &'a MergedRow;
    type IntoIter = std::slice::Iter<'a, MergedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
