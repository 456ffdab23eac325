// src/data.rs
//
// Plain string table: what export and the GUI table consume. Built from the
// typed dataset (see dataset::Dataset::to_table); never edited in place.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringTable {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl StringTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }

    /// Copy of the table without one column (display toggles).
    pub fn without_column(&self, ix: usize) -> StringTable {
        let drop = |r: &Vec<String>| -> Vec<String> {
            r.iter()
                .enumerate()
                .filter(|(i, _)| *i != ix)
                .map(|(_, c)| c.clone())
                .collect()
        };
        StringTable {
            headers: self.headers.as_ref().map(drop),
            rows: self.rows.iter().map(drop).collect(),
        }
    }
}
