//! Tabular data engine
//!
//! Turns an ordered slice of [`Record`]s plus column descriptors into a sorted,
//! rendered row sequence. The engine never mutates its input; it only derives
//! an ordering.

use std::cmp::Ordering;
use std::fmt;

use agdeck_types::{Record, SortDirection, SortState, Value};

/// Custom cell rendering for one column
pub type CellRenderer<R> = Box<dyn Fn(&Value, &R) -> String>;

type RowCallback<R> = Box<dyn FnMut(&R)>;

/// Tri-state header activation: ascending, then descending, then unsorted.
///
/// Activating a column other than the current key always starts at ascending.
pub fn next_sort_state(current: &SortState, key: &str) -> SortState {
    match current {
        SortState::Sorted {
            key: current_key,
            direction: SortDirection::Ascending,
        } if current_key == key => SortState::descending(key),
        SortState::Sorted {
            key: current_key,
            direction: SortDirection::Descending,
        } if current_key == key => SortState::Unsorted,
        _ => SortState::ascending(key),
    }
}

/// Ascending comparison of two field values.
///
/// `Null` compares after everything else. Mixed numeric variants compare
/// numerically; any other kind mismatch falls back to a fixed kind order.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Integer(x), Value::Number(y)) => (*x as f64).total_cmp(y),
        (Value::Number(x), Value::Integer(y)) => x.total_cmp(&(*y as f64)),
        (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        (Value::Date(x), Value::Date(y)) => x.cmp(y),
        (Value::Timestamp(x), Value::Timestamp(y)) => x.cmp(y),
        (Value::Ordinal { rank: x, .. }, Value::Ordinal { rank: y, .. }) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Integer(_) | Value::Number(_) => 0,
        Value::Text(_) => 1,
        Value::Date(_) => 2,
        Value::Timestamp(_) => 3,
        Value::Ordinal { .. } => 4,
        Value::Null => 5,
    }
}

// Missing values stay last in both directions; only defined pairs flip.
fn compare_directed(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(compare_values(a, b)),
    }
}

fn field_or_null<R: Record>(record: &R, key: &str) -> Value {
    record.field(key).unwrap_or_else(|| {
        tracing::warn!(
            column = key,
            record = record.id(),
            "record has no such field, rendering as missing"
        );
        Value::Null
    })
}

/// Order records for display. `Unsorted` keeps input order exactly.
pub fn sort_records<'a, R: Record>(records: &'a [R], sort: &SortState) -> Vec<&'a R> {
    let SortState::Sorted { key, direction } = sort else {
        return records.iter().collect();
    };

    let mut keyed: Vec<(Value, &'a R)> = records
        .iter()
        .map(|record| (field_or_null(record, key), record))
        .collect();

    // sort_by is stable: equal keys keep their input order
    keyed.sort_by(|(a, _), (b, _)| compare_directed(a, b, *direction));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Column descriptor
pub struct Column<R> {
    key: String,
    label: String,
    width: Option<u16>,
    render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            render: None,
        }
    }

    /// Layout hint, in terminal cells
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &R) -> String + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> Option<u16> {
        self.width
    }
}

impl<R: Record> Column<R> {
    /// Display text for this column of `record`.
    ///
    /// The column's renderer sees every value, including `Null`; without one
    /// the value is stringified and `Null` becomes `"--"`.
    pub fn render_cell(&self, record: &R) -> String {
        let value = field_or_null(record, &self.key);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.to_string(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

/// One display row: the backing record and its rendered cells, in column order
#[derive(Debug)]
pub struct RenderedRow<'a, R> {
    pub record: &'a R,
    pub cells: Vec<String>,
}

impl<R: Record> RenderedRow<'_, R> {
    pub fn id(&self) -> &str {
        self.record.id()
    }
}

/// Columns, sort state and row activation for one table instance
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    sort: SortState,
    on_row_activate: Option<RowCallback<R>>,
}

impl<R: Record> DataTable<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            sort: SortState::Unsorted,
            on_row_activate: None,
        }
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Header activation on column `key`
    pub fn request_sort(&mut self, key: &str) -> &SortState {
        self.sort = next_sort_state(&self.sort, key);
        tracing::debug!(column = key, sort = ?self.sort, "sort requested");
        &self.sort
    }

    pub fn rows<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        sort_records(records, &self.sort)
    }

    pub fn render<'a>(&self, records: &'a [R]) -> Vec<RenderedRow<'a, R>> {
        crate::render_table(records, &self.columns, &self.sort)
    }

    /// Register the row activation handler, replacing any previous one
    pub fn on_row_activate<F>(&mut self, callback: F)
    where
        F: FnMut(&R) + 'static,
    {
        self.on_row_activate = Some(Box::new(callback));
    }

    /// Fire the activation handler once for `record`.
    ///
    /// Returns `false` when no handler is configured.
    pub fn activate(&mut self, record: &R) -> bool {
        match self.on_row_activate.as_mut() {
            Some(callback) => {
                callback(record);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: &'static str,
        name: Option<&'static str>,
        score: Option<i64>,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            self.id
        }

        fn field(&self, key: &str) -> Option<Value> {
            match key {
                "id" => Some(Value::from(self.id)),
                "name" => Some(Value::from(self.name)),
                "score" => Some(Value::from(self.score)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a",
                name: Some("zed"),
                score: Some(3),
            },
            Row {
                id: "b",
                name: None,
                score: None,
            },
            Row {
                id: "c",
                name: Some("amy"),
                score: Some(1),
            },
        ]
    }

    fn ids<R: Record>(rows: &[&R]) -> Vec<String> {
        rows.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_tri_state_cycle() {
        let s0 = SortState::Unsorted;
        let s1 = next_sort_state(&s0, "score");
        assert_eq!(s1, SortState::ascending("score"));
        let s2 = next_sort_state(&s1, "score");
        assert_eq!(s2, SortState::descending("score"));
        let s3 = next_sort_state(&s2, "score");
        assert_eq!(s3, SortState::Unsorted);
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let state = SortState::descending("score");
        assert_eq!(
            next_sort_state(&state, "name"),
            SortState::ascending("name")
        );
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            compare_values(&Value::Integer(2), &Value::Number(2.5)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::Number(2.0), &Value::Integer(2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let data = rows();
        let asc = sort_records(&data, &SortState::ascending("score"));
        assert_eq!(ids(&asc), ["c", "a", "b"]);

        let desc = sort_records(&data, &SortState::descending("score"));
        assert_eq!(ids(&desc), ["a", "c", "b"]);
    }

    #[test]
    fn test_unsorted_is_pass_through() {
        let data = rows();
        let out = sort_records(&data, &SortState::Unsorted);
        assert_eq!(ids(&out), ["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_key_sorts_as_missing() {
        let data = rows();
        let out = sort_records(&data, &SortState::ascending("nope"));
        assert_eq!(ids(&out), ["a", "b", "c"]);
    }

    #[test]
    fn test_default_render_placeholder() {
        let column: Column<Row> = Column::new("name", "Name");
        let data = rows();
        assert_eq!(column.render_cell(&data[0]), "zed");
        assert_eq!(column.render_cell(&data[1]), "--");
    }

    #[test]
    fn test_custom_render_sees_record() {
        let column: Column<Row> = Column::new("score", "Score")
            .with_render(|value, row: &Row| format!("{}:{}", row.id, value));
        let data = rows();
        assert_eq!(column.render_cell(&data[0]), "a:3");
        assert_eq!(column.render_cell(&data[1]), "b:--");
    }

    #[test]
    fn test_render_can_share_local_state() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let column: Column<Row> = Column::new("id", "ID").with_render(move |value, _| {
            seen.set(seen.get() + 1);
            value.to_string()
        });

        for row in &rows() {
            column.render_cell(row);
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_activate_without_handler() {
        let mut table: DataTable<Row> = DataTable::new(vec![Column::new("id", "ID")]);
        assert!(!table.activate(&rows()[0]));
    }
}
