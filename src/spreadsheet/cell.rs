use calamine::Data;
use chrono::NaiveDateTime;

/// A single cell value at the row-access boundary.
///
/// Every extraction function pattern-matches on this union instead of
/// coercing types implicitly: free text stays text, numeric cells keep their
/// numeric identity (ZIP codes lose leading zeros in numeric cells and must
/// be re-padded), and empty or unreadable cells are uniformly `Missing`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Missing,
}

impl CellValue {
    /// Collapses a calamine cell into the three-way union.
    ///
    /// Booleans and date/time cells are carried as their rendered text;
    /// error cells count as missing, the same as empty ones.
    pub fn from_data(data: &Data) -> CellValue {
        match data {
            Data::String(value) => CellValue::Text(value.to_owned()),
            Data::Int(value) => CellValue::Number(*value as f64),
            Data::Float(value) => CellValue::Number(*value),
            Data::Bool(value) => CellValue::Text(value.to_string()),
            Data::DateTime(value) => match value.as_datetime() {
                Some(datetime) => CellValue::Text(render_datetime(&datetime)),
                None => CellValue::Number(value.as_f64()),
            },
            Data::DateTimeIso(value) => CellValue::Text(value.to_owned()),
            Data::DurationIso(value) => CellValue::Text(value.to_owned()),
            Data::Error(_) | Data::Empty => CellValue::Missing,
        }
    }

    /// Returns the cell text when the cell is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Renders the cell to text for pattern scanning.
    ///
    /// Integral numbers render without a fractional part. Missing cells
    /// render to nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            CellValue::Text(value) => Some(value.to_owned()),
            CellValue::Number(value) => Some(value.to_string()),
            CellValue::Missing => None,
        }
    }
}

/// One spreadsheet record as an ordered, column-indexed collection of cells.
///
/// Column positions are significant and fixed by convention, never remapped
/// by header name.
#[derive(Clone, Debug, Default)]
pub struct RawRow(Vec<CellValue>);

const MISSING: CellValue = CellValue::Missing;

impl RawRow {
    pub fn new(cells: Vec<CellValue>) -> RawRow {
        RawRow(cells)
    }

    /// Returns the cell at `index`; positions beyond the row are `Missing`.
    pub fn cell(&self, index: usize) -> &CellValue {
        self.0.get(index).unwrap_or(&MISSING)
    }
}

/// Renders a datetime cell the way it reads in the sheet.
fn render_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

impl FromIterator<CellValue> for RawRow {
    fn from_iter<T: IntoIterator<Item = CellValue>>(iter: T) -> RawRow {
        RawRow(iter.into_iter().collect())
    }
}
