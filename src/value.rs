/// Target value supplied by the caller for one fill call. The variant must
/// fit the field type it is paired with; a mismatched pairing makes the
/// fill report the value as not applicable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillValue {
    /// Plain inputs, every date/time literal, scale and dropdown labels.
    Text(String),
    /// Checkbox grids: requested columns per row.
    CheckboxGrid(Vec<GridSelection>),
    /// Multiple-choice grids: one requested column per row.
    ChoiceGrid(Vec<RowSelection>),
    /// Multi-correct option lists: any number of selections.
    MultiChoice(Vec<ChoiceSelection>),
    /// Multiple-choice option lists: exactly one selection.
    SingleChoice(ChoiceSelection),
}

impl From<&str> for FillValue {
    fn from(text: &str) -> Self {
        FillValue::Text(text.to_string())
    }
}

impl From<String> for FillValue {
    fn from(text: String) -> Self {
        FillValue::Text(text)
    }
}

/// Requested columns for one checkbox-grid row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSelection {
    pub row: String,
    pub cols: Vec<String>,
}

/// Requested column for one multiple-choice-grid row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSelection {
    pub row: String,
    pub selected_column: String,
}

/// One requested selection in an option list. The variant carries the
/// "other" capability, so the same filler serves the plain and the
/// with-other field type tags.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceSelection {
    /// Select the live option whose label matches, case-insensitively.
    Label(String),
    /// Toggle the field's "Other" control and write this free text into
    /// its attached input.
    Other(String),
}
