use crate::interact::Handle;

/// Handle bundle the upstream scanner extracts for one field.
///
/// Every named handle is optional: absence means the field instance has no
/// such segment on the current page, and fillers skip it. The bundle is
/// transient, rebuilt by the scanner per fill call; the engine never
/// stores it.
#[derive(Debug, Clone, Default)]
pub struct ExtractedValue {
    /// The field's primary input or its popup widget.
    pub dom: Option<Handle>,
    /// Day-of-month segment input.
    pub date: Option<Handle>,
    pub month: Option<Handle>,
    pub year: Option<Handle>,
    pub hour: Option<Handle>,
    pub minute: Option<Handle>,
    pub second: Option<Handle>,
    /// AM/PM picker widget.
    pub meridiem: Option<Handle>,
    /// Selectable options of dropdowns, scales, and choice lists.
    pub options: Vec<FieldOption>,
    /// Grid rows with their selectable cells.
    pub rows: Vec<RowOptions>,
    /// The "Other" escape hatch of with-other choice fields.
    pub other: Option<OtherSlot>,
}

/// One selectable option; identity is the label.
#[derive(Debug, Clone)]
pub struct FieldOption {
    pub label: String,
    pub handle: Handle,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, handle: Handle) -> Self {
        Self {
            label: label.into(),
            handle,
        }
    }
}

/// One grid row and its selectable cells.
#[derive(Debug, Clone)]
pub struct RowOptions {
    pub row: String,
    pub cols: Vec<FieldOption>,
}

/// A togglable "Other" control with its attached free-text input.
#[derive(Debug, Clone)]
pub struct OtherSlot {
    pub toggle: Handle,
    pub input: Handle,
}
