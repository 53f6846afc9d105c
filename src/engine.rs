use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, trace};

use crate::config::FillConfig;
use crate::error::Result;
use crate::extract::ExtractedValue;
use crate::field::{FieldType, Seg};
use crate::interact::Handle;
use crate::value::{ChoiceSelection, FillValue, GridSelection, RowSelection};

/// How a popup option label must match the target value.
#[derive(Debug, Clone, Copy)]
enum LabelMatch {
    /// Exact string equality.
    Exact,
    /// Trimmed, case-insensitive equality.
    Normalized,
}

/// Routes a (field type, value) pair to its parser and filler, and drives
/// the field's extracted handles into the requested state.
///
/// `fill` resolves to `Ok(false)` whenever the value is not applicable to
/// the field — wrong value shape, literal grammar mismatch, impossible
/// calendar date, indispensable handle absent, or no matching option.
/// `Err` is reserved for backend transport failures.
pub struct FillerEngine {
    settle: Duration,
}

impl FillerEngine {
    pub fn new() -> Self {
        Self::with_config(FillConfig::default())
    }

    pub fn with_config(config: FillConfig) -> Self {
        Self {
            settle: config.settle,
        }
    }

    /// Fill one field with the given value.
    pub async fn fill(
        &self,
        field_type: FieldType,
        field: &ExtractedValue,
        value: &FillValue,
    ) -> Result<bool> {
        debug!("Filling {:?} field", field_type);
        match (field_type, value) {
            (
                FieldType::Text | FieldType::TextEmail | FieldType::TextUrl | FieldType::Paragraph,
                FillValue::Text(text),
            ) => self.assign(field.dom.as_ref(), text).await,

            (
                ty @ (FieldType::Date
                | FieldType::DateAndTime
                | FieldType::DateTimeWithMeridiem
                | FieldType::DateTimeWithMeridiemWithoutYear
                | FieldType::TimeWithMeridiem
                | FieldType::Time
                | FieldType::Duration
                | FieldType::DateWithoutYear
                | FieldType::DateTimeWithoutYear),
                FillValue::Text(text),
            ) => self.fill_segments(ty, field, text).await,

            (FieldType::LinearScale, FillValue::Text(text)) => {
                self.fill_linear_scale(field, text).await
            }

            (FieldType::Dropdown, FillValue::Text(text)) => self.fill_dropdown(field, text).await,

            (FieldType::CheckboxGrid, FillValue::CheckboxGrid(selections)) => {
                self.fill_checkbox_grid(field, selections).await
            }

            (FieldType::MultipleChoiceGrid, FillValue::ChoiceGrid(selections)) => {
                self.fill_choice_grid(field, selections).await
            }

            (
                FieldType::MultiCorrect | FieldType::MultiCorrectWithOther,
                FillValue::MultiChoice(selections),
            ) => self.fill_choices(field, selections).await,

            (
                FieldType::MultipleChoice | FieldType::MultipleChoiceWithOther,
                FillValue::SingleChoice(selection),
            ) => {
                self.fill_choices(field, std::slice::from_ref(selection))
                    .await
            }

            _ => {
                debug!("Value shape {:?} does not apply to {:?} fields", value, field_type);
                Ok(false)
            }
        }
    }

    // ── Interaction primitives ──────────────────────────────────────

    /// Set the handle's value with a bubbling notification; reports
    /// whether the handle was present.
    async fn assign(&self, handle: Option<&Handle>, value: &str) -> Result<bool> {
        match handle {
            Some(handle) => {
                handle.set_value(value).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Open a popup widget if it is not already expanded, wait for the
    /// page to populate it, then scan the live option list in document
    /// order and click the first label match. A single pass; a missed
    /// scan reports `false` without retrying.
    async fn select_from_popup(
        &self,
        widget: &Handle,
        target: &str,
        mode: LabelMatch,
    ) -> Result<bool> {
        if !widget.is_expanded().await? {
            debug!("Opening collapsed popup widget");
            widget.click().await?;
            sleep(self.settle).await;
        }

        // Options captured before the open may not have existed yet, so
        // the list is always re-derived here.
        for option in widget.popup_options().await? {
            let label = option.text().await?;
            let matched = match mode {
                LabelMatch::Exact => label == target,
                LabelMatch::Normalized => label.trim().eq_ignore_ascii_case(target.trim()),
            };
            if matched {
                debug!("Selecting popup option {:?}", label.trim());
                option.click().await?;
                return Ok(true);
            }
        }

        debug!("No popup option matched {:?}", target);
        Ok(false)
    }

    /// Click a checkbox/radio-like control only when it is not already
    /// selected, so refilling a correct field stays a no-op.
    async fn toggle(&self, handle: &Handle) -> Result<()> {
        if handle.is_checked().await? {
            trace!("Control already selected, skipping click");
            return Ok(());
        }
        handle.click().await
    }

    /// Toggle for grid cells, whose checked indicator nests inside the
    /// clickable cell rather than on it.
    async fn toggle_cell(&self, handle: &Handle) -> Result<()> {
        if handle.has_checked_marker().await? {
            trace!("Cell already marked, skipping click");
            return Ok(());
        }
        handle.click().await
    }

    // ── Composite fillers ───────────────────────────────────────────

    /// Common filler for every date/time literal type: validate the
    /// literal against the type's grammar, write each present segment
    /// handle, and resolve a trailing meridiem through its picker.
    async fn fill_segments(
        &self,
        field_type: FieldType,
        field: &ExtractedValue,
        raw: &str,
    ) -> Result<bool> {
        let grammar = match field_type.grammar() {
            Some(grammar) => grammar,
            None => return Ok(false),
        };
        if grammar.settle {
            sleep(self.settle).await;
        }

        let parts = match field_type.parse_literal(raw) {
            Some(parts) => parts,
            None => {
                debug!("Value {:?} does not match the {:?} grammar", raw, field_type);
                return Ok(false);
            }
        };

        let mut meridiem = None;
        for (seg, piece) in &parts {
            let handle = match seg {
                Seg::Day => field.date.as_ref(),
                Seg::Month => field.month.as_ref(),
                Seg::Year => field.year.as_ref(),
                Seg::Hour => field.hour.as_ref(),
                Seg::Minute => field.minute.as_ref(),
                Seg::Second => field.second.as_ref(),
                Seg::Meridiem => {
                    meridiem = Some(piece.as_str());
                    continue;
                }
            };
            if self.assign(handle, piece).await? {
                trace!("Wrote {:?} to the {:?} segment", piece, seg);
            } else {
                trace!("Field has no {:?} segment, skipped", seg);
            }
        }

        // Segment writes are best-effort; for meridiem-bearing grammars
        // the picker sub-result decides the call.
        match meridiem {
            Some(target) => match field.meridiem.as_ref() {
                Some(widget) => {
                    self.select_from_popup(widget, target, LabelMatch::Normalized)
                        .await
                }
                None => {
                    debug!("Field has no meridiem picker");
                    Ok(false)
                }
            },
            None => Ok(true),
        }
    }

    async fn fill_linear_scale(&self, field: &ExtractedValue, target: &str) -> Result<bool> {
        sleep(self.settle).await;

        for option in &field.options {
            if option.label == target {
                self.toggle(&option.handle).await?;
                return Ok(true);
            }
        }
        debug!("No scale point labeled {:?}", target);
        Ok(false)
    }

    async fn fill_dropdown(&self, field: &ExtractedValue, target: &str) -> Result<bool> {
        sleep(self.settle).await;

        if !field.options.iter().any(|option| option.label == target) {
            debug!("No dropdown option labeled {:?}", target);
            return Ok(false);
        }
        let widget = match field.dom.as_ref() {
            Some(widget) => widget,
            None => return Ok(false),
        };

        // The pre-open option handles may be stale; the click goes to
        // whatever the live scan finds. The scan result is not read back,
        // confirmation is outside this contract.
        self.select_from_popup(widget, target, LabelMatch::Exact)
            .await?;
        Ok(true)
    }

    async fn fill_checkbox_grid(
        &self,
        field: &ExtractedValue,
        selections: &[GridSelection],
    ) -> Result<bool> {
        sleep(self.settle).await;

        for row in &field.rows {
            if let Some(selection) = selections.iter().find(|s| s.row == row.row) {
                for requested in &selection.cols {
                    if let Some(cell) = row.cols.iter().find(|cell| &cell.label == requested) {
                        self.toggle_cell(&cell.handle).await?;
                    } else {
                        trace!("Row {:?} has no column {:?}", row.row, requested);
                    }
                }
            }
        }
        Ok(true)
    }

    async fn fill_choice_grid(
        &self,
        field: &ExtractedValue,
        selections: &[RowSelection],
    ) -> Result<bool> {
        sleep(self.settle).await;

        for row in &field.rows {
            if let Some(selection) = selections.iter().find(|s| s.row == row.row) {
                if let Some(cell) = row
                    .cols
                    .iter()
                    .find(|cell| cell.label == selection.selected_column)
                {
                    self.toggle(&cell.handle).await?;
                }
            }
        }
        Ok(true)
    }

    async fn fill_choices(
        &self,
        field: &ExtractedValue,
        selections: &[ChoiceSelection],
    ) -> Result<bool> {
        sleep(self.settle).await;

        for selection in selections {
            match selection {
                ChoiceSelection::Label(label) => {
                    for option in &field.options {
                        if option.label.eq_ignore_ascii_case(label) {
                            self.toggle(&option.handle).await?;
                        }
                    }
                }
                ChoiceSelection::Other(text) => match field.other.as_ref() {
                    Some(slot) => {
                        self.toggle(&slot.toggle).await?;
                        slot.input.set_value(text).await?;
                    }
                    None => debug!("Field has no other slot"),
                },
            }
        }
        Ok(true)
    }
}

impl Default for FillerEngine {
    fn default() -> Self {
        Self::new()
    }
}
