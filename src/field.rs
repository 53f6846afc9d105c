use chrono::NaiveDate;

/// Structural category of a form field, as detected by the upstream
/// scanner. The tag decides which parser and filler pair a value is
/// routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    TextEmail,
    TextUrl,
    Paragraph,
    Date,
    DateAndTime,
    DateTimeWithMeridiem,
    DateTimeWithMeridiemWithoutYear,
    TimeWithMeridiem,
    Time,
    Duration,
    DateWithoutYear,
    DateTimeWithoutYear,
    LinearScale,
    Dropdown,
    CheckboxGrid,
    MultipleChoiceGrid,
    MultiCorrect,
    MultiCorrectWithOther,
    MultipleChoice,
    MultipleChoiceWithOther,
}

/// One segment of a hyphen-delimited date/time literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg {
    Day,
    Month,
    Year,
    Hour,
    Minute,
    Second,
    Meridiem,
}

impl Seg {
    /// Digit width the segment must occupy in the literal.
    fn width(self) -> usize {
        match self {
            Seg::Year => 4,
            _ => 2,
        }
    }
}

/// Literal grammar of one date/time field type: the segment sequence the
/// value string must spell out, and whether the filler yields to the page
/// before touching the field's segments.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub segs: &'static [Seg],
    pub settle: bool,
}

impl Grammar {
    /// Year-bearing grammars must also denote a real calendar date.
    pub fn checks_calendar(&self) -> bool {
        self.segs.contains(&Seg::Year)
    }

    /// Whether the grammar ends in a meridiem picker segment.
    pub fn has_meridiem(&self) -> bool {
        self.segs.contains(&Seg::Meridiem)
    }
}

/// AM/PM half-day marker. Literals spell it upper-case; matching against
/// on-page option labels is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn parse(s: &str) -> Option<Meridiem> {
        match s {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl FieldType {
    /// The literal grammar for this field type, or `None` for types whose
    /// value is not a date/time literal.
    pub fn grammar(self) -> Option<Grammar> {
        let grammar = match self {
            FieldType::Date => Grammar {
                segs: &[Seg::Day, Seg::Month, Seg::Year],
                settle: false,
            },
            FieldType::DateAndTime => Grammar {
                segs: &[Seg::Day, Seg::Month, Seg::Year, Seg::Hour, Seg::Minute],
                settle: true,
            },
            FieldType::DateTimeWithMeridiem => Grammar {
                segs: &[
                    Seg::Day,
                    Seg::Month,
                    Seg::Year,
                    Seg::Hour,
                    Seg::Minute,
                    Seg::Meridiem,
                ],
                settle: true,
            },
            FieldType::DateTimeWithMeridiemWithoutYear => Grammar {
                segs: &[Seg::Day, Seg::Month, Seg::Hour, Seg::Minute, Seg::Meridiem],
                settle: true,
            },
            FieldType::TimeWithMeridiem => Grammar {
                segs: &[Seg::Hour, Seg::Minute, Seg::Meridiem],
                settle: true,
            },
            FieldType::Time => Grammar {
                segs: &[Seg::Hour, Seg::Minute],
                settle: false,
            },
            FieldType::Duration => Grammar {
                segs: &[Seg::Hour, Seg::Minute, Seg::Second],
                settle: false,
            },
            FieldType::DateWithoutYear => Grammar {
                segs: &[Seg::Day, Seg::Month],
                settle: false,
            },
            FieldType::DateTimeWithoutYear => Grammar {
                segs: &[Seg::Day, Seg::Month, Seg::Hour, Seg::Minute],
                settle: true,
            },
            _ => return None,
        };
        Some(grammar)
    }

    /// Parse a hyphen-delimited literal against this type's grammar.
    ///
    /// Returns the segments in grammar order with their zero-padded string
    /// values, or `None` when the shape does not match or a year-bearing
    /// grammar names an impossible calendar date. Grammars without a year
    /// establish no calendar validity.
    pub fn parse_literal(self, raw: &str) -> Option<Vec<(Seg, String)>> {
        let grammar = self.grammar()?;
        let pieces: Vec<&str> = raw.split('-').collect();
        if pieces.len() != grammar.segs.len() {
            return None;
        }

        let mut parts = Vec::with_capacity(pieces.len());
        for (seg, piece) in grammar.segs.iter().zip(&pieces) {
            match seg {
                Seg::Meridiem => {
                    Meridiem::parse(piece)?;
                }
                _ => {
                    if !fixed_digits(piece, seg.width()) {
                        return None;
                    }
                }
            }
            parts.push((*seg, (*piece).to_string()));
        }

        if grammar.checks_calendar() {
            let day: u32 = component(&parts, Seg::Day)?.parse().ok()?;
            let month: u32 = component(&parts, Seg::Month)?.parse().ok()?;
            let year: i32 = component(&parts, Seg::Year)?.parse().ok()?;
            // `from_ymd_opt` never normalizes, so an accepted triple echoes
            // the input exactly; rollover dates come back as None.
            NaiveDate::from_ymd_opt(year, month, day)?;
        }

        Some(parts)
    }
}

fn fixed_digits(piece: &str, width: usize) -> bool {
    piece.len() == width && piece.bytes().all(|b| b.is_ascii_digit())
}

fn component(parts: &[(Seg, String)], seg: Seg) -> Option<&str> {
    parts
        .iter()
        .find(|(s, _)| *s == seg)
        .map(|(_, piece)| piece.as_str())
}
