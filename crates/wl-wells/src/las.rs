//! LAS (Log ASCII Standard) 1.2 / 2.0 text parsing.
//!
//! Only the parts a depth-track viewer needs are kept: header sections as
//! ordered item lists and the `~A` block as numeric rows. Unknown sections
//! are skipped.

use thiserror::Error;

pub type LasResult<T> = Result<T, LasError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LasError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("missing ~{section} section")]
    MissingSection { section: &'static str },

    #[error("no curves defined in ~C section")]
    NoCurves,

    #[error("data section holds {values} values, not a multiple of {columns} curves")]
    RaggedData { values: usize, columns: usize },
}

/// One `MNEM.UNIT  VALUE : DESCRIPTION` header line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderItem {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LasFile {
    /// `VERS` value, "2.0" when the `~V` section is absent.
    pub version: String,
    /// `WRAP YES` files spread one depth step over several lines.
    pub wrapped: bool,
    pub well: Vec<HeaderItem>,
    pub curves: Vec<HeaderItem>,
    pub params: Vec<HeaderItem>,
    pub other: String,
    /// Row-major samples, one row per depth step, one column per curve.
    pub rows: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Version,
    Well,
    Curves,
    Params,
    Other,
    Ascii,
    Unknown,
}

impl Section {
    fn from_marker(line: &str) -> Self {
        match line[1..].trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('V') => Section::Version,
            Some('W') => Section::Well,
            Some('C') => Section::Curves,
            Some('P') => Section::Params,
            Some('O') => Section::Other,
            Some('A') => Section::Ascii,
            _ => Section::Unknown,
        }
    }
}

/// Well-section mnemonics that keep their value in the value field even in LAS 1.2.
const LAS12_VALUE_MNEMONICS: [&str; 4] = ["STRT", "STOP", "STEP", "NULL"];

impl LasFile {
    pub fn parse(text: &str) -> LasResult<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut version_items = Vec::new();
        let mut well = Vec::new();
        let mut curves = Vec::new();
        let mut params = Vec::new();
        let mut other = String::new();
        // (line number, line) pairs of the ~A block
        let mut data_lines: Vec<(usize, &str)> = Vec::new();

        let mut section: Option<Section> = None;
        let mut seen_curves = false;
        let mut seen_data = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end_matches('\r');
            let trimmed = line.trim();

            if trimmed.starts_with('~') {
                let next = Section::from_marker(trimmed);
                if next == Section::Curves {
                    seen_curves = true;
                }
                if next == Section::Ascii {
                    seen_data = true;
                }
                section = Some(next);
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match section {
                None => {
                    return Err(LasError::Syntax {
                        line: line_no,
                        message: "content before the first ~ section".to_string(),
                    });
                }
                Some(Section::Version) => version_items.push(parse_header_line(trimmed, line_no)?),
                Some(Section::Well) => well.push(parse_header_line(trimmed, line_no)?),
                Some(Section::Curves) => curves.push(parse_header_line(trimmed, line_no)?),
                Some(Section::Params) => params.push(parse_header_line(trimmed, line_no)?),
                Some(Section::Other) => {
                    if !other.is_empty() {
                        other.push('\n');
                    }
                    other.push_str(trimmed);
                }
                Some(Section::Ascii) => data_lines.push((line_no, trimmed)),
                Some(Section::Unknown) => {}
            }
        }

        if !seen_curves {
            return Err(LasError::MissingSection { section: "C" });
        }
        if !seen_data {
            return Err(LasError::MissingSection { section: "A" });
        }
        if curves.is_empty() {
            return Err(LasError::NoCurves);
        }

        let version = find_item(&version_items, "VERS")
            .map(|item| item.value.clone())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "2.0".to_string());
        let wrapped = find_item(&version_items, "WRAP")
            .map(|item| item.value.trim().eq_ignore_ascii_case("YES"))
            .unwrap_or(false);

        if is_las12(&version) {
            swap_las12_well_values(&mut well);
        }

        let rows = parse_data(&data_lines, curves.len(), wrapped)?;

        Ok(Self {
            version,
            wrapped,
            well,
            curves,
            params,
            other,
            rows,
        })
    }

    /// Value of a `~W` item, matched case-insensitively on the mnemonic.
    pub fn well_value(&self, mnemonic: &str) -> Option<&str> {
        find_item(&self.well, mnemonic)
            .map(|item| item.value.trim())
            .filter(|v| !v.is_empty())
    }

    /// Declared missing-value sentinel (`NULL` in `~W`).
    pub fn null_value(&self) -> Option<f64> {
        self.well_value("NULL").and_then(|v| v.parse().ok())
    }

    pub fn curve_mnemonics(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.mnemonic.as_str())
    }
}

fn find_item<'a>(items: &'a [HeaderItem], mnemonic: &str) -> Option<&'a HeaderItem> {
    items
        .iter()
        .find(|item| item.mnemonic.eq_ignore_ascii_case(mnemonic))
}

fn is_las12(version: &str) -> bool {
    version.trim().parse::<f64>().map(|v| v < 2.0).unwrap_or(false)
}

/// LAS 1.2 writers put the text of most well items into the description slot.
fn swap_las12_well_values(well: &mut [HeaderItem]) {
    for item in well.iter_mut() {
        let keeps_value = LAS12_VALUE_MNEMONICS
            .iter()
            .any(|m| item.mnemonic.eq_ignore_ascii_case(m));
        if !keeps_value && !item.description.is_empty() {
            std::mem::swap(&mut item.value, &mut item.description);
        }
    }
}

/// Split `MNEM.UNIT  VALUE : DESCRIPTION`.
///
/// The unit runs from the first period to the next space; the description
/// starts after the last colon.
fn parse_header_line(line: &str, line_no: usize) -> LasResult<HeaderItem> {
    let Some(dot) = line.find('.') else {
        return Err(LasError::Syntax {
            line: line_no,
            message: format!("header line has no '.' after the mnemonic: {line:?}"),
        });
    };

    let mnemonic = line[..dot].trim().to_string();
    if mnemonic.is_empty() {
        return Err(LasError::Syntax {
            line: line_no,
            message: "header line has an empty mnemonic".to_string(),
        });
    }

    let rest = &line[dot + 1..];
    // A colon glued to the unit (`DEPT.M: depth`) also ends it.
    let unit_end = rest
        .find(|c: char| c.is_whitespace() || c == ':')
        .unwrap_or(rest.len());
    let (unit, rest) = rest.split_at(unit_end);

    let (value, description) = match rest.rfind(':') {
        Some(colon) => (&rest[..colon], &rest[colon + 1..]),
        None => (rest, ""),
    };

    Ok(HeaderItem {
        mnemonic,
        unit: unit.trim().to_string(),
        value: value.trim().to_string(),
        description: description.trim().to_string(),
    })
}

fn parse_data(lines: &[(usize, &str)], columns: usize, wrapped: bool) -> LasResult<Vec<Vec<f64>>> {
    let mut flat = Vec::new();

    for &(line_no, line) in lines {
        let before = flat.len();
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let value = token.parse::<f64>().map_err(|_| LasError::Syntax {
                line: line_no,
                message: format!("non-numeric data value {token:?}"),
            })?;
            flat.push(value);
        }
        let on_line = flat.len() - before;
        if !wrapped && on_line != columns {
            return Err(LasError::Syntax {
                line: line_no,
                message: format!("expected {columns} values, found {on_line}"),
            });
        }
    }

    if flat.len() % columns != 0 {
        return Err(LasError::RaggedData {
            values: flat.len(),
            columns,
        });
    }

    Ok(flat.chunks(columns).map(<[f64]>::to_vec).collect())
}
