use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde_json::Value as JsonValue;

use super::model::{CourseDataset, CourseRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the course collection from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – records array: `[{ "course_type": ..., "pin_code": 560001, ... }, ...]`
/// * `.csv`  – header row with the same field names
///
/// Called exactly once at startup; there is no refresh or retry.  Dates and
/// pin codes are normalized here so the rest of the pipeline only ever sees
/// `NaiveDate` and `u32`.
pub fn load_file(path: &Path) -> Result<CourseDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "course_type": "Happiness Program",
///     "register_link": "https://...",
///     "start": "2025-01-20",
///     "end": "25/01/2025",
///     "district": "Bengaluru",
///     "address": "5 MG Road",
///     "pin_code": 560001,
///     "teachers": "Asha Rao",
///     "contact": "+91 98765 43210",
///     "language": "Kannada"
///   },
///   ...
/// ]
/// ```
///
/// `pin_code` may be a JSON number or a string; dates may use any of the
/// formats in [`DATE_FORMATS`].
fn load_json(path: &Path) -> Result<CourseDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut courses = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        courses.push(parse_json_record(obj).with_context(|| format!("Row {i}"))?);
    }

    Ok(CourseDataset::from_courses(courses))
}

fn parse_json_record(obj: &serde_json::Map<String, JsonValue>) -> Result<CourseRecord> {
    Ok(CourseRecord {
        course_type: json_string(obj, "course_type")?,
        register_link: json_string(obj, "register_link")?,
        start: parse_date(&json_string(obj, "start")?).context("'start'")?,
        end: parse_date(&json_string(obj, "end")?).context("'end'")?,
        district: json_string(obj, "district")?,
        address: json_string(obj, "address")?,
        pin_code: json_pin_code(obj.get("pin_code"))?,
        teachers: json_string(obj, "teachers")?,
        contact: json_contact(obj.get("contact"))?,
        language: json_string(obj, "language")?,
    })
}

fn json_string(obj: &serde_json::Map<String, JsonValue>, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .with_context(|| format!("missing or non-string '{key}'"))
}

/// The feed encodes pin codes both as numbers and as strings; both land on
/// `u32` here so filter and sort never see a representation mismatch.
fn json_pin_code(val: Option<&JsonValue>) -> Result<u32> {
    match val {
        Some(JsonValue::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .context("'pin_code' is not an unsigned integer"),
        Some(JsonValue::String(s)) => parse_pin_code(s),
        _ => bail!("missing or invalid 'pin_code'"),
    }
}

/// Contact numbers occasionally arrive as bare JSON numbers.
fn json_contact(val: Option<&JsonValue>) -> Result<String> {
    match val {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        _ => bail!("missing or invalid 'contact'"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the same fields as the JSON feed, one
/// course per record.
fn load_csv(path: &Path) -> Result<CourseDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };

    let course_type_idx = col("course_type")?;
    let register_link_idx = col("register_link")?;
    let start_idx = col("start")?;
    let end_idx = col("end")?;
    let district_idx = col("district")?;
    let address_idx = col("address")?;
    let pin_code_idx = col("pin_code")?;
    let teachers_idx = col("teachers")?;
    let contact_idx = col("contact")?;
    let language_idx = col("language")?;

    let mut courses = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

        let start = parse_date(&field(start_idx))
            .with_context(|| format!("CSV row {row_no}: 'start'"))?;
        let end = parse_date(&field(end_idx))
            .with_context(|| format!("CSV row {row_no}: 'end'"))?;
        let pin_code = parse_pin_code(&field(pin_code_idx))
            .with_context(|| format!("CSV row {row_no}: 'pin_code'"))?;

        courses.push(CourseRecord {
            course_type: field(course_type_idx),
            register_link: field(register_link_idx),
            start,
            end,
            district: field(district_idx),
            address: field(address_idx),
            pin_code,
            teachers: field(teachers_idx),
            contact: field(contact_idx),
            language: field(language_idx),
        });
    }

    Ok(CourseDataset::from_courses(courses))
}

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

/// Date formats seen in the wild feed, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%B %e, %Y"];

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(date);
        }
    }
    bail!("'{trimmed}' matches no supported date format")
}

pub(crate) fn parse_pin_code(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    trimmed
        .parse::<u32>()
        .with_context(|| format!("'{trimmed}' is not a numeric pin code"))
}
