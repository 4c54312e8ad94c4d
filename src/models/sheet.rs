use std::{collections::HashMap, fmt};

use crate::error::{AppError, Result};

/// A single worksheet cell after numeric coercion. Number variants keep the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64, String),
    Float(f64, String),
    Text(String),
}

impl CellValue {
    /// Integers first, then floats, otherwise the text as-is. Blank cells stay blank text.
    pub fn numericise(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Text(raw.to_string());
        }
        if let Ok(int) = trimmed.parse::<i64>() {
            return CellValue::Int(int, raw.to_string());
        }
        if let Ok(float) = trimmed.parse::<f64>() {
            return CellValue::Float(float, raw.to_string());
        }
        CellValue::Text(raw.to_string())
    }

    /// The cell exactly as the sheet rendered it.
    pub fn as_text(&self) -> &str {
        match self {
            CellValue::Int(_, raw) | CellValue::Float(_, raw) | CellValue::Text(raw) => raw,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value, value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value, value.to_string())
    }
}

pub type SheetRow = HashMap<String, CellValue>;

/// Turns a raw `values` grid into records keyed by the header row.
pub fn records_from_values(values: Vec<Vec<serde_json::Value>>) -> Result<Vec<SheetRow>> {
    let mut rows = values.into_iter();

    let header: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_text).collect(),
        None => return Ok(Vec::new()),
    };

    for (index, name) in header.iter().enumerate() {
        if header[..index].contains(name) {
            return Err(AppError::MalformedSheet(format!(
                "duplicate header `{}`",
                name
            )));
        }
    }

    let records: Vec<SheetRow> = rows
        .map(|row| {
            header
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    let raw = row.get(index).map(cell_text).unwrap_or_default();
                    (name.clone(), CellValue::numericise(&raw))
                })
                .collect::<SheetRow>()
        })
        .collect();

    Ok(records)
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
