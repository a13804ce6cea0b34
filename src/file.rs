// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::consts::{COURSE_SEP, DEFAULT_OUT_DIR, TIMESTAMP_FMT};
use crate::config::options::{OutputFormat, Variant};
use crate::engine::types::{Course, Entry, OutputShape, Record, SlotGroup};
use crate::error::{Error, Result};

/// `out/<variant>_routine_<flat|grouped>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn default_out_path(variant: Variant, format: OutputFormat, at: DateTime<Local>) -> PathBuf {
    let shape = match variant.spec().output {
        OutputShape::Flat => "flat",
        OutputShape::Grouped => "grouped",
    };
    let name = format!(
        "{}_routine_{shape}_{}.{}",
        variant.stem(),
        at.format(TIMESTAMP_FMT),
        format.ext()
    );
    PathBuf::from(DEFAULT_OUT_DIR).join(name)
}

/// Write records in `format` to `path`. Returns the path written to.
pub fn write_records(records: &[Record], format: OutputFormat, path: &Path) -> Result<PathBuf> {
    match format {
        OutputFormat::Json => write_json(records, path),
        OutputFormat::Csv => write_csv(records, path),
    }
}

/// Pretty-printed JSON array. Non-ASCII text is written as-is.
pub fn write_json(records: &[Record], path: &Path) -> Result<PathBuf> {
    let mut out = create_file(path)?;
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(path.to_path_buf())
}

/// Flat records keep their own columns; grouped records are
/// `day,slot,time_interval,course_count,courses`.
pub fn write_csv(records: &[Record], path: &Path) -> Result<PathBuf> {
    let mut w = csv::Writer::from_writer(create_file(path)?);

    match records.first() {
        None => {}
        Some(Record::Entry(first)) => {
            w.write_record(entry_headers(first))?;
            for r in records {
                match r {
                    Record::Entry(e) => w.write_record(entry_fields(e))?,
                    Record::Group(_) => return Err(mixed_shapes()),
                }
            }
        }
        Some(Record::Group(_)) => {
            w.write_record(["day", "slot", "time_interval", "course_count", "courses"])?;
            for r in records {
                match r {
                    Record::Group(g) => w.write_record(group_fields(g))?,
                    Record::Entry(_) => return Err(mixed_shapes()),
                }
            }
        }
    }

    w.flush()?;
    Ok(path.to_path_buf())
}

fn mixed_shapes() -> Error {
    Error::InvalidInput(s!("cannot mix flat and grouped records in one CSV"))
}

fn entry_headers(e: &Entry) -> Vec<&'static str> {
    let mut h = Vec::with_capacity(6);
    if e.trimester.is_some() {
        h.push("trimester");
    }
    h.extend(["day", "slot", "time_interval"]);
    match e.course {
        Course::Coded { .. } => h.extend(["course_code", "course_name"]),
        Course::Text(_) => h.push("course"),
    }
    h
}

fn entry_fields(e: &Entry) -> Vec<&str> {
    let mut f = Vec::with_capacity(6);
    if let Some(t) = &e.trimester {
        f.push(t.as_str());
    }
    f.extend([e.key.day.as_str(), e.key.slot.as_str(), e.key.time_interval.as_str()]);
    match &e.course {
        Course::Coded { course_code, course_name } => f.extend([course_code.as_str(), course_name.as_str()]),
        Course::Text(t) => f.push(t.as_str()),
    }
    f
}

fn group_fields(g: &SlotGroup) -> [String; 5] {
    let courses: Vec<String> = g.courses.iter().map(Course::label).collect();
    [
        g.key.day.clone(),
        g.key.slot.clone(),
        g.key.time_interval.clone(),
        g.courses.len().to_string(),
        courses.join(COURSE_SEP),
    ]
}

/// Ensure parent dir exists; create/truncate file.
fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
