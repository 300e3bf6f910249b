//! Profile schema for RosterDB.
//!
//! This module defines the named shape of a student profile and the pure
//! mapping between it and the generic ordered-field record the store
//! persists. It holds no file or parsing logic: multi-value attributes are
//! joined into a single field on the way out and split again on the way in,
//! and the store never looks inside them.

use crate::error::Error;

/// Number of fields in a stored profile record.
pub const FIELD_COUNT: usize = 10;

/// Column names, in record order.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "FullName",
    "AcademicStatus",
    "Employed",
    "JobDetails",
    "ProgrammingLanguages",
    "Databases",
    "PreferredRole",
    "Comment",
    "Whitelisted",
    "Blacklisted",
];

/// The header line written as the first physical line of the profile file.
/// Column names are comma-separated and unquoted.
pub const HEADER: &str = "FullName,AcademicStatus,Employed,JobDetails,ProgrammingLanguages,\
Databases,PreferredRole,Comment,Whitelisted,Blacklisted";

/// Separator used when joining a multi-value attribute into one field.
const LIST_SEPARATOR: &str = "; ";

/// A student profile with named attributes.
///
/// The identifying key is `full_name`; two profiles describe the same
/// student iff their names are equal after normalization (see
/// [`crate::store::normalize_key`]). Flags round-trip as `"Yes"`/`"No"`
/// field values; the language and database lists occupy one field each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentProfile {
    /// Identifying name; the record key.
    pub full_name: String,
    /// Academic standing label (e.g. "Senior", "Graduate").
    pub academic_status: String,
    /// Whether the student is currently employed.
    pub employed: bool,
    /// Free-text job description; usually blank when not employed.
    pub job_details: String,
    /// Programming languages the student knows.
    pub languages: Vec<String>,
    /// Database systems the student knows.
    pub databases: Vec<String>,
    /// Preferred professional role label.
    pub preferred_role: String,
    /// Free-text faculty comments; may span multiple lines.
    pub comment: String,
    /// Recommended for hire.
    pub whitelisted: bool,
    /// Flagged against hire.
    pub blacklisted: bool,
}

impl StudentProfile {
    /// Map this profile to the ordered field sequence the store persists.
    ///
    /// The result always has exactly [`FIELD_COUNT`] entries, in
    /// [`COLUMNS`] order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.academic_status.clone(),
            encode_flag(self.employed),
            self.job_details.clone(),
            join_list(&self.languages),
            join_list(&self.databases),
            self.preferred_role.clone(),
            self.comment.clone(),
            encode_flag(self.whitelisted),
            encode_flag(self.blacklisted),
        ]
    }

    /// Map an ordered field sequence back to a named profile.
    ///
    /// Records with fewer than [`FIELD_COUNT`] fields are rejected rather
    /// than padded; extra trailing fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] when the record is too short for the
    /// schema.
    pub fn from_record(record: &[String]) -> Result<StudentProfile, Error> {
        if record.len() < FIELD_COUNT {
            return Err(Error::InvalidRecord(format!(
                "expected {FIELD_COUNT} fields, got {}",
                record.len()
            )));
        }
        Ok(StudentProfile {
            full_name: record[0].clone(),
            academic_status: record[1].clone(),
            employed: decode_flag(&record[2]),
            job_details: record[3].clone(),
            languages: split_list(&record[4]),
            databases: split_list(&record[5]),
            preferred_role: record[6].clone(),
            comment: record[7].clone(),
            whitelisted: decode_flag(&record[8]),
            blacklisted: decode_flag(&record[9]),
        })
    }
}

/// Join a multi-value attribute into one field value.
pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// Split a multi-value field on commas or semicolons, trimming each entry
/// and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Encode a flag as its stored field value.
fn encode_flag(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Decode a stored flag value. `yes` in any casing is true; anything else
/// (including blank) is false.
fn decode_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}
