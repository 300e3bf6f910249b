//! CSV codec for the RosterDB profile file.
//!
//! This module handles serialization and deserialization of individual data
//! rows. It is pure data transformation -- no file I/O, no knowledge of the
//! schema or the header line.
//!
//! Every field is written quote-delimited, even when it contains no special
//! characters. The few bytes of overhead buy a decoder that never has to
//! distinguish quoted from bare field syntax: a row is a sequence of quoted
//! values, full stop. Quote characters inside a value are doubled, and a
//! value may contain literal commas and line breaks, so one logical row can
//! span several physical lines on disk.

/// Encode an ordered field sequence as one CSV row, newline-terminated.
///
/// Each field is wrapped in double quotes unconditionally, with any quote
/// character in the value doubled. Fields are joined with a single comma.
///
/// # Arguments
///
/// * `fields` - The field values, in schema order.
///
/// # Returns
///
/// The encoded row, including the trailing `\n`.
pub fn encode_row(fields: &[String]) -> String {
    let mut out = String::with_capacity(fields.iter().map(|f| f.len() + 3).sum::<usize>() + 1);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    }
    out.push('\n');
    out
}

/// Incremental row decoder fed one physical line at a time.
///
/// A logical row is complete once the accumulated buffer contains an even
/// number of quote characters; until then, each new physical line belongs to
/// a quoted field that spans lines, and the line break that separated it
/// from the previous line is put back into the value.
///
/// Blank physical lines are skipped while no row is pending (they are not
/// zero-field rows), but preserved verbatim when they fall inside a
/// multi-line quoted value.
#[derive(Debug, Default)]
pub struct RowDecoder {
    /// Pending row buffer; non-empty while a quoted field spans lines.
    buf: String,
}

impl RowDecoder {
    /// Create an empty decoder.
    pub fn new() -> RowDecoder {
        RowDecoder::default()
    }

    /// Feed one physical line, without its trailing line break.
    ///
    /// Returns `Some(fields)` when the line completes a logical row, or
    /// `None` while the row is still unbalanced (or the line was blank and
    /// nothing was pending).
    pub fn push_line(&mut self, line: &str) -> Option<Vec<String>> {
        if self.buf.is_empty() && line.is_empty() {
            return None;
        }
        if !self.buf.is_empty() {
            // The consumed line break belongs to the in-progress quoted field.
            self.buf.push('\n');
        }
        self.buf.push_str(line);

        if quote_balanced(&self.buf) {
            let fields = parse_row(&self.buf);
            self.buf.clear();
            Some(fields)
        } else {
            None
        }
    }

    /// Flush a trailing unbalanced row, if any.
    ///
    /// A file that ends mid-quote (hand-edited, or truncated by an
    /// interrupted rewrite) leaves the final row unbalanced. Rather than
    /// discard it, the buffer is parsed best-effort as one last row. Returns
    /// `None` when the decoder is empty, which is the case for every
    /// well-formed input.
    pub fn finish(self) -> Option<Vec<String>> {
        if self.buf.is_empty() {
            None
        } else {
            Some(parse_row(&self.buf))
        }
    }
}

/// Decode every logical row in `input`.
///
/// The caller is responsible for stripping the header line first; this
/// function treats the whole input as data. A trailing unbalanced row is
/// included best-effort (see [`RowDecoder::finish`]).
pub fn decode_rows(input: &str) -> Vec<Vec<String>> {
    let mut decoder = RowDecoder::new();
    let mut rows = Vec::new();
    for line in input.lines() {
        if let Some(fields) = decoder.push_line(line) {
            rows.push(fields);
        }
    }
    if let Some(fields) = decoder.finish() {
        rows.push(fields);
    }
    rows
}

/// True when `buf` contains an even number of quote characters, i.e. no
/// quoted field is left open.
pub(crate) fn quote_balanced(buf: &str) -> bool {
    buf.bytes().filter(|&b| b == b'"').count() % 2 == 0
}

/// Parse one balanced row buffer into its field values.
///
/// Two-state scanner. Unquoted: a comma ends the field, a quote enters
/// quoted state without being added to the value. Quoted: a doubled quote
/// appends one literal quote, a lone quote exits to unquoted, and everything
/// else (commas and line breaks included) is appended verbatim.
fn parse_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(ch),
            }
        }
    }
    fields.push(field);
    fields
}
