// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row that had no newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header (if any) plus rows as one string.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let row = vec![s!("Aurora City Schools vs Kent, OH"), s!("Fri 4/11"), s!("say \"hi\"")];
        let out = rows_to_string(None, &[row], ',');
        assert_eq!(out, "\"Aurora City Schools vs Kent, OH\",Fri 4/11,\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn parse_handles_quotes_and_crlf() {
        let text = "Teams,Date\r\n\"A, B\",\"4/1\"\r\nC,\"x \"\"y\"\"\"\r\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![
            vec![s!("Teams"), s!("Date")],
            vec![s!("A, B"), s!("4/1")],
            vec![s!("C"), s!("x \"y\"")],
        ]);
    }

    #[test]
    fn parse_keeps_trailing_row_without_newline() {
        assert_eq!(parse_rows("a,b", ','), vec![vec![s!("a"), s!("b")]]);
        assert!(parse_rows("", ',').is_empty());
        assert!(parse_rows("\n\n", ',').is_empty());
    }

    #[test]
    fn write_then_parse_preserves_cells() {
        let rows = vec![vec![s!("multi\nline"), s!("")]];
        let text = rows_to_string(None, &rows, ',');
        assert_eq!(parse_rows(&text, ','), rows);
    }
}
