//! CSV rendering of a diary

use crate::domain::{Diary, Entry};
use crate::error::{HolterError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Suggested filename for exports
pub const EXPORT_FILENAME: &str = "holter_diary.csv";

/// MIME type of exports
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8;";

pub const CSV_HEADER: [&str; 5] = ["Date", "Time", "Activity", "Symptoms", "Notes"];

/// Render the diary as CSV.
///
/// Every field is quoted and embedded quotes are doubled. Rows are joined
/// with `\n` and there is no trailing newline. Newlines inside notes become
/// single spaces so each entry stays on one line.
pub fn diary_to_csv(diary: &Diary) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buf);

        writer.write_record(CSV_HEADER)?;
        for entry in diary.iter() {
            writer.write_record(csv_row(entry))?;
        }
        writer.flush()?;
    }

    let mut text = String::from_utf8(buf)
        .map_err(|e| HolterError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

fn csv_row(entry: &Entry) -> [String; 5] {
    [
        entry.date_text(),
        entry.time_text(),
        entry.activity_text().to_string(),
        entry.symptoms.joined(),
        flatten_newlines(&entry.notes),
    ]
}

fn flatten_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, FieldUpdate, Symptom};
    use chrono::{NaiveDate, NaiveTime};

    const HEADER: &str = r#""Date","Time","Activity","Symptoms","Notes""#;

    fn diary_with(entry: Entry) -> Diary {
        Diary::from(vec![entry])
    }

    #[test]
    fn test_empty_diary_is_header_only() {
        let csv = diary_to_csv(&Diary::new()).unwrap();
        assert_eq!(csv, HEADER);
    }

    #[test]
    fn test_single_entry_export() {
        let mut entry = Entry::blank();
        entry.apply(FieldUpdate::Date(NaiveDate::from_ymd_opt(2024, 1, 5)));
        entry.apply(FieldUpdate::Time(NaiveTime::from_hms_opt(14, 30, 0)));
        entry.apply(FieldUpdate::Activity(Some(Activity::Walking)));
        entry.apply(FieldUpdate::Notes("felt odd\nafter stairs".to_string()));
        entry.symptoms.toggle(Symptom::Dizziness);
        entry.symptoms.toggle(Symptom::Fatigue);

        let csv = diary_to_csv(&diary_with(entry)).unwrap();
        assert_eq!(
            csv,
            format!(
                "{}\n{}",
                HEADER,
                r#""2024-01-05","14:30","Walking","Dizziness; Tired or fatigued","felt odd after stairs""#
            )
        );
    }

    #[test]
    fn test_blank_entry_exports_empty_quoted_fields() {
        let csv = diary_to_csv(&diary_with(Entry::blank())).unwrap();
        assert_eq!(csv, format!("{}\n\"\",\"\",\"\",\"\",\"\"", HEADER));
    }

    #[test]
    fn test_quotes_in_notes_are_doubled() {
        let mut entry = Entry::blank();
        entry.notes = r#"said "ouch""#.to_string();
        let csv = diary_to_csv(&diary_with(entry)).unwrap();
        assert!(csv.ends_with("\",\"said \"\"ouch\"\"\""));
    }

    #[test]
    fn test_crlf_and_cr_become_single_spaces() {
        assert_eq!(flatten_newlines("a\r\nb\rc\nd"), "a b c d");
        assert_eq!(flatten_newlines("a\n\nb"), "a  b");
    }

    #[test]
    fn test_one_line_per_entry_in_diary_order() {
        let mut first = Entry::blank();
        first.notes = "first".to_string();
        let mut second = Entry::blank();
        second.notes = "second\nline".to_string();
        let csv = diary_to_csv(&Diary::from(vec![first, second])).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("\"first\""));
        assert!(lines[2].ends_with("\"second line\""));
    }

    #[test]
    fn test_commas_stay_inside_quotes() {
        let mut entry = Entry::blank();
        entry.notes = "stairs, then rest".to_string();
        let csv = diary_to_csv(&diary_with(entry)).unwrap();
        assert!(csv.ends_with("\"stairs, then rest\""));
    }
}
