//! Output formatting utilities

use crate::domain::{Activity, Diary, Entry, Symptom};

/// Shown when the diary has no entries
pub const EMPTY_DIARY_MESSAGE: &str = "No entries yet. Run 'holter add' to begin.";

const NOT_SET: &str = "(not set)";
const INDENT: &str = "              ";

/// Format every entry of the diary, or the empty-state message
pub fn format_diary(diary: &Diary) -> String {
    if diary.is_empty() {
        return EMPTY_DIARY_MESSAGE.to_string();
    }

    diary
        .iter()
        .enumerate()
        .map(|(i, entry)| format_entry(i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one entry as a form: fields, every symptom checkbox and notes
pub fn format_entry(number: usize, entry: &Entry) -> String {
    let mut output = format!("Entry #{}\n", number);

    output.push_str(&field_line("Date", &entry.date_text()));
    output.push_str(&field_line("Time", &entry.time_text()));
    output.push_str(&field_line("Activity", entry.activity_text()));

    for (i, symptom) in Symptom::ALL.iter().enumerate() {
        let mark = if entry.symptoms.contains(*symptom) { 'x' } else { ' ' };
        let label = if i == 0 { "  Symptoms:   " } else { INDENT };
        output.push_str(&format!("{}[{}] {}\n", label, mark, symptom));
    }

    if entry.notes.is_empty() {
        output.push_str(&field_line("Notes", ""));
    } else {
        for (i, line) in entry.notes.lines().enumerate() {
            if i == 0 {
                output.push_str(&field_line("Notes", line));
            } else {
                output.push_str(&format!("{}{}\n", INDENT, line));
            }
        }
    }

    output
}

fn field_line(name: &str, value: &str) -> String {
    let value = if value.is_empty() { NOT_SET } else { value };
    format!("  {:<12}{}\n", format!("{}:", name), value)
}

/// Format the activity and symptom choices
pub fn format_options() -> String {
    let mut output = String::from("Activities:\n");
    for activity in Activity::ALL {
        output.push_str(&format!("  {}\n", activity));
    }
    output.push_str("\nSymptoms:\n");
    for symptom in Symptom::ALL {
        output.push_str(&format!("  {}\n", symptom));
    }
    output
}
