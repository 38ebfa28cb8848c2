//! Работа с файлами: размер для отображения, выбранный файл из `<input type="file">`.

use leptos::ev::Event;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable size with one decimal: `1536` -> `"1.5 KB"`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, UNITS[unit])
    }
}

pub fn format_optional_size(bytes: Option<u64>) -> String {
    bytes.map(format_file_size).unwrap_or_else(|| "-".to_string())
}

fn input_from_event(ev: &Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// First file chosen in the input that fired `ev`.
pub fn selected_file(ev: &Event) -> Option<File> {
    input_from_event(ev)?.files()?.get(0)
}

/// Reset the input so choosing the same file again fires `change`.
pub fn clear_file_input(ev: &Event) {
    if let Some(input) = input_from_event(ev) {
        input.set_value("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 300 * 1024), "5.3 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_optional_size() {
        assert_eq!(format_optional_size(None), "-");
        assert_eq!(format_optional_size(Some(2048)), "2 KB");
    }
}
