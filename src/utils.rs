/// Plate text in comparable form: no dashes or spaces, upper-case, cut at
/// the first `.` so a file name like `abc-1234.jpg` gives `ABC1234`.
pub fn normalize_plate_text(text: &str) -> String {
    let text = text.replace('-', "").replace(' ', "").to_uppercase();
    match text.split('.').next() {
        Some(stem) => stem.to_string(),
        None => text,
    }
}
