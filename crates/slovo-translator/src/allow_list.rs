/// Tokens that are kept as-is instead of being sent upstream
const UNTRANSLATABLE: &[&str] = &[
    "the", "a", "an", "usb", "wifi", "wi-fi", "gps", "html", "css", "js", "api", "url", "pdf",
];

pub fn is_untranslatable(word: &str) -> bool {
    let word = word.trim();
    UNTRANSLATABLE
        .iter()
        .any(|token| token.eq_ignore_ascii_case(word))
}
