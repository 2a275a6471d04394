//! Language code helpers shared by connectors.

/// Codes the service reports. Vendors returning anything else are mapped
/// onto this list where possible.
pub const SUPPORTED_LANGUAGES: [&str; 20] = [
    "en", "hi", "ta", "te", "kn", "ml", "bn", "mr", "gu", "pa", "ur", "sa", "fr", "de", "es",
    "zh", "ja", "ko", "ar", "ru",
];

pub const INDIAN_LANGUAGES: [&str; 11] = [
    "hi", "ta", "te", "kn", "ml", "bn", "mr", "gu", "pa", "ur", "sa",
];

pub const FALLBACK_LANGUAGE: &str = "en";

const FILE_NAME_KEYWORDS: &[(&str, &str)] = &[
    ("hindi", "hi"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("kannada", "kn"),
    ("malayalam", "ml"),
    ("bengali", "bn"),
    ("marathi", "mr"),
    ("gujarati", "gu"),
    ("punjabi", "pa"),
    ("urdu", "ur"),
    ("sanskrit", "sa"),
    ("french", "fr"),
    ("german", "de"),
    ("spanish", "es"),
    ("chinese", "zh"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("arabic", "ar"),
    ("russian", "ru"),
];

const NAME_ALIASES: &[(&str, &str)] = &[
    ("eng", "en"),
    ("english", "en"),
    ("hin", "hi"),
    ("hindi", "hi"),
    ("tam", "ta"),
    ("tamil", "ta"),
    ("tel", "te"),
    ("telugu", "te"),
    ("kan", "kn"),
    ("kannada", "kn"),
    ("mal", "ml"),
    ("malayalam", "ml"),
    ("ben", "bn"),
    ("bengali", "bn"),
    ("mar", "mr"),
    ("marathi", "mr"),
    ("guj", "gu"),
    ("gujarati", "gu"),
    ("pan", "pa"),
    ("punjabi", "pa"),
    ("urd", "ur"),
    ("urdu", "ur"),
    ("fra", "fr"),
    ("fre", "fr"),
    ("french", "fr"),
    ("français", "fr"),
    ("deu", "de"),
    ("ger", "de"),
    ("german", "de"),
    ("deutsch", "de"),
    ("spa", "es"),
    ("spanish", "es"),
    ("español", "es"),
    ("cmn", "zh"),
    ("zho", "zh"),
    ("chinese", "zh"),
    ("mandarin", "zh"),
    ("jpn", "ja"),
    ("japanese", "ja"),
    ("kor", "ko"),
    ("korean", "ko"),
    ("ara", "ar"),
    ("arabic", "ar"),
    ("rus", "ru"),
    ("russian", "ru"),
];

/// Lowercases, strips a region suffix (`hi-IN`, `pt_BR`) and maps three-letter
/// codes and language names onto two-letter codes. Returns `None` for blank input.
pub fn normalize_language_code(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let base = lowered.split(['-', '_']).next().unwrap_or_default().trim();
    if base.is_empty() {
        return None;
    }

    let code = NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == base)
        .map(|(_, code)| *code)
        .unwrap_or(base);

    Some(code.to_string())
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

/// Picks a language from the writing system of a transcript.
pub fn detect_from_script(text: &str) -> Option<&'static str> {
    text.chars().find_map(script_language)
}

fn script_language(c: char) -> Option<&'static str> {
    match c as u32 {
        0x0900..=0x097F => Some("hi"),
        0x0980..=0x09FF => Some("bn"),
        0x0A00..=0x0A7F => Some("pa"),
        0x0A80..=0x0AFF => Some("gu"),
        0x0B80..=0x0BFF => Some("ta"),
        0x0C00..=0x0C7F => Some("te"),
        0x0C80..=0x0CFF => Some("kn"),
        0x0D00..=0x0D7F => Some("ml"),
        0x0600..=0x06FF => Some("ar"),
        0x3040..=0x30FF => Some("ja"),
        0x4E00..=0x9FFF => Some("zh"),
        0xAC00..=0xD7AF => Some("ko"),
        0x0400..=0x04FF => Some("ru"),
        _ => None,
    }
}

/// Guesses a language from keywords such as `hindi` in the file name.
pub fn language_from_file_name(file_name: &str) -> Option<&'static str> {
    let lowered = file_name.to_lowercase();
    FILE_NAME_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, code)| *code)
}
