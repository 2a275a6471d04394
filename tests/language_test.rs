use std::path::Path;

use language_detective::infrastructure::connectors::audio_file;
use language_detective::infrastructure::connectors::language::{
    detect_from_script, is_supported, language_from_file_name, normalize_language_code,
};

#[test]
fn given_region_suffixed_codes_when_normalizing_then_strips_region() {
    assert_eq!(normalize_language_code("hi-IN").as_deref(), Some("hi"));
    assert_eq!(normalize_language_code("pt_BR").as_deref(), Some("pt"));
    assert_eq!(normalize_language_code("  EN-us ").as_deref(), Some("en"));
}

#[test]
fn given_names_and_three_letter_codes_when_normalizing_then_maps_to_iso_639_1() {
    assert_eq!(normalize_language_code("english").as_deref(), Some("en"));
    assert_eq!(normalize_language_code("Hindi").as_deref(), Some("hi"));
    assert_eq!(normalize_language_code("hin").as_deref(), Some("hi"));
    assert_eq!(normalize_language_code("français").as_deref(), Some("fr"));
    assert_eq!(normalize_language_code("cmn").as_deref(), Some("zh"));
    assert_eq!(normalize_language_code("rus").as_deref(), Some("ru"));
}

#[test]
fn given_blank_code_when_normalizing_then_returns_none() {
    assert!(normalize_language_code("").is_none());
    assert!(normalize_language_code("   ").is_none());
}

#[test]
fn given_native_scripts_when_detecting_then_returns_matching_language() {
    assert_eq!(detect_from_script("नमस्ते दुनिया"), Some("hi"));
    assert_eq!(detect_from_script("வணக்கம்"), Some("ta"));
    assert_eq!(detect_from_script("ನಮಸ್ಕಾರ"), Some("kn"));
    assert_eq!(detect_from_script("안녕하세요"), Some("ko"));
    assert_eq!(detect_from_script("こんにちは"), Some("ja"));
    assert_eq!(detect_from_script("Привет"), Some("ru"));
    assert_eq!(detect_from_script("hello world"), None);
}

#[test]
fn given_file_names_with_keywords_when_guessing_then_matches_case_insensitively() {
    assert_eq!(language_from_file_name("Hindi_Sample_01.wav"), Some("hi"));
    assert_eq!(language_from_file_name("clip-GUJARATI.mp3"), Some("gu"));
    assert_eq!(language_from_file_name("meeting.wav"), None);
}

#[test]
fn given_codes_when_checking_support_then_only_service_languages_pass() {
    assert!(is_supported("hi"));
    assert!(is_supported("ru"));
    assert!(!is_supported("pt"));
}

#[test]
fn given_extensions_when_resolving_mime_types_then_maps_known_formats() {
    assert_eq!(audio_file::mime_type(Path::new("a.MP3")), "audio/mpeg");
    assert_eq!(audio_file::mime_type(Path::new("a.wav")), "audio/wav");
    assert_eq!(audio_file::mime_type(Path::new("a.flac")), "audio/flac");
    assert_eq!(audio_file::mime_type(Path::new("a.unknown")), "audio/mpeg");
}

#[test]
fn given_paths_when_checking_extension_then_accepts_only_audio_formats() {
    assert!(audio_file::is_supported_extension(Path::new("/x/y.M4A")));
    assert!(audio_file::is_supported_extension(Path::new("clip.ogg")));
    assert!(!audio_file::is_supported_extension(Path::new("notes.txt")));
    assert!(!audio_file::is_supported_extension(Path::new("no_extension")));
}
