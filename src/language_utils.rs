use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for host language codes
///
/// Translation hosts use short codes such as `fr`, `de`, `pt-br` or
/// `zh-hans`. Only the base subtag is checked against ISO 639; region and
/// script subtags are accepted as-is.
/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

/// Base language subtag of a code, lowercased (`pt-BR` → `pt`)
pub fn base_subtag(code: &str) -> String {
    let trimmed = code.trim();
    trimmed
        .split(['-', '_'])
        .next()
        .unwrap_or(trimmed)
        .to_lowercase()
}

// ISO 639-2/B codes that differ from their 639-2/T form
fn bibliographic_to_terminology(code: &str) -> Option<&'static str> {
    let part2t = match code {
        "fre" => "fra",
        "ger" => "deu",
        "dut" => "nld",
        "gre" => "ell",
        "chi" => "zho",
        "cze" => "ces",
        "ice" => "isl",
        "alb" => "sqi",
        "arm" => "hye",
        "baq" => "eus",
        "bur" => "mya",
        "per" => "fas",
        "geo" => "kat",
        "may" => "msa",
        "mac" => "mkd",
        "rum" => "ron",
        "slo" => "slk",
        "wel" => "cym",
        _ => return None,
    };
    Some(part2t)
}

/// Validate the base subtag of a language code against ISO 639-1 / 639-2
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let base = base_subtag(code);

    match base.len() {
        2 if Language::from_639_1(&base).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&base).is_some() => Ok(LanguageCodeType::Part2T),
        3 if bibliographic_to_terminology(&base).is_some() => Ok(LanguageCodeType::Part2B),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let base = base_subtag(code);

    if base.len() == 2 {
        if let Some(lang) = Language::from_639_1(&base) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if base.len() == 3 {
        if Language::from_639_3(&base).is_some() {
            return Ok(base);
        }
        if let Some(part2t) = bibliographic_to_terminology(&base) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check if two language codes share the same base language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
