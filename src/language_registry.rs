use isolang::Language;

// @module: Consolidated per-language heuristic tables

/// Expansion multiplier applied when a language has no dedicated entry.
pub const DEFAULT_EXPANSION_RATIO: f64 = 2.5;

/// Flag shown for locales without a curated profile.
pub const FALLBACK_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Phrases that indicate the oracle explained instead of translating,
/// regardless of target language. Checked for every chunk.
pub const UNIVERSAL_FORBIDDEN: &[&str] =
    &["This section", "In this", "In this section", "means", "explains"];

/// Static per-locale profile: display data for the navbar, the English name
/// used in prompts, the expansion multiplier used by the length check, and
/// the curated forbidden-phrase list for that language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub native_name: &'static str,
    pub expansion_ratio: f64,
    pub forbidden: &'static [&'static str],
}

/// One versioned table keyed by locale code, shared by the validator and
/// prompt construction. Kept in sorted-code order.
pub static PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        code: "ar",
        name: "Arabic",
        flag: "🇸🇦",
        native_name: "العربية",
        expansion_ratio: 4.0,
        forbidden: &["هذا القسم", "في هذا", "في هذا القسم", "يعني", "يشرح"],
    },
    LanguageProfile {
        code: "cs",
        name: "Czech",
        flag: "🇨🇿",
        native_name: "Čeština",
        expansion_ratio: 2.5,
        forbidden: &["Tato sekce", "V tomto", "V této sekci", "znamená", "vysvětluje"],
    },
    LanguageProfile {
        code: "de",
        name: "German",
        flag: "🇩🇪",
        native_name: "Deutsch",
        expansion_ratio: 2.5,
        forbidden: &[
            "Dieser Abschnitt",
            "In diesem",
            "In diesem Abschnitt",
            "bedeutet",
            "erklärt",
        ],
    },
    LanguageProfile {
        code: "el",
        name: "Greek",
        flag: "🇬🇷",
        native_name: "Ελληνικά",
        expansion_ratio: 2.5,
        forbidden: &[
            "Αυτό το τμήμα",
            "Σε αυτό",
            "Σε αυτό το τμήμα",
            "σημαίνει",
            "εξηγεί",
        ],
    },
    LanguageProfile {
        code: "en",
        name: "English",
        flag: "🇺🇸",
        native_name: "English",
        expansion_ratio: DEFAULT_EXPANSION_RATIO,
        forbidden: UNIVERSAL_FORBIDDEN,
    },
    LanguageProfile {
        code: "es",
        name: "Spanish",
        flag: "🇪🇸",
        native_name: "Español",
        expansion_ratio: 2.5,
        forbidden: &["Esta sección", "En esta", "En esta sección", "significa", "explica"],
    },
    LanguageProfile {
        code: "fa",
        name: "Persian",
        flag: "🇮🇷",
        native_name: "فارسی",
        expansion_ratio: 4.0,
        forbidden: &["این بخش", "در این", "در این بخش", "معنی می‌دهد", "توضیح می‌دهد"],
    },
    LanguageProfile {
        code: "fr",
        name: "French",
        flag: "🇫🇷",
        native_name: "Français",
        expansion_ratio: 2.5,
        forbidden: &[
            "Cette section",
            "Dans cette",
            "Dans cette section",
            "signifie",
            "explique",
        ],
    },
    LanguageProfile {
        code: "he",
        name: "Hebrew",
        flag: "🇮🇱",
        native_name: "עברית",
        expansion_ratio: 4.0,
        forbidden: &["סעיף זה", "בזה", "בסעיף זה", "משמעותו", "מסביר"],
    },
    LanguageProfile {
        code: "hi",
        name: "Hindi",
        flag: "🇮🇳",
        native_name: "हिंदी",
        expansion_ratio: 5.5,
        forbidden: &["यह अनुभाग", "इसमें", "इस अनुभाग में", "का अर्थ है", "समझाता है"],
    },
    LanguageProfile {
        code: "id",
        name: "Indonesian",
        flag: "🇮🇩",
        native_name: "Bahasa Indonesia",
        expansion_ratio: 2.5,
        forbidden: &["Bagian ini", "Dalam ini", "Di bagian ini", "berarti", "menjelaskan"],
    },
    LanguageProfile {
        code: "it",
        name: "Italian",
        flag: "🇮🇹",
        native_name: "Italiano",
        expansion_ratio: 2.5,
        forbidden: &[
            "Questa sezione",
            "In questo",
            "In questa sezione",
            "significa",
            "spiega",
        ],
    },
    LanguageProfile {
        code: "ja",
        name: "Japanese",
        flag: "🇯🇵",
        native_name: "日本語",
        expansion_ratio: 5.5,
        forbidden: &[
            "このセクション",
            "この中で",
            "このセクションでは",
            "意味する",
            "説明する",
        ],
    },
    LanguageProfile {
        code: "ko",
        name: "Korean",
        flag: "🇰🇷",
        native_name: "한국어",
        expansion_ratio: 2.5,
        forbidden: &["이 섹션", "이 안에서", "이 섹션에서는", "의미한다", "설명한다"],
    },
    LanguageProfile {
        code: "nl",
        name: "Dutch",
        flag: "🇳🇱",
        native_name: "Nederlands",
        expansion_ratio: 2.5,
        forbidden: &["Deze sectie", "In dit", "In deze sectie", "betekent", "verklaart"],
    },
    LanguageProfile {
        code: "pl",
        name: "Polish",
        flag: "🇵🇱",
        native_name: "Polski",
        expansion_ratio: 3.5,
        forbidden: &["Ta sekcja", "W tym", "W tej sekcji", "oznacza", "wyjaśnia"],
    },
    LanguageProfile {
        code: "pt",
        name: "Portuguese",
        flag: "🇵🇹",
        native_name: "Português",
        expansion_ratio: 2.5,
        forbidden: &["Esta seção", "Nesta seção", "significa", "explica"],
    },
    LanguageProfile {
        code: "ro",
        name: "Romanian",
        flag: "🇷🇴",
        native_name: "Română",
        expansion_ratio: 2.5,
        forbidden: &[
            "Această secțiune",
            "În acest",
            "În această secțiune",
            "înseamnă",
            "explică",
        ],
    },
    LanguageProfile {
        code: "ru",
        name: "Russian",
        flag: "🇷🇺",
        native_name: "Русский",
        expansion_ratio: 3.5,
        forbidden: &[
            "Этот раздел",
            "В этом",
            "В этом разделе",
            "означает",
            "объясняет",
            "ниже",
        ],
    },
    LanguageProfile {
        code: "tr",
        name: "Turkish",
        flag: "🇹🇷",
        native_name: "Türkçe",
        expansion_ratio: 2.5,
        forbidden: &["Bu bölüm", "Bunda", "Bu bölümde", "anlamına gelir", "açıklar"],
    },
    LanguageProfile {
        code: "uk",
        name: "Ukrainian",
        flag: "🇺🇦",
        native_name: "Українська",
        expansion_ratio: 3.5,
        forbidden: &["Цей розділ", "У цьому", "У цьому розділі", "означає", "пояснює"],
    },
    LanguageProfile {
        code: "vi",
        name: "Vietnamese",
        flag: "🇻🇳",
        native_name: "Tiếng Việt",
        expansion_ratio: 2.5,
        forbidden: &[
            "Phần này",
            "Trong này",
            "Trong phần này",
            "có nghĩa là",
            "giải thích",
        ],
    },
    LanguageProfile {
        code: "zh",
        name: "Chinese(Simplified)",
        flag: "🇨🇳",
        native_name: "中文",
        expansion_ratio: 2.5,
        forbidden: &["以下", "说明", "本节", "在这里", "意味着", "解释"],
    },
    LanguageProfile {
        code: "zh-tw",
        name: "Chinese(Traditional)",
        flag: "🇹🇼",
        native_name: "繁體中文",
        expansion_ratio: 2.5,
        forbidden: &["以下", "說明", "本節", "在這裡", "意味著", "解釋"],
    },
];

/// Language data resolved for one run, either from the curated table or
/// synthesized for an unknown code (ISO name lookup, default ratio, no
/// language-specific forbidden phrases).
#[derive(Debug, Clone)]
pub struct ResolvedLanguage {
    pub code: String,
    pub name: String,
    pub flag: &'static str,
    pub native_name: String,
    pub expansion_ratio: f64,
    pub forbidden: &'static [&'static str],
}

/// Look up a curated profile by locale code.
pub fn profile(code: &str) -> Option<&'static LanguageProfile> {
    PROFILES.iter().find(|p| p.code == code)
}

/// Resolve language data for a locale code, with ISO 639-1 fallback for
/// codes outside the curated table.
pub fn resolve(code: &str) -> ResolvedLanguage {
    if let Some(found) = profile(code) {
        return ResolvedLanguage {
            code: found.code.to_string(),
            name: found.name.to_string(),
            flag: found.flag,
            native_name: found.native_name.to_string(),
            expansion_ratio: found.expansion_ratio,
            forbidden: found.forbidden,
        };
    }

    let iso = Language::from_639_1(code);
    let name = iso
        .map(|language| language.to_name().to_string())
        .unwrap_or_else(|| code.to_uppercase());
    let native_name = iso
        .and_then(|language| language.to_autonym())
        .map(|autonym| autonym.to_string())
        .unwrap_or_else(|| code.to_uppercase());

    ResolvedLanguage {
        code: code.to_string(),
        name,
        flag: FALLBACK_FLAG,
        native_name,
        expansion_ratio: DEFAULT_EXPANSION_RATIO,
        forbidden: &[],
    }
}
