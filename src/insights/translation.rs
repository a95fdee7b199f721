//! Offline travel phrasebook.
//!
//! There is no translation backend. Known phrases come from a fixed table and
//! any other text is returned tagged with the target language's native name.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Confidence reported for every phrasebook translation
pub const TRANSLATION_CONFIDENCE: f64 = 0.85;

const DETECTED_CONFIDENCE: f64 = 0.8;
const FALLBACK_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Hindi,
    Thai,
    Vietnamese,
    Turkish,
}

/// Code and display names of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
        Language::Hindi,
        Language::Thai,
        Language::Vietnamese,
        Language::Turkish,
    ];

    /// Lowercase key used in requests and responses
    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Hindi => "hindi",
            Language::Thai => "thai",
            Language::Vietnamese => "vietnamese",
            Language::Turkish => "turkish",
        }
    }

    pub fn info(&self) -> LanguageInfo {
        let (code, name, native) = match self {
            Language::English => ("en", "English", "English"),
            Language::Spanish => ("es", "Spanish", "Español"),
            Language::French => ("fr", "French", "Français"),
            Language::German => ("de", "German", "Deutsch"),
            Language::Italian => ("it", "Italian", "Italiano"),
            Language::Portuguese => ("pt", "Portuguese", "Português"),
            Language::Russian => ("ru", "Russian", "Русский"),
            Language::Chinese => ("zh", "Chinese", "中文"),
            Language::Japanese => ("ja", "Japanese", "日本語"),
            Language::Korean => ("ko", "Korean", "한국어"),
            Language::Arabic => ("ar", "Arabic", "العربية"),
            Language::Hindi => ("hi", "Hindi", "हिन्दी"),
            Language::Thai => ("th", "Thai", "ไทย"),
            Language::Vietnamese => ("vi", "Vietnamese", "Tiếng Việt"),
            Language::Turkish => ("tr", "Turkish", "Türkçe"),
        };
        LanguageInfo { code, name, native }
    }

    /// Resolve a language name, ISO 639-1 code, or three-letter alias
    pub fn parse(input: &str) -> Option<Language> {
        let normalized = input.trim().to_lowercase();
        Language::ALL.into_iter().find(|lang| {
            lang.key() == normalized || lang.info().code == normalized || lang.alias() == normalized
        })
    }

    fn alias(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Spanish => "esp",
            Language::French => "fra",
            Language::German => "ger",
            Language::Italian => "ita",
            Language::Portuguese => "por",
            Language::Russian => "rus",
            Language::Chinese => "chi",
            Language::Japanese => "jpn",
            Language::Korean => "kor",
            Language::Arabic => "ara",
            Language::Hindi => "hin",
            Language::Thai => "tha",
            Language::Vietnamese => "vie",
            Language::Turkish => "tur",
        }
    }

    /// Keys of every supported language
    pub fn supported() -> Vec<String> {
        Language::ALL.iter().map(|l| l.key().to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phrase {
    Greetings,
    ThankYou,
    Please,
    ExcuseMe,
    WhereIs,
    HowMuch,
    Yes,
    No,
    Goodbye,
    Help,
}

impl Phrase {
    pub const ALL: [Phrase; 10] = [
        Phrase::Greetings,
        Phrase::ThankYou,
        Phrase::Please,
        Phrase::ExcuseMe,
        Phrase::WhereIs,
        Phrase::HowMuch,
        Phrase::Yes,
        Phrase::No,
        Phrase::Goodbye,
        Phrase::Help,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Phrase::Greetings => "greetings",
            Phrase::ThankYou => "thank_you",
            Phrase::Please => "please",
            Phrase::ExcuseMe => "excuse_me",
            Phrase::WhereIs => "where_is",
            Phrase::HowMuch => "how_much",
            Phrase::Yes => "yes",
            Phrase::No => "no",
            Phrase::Goodbye => "goodbye",
            Phrase::Help => "help",
        }
    }

    /// Phrase in a language, if the phrasebook covers it
    pub fn in_language(&self, language: Language) -> Option<&'static str> {
        let row: [&'static str; 10] = match self {
            Phrase::Greetings => ["Hello", "Hola", "Bonjour", "Hallo", "Ciao", "こんにちは", "你好", "안녕하세요", "สวัสดี", "Xin chào"],
            Phrase::ThankYou => ["Thank you", "Gracias", "Merci", "Danke", "Grazie", "ありがとう", "谢谢", "감사합니다", "ขอบคุณ", "Cảm ơn"],
            Phrase::Please => ["Please", "Por favor", "S'il vous plaît", "Bitte", "Per favore", "お願いします", "请", "부탁합니다", "กรุณา", "Xin vui lòng"],
            Phrase::ExcuseMe => ["Excuse me", "Disculpe", "Excusez-moi", "Entschuldigung", "Scusi", "すみません", "对不起", "실례합니다", "ขออภัย", "Xin lỗi"],
            Phrase::WhereIs => ["Where is", "¿Dónde está", "Où est", "Wo ist", "Dove è", "どこですか", "在哪里", "어디에 있나요", "อยู่ที่ไหน", "Ở đâu"],
            Phrase::HowMuch => ["How much", "¿Cuánto cuesta", "Combien coûte", "Wie viel kostet", "Quanto costa", "いくらですか", "多少钱", "얼마인가요", "เท่าไหร่", "Bao nhiêu"],
            Phrase::Yes => ["Yes", "Sí", "Oui", "Ja", "Sì", "はい", "是", "네", "ใช่", "Vâng"],
            Phrase::No => ["No", "No", "Non", "Nein", "No", "いいえ", "不", "아니요", "ไม่", "Không"],
            Phrase::Goodbye => ["Goodbye", "Adiós", "Au revoir", "Auf Wiedersehen", "Arrivederci", "さようなら", "再见", "안녕히 가세요", "ลาก่อน", "Tạm biệt"],
            Phrase::Help => ["Help", "Ayuda", "Aide", "Hilfe", "Aiuto", "助けて", "帮助", "도와주세요", "ช่วย", "Giúp đỡ"],
        };

        let column = match language {
            Language::English => 0,
            Language::Spanish => 1,
            Language::French => 2,
            Language::German => 3,
            Language::Italian => 4,
            Language::Japanese => 5,
            Language::Chinese => 6,
            Language::Korean => 7,
            Language::Thai => 8,
            Language::Vietnamese => 9,
            _ => return None,
        };
        Some(row[column])
    }

    fn english(&self) -> &'static str {
        self.in_language(Language::English).unwrap_or_default()
    }
}

/// Romanized pronunciation for the phrases that have one
pub fn pronunciation(text: &str, language: Language) -> String {
    let guide = match (language, text) {
        (Language::Spanish, "Hola") => Some("OH-lah"),
        (Language::Spanish, "Gracias") => Some("GRAH-see-ahs"),
        (Language::Spanish, "Por favor") => Some("por fah-VOR"),
        (Language::French, "Bonjour") => Some("bohn-ZHOOR"),
        (Language::French, "Merci") => Some("mehr-SEE"),
        (Language::French, "S'il vous plaît") => Some("seel voo PLEH"),
        (Language::German, "Hallo") => Some("HAH-loh"),
        (Language::German, "Danke") => Some("DAHN-kuh"),
        (Language::German, "Bitte") => Some("BIT-tuh"),
        (Language::Japanese, "こんにちは") => Some("kon-nee-chee-wah"),
        (Language::Japanese, "ありがとう") => Some("ah-ree-gah-toh"),
        (Language::Japanese, "お願いします") => Some("oh-neh-gah-ee-shee-mahs"),
        (Language::Chinese, "你好") => Some("nee-hah-oh"),
        (Language::Chinese, "谢谢") => Some("shieh-shieh"),
        (Language::Chinese, "请") => Some("ching"),
        _ => None,
    };

    guide
        .map(str::to_string)
        .unwrap_or_else(|| format!("Pronunciation guide not available for {}", text))
}

/// Source language as requested: auto-detect, a known language, or verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SourceLanguage {
    Known(Language),
    Other(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: SourceLanguage,
    pub target_language: Language,
    pub language_info: LanguageInfo,
    pub pronunciation: String,
    pub related_phrases: BTreeMap<&'static str, &'static str>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationLanguages {
    pub destination: String,
    pub languages: Vec<LanguageInfo>,
    pub primary_language: LanguageInfo,
    pub secondary_languages: Vec<LanguageInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EssentialPhrase {
    pub phrase: &'static str,
    pub pronunciation: String,
    pub english: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EssentialPhrases {
    pub destination: String,
    pub language: LanguageInfo,
    pub essential_phrases: BTreeMap<&'static str, EssentialPhrase>,
    pub total_phrases: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub detected_language: Language,
    pub language_info: LanguageInfo,
    pub confidence: f64,
    pub alternative_languages: Vec<Language>,
}

/// Phrasebook lookups, language detection and destination languages
#[derive(Debug, Clone, Copy, Default)]
pub struct Phrasebook;

impl Phrasebook {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<Translation, TranslationError> {
        let target = Language::parse(target_language)
            .ok_or_else(|| TranslationError::UnsupportedLanguage(target_language.to_string()))?;

        let source = if source_language == "auto" {
            SourceLanguage::Other("auto".to_string())
        } else {
            match Language::parse(source_language) {
                Some(lang) => SourceLanguage::Known(lang),
                None => SourceLanguage::Other(source_language.trim().to_lowercase()),
            }
        };

        let translated = lookup(text, target);

        Ok(Translation {
            original_text: text.to_string(),
            pronunciation: pronunciation(&translated, target),
            translated_text: translated,
            source_language: source,
            target_language: target,
            language_info: target.info(),
            related_phrases: Phrase::ALL
                .iter()
                .filter_map(|p| p.in_language(target).map(|t| (p.key(), t)))
                .collect(),
            confidence: TRANSLATION_CONFIDENCE,
        })
    }

    /// Languages spoken at a destination; English when unknown
    pub fn languages_for_destination(&self, destination: &str) -> DestinationLanguages {
        let languages: Vec<LanguageInfo> = destination_languages(destination)
            .iter()
            .map(Language::info)
            .collect();

        DestinationLanguages {
            destination: destination.to_string(),
            primary_language: languages[0],
            secondary_languages: languages[1..].to_vec(),
            languages,
        }
    }

    /// Phrasebook entries in the destination's primary language
    pub fn essential_phrases(&self, destination: &str) -> EssentialPhrases {
        let primary = destination_languages(destination)[0];

        let essential_phrases: BTreeMap<&'static str, EssentialPhrase> = Phrase::ALL
            .iter()
            .filter_map(|p| {
                p.in_language(primary).map(|phrase| {
                    (
                        p.key(),
                        EssentialPhrase {
                            phrase,
                            pronunciation: pronunciation(phrase, primary),
                            english: p.english(),
                        },
                    )
                })
            })
            .collect();

        EssentialPhrases {
            destination: destination.to_string(),
            language: primary.info(),
            total_phrases: essential_phrases.len(),
            essential_phrases,
        }
    }

    /// Guess the language from known words; English when nothing matches
    pub fn detect_language(&self, text: &str) -> Detection {
        let lowered = text.to_lowercase();

        let detected: Vec<Language> = DETECTION_PATTERNS
            .iter()
            .filter(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(lang, _)| *lang)
            .collect();

        match detected.split_first() {
            Some((primary, rest)) => Detection {
                detected_language: *primary,
                language_info: primary.info(),
                confidence: DETECTED_CONFIDENCE,
                alternative_languages: rest.to_vec(),
            },
            None => Detection {
                detected_language: Language::English,
                language_info: Language::English.info(),
                confidence: FALLBACK_CONFIDENCE,
                alternative_languages: Vec::new(),
            },
        }
    }
}

const DETECTION_PATTERNS: [(Language, &[&str]); 9] = [
    (Language::Spanish, &["hola", "gracias", "por favor", "adiós", "sí", "no"]),
    (Language::French, &["bonjour", "merci", "oui", "non", "au revoir", "s'il vous plaît"]),
    (Language::German, &["hallo", "danke", "bitte", "ja", "nein", "auf wiedersehen"]),
    (Language::Italian, &["ciao", "grazie", "per favore", "sì", "no", "arrivederci"]),
    (Language::Japanese, &["こんにちは", "ありがとう", "はい", "いいえ", "さようなら"]),
    (Language::Chinese, &["你好", "谢谢", "是", "不", "再见"]),
    (Language::Korean, &["안녕하세요", "감사합니다", "네", "아니요", "안녕히 가세요"]),
    (Language::Thai, &["สวัสดี", "ขอบคุณ", "ใช่", "ไม่", "ลาก่อน"]),
    (Language::Vietnamese, &["xin chào", "cảm ơn", "vâng", "không", "tạm biệt"]),
];

/// Never empty: unknown destinations resolve to English
fn destination_languages(destination: &str) -> &'static [Language] {
    match destination {
        "France" => &[Language::French],
        "Spain" | "Mexico" => &[Language::Spanish],
        "Italy" => &[Language::Italian],
        "Germany" => &[Language::German],
        "Japan" => &[Language::Japanese],
        "China" => &[Language::Chinese],
        "Thailand" => &[Language::Thai],
        "Vietnam" => &[Language::Vietnamese],
        "Turkey" => &[Language::Turkish],
        "Russia" => &[Language::Russian],
        "Brazil" => &[Language::Portuguese],
        "Canada" => &[Language::English, Language::French],
        "Switzerland" => &[Language::German, Language::French, Language::Italian],
        _ => &[Language::English],
    }
}

/// First phrase whose English form contains the text, else a tagged echo
fn lookup(text: &str, target: Language) -> String {
    let needle = text.trim().to_lowercase();

    for phrase in Phrase::ALL {
        if phrase.english().to_lowercase().contains(&needle) {
            return phrase.in_language(target).unwrap_or(text).to_string();
        }
    }

    format!("[{}] {}", target.info().native, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Language::parse("ES"), Some(Language::Spanish));
        assert_eq!(Language::parse(" jpn "), Some(Language::Japanese));
        assert_eq!(Language::parse("french"), Some(Language::French));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn test_translate_known_phrase() {
        let t = Phrasebook::new().translate("thank you", "es", "auto").unwrap();
        assert_eq!(t.translated_text, "Gracias");
        assert_eq!(t.pronunciation, "GRAH-see-ahs");
        assert_eq!(t.target_language, Language::Spanish);
        assert_eq!(t.source_language, SourceLanguage::Other("auto".into()));
        assert_eq!(t.related_phrases["greetings"], "Hola");
        assert_eq!(t.confidence, TRANSLATION_CONFIDENCE);
    }

    #[test]
    fn test_translate_unknown_text_is_tagged() {
        let t = Phrasebook::new()
            .translate("Where can I rent a bike", "german", "en")
            .unwrap();
        assert_eq!(t.translated_text, "[Deutsch] Where can I rent a bike");
        assert_eq!(t.source_language, SourceLanguage::Known(Language::English));
        assert!(t.pronunciation.starts_with("Pronunciation guide not available"));
    }

    #[test]
    fn test_phrase_missing_in_target_falls_back_to_text() {
        let t = Phrasebook::new().translate("Hello", "arabic", "auto").unwrap();
        assert_eq!(t.translated_text, "Hello");
        assert!(t.related_phrases.is_empty());
    }

    #[test]
    fn test_unsupported_target() {
        let err = Phrasebook::new().translate("Hello", "klingon", "auto").unwrap_err();
        assert_eq!(err, TranslationError::UnsupportedLanguage("klingon".into()));
        assert_eq!(Language::supported().len(), 15);
    }

    #[test]
    fn test_destination_languages() {
        let book = Phrasebook::new();
        let swiss = book.languages_for_destination("Switzerland");
        assert_eq!(swiss.primary_language.code, "de");
        assert_eq!(swiss.secondary_languages.len(), 2);

        let unknown = book.languages_for_destination("Atlantis");
        assert_eq!(unknown.primary_language.name, "English");
        assert!(unknown.secondary_languages.is_empty());
    }

    #[test]
    fn test_essential_phrases() {
        let phrases = Phrasebook::new().essential_phrases("Japan");
        assert_eq!(phrases.total_phrases, 10);
        assert_eq!(phrases.essential_phrases["greetings"].phrase, "こんにちは");
        assert_eq!(phrases.essential_phrases["greetings"].english, "Hello");

        let brazil = Phrasebook::new().essential_phrases("Brazil");
        assert_eq!(brazil.total_phrases, 0);
    }

    #[test]
    fn test_detect_language() {
        let book = Phrasebook::new();
        let detection = book.detect_language("Bonjour et merci");
        assert_eq!(detection.detected_language, Language::French);
        assert_eq!(detection.confidence, 0.8);

        let fallback = book.detect_language("good morning");
        assert_eq!(fallback.detected_language, Language::English);
        assert_eq!(fallback.confidence, 0.6);
    }
}
