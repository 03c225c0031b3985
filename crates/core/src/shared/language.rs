/// Languages the transcription service accepts in manual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
    Chinese,
    Korean,
    Japanese,
}

impl Language {
    pub const ALL: &[Language] = &[
        Language::English,
        Language::Spanish,
        Language::Chinese,
        Language::Korean,
        Language::Japanese,
    ];

    /// Wire value for the `language` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::Chinese => "chinese",
            Language::Korean => "korean",
            Language::Japanese => "japanese",
        }
    }

    /// Whether capital letters mark word-group boundaries in this script.
    pub fn uses_latin_script(self) -> bool {
        matches!(self, Language::English | Language::Spanish)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            "chinese" => Ok(Language::Chinese),
            "korean" => Ok(Language::Korean),
            "japanese" => Ok(Language::Japanese),
            other => Err(format!(
                "Language must be one of: english, spanish, chinese, korean, japanese, got '{other}'"
            )),
        }
    }
}
