/// Key under which the chosen language is persisted in `localStorage`.
pub const LANG_STORAGE_KEY: &str = "preferredLang";

/// Supported languages. Arabic is the language the page is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "ar" => Some(Lang::Ar),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }

    /// Value for the document's `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }

    /// Text of the language switch: it names the language you would switch to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::Ar => "EN",
            Lang::En => "AR",
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            Lang::Ar => "'Tajawal', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif",
            Lang::En => "'Roboto', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif",
        }
    }

    pub fn copied_message(self) -> &'static str {
        match self {
            Lang::Ar => "تم النسخ!",
            Lang::En => "Copied!",
        }
    }
}
