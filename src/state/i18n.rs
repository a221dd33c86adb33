/// Language selection and translated strings
///
/// The gallery core never looks at languages; everything it displays arrives
/// already resolved through [`Localized::resolve`] or [`Labels`].

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Parse a language code such as "en", "zh" or "zh-CN"
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next() {
            Some("en") => Some(Language::En),
            Some("zh") => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Label for the toggle button (names the language you switch *to*)
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "中文",
            Language::Zh => "EN",
        }
    }
}

/// A string with one entry per language
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Localized {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub zh: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Same text for every language (folder names, untranslated catalogs)
    pub fn untranslated(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            zh: text,
        }
    }

    /// Text for `language`, falling back to English when missing
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::Zh if !self.zh.trim().is_empty() => &self.zh,
            _ => &self.en,
        }
    }
}

/// Fixed UI strings
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub about: &'static str,
    pub services: &'static str,
    pub projects: &'static str,
    pub live_demo: &'static str,
    pub open_folder: &'static str,
    pub theme: &'static str,
    pub close: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub image_failed: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
}

const EN: Labels = Labels {
    about: "About Me",
    services: "What I Do",
    projects: "Projects",
    live_demo: "Live Demo",
    open_folder: "Open Folder",
    theme: "Theme",
    close: "Close",
    previous: "Previous image",
    next: "Next image",
    image_failed: "Image failed to load",
    loading: "Loading…",
    empty: "No projects with images to show.",
};

const ZH: Labels = Labels {
    about: "关于我",
    services: "我的服务",
    projects: "项目展示",
    live_demo: "在线演示",
    open_folder: "打开文件夹",
    theme: "主题",
    close: "关闭",
    previous: "上一张",
    next: "下一张",
    image_failed: "图片加载失败",
    loading: "加载中…",
    empty: "没有可展示的项目。",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }
}
