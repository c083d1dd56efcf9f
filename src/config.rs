use crate::fetch::random_summary_endpoint;
use crate::game::mask::{DEFAULT_DIGIT_MASK, DEFAULT_LETTER_MASK};
use crate::game::{FrenchPlural, Inflection, MaskGlyphs, NoInflection};
use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::time::Duration;

pub const APP_NAME: &str = "wikiguess";

#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub bg: String,      // background
    pub main: String,    // brand color, mid attempt tier
    pub caret: String,   // input cursor
    pub text: String,    // revealed words
    pub sub: String,     // mask glyphs, wrong guesses, hints
    #[serde(alias = "subAlt", alias = "subalt")]
    pub sub_alt: String, // borders, footer
    pub error: String,   // load failure, high attempt tier
    pub correct: String, // correct guesses, low attempt tier
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#2c2e34".to_string(),
            main: "#e2b714".to_string(),
            caret: "#e2b714".to_string(),
            text: "#d1d0c5".to_string(),
            sub: "#646669".to_string(),
            sub_alt: "#45474d".to_string(),
            error: "#ca4754".to_string(),
            correct: "#4caf50".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InflectionKind {
    #[default]
    French,
    #[serde(rename = "none")]
    Exact,
}

impl InflectionKind {
    pub fn build(self) -> Box<dyn Inflection> {
        match self {
            InflectionKind::French => Box::new(FrenchPlural),
            InflectionKind::Exact => Box::new(NoInflection),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// wikipedia language subdomain, e.g. "fr" or "en"
    pub language: String,
    /// full summary URL, wins over `language` when set
    #[serde(default)]
    pub endpoint: Option<String>,
    pub letter_mask: char,
    pub digit_mask: char,
    pub timeout_secs: u64,
    #[serde(default)]
    pub inflection: InflectionKind,
}

impl GameConfig {
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| random_summary_endpoint(&self.language))
    }

    pub fn glyphs(&self) -> MaskGlyphs {
        MaskGlyphs {
            letter: self.letter_mask,
            digit: self.digit_mask,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: "fr".to_string(),
            endpoint: None,
            letter_mask: DEFAULT_LETTER_MASK,
            digit_mask: DEFAULT_DIGIT_MASK,
            timeout_secs: 10,
            inflection: InflectionKind::French,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub theme: Theme,
    pub game: GameConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = Self::defaults()?;

        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                builder = builder.add_source(File::from(config_path));
            }
        }

        let cfg = builder.build()?;

        // "subAlt" is accepted through the serde alias
        let app_config: AppConfig = cfg.try_deserialize()?;

        Ok(app_config)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let theme = Theme::default();
        let game = GameConfig::default();

        let builder = Config::builder()
            .set_default("theme.bg", theme.bg)?
            .set_default("theme.main", theme.main)?
            .set_default("theme.caret", theme.caret)?
            .set_default("theme.text", theme.text)?
            .set_default("theme.sub", theme.sub)?
            .set_default("theme.subAlt", theme.sub_alt)?
            .set_default("theme.error", theme.error)?
            .set_default("theme.correct", theme.correct)?
            .set_default("game.language", game.language)?
            .set_default("game.letter_mask", game.letter_mask.to_string())?
            .set_default("game.digit_mask", game.digit_mask.to_string())?
            .set_default("game.timeout_secs", game.timeout_secs)?
            .set_default("game.inflection", "french")?;

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_target_french_wikipedia() {
        let cfg = from_toml("");
        assert_eq!(cfg.game.language, "fr");
        assert_eq!(
            cfg.game.endpoint(),
            "https://fr.wikipedia.org/api/rest_v1/page/random/summary"
        );
        assert_eq!(cfg.game.glyphs(), MaskGlyphs::default());
        assert_eq!(cfg.game.inflection, InflectionKind::French);
        assert_eq!(cfg.theme.sub_alt, "#45474d");
    }

    #[test]
    fn file_overrides_defaults() {
        let cfg = from_toml(
            r##"
            [theme]
            subAlt = "#000000"

            [game]
            language = "en"
            letter_mask = "_"
            inflection = "none"
            "##,
        );
        assert_eq!(cfg.theme.sub_alt, "#000000");
        assert_eq!(cfg.game.language, "en");
        assert_eq!(cfg.game.glyphs().letter, '_');
        assert_eq!(cfg.game.glyphs().digit, DEFAULT_DIGIT_MASK);
        assert_eq!(cfg.game.inflection, InflectionKind::Exact);
    }

    #[test]
    fn explicit_endpoint_wins() {
        let cfg = from_toml(
            r#"
            [game]
            endpoint = "http://localhost:8080/summary"
            "#,
        );
        assert_eq!(cfg.game.endpoint(), "http://localhost:8080/summary");
    }
}
