//! Runtime configuration from environment variables
//!
//! | Variable               | Meaning                                   | Default                 |
//! |------------------------|-------------------------------------------|-------------------------|
//! | `DEEPL_API_KEY`        | DeepL authentication key                  | none                    |
//! | `DEEPL_API_URL`        | Override of the DeepL host                | chosen from the key     |
//! | `HORTINA_API_URL`      | Hortina backend base URL                  | `http://localhost:8080` |
//! | `HORTINA_ACCESS_TOKEN` | JWT for the backend                       | none                    |
//! | `HORTINA_LANG`         | UI language translations are produced in | `ES`                    |

use crate::mt::translator::{normalize_lang, validate_lang};
use crate::mt::{DeepLProvider, MtError, MtResult};
use crate::repository::HttpHortinaApi;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_UI_LANG: &str = "ES";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub deepl_api_key: Option<String>,
    pub deepl_api_url: Option<String>,
    pub api_url: String,
    pub access_token: Option<String>,
    /// Upper-cased language code
    pub ui_lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deepl_api_key: None,
            deepl_api_url: None,
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            ui_lang: DEFAULT_UI_LANG.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let ui_lang = match var("HORTINA_LANG") {
            Some(lang) => {
                validate_lang(&lang)?;
                normalize_lang(&lang)
            }
            None => DEFAULT_UI_LANG.to_string(),
        };

        Ok(Self {
            deepl_api_key: var("DEEPL_API_KEY"),
            deepl_api_url: var("DEEPL_API_URL"),
            api_url: var("HORTINA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            access_token: var("HORTINA_ACCESS_TOKEN"),
            ui_lang,
        })
    }

    pub fn with_ui_lang(mut self, lang: &str) -> MtResult<Self> {
        validate_lang(lang)?;
        self.ui_lang = normalize_lang(lang);
        Ok(self)
    }

    pub fn deepl_provider(&self) -> MtResult<DeepLProvider> {
        let key = self.deepl_api_key.clone().ok_or_else(|| {
            MtError::ConfigError("DEEPL_API_KEY environment variable not set".to_string())
        })?;
        let provider = DeepLProvider::new(key)?;
        Ok(match &self.deepl_api_url {
            Some(url) => provider.with_base_url(url.as_str()),
            None => provider,
        })
    }

    pub fn backend(&self) -> MtResult<HttpHortinaApi> {
        HttpHortinaApi::new(self.api_url.as_str(), self.access_token.clone())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("deepl_api_key", &self.deepl_api_key.as_ref().map(|_| "***"))
            .field("deepl_api_url", &self.deepl_api_url)
            .field("api_url", &self.api_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("ui_lang", &self.ui_lang)
            .finish()
    }
}
