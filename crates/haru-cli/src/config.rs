use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Extraction API credential. Usually comes from the environment rather
    /// than the file; see [`Config::resolve_api_key`].
    #[serde(default)]
    pub api_key: Option<String>,
    /// Extraction model name.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("haru.toml"))
            .merge(Env::prefixed("HARU_"))
            .extract()
    }

    /// Config value first, then the conventional `GOOGLE_API_KEY` variable.
    /// A missing credential is fatal at startup; callers decide the exit.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}
