use crate::client::consts::{
    ASSISTANT_DEVICE_ID, ASSISTANT_DEVICE_MODEL_ID, ASSISTANT_EVENT_CAPACITY, ASSISTANT_LANGUAGE,
    DEFAULT_DEVICE_ID, DEFAULT_DEVICE_MODEL_ID, DEFAULT_EVENT_CAPACITY, DEFAULT_LANGUAGE_CODE,
};
use crate::conversation::TurnConfig;
use crate::error::ConfigError;

/// Dialog-wide defaults. A [`TurnConfig`] that leaves the device identity or
/// the language unset inherits them from here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    device_id: String,
    device_model_id: String,
    language_code: String,
    capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_device_id(mut self, device_id: &str) -> Self {
        self.config.device_id = device_id.to_string();
        self
    }

    pub fn with_device_model_id(mut self, device_model_id: &str) -> Self {
        self.config.device_model_id = device_model_id.to_string();
        self
    }

    pub fn with_language_code(mut self, language_code: &str) -> Self {
        self.config.language_code = language_code.to_string();
        self
    }

    /// Buffer size of the per-turn event channel.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            device_model_id: DEFAULT_DEVICE_MODEL_ID.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads defaults from the environment, reading a `.env` file first when
    /// one is present.
    ///
    /// * `ASSISTANT_DEVICE_ID`, `ASSISTANT_DEVICE_MODEL_ID`: registered device identity.
    /// * `ASSISTANT_LANGUAGE`: BCP-47 language tag. Defaults to "en-US".
    /// * `ASSISTANT_EVENT_CAPACITY`: per-turn event buffer. Defaults to 1024.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(device_id) = lookup(ASSISTANT_DEVICE_ID) {
            builder = builder.with_device_id(&device_id);
        }
        if let Some(device_model_id) = lookup(ASSISTANT_DEVICE_MODEL_ID) {
            builder = builder.with_device_model_id(&device_model_id);
        }
        if let Some(language_code) = lookup(ASSISTANT_LANGUAGE) {
            builder = builder.with_language_code(&language_code);
        }
        if let Some(capacity) = lookup(ASSISTANT_EVENT_CAPACITY) {
            let parsed = capacity
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|c| *c > 0)
                .ok_or_else(|| ConfigError::InvalidEnv {
                    name: ASSISTANT_EVENT_CAPACITY.to_string(),
                    value: capacity.clone(),
                })?;
            builder = builder.with_capacity(parsed);
        }

        Ok(builder.build())
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn device_model_id(&self) -> &str {
        &self.device_model_id
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fills the unset identity and language fields of `turn`.
    pub fn apply(&self, mut turn: TurnConfig) -> TurnConfig {
        turn.device_id.get_or_insert_with(|| self.device_id.clone());
        turn.device_model_id
            .get_or_insert_with(|| self.device_model_id.clone());
        turn.language_code
            .get_or_insert_with(|| self.language_code.clone());
        turn
    }
}
