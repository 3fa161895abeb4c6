use crate::audio::{AudioInConfig, AudioOutConfig};
use crate::screen::ScreenOutConfig;

/// The first message of every `Assist` stream.
///
/// Exactly one of `audio_in_config` and `text_query` is set; the builder keeps
/// the two mutually exclusive.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_in_config: Option<AudioInConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    text_query: Option<String>,

    audio_out_config: AudioOutConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    screen_out_config: Option<ScreenOutConfig>,

    dialog_state_in: DialogStateIn,

    device_config: DeviceConfig,

    #[serde(default)]
    debug_config: DebugConfig,
}

impl AssistConfig {
    pub fn builder() -> AssistConfigBuilder {
        AssistConfigBuilder::new()
    }

    pub fn audio_in_config(&self) -> Option<&AudioInConfig> {
        self.audio_in_config.as_ref()
    }

    pub fn text_query(&self) -> Option<&str> {
        self.text_query.as_deref()
    }

    pub fn audio_out_config(&self) -> &AudioOutConfig {
        &self.audio_out_config
    }

    pub fn screen_out_config(&self) -> Option<&ScreenOutConfig> {
        self.screen_out_config.as_ref()
    }

    pub fn dialog_state_in(&self) -> &DialogStateIn {
        &self.dialog_state_in
    }

    pub fn device_config(&self) -> &DeviceConfig {
        &self.device_config
    }

    pub fn debug_config(&self) -> &DebugConfig {
        &self.debug_config
    }
}

pub struct AssistConfigBuilder {
    config: AssistConfig,
}

impl Default for AssistConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AssistConfig {
                audio_in_config: Some(AudioInConfig::default()),
                text_query: None,
                audio_out_config: AudioOutConfig::default(),
                screen_out_config: None,
                dialog_state_in: DialogStateIn::default(),
                device_config: DeviceConfig::default(),
                debug_config: DebugConfig::default(),
            },
        }
    }

    /// Streams audio up for this turn. Clears any text query.
    pub fn with_audio_in_config(mut self, audio_in_config: AudioInConfig) -> Self {
        self.config.audio_in_config = Some(audio_in_config);
        self.config.text_query = None;
        self
    }

    /// Sends a text query instead of audio. Clears the audio input config.
    pub fn with_text_query(mut self, text_query: &str) -> Self {
        self.config.text_query = Some(text_query.to_string());
        self.config.audio_in_config = None;
        self
    }

    pub fn with_audio_out_config(mut self, audio_out_config: AudioOutConfig) -> Self {
        self.config.audio_out_config = audio_out_config;
        self
    }

    pub fn with_screen_out_config(mut self, screen_out_config: ScreenOutConfig) -> Self {
        self.config.screen_out_config = Some(screen_out_config);
        self
    }

    pub fn with_dialog_state_in(mut self, dialog_state_in: DialogStateIn) -> Self {
        self.config.dialog_state_in = dialog_state_in;
        self
    }

    pub fn with_device_config(mut self, device_config: DeviceConfig) -> Self {
        self.config.device_config = device_config;
        self
    }

    pub fn with_return_debug_info(mut self, return_debug_info: bool) -> Self {
        self.config.debug_config.return_debug_info = return_debug_info;
        self
    }

    pub fn build(self) -> AssistConfig {
        self.config
    }
}

/// Dialog context carried into a turn.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogStateIn {
    /// Opaque state returned by the previous turn, echoed back verbatim.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::bytes::option"
    )]
    pub conversation_state: Option<Vec<u8>>,

    /// BCP-47 language tag, e.g. "en-US".
    pub language_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_location: Option<DeviceLocation>,

    #[serde(default)]
    pub is_new_conversation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLocation {
    pub coordinates: LatLng,
}

impl DeviceLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: LatLng {
                latitude,
                longitude,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    pub device_id: String,
    pub device_model_id: String,
}

impl DeviceConfig {
    pub fn new(device_id: &str, device_model_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
            device_model_id: device_model_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfig {
    pub return_debug_info: bool,
}
