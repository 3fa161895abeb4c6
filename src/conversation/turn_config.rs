use crate::error::ConfigError;
use crate::types::DeviceLocation;

/// Requested audio formats. Encodings are symbolic names such as
/// `"LINEAR16"`, matched case-insensitively; anything unknown falls back to
/// LINEAR16.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioSettings {
    pub encoding_in: Option<String>,
    pub sample_rate_in: Option<i32>,
    pub encoding_out: Option<String>,
    pub sample_rate_out: Option<i32>,
}

/// Caller settings for a single turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnConfig {
    pub audio: AudioSettings,
    /// Sends this text instead of streaming audio.
    pub text_query: Option<String>,
    pub device_id: Option<String>,
    pub device_model_id: Option<String>,
    pub language_code: Option<String>,
    pub is_new_conversation: bool,
    pub device_location: Option<DeviceLocation>,
    /// `Some(true)` when the device can render screen output right now.
    pub screen_on: Option<bool>,
    pub return_debug_info: bool,
}

impl TurnConfig {
    /// A turn that streams microphone audio.
    pub fn audio() -> Self {
        Self::default()
    }

    /// A turn that sends `query` as text.
    pub fn text(query: &str) -> Self {
        Self {
            text_query: Some(query.to_string()),
            ..Self::default()
        }
    }

    pub fn with_encoding_in(mut self, encoding: &str) -> Self {
        self.audio.encoding_in = Some(encoding.to_string());
        self
    }

    pub fn with_sample_rate_in(mut self, sample_rate: i32) -> Self {
        self.audio.sample_rate_in = Some(sample_rate);
        self
    }

    pub fn with_encoding_out(mut self, encoding: &str) -> Self {
        self.audio.encoding_out = Some(encoding.to_string());
        self
    }

    pub fn with_sample_rate_out(mut self, sample_rate: i32) -> Self {
        self.audio.sample_rate_out = Some(sample_rate);
        self
    }

    pub fn with_device(mut self, device_id: &str, device_model_id: &str) -> Self {
        self.device_id = Some(device_id.to_string());
        self.device_model_id = Some(device_model_id.to_string());
        self
    }

    pub fn with_language_code(mut self, language_code: &str) -> Self {
        self.language_code = Some(language_code.to_string());
        self
    }

    pub fn with_new_conversation(mut self, is_new: bool) -> Self {
        self.is_new_conversation = is_new;
        self
    }

    pub fn with_device_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.device_location = Some(DeviceLocation::new(latitude, longitude));
        self
    }

    pub fn with_screen_on(mut self, is_on: bool) -> Self {
        self.screen_on = Some(is_on);
        self
    }

    pub fn with_debug_info(mut self, return_debug_info: bool) -> Self {
        self.return_debug_info = return_debug_info;
        self
    }

    /// Rejects settings the service cannot honor.
    ///
    /// `build_request` assumes this has passed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(query) = &self.text_query {
            if query.trim().is_empty() {
                return Err(ConfigError::EmptyTextQuery);
            }
            if self.audio.encoding_in.is_some() || self.audio.sample_rate_in.is_some() {
                return Err(ConfigError::ConflictingInput);
            }
        }

        for rate in [self.audio.sample_rate_in, self.audio.sample_rate_out]
            .into_iter()
            .flatten()
        {
            if rate <= 0 {
                return Err(ConfigError::InvalidSampleRate(rate));
            }
        }

        if let Some(location) = &self.device_location {
            let latitude = location.coordinates.latitude;
            let longitude = location.coordinates.longitude;
            if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                return Err(ConfigError::InvalidLocation {
                    latitude,
                    longitude,
                });
            }
        }

        Ok(())
    }
}
