mod consts;

pub use consts::*;

/// Encoding and sample rate of the audio the client streams up.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInConfig {
    pub encoding: AudioInEncoding,
    pub sample_rate_hertz: i32,
}

impl Default for AudioInConfig {
    fn default() -> Self {
        Self {
            encoding: AudioInEncoding::Linear16,
            sample_rate_hertz: DEFAULT_SAMPLE_RATE_IN,
        }
    }
}

impl AudioInConfig {
    pub fn new(encoding: AudioInEncoding, sample_rate_hertz: i32) -> Self {
        Self {
            encoding,
            sample_rate_hertz,
        }
    }
}

/// Encoding, sample rate and loudness of the audio the service streams back.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioOutConfig {
    pub encoding: AudioOutEncoding,
    pub sample_rate_hertz: i32,
    /// 1 to 100.
    pub volume_percentage: i32,
}

impl Default for AudioOutConfig {
    fn default() -> Self {
        Self {
            encoding: AudioOutEncoding::Linear16,
            sample_rate_hertz: DEFAULT_SAMPLE_RATE_OUT,
            volume_percentage: DEFAULT_VOLUME_PERCENTAGE,
        }
    }
}

impl AudioOutConfig {
    pub fn new(encoding: AudioOutEncoding, sample_rate_hertz: i32) -> Self {
        Self {
            encoding,
            sample_rate_hertz,
            ..Self::default()
        }
    }

    pub fn with_volume_percentage(mut self, volume_percentage: i32) -> Self {
        self.volume_percentage = volume_percentage;
        self
    }
}
