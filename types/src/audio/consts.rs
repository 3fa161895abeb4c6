pub const DEFAULT_SAMPLE_RATE_IN: i32 = 16000;
pub const DEFAULT_SAMPLE_RATE_OUT: i32 = 24000;
pub const DEFAULT_VOLUME_PERCENTAGE: i32 = 100;

/// A codec enumeration that can be looked up by its symbolic name.
pub trait Encoding: Copy + 'static {
    /// Known symbolic names, matched case-insensitively.
    const NAMES: &'static [(&'static str, Self)];
    /// Used when a name is absent or unknown.
    const FALLBACK: Self;

    fn lookup(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, encoding)| *encoding)
    }

    fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::lookup).unwrap_or(Self::FALLBACK)
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum AudioInEncoding {
    #[serde(rename = "ENCODING_UNSPECIFIED")]
    Unspecified,
    /// Uncompressed 16-bit signed little-endian samples.
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "FLAC")]
    Flac,
}

impl Encoding for AudioInEncoding {
    const NAMES: &'static [(&'static str, Self)] =
        &[("LINEAR16", Self::Linear16), ("FLAC", Self::Flac)];
    const FALLBACK: Self = Self::Linear16;
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum AudioOutEncoding {
    #[serde(rename = "ENCODING_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "OPUS_IN_OGG")]
    OpusInOgg,
}

impl Encoding for AudioOutEncoding {
    const NAMES: &'static [(&'static str, Self)] = &[
        ("LINEAR16", Self::Linear16),
        ("MP3", Self::Mp3),
        ("OPUS_IN_OGG", Self::OpusInOgg),
    ];
    const FALLBACK: Self = Self::Linear16;
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct AudioConsts {
        #[serde(skip_serializing_if = "Option::is_none")]
        encoding_in: Option<AudioInEncoding>,
        #[serde(skip_serializing_if = "Option::is_none")]
        encoding_out: Option<AudioOutEncoding>,
    }

    #[test]
    fn test_serialize() {
        let consts = AudioConsts {
            encoding_in: Some(AudioInEncoding::Flac),
            encoding_out: Some(AudioOutEncoding::OpusInOgg),
        };
        let json = serde_json::to_string(&consts).unwrap();
        assert_eq!(json, r#"{"encoding_in":"FLAC","encoding_out":"OPUS_IN_OGG"}"#);

        let consts = AudioConsts {
            encoding_in: None,
            encoding_out: Some(AudioOutEncoding::Linear16),
        };
        let json = serde_json::to_string(&consts).unwrap();
        assert_eq!(json, r#"{"encoding_out":"LINEAR16"}"#);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(AudioInEncoding::lookup("linear16"), Some(AudioInEncoding::Linear16));
        assert_eq!(AudioInEncoding::lookup("LINEAR16"), Some(AudioInEncoding::Linear16));
        assert_eq!(AudioInEncoding::lookup("Flac"), Some(AudioInEncoding::Flac));
        assert_eq!(AudioOutEncoding::lookup("opus_in_ogg"), Some(AudioOutEncoding::OpusInOgg));
        assert_eq!(AudioInEncoding::lookup("mp3"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_linear16() {
        assert_eq!(AudioInEncoding::resolve(None), AudioInEncoding::Linear16);
        assert_eq!(AudioInEncoding::resolve(Some("wav")), AudioInEncoding::Linear16);
        assert_eq!(AudioOutEncoding::resolve(Some("")), AudioOutEncoding::Linear16);
        assert_eq!(AudioOutEncoding::resolve(Some("mp3")), AudioOutEncoding::Mp3);
    }
}
