mod response;

pub use response::*;

use crate::config::AssistConfig;

/// A frame written by the client on the `Assist` stream.
///
/// The first frame must be `Config`; every later frame carries audio.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssistRequest {
    Config(AssistConfig),
    AudioIn(#[serde(with = "crate::bytes")] Vec<u8>),
}

impl AssistRequest {
    pub fn config(&self) -> Option<&AssistConfig> {
        match self {
            AssistRequest::Config(config) => Some(config),
            AssistRequest::AudioIn(_) => None,
        }
    }

    pub fn audio_in(&self) -> Option<&[u8]> {
        match self {
            AssistRequest::AudioIn(audio) => Some(audio.as_slice()),
            AssistRequest::Config(_) => None,
        }
    }
}

/// A frame streamed back by the service.
///
/// Any combination of the fields may be present in a single frame. Fields this
/// client does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssistResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_out: Option<AudioOut>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_out: Option<ScreenOut>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_action: Option<DeviceAction>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub speech_results: Vec<SpeechRecognitionResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_state_out: Option<DialogStateOut>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
}

impl AssistResponse {
    pub fn is_end_of_utterance(&self) -> bool {
        matches!(self.event_type, Some(EventType::EndOfUtterance))
    }
}
