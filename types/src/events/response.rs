use crate::screen::ScreenOutFormat;

wire_enum! {
    pub enum EventType {
        Unspecified => "EVENT_TYPE_UNSPECIFIED",
        /// The service has detected the end of the user's speech. No further
        /// audio will be accepted for this turn.
        EndOfUtterance => "END_OF_UTTERANCE",
    }
}

wire_enum! {
    /// What the device should do with its microphone once this turn ends.
    pub enum MicrophoneMode {
        Unspecified => "MICROPHONE_MODE_UNSPECIFIED",
        CloseMicrophone => "CLOSE_MICROPHONE",
        /// Open the microphone again without waiting for the user.
        DialogFollowOn => "DIALOG_FOLLOW_ON",
    }
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioOut {
    #[serde(with = "crate::bytes")]
    pub audio_data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScreenOut {
    pub format: ScreenOutFormat,
    #[serde(with = "crate::bytes")]
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceAction {
    /// JSON document describing the action the device should perform.
    pub device_request_json: String,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResult {
    pub transcript: String,
    /// 0.0 for an unstable guess, 1.0 once the fragment will not change.
    pub stability: f32,
}

impl SpeechRecognitionResult {
    pub fn new(transcript: &str, stability: f32) -> Self {
        Self {
            transcript: transcript.to_string(),
            stability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogStateOut {
    pub supplemental_display_text: String,
    #[serde(with = "crate::bytes")]
    pub conversation_state: Vec<u8>,
    pub microphone_mode: MicrophoneMode,
    /// Zero means the service left the volume alone.
    pub volume_percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebugInfo {
    pub aog_agent_to_assistant_json: String,
}
