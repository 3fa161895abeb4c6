use std::time::Duration;

pub const ASSISTANT_DEVICE_ID: &str = "ASSISTANT_DEVICE_ID";
pub const ASSISTANT_DEVICE_MODEL_ID: &str = "ASSISTANT_DEVICE_MODEL_ID";
pub const ASSISTANT_LANGUAGE: &str = "ASSISTANT_LANGUAGE";
pub const ASSISTANT_EVENT_CAPACITY: &str = "ASSISTANT_EVENT_CAPACITY";

pub const DEFAULT_DEVICE_ID: &str = "default";
pub const DEFAULT_DEVICE_MODEL_ID: &str = "default";
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

pub const ASSISTANT_API_ENDPOINT: &str = "embeddedassistant.googleapis.com";
pub const ASSIST_RPC_PATH: &str = "/google.assistant.embedded.v1alpha2.EmbeddedAssistant/Assist";

/// Deadline recommended for an `Assist` call. Not enforced here; whoever
/// builds the channel applies it.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(60 * 3 + 5);
