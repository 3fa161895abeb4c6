/// Whether the device can currently render visual output.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum ScreenMode {
    #[serde(rename = "SCREEN_MODE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "PLAYING")]
    Playing,
}

impl ScreenMode {
    pub fn from_screen_on(is_on: bool) -> Self {
        if is_on { Self::Playing } else { Self::Off }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenOutConfig {
    pub screen_mode: ScreenMode,
}

impl ScreenOutConfig {
    pub fn new(screen_mode: ScreenMode) -> Self {
        Self { screen_mode }
    }
}

wire_enum! {
    /// Format of a `screenOut` payload.
    pub enum ScreenOutFormat {
        Unspecified => "FORMAT_UNSPECIFIED",
        /// A complete HTML5 document.
        Html => "HTML",
    }
}
