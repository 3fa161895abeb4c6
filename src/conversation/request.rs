use crate::client::consts::{DEFAULT_DEVICE_ID, DEFAULT_DEVICE_MODEL_ID, DEFAULT_LANGUAGE_CODE};
use crate::conversation::state::{InputModality, SessionState};
use crate::conversation::turn_config::TurnConfig;
use crate::types::audio::{
    AudioInConfig, AudioInEncoding, AudioOutConfig, AudioOutEncoding, Encoding,
    DEFAULT_SAMPLE_RATE_IN, DEFAULT_SAMPLE_RATE_OUT,
};
use crate::types::screen::{ScreenMode, ScreenOutConfig};
use crate::types::{AssistConfig, AssistRequest, DeviceConfig, DialogStateIn};

/// Builds the configuration frame that opens a turn.
///
/// Carries the dialog's continuation token and volume from `state`, and
/// records the turn's input modality in it so that later writes can be gated.
/// `config` is expected to have passed [`TurnConfig::validate`].
pub fn build_request(config: &TurnConfig, state: &mut SessionState) -> AssistRequest {
    let audio_out = AudioOutConfig::new(
        resolve_encoding::<AudioOutEncoding>(config.audio.encoding_out.as_deref()),
        config.audio.sample_rate_out.unwrap_or(DEFAULT_SAMPLE_RATE_OUT),
    )
    .with_volume_percentage(state.volume_percentage());

    let dialog_state_in = DialogStateIn {
        conversation_state: state.continuation_token().map(<[u8]>::to_vec),
        language_code: config
            .language_code
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
        device_location: config.device_location,
        is_new_conversation: config.is_new_conversation,
    };

    let device_config = DeviceConfig::new(
        config.device_id.as_deref().unwrap_or(DEFAULT_DEVICE_ID),
        config
            .device_model_id
            .as_deref()
            .unwrap_or(DEFAULT_DEVICE_MODEL_ID),
    );

    let mut builder = AssistConfig::builder()
        .with_audio_out_config(audio_out)
        .with_dialog_state_in(dialog_state_in)
        .with_device_config(device_config)
        .with_return_debug_info(config.return_debug_info);

    builder = match &config.text_query {
        Some(query) => {
            state.set_input_modality(InputModality::Text);
            builder.with_text_query(query)
        }
        None => {
            state.set_input_modality(InputModality::Audio);
            builder.with_audio_in_config(AudioInConfig::new(
                resolve_encoding::<AudioInEncoding>(config.audio.encoding_in.as_deref()),
                config.audio.sample_rate_in.unwrap_or(DEFAULT_SAMPLE_RATE_IN),
            ))
        }
    };

    if let Some(is_on) = config.screen_on {
        builder = builder.with_screen_out_config(ScreenOutConfig::new(ScreenMode::from_screen_on(is_on)));
    }

    AssistRequest::Config(builder.build())
}

fn resolve_encoding<E: Encoding + std::fmt::Debug>(name: Option<&str>) -> E {
    let encoding = E::resolve(name);
    if let Some(name) = name {
        if E::lookup(name).is_none() {
            tracing::warn!("unknown audio encoding {:?}, using {:?}", name, encoding);
        }
    }
    encoding
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(request: &AssistRequest) -> &AssistConfig {
        request.config().expect("initial request carries config")
    }

    #[test]
    fn text_query_omits_audio_in() {
        let mut state = SessionState::new();
        let request = build_request(&TurnConfig::text("what time is it"), &mut state);
        let config = config_of(&request);

        assert_eq!(config.text_query(), Some("what time is it"));
        assert!(config.audio_in_config().is_none());
        assert_eq!(state.input_modality(), InputModality::Text);
    }

    #[test]
    fn audio_turn_uses_defaults() {
        let mut state = SessionState::new();
        state.set_input_modality(InputModality::Text);
        let request = build_request(&TurnConfig::audio(), &mut state);
        let config = config_of(&request);

        let audio_in = config.audio_in_config().unwrap();
        assert_eq!(audio_in.encoding, AudioInEncoding::Linear16);
        assert_eq!(audio_in.sample_rate_hertz, 16000);
        assert_eq!(config.audio_out_config().encoding, AudioOutEncoding::Linear16);
        assert_eq!(config.audio_out_config().sample_rate_hertz, 24000);
        assert_eq!(config.audio_out_config().volume_percentage, 100);
        assert_eq!(config.device_config(), &DeviceConfig::new("default", "default"));
        assert_eq!(config.dialog_state_in().language_code, "en-US");
        assert!(config.dialog_state_in().conversation_state.is_none());
        assert!(config.screen_out_config().is_none());
        assert!(!config.debug_config().return_debug_info);
        assert_eq!(state.input_modality(), InputModality::Audio);
    }

    #[test]
    fn encodings_resolve_case_insensitively() {
        let mut state = SessionState::new();
        let lower = build_request(
            &TurnConfig::audio().with_encoding_in("flac").with_encoding_out("mp3"),
            &mut state,
        );
        let upper = build_request(
            &TurnConfig::audio().with_encoding_in("FLAC").with_encoding_out("MP3"),
            &mut state,
        );
        assert_eq!(lower, upper);
        assert_eq!(
            config_of(&lower).audio_in_config().unwrap().encoding,
            AudioInEncoding::Flac
        );
        assert_eq!(config_of(&lower).audio_out_config().encoding, AudioOutEncoding::Mp3);

        let unknown = build_request(
            &TurnConfig::audio().with_encoding_in("opus").with_sample_rate_in(48000),
            &mut state,
        );
        let audio_in = config_of(&unknown).audio_in_config().unwrap();
        assert_eq!(audio_in.encoding, AudioInEncoding::Linear16);
        assert_eq!(audio_in.sample_rate_hertz, 48000);
    }

    #[test]
    fn carries_session_state_forward() {
        let mut state = SessionState::new();
        state.set_continuation_token(b"opaque".to_vec());
        state.apply_volume(35);

        let request = build_request(&TurnConfig::audio(), &mut state);
        let config = config_of(&request);
        assert_eq!(
            config.dialog_state_in().conversation_state.as_deref(),
            Some(&b"opaque"[..])
        );
        assert_eq!(config.audio_out_config().volume_percentage, 35);
    }

    #[test]
    fn optional_sections_pass_through() {
        let mut state = SessionState::new();
        let turn = TurnConfig::audio()
            .with_device("kitchen", "acme-speaker")
            .with_language_code("fr-FR")
            .with_new_conversation(true)
            .with_device_location(48.85, 2.35)
            .with_screen_on(false)
            .with_debug_info(true);
        let request = build_request(&turn, &mut state);
        let config = config_of(&request);

        assert_eq!(config.device_config(), &DeviceConfig::new("kitchen", "acme-speaker"));
        let dialog = config.dialog_state_in();
        assert_eq!(dialog.language_code, "fr-FR");
        assert!(dialog.is_new_conversation);
        assert_eq!(dialog.device_location.unwrap().coordinates.latitude, 48.85);
        assert_eq!(config.screen_out_config().unwrap().screen_mode, ScreenMode::Off);
        assert!(config.debug_config().return_debug_info);
    }
}
