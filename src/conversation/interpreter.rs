use crate::conversation::event::{InboundEvent, TurnOutcome};
use crate::conversation::state::SessionState;
use crate::error::DialogError;
use crate::types::events::MicrophoneMode;
use crate::types::AssistResponse;

/// Turns inbound frames of one turn into [`InboundEvent`]s and folds their
/// dialog state into the [`SessionState`].
///
/// Keeps the follow-on verdict of the turn: once any frame asks for another
/// turn, the verdict stays set until the turn ends.
#[derive(Debug, Default)]
pub struct ResponseInterpreter {
    continue_dialog: bool,
}

impl ResponseInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continue_dialog(&self) -> bool {
        self.continue_dialog
    }

    /// Runs every check against `frame`, in a fixed order, and returns the
    /// events it produced. A frame that matches nothing yields no events.
    pub fn interpret(
        &mut self,
        frame: &AssistResponse,
        state: &mut SessionState,
    ) -> Vec<InboundEvent> {
        let mut events = Vec::new();

        if frame.is_end_of_utterance() {
            events.push(InboundEvent::EndOfUtterance);
        }

        if let Some(last) = frame.speech_results.last() {
            let text: String = frame
                .speech_results
                .iter()
                .map(|result| result.transcript.as_str())
                .collect();
            events.push(InboundEvent::Transcript {
                text,
                is_final: last.stability >= 1.0,
            });
        }

        if let Some(audio_out) = &frame.audio_out {
            events.push(InboundEvent::AudioChunk(audio_out.audio_data.clone()));
        }

        if let Some(debug_info) = &frame.debug_info {
            match parse_payload("aogAgentToAssistantJson", &debug_info.aog_agent_to_assistant_json) {
                Ok(value) => events.push(InboundEvent::DebugInfo(value)),
                Err(e) => {
                    events.push(InboundEvent::StreamError(e));
                    return events;
                }
            }
        }

        if let Some(device_action) = &frame.device_action {
            match parse_payload("deviceRequestJson", &device_action.device_request_json) {
                Ok(value) => events.push(InboundEvent::DeviceAction(value)),
                Err(e) => {
                    events.push(InboundEvent::StreamError(e));
                    return events;
                }
            }
        }

        if let Some(dialog) = &frame.dialog_state_out {
            if dialog.microphone_mode == MicrophoneMode::DialogFollowOn {
                self.continue_dialog = true;
            }
            events.push(InboundEvent::DialogResponse {
                display_text: dialog.supplemental_display_text.clone(),
            });
            state.set_continuation_token(dialog.conversation_state.clone());
            if state.apply_volume(dialog.volume_percentage) {
                events.push(InboundEvent::VolumeChanged(dialog.volume_percentage));
            }
        }

        if let Some(screen_out) = &frame.screen_out {
            events.push(InboundEvent::ScreenPayload {
                format: screen_out.format.clone(),
                data: screen_out.data.clone(),
            });
        }

        if events.is_empty() {
            tracing::debug!("frame carried nothing this client interprets");
        }
        events
    }

    /// The termination notice for the turn so far.
    pub fn outcome(&self, error: Option<DialogError>) -> TurnOutcome {
        TurnOutcome {
            error,
            continue_dialog: self.continue_dialog,
        }
    }
}

fn parse_payload(name: &str, json: &str) -> Result<serde_json::Value, DialogError> {
    serde_json::from_str(json).map_err(|e| {
        tracing::warn!("failed to parse {}: {}", name, e);
        DialogError::decode(name, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::events::{
        AudioOut, DebugInfo, DeviceAction, DialogStateOut, EventType, ScreenOut,
        SpeechRecognitionResult,
    };
    use crate::types::screen::ScreenOutFormat;
    use serde_json::json;

    fn dialog_frame(mode: MicrophoneMode, volume: i32) -> AssistResponse {
        AssistResponse {
            dialog_state_out: Some(DialogStateOut {
                supplemental_display_text: String::new(),
                conversation_state: b"token".to_vec(),
                microphone_mode: mode,
                volume_percentage: volume,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn transcript_fragments_are_joined() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        let frame = AssistResponse {
            speech_results: vec![
                SpeechRecognitionResult::new("what", 0.4),
                SpeechRecognitionResult::new(" time is it", 1.0),
            ],
            ..Default::default()
        };

        let events = interpreter.interpret(&frame, &mut state);
        assert_eq!(
            events,
            vec![InboundEvent::Transcript {
                text: "what time is it".to_string(),
                is_final: true,
            }]
        );
    }

    #[test]
    fn transcript_not_final_unless_last_is_stable() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        let frame = AssistResponse {
            speech_results: vec![
                SpeechRecognitionResult::new("what", 1.0),
                SpeechRecognitionResult::new(" time", 0.01),
            ],
            ..Default::default()
        };

        let events = interpreter.interpret(&frame, &mut state);
        assert_eq!(
            events,
            vec![InboundEvent::Transcript {
                text: "what time".to_string(),
                is_final: false,
            }]
        );
    }

    #[test]
    fn zero_volume_leaves_state_alone() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        state.apply_volume(80);

        let events = interpreter.interpret(&dialog_frame(MicrophoneMode::CloseMicrophone, 0), &mut state);
        assert!(!events.iter().any(|e| matches!(e, InboundEvent::VolumeChanged(_))));
        assert_eq!(state.volume_percentage(), 80);

        let events = interpreter.interpret(&dialog_frame(MicrophoneMode::CloseMicrophone, 45), &mut state);
        assert!(events.contains(&InboundEvent::VolumeChanged(45)));
        assert_eq!(state.volume_percentage(), 45);
    }

    #[test]
    fn follow_on_is_latched() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        assert!(!interpreter.continue_dialog());

        interpreter.interpret(&dialog_frame(MicrophoneMode::DialogFollowOn, 0), &mut state);
        interpreter.interpret(&dialog_frame(MicrophoneMode::CloseMicrophone, 0), &mut state);
        interpreter.interpret(&AssistResponse::default(), &mut state);

        assert!(interpreter.continue_dialog());
        assert_eq!(
            interpreter.outcome(None),
            TurnOutcome {
                error: None,
                continue_dialog: true
            }
        );
    }

    #[test]
    fn continuation_token_always_overwritten() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();

        interpreter.interpret(&dialog_frame(MicrophoneMode::Unspecified, 0), &mut state);
        assert_eq!(state.continuation_token(), Some(&b"token"[..]));

        let mut empty = dialog_frame(MicrophoneMode::Unspecified, 0);
        empty.dialog_state_out.as_mut().unwrap().conversation_state.clear();
        interpreter.interpret(&empty, &mut state);
        assert_eq!(state.continuation_token(), Some(&b""[..]));
    }

    #[test]
    fn every_signal_in_one_frame_in_order() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        let frame = AssistResponse {
            event_type: Some(EventType::EndOfUtterance),
            audio_out: Some(AudioOut {
                audio_data: vec![1, 2, 3],
            }),
            screen_out: Some(ScreenOut {
                format: ScreenOutFormat::Html,
                data: b"<p>hi</p>".to_vec(),
            }),
            device_action: Some(DeviceAction {
                device_request_json: r#"{"requestId":"42"}"#.to_string(),
            }),
            speech_results: vec![SpeechRecognitionResult::new("hi", 1.0)],
            dialog_state_out: Some(DialogStateOut {
                supplemental_display_text: "Hello there".to_string(),
                conversation_state: vec![7],
                microphone_mode: MicrophoneMode::DialogFollowOn,
                volume_percentage: 60,
            }),
            debug_info: Some(DebugInfo {
                aog_agent_to_assistant_json: r#"{"trace":[]}"#.to_string(),
            }),
        };

        let events = interpreter.interpret(&frame, &mut state);
        assert_eq!(
            events,
            vec![
                InboundEvent::EndOfUtterance,
                InboundEvent::Transcript {
                    text: "hi".to_string(),
                    is_final: true
                },
                InboundEvent::AudioChunk(vec![1, 2, 3]),
                InboundEvent::DebugInfo(json!({"trace": []})),
                InboundEvent::DeviceAction(json!({"requestId": "42"})),
                InboundEvent::DialogResponse {
                    display_text: "Hello there".to_string()
                },
                InboundEvent::VolumeChanged(60),
                InboundEvent::ScreenPayload {
                    format: ScreenOutFormat::Html,
                    data: b"<p>hi</p>".to_vec()
                },
            ]
        );
        assert_eq!(state.continuation_token(), Some(&[7u8][..]));
        assert!(interpreter.continue_dialog());
    }

    #[test]
    fn bad_embedded_json_stops_the_frame() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        state.apply_volume(80);
        let frame = AssistResponse {
            audio_out: Some(AudioOut { audio_data: vec![5] }),
            device_action: Some(DeviceAction {
                device_request_json: "{not json".to_string(),
            }),
            dialog_state_out: Some(DialogStateOut {
                supplemental_display_text: "x".to_string(),
                conversation_state: b"tok".to_vec(),
                microphone_mode: MicrophoneMode::DialogFollowOn,
                volume_percentage: 40,
            }),
            screen_out: Some(ScreenOut {
                format: ScreenOutFormat::Html,
                data: b"<p>".to_vec(),
            }),
            ..Default::default()
        };

        let events = interpreter.interpret(&frame, &mut state);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], InboundEvent::AudioChunk(vec![5]));
        match &events[1] {
            InboundEvent::StreamError(DialogError::Decode { payload, .. }) => {
                assert_eq!(payload, "deviceRequestJson")
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(state.continuation_token(), None);
        assert_eq!(state.volume_percentage(), 80);
        assert!(!interpreter.continue_dialog());
    }

    #[test]
    fn bad_debug_json_skips_device_action() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        let frame = AssistResponse {
            debug_info: Some(DebugInfo {
                aog_agent_to_assistant_json: "[".to_string(),
            }),
            device_action: Some(DeviceAction {
                device_request_json: "{}".to_string(),
            }),
            ..Default::default()
        };

        let events = interpreter.interpret(&frame, &mut state);
        assert!(matches!(
            events.as_slice(),
            [InboundEvent::StreamError(DialogError::Decode { .. })]
        ));
    }

    #[test]
    fn empty_frame_is_ignored() {
        let mut interpreter = ResponseInterpreter::new();
        let mut state = SessionState::new();
        let events = interpreter.interpret(&AssistResponse::default(), &mut state);
        assert!(events.is_empty());
        assert_eq!(state, SessionState::new());
    }
}
