//! Invocation dispatcher.
//!
//! [`Skill`] owns the immutable collaborators built during bootstrap (catalog
//! client and visual template) and turns request lines into responses. It
//! never fails on a request: anything that goes wrong ends in the fallback
//! handler.

use std::io::{self, BufRead, Read, Write};

use crate::catalog::CatalogSource;
use crate::handlers::{builtin, fallback, select_playlist, visual_event};
use crate::logger::{SkillLogger, StructuredSkillLogger};
use crate::template::VisualTemplate;

use super::errors::DispatchError;
use super::request::RequestEnvelope;
use super::response::{ResponsePayload, ResponseWriter};
use super::router::SkillRequest;

/// Maximum size of a single request line in bytes, excluding the newline.
pub const MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Bytes read before a line is declared oversized.
const READ_LIMIT: u64 = 1024 * 1024 + 1;

/// Stateless request dispatcher.
#[derive(Debug, Clone)]
pub struct Skill<C> {
    catalog: C,
    template: VisualTemplate,
}

impl<C> Skill<C> {
    /// Creates a dispatcher from its collaborators.
    #[must_use]
    pub const fn new(catalog: C, template: VisualTemplate) -> Self {
        Self { catalog, template }
    }

    /// Catalog used by the playlist handler.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }
}

impl<C: CatalogSource> Skill<C> {
    /// Handles one raw request line.
    #[must_use]
    pub fn handle_line(&self, line: &[u8], logger: &dyn SkillLogger) -> ResponsePayload {
        let content_len = line.trim_ascii_end().len();
        if content_len > MAX_REQUEST_BYTES {
            return fallback::handle(
                &DispatchError::request_too_large(content_len, MAX_REQUEST_BYTES),
                logger,
            );
        }

        match RequestEnvelope::parse(line) {
            Ok(envelope) => self.handle(&envelope, logger),
            Err(error) => fallback::handle(&error, logger),
        }
    }

    /// Handles a parsed request envelope.
    #[must_use]
    pub fn handle(&self, envelope: &RequestEnvelope, logger: &dyn SkillLogger) -> ResponsePayload {
        logger.request_received(
            envelope.request_id(),
            envelope.request_type(),
            envelope.intent_name(),
        );

        match SkillRequest::classify(envelope) {
            Ok(request) => self.route(request, envelope, logger),
            Err(error) => fallback::handle(&error, logger),
        }
    }

    /// Serves request lines from `input` until it is exhausted.
    ///
    /// Blank lines are skipped. Each remaining line is an independent
    /// invocation with its own [`StructuredSkillLogger`].
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing a response fails.
    pub fn serve<R, W>(&self, mut input: R, output: W) -> Result<(), DispatchError>
    where
        R: BufRead,
        W: Write,
    {
        let mut writer = ResponseWriter::new(output);
        let mut invocation = 0_u64;

        while let Some(line) = read_request_line(&mut input)? {
            let payload = match line {
                RequestLine::Complete(bytes) if bytes.trim_ascii().is_empty() => continue,
                RequestLine::Complete(bytes) => {
                    invocation += 1;
                    self.handle_line(&bytes, &StructuredSkillLogger::new(invocation))
                }
                RequestLine::Oversized(size) => {
                    invocation += 1;
                    fallback::handle(
                        &DispatchError::request_too_large(size, MAX_REQUEST_BYTES),
                        &StructuredSkillLogger::new(invocation),
                    )
                }
            };
            writer.write_payload(&payload)?;
        }
        Ok(())
    }

    fn route(
        &self,
        request: SkillRequest,
        envelope: &RequestEnvelope,
        logger: &dyn SkillLogger,
    ) -> ResponsePayload {
        logger.request_routed(request.as_str());

        match request {
            SkillRequest::SelectPlaylist { workout_type } => select_playlist::handle(
                &self.catalog,
                &self.template,
                &workout_type,
                envelope.supports_apl(),
                logger,
            ),
            SkillRequest::VisualEvent { arguments } => visual_event::handle(&arguments),
            SkillRequest::Help => builtin::help(),
            SkillRequest::CancelOrStop => builtin::goodbye(),
        }
    }
}

/// One line read from the input stream.
enum RequestLine {
    /// A line within the size limit, newline included when present.
    Complete(Vec<u8>),
    /// A line over the limit; the payload is the number of bytes discarded.
    Oversized(usize),
}

/// Reads the next bounded request line.
///
/// Returns `Ok(None)` at end of input. Oversized lines are consumed up to and
/// including their newline so the next read starts on a fresh request.
fn read_request_line<R: BufRead>(input: &mut R) -> io::Result<Option<RequestLine>> {
    let mut buffer = Vec::new();
    let read = input.by_ref().take(READ_LIMIT).read_until(b'\n', &mut buffer)?;
    if read == 0 {
        return Ok(None);
    }

    let terminated = buffer.last() == Some(&b'\n');
    let content_len = buffer.len() - usize::from(terminated);
    if content_len <= MAX_REQUEST_BYTES {
        return Ok(Some(RequestLine::Complete(buffer)));
    }

    let remainder = if terminated {
        0
    } else {
        input.skip_until(b'\n')?
    };
    Ok(Some(RequestLine::Oversized(buffer.len() + remainder)))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::{MockCatalogSource, PlaylistRecord};
    use crate::handlers::builtin::{GOODBYE_SPEECH, HELP_SPEECH};
    use crate::handlers::fallback::FALLBACK_SPEECH;
    use crate::tests::support::{LogEvent, RecordingSkillLogger};

    fn template() -> VisualTemplate {
        VisualTemplate::from_json(r#"{"type":"APL"}"#).expect("template")
    }

    #[fixture]
    fn idle_skill() -> Skill<MockCatalogSource> {
        let mut catalog = MockCatalogSource::new();
        catalog.expect_fetch_all().never();
        Skill::new(catalog, template())
    }

    fn serve_lines(skill: &Skill<MockCatalogSource>, input: &[u8]) -> Vec<String> {
        let mut output = Vec::new();
        skill
            .serve(Cursor::new(input.to_vec()), &mut output)
            .expect("serve");
        String::from_utf8(output)
            .expect("utf8")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[rstest]
    fn stop_intent_says_goodbye(idle_skill: Skill<MockCatalogSource>) {
        let logger = RecordingSkillLogger::default();
        let payload = idle_skill.handle_line(
            br#"{"request":{"type":"IntentRequest","requestId":"r1","intent":{"name":"AMAZON.StopIntent"}}}"#,
            &logger,
        );

        assert_eq!(payload.speech(), Some(GOODBYE_SPEECH));
        assert_eq!(
            logger.events(),
            vec![
                LogEvent::RequestReceived {
                    request_id: Some(String::from("r1")),
                    request_type: String::from("IntentRequest"),
                    intent: Some(String::from("AMAZON.StopIntent")),
                },
                LogEvent::RequestRouted(String::from("cancel-or-stop")),
            ]
        );
    }

    #[rstest]
    fn null_interfaces_and_slots_still_reach_help(idle_skill: Skill<MockCatalogSource>) {
        let logger = RecordingSkillLogger::default();
        let payload = idle_skill.handle_line(
            br#"{"context":{"System":{"device":{"supportedInterfaces":null}}},
                "request":{"type":"IntentRequest","intent":{"name":"AMAZON.HelpIntent","slots":null}}}"#,
            &logger,
        );

        assert_eq!(payload.speech(), Some(HELP_SPEECH));
        assert_eq!(payload.reprompt(), Some(HELP_SPEECH));
    }

    #[rstest]
    #[case::not_json(b"definitely not json".as_slice())]
    #[case::launch(br#"{"request":{"type":"LaunchRequest"}}"#.as_slice())]
    #[case::missing_slot(
        br#"{"request":{"type":"IntentRequest","intent":{"name":"SeleccionarEntrenamientoIntent"}}}"#
            .as_slice()
    )]
    fn failures_end_in_fallback(idle_skill: Skill<MockCatalogSource>, #[case] line: &[u8]) {
        let logger = RecordingSkillLogger::default();
        let payload = idle_skill.handle_line(line, &logger);

        assert_eq!(payload.speech(), Some(FALLBACK_SPEECH));
        assert_eq!(payload.reprompt(), Some(FALLBACK_SPEECH));
        assert!(
            logger
                .events()
                .iter()
                .any(|event| matches!(event, LogEvent::RequestFailed(_)))
        );
    }

    #[rstest]
    fn oversized_line_is_rejected_without_parsing(idle_skill: Skill<MockCatalogSource>) {
        let logger = RecordingSkillLogger::default();
        let mut oversized = vec![b'x'; MAX_REQUEST_BYTES + 1];
        oversized.extend_from_slice(b"   \n");

        let payload = idle_skill.handle_line(&oversized, &logger);

        assert_eq!(payload.speech(), Some(FALLBACK_SPEECH));
        assert!(matches!(
            logger.events().as_slice(),
            [LogEvent::RequestFailed(message)] if message.contains("request too large")
        ));
    }

    #[rstest]
    fn serve_answers_every_non_blank_line(idle_skill: Skill<MockCatalogSource>) {
        let input = concat!(
            r#"{"request":{"type":"IntentRequest","intent":{"name":"AMAZON.HelpIntent"}}}"#,
            "\n\n   \n",
            "garbage\n",
            r#"{"request":{"type":"Alexa.Presentation.APL.UserEvent","arguments":["otra_accion"]}}"#,
        );

        let lines = serve_lines(&idle_skill, input.as_bytes());

        assert_eq!(lines.len(), 3);
        assert!(lines.first().is_some_and(|line| line.contains("por ejemplo")));
        assert!(lines.get(1).is_some_and(|line| line.contains("Lo siento")));
        assert_eq!(
            lines.get(2).map(String::as_str),
            Some(r#"{"version":"1.0","response":{}}"#)
        );
    }

    #[rstest]
    fn serve_skips_past_oversized_lines(idle_skill: Skill<MockCatalogSource>) {
        let mut input = vec![b'x'; MAX_REQUEST_BYTES + 10];
        input.push(b'\n');
        input.extend_from_slice(
            br#"{"request":{"type":"IntentRequest","intent":{"name":"AMAZON.CancelIntent"}}}"#,
        );

        let lines = serve_lines(&idle_skill, &input);

        assert_eq!(lines.len(), 2);
        assert!(lines.first().is_some_and(|line| line.contains("ocurrió un error")));
        assert!(lines.get(1).is_some_and(|line| line.contains("Hasta luego")));
    }

    #[test]
    fn every_playlist_request_fetches_the_catalog_again() {
        let mut catalog = MockCatalogSource::new();
        catalog
            .expect_fetch_all()
            .times(2)
            .returning(|| Ok(vec![PlaylistRecord::new("Fuerza", "Power", "u", true)]));
        let skill = Skill::new(catalog, template());
        let request = concat!(
            r#"{"request":{"type":"IntentRequest","intent":{"name":"SeleccionarEntrenamientoIntent","#,
            r#""slots":{"tipo_entrenamiento":{"name":"tipo_entrenamiento","value":"fuerza"}}}}}"#,
            "\n"
        );

        let lines = serve_lines(&skill, request.repeat(2).as_bytes());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.first(), lines.get(1));
        assert!(lines.iter().all(|line| line.contains("Power")));
    }

    #[test]
    fn line_at_the_limit_is_accepted() {
        let mut input = vec![b' '; MAX_REQUEST_BYTES];
        input.push(b'\n');
        let mut cursor = Cursor::new(input);

        let line = read_request_line(&mut cursor).expect("read");
        assert!(matches!(line, Some(RequestLine::Complete(bytes)) if bytes.len() == MAX_REQUEST_BYTES + 1));
        assert!(read_request_line(&mut cursor).expect("read eof").is_none());
    }

    #[rstest]
    fn playlist_request_reaches_the_catalog() {
        let mut catalog = MockCatalogSource::new();
        catalog
            .expect_fetch_all()
            .once()
            .returning(|| Ok(vec![PlaylistRecord::new("Yoga", "Calma", "u", true)]));
        let skill = Skill::new(catalog, template());
        let logger = RecordingSkillLogger::default();

        let payload = skill.handle_line(
            br#"{"request":{"type":"IntentRequest","intent":{"name":"SeleccionarEntrenamientoIntent",
                "slots":{"tipo_entrenamiento":{"name":"tipo_entrenamiento","value":"yoga"}}}}}"#,
            &logger,
        );

        assert!(payload.speech().is_some_and(|speech| speech.contains("Calma")));
        assert!(payload.directives().is_empty());
    }
}
