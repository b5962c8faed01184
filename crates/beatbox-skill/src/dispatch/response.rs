//! Response composition and serialization.
//!
//! Handlers build a [`ResponsePayload`] through [`ResponseBuilder`]. The
//! payload is rendered into the platform's response envelope only when it is
//! written, so handler tests can assert on plain text instead of SSML.

use std::io::Write;

use serde::Serialize;

use crate::catalog::PlaylistRecord;
use crate::template::VisualTemplate;

use super::errors::DispatchError;

/// Token identifying the playlist screen in visual directives.
pub const PLAYLIST_TOKEN: &str = "playlistToken";

const RESPONSE_VERSION: &str = "1.0";

/// Spoken text, reprompt and directives produced by one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsePayload {
    speech: Option<String>,
    reprompt: Option<String>,
    directives: Vec<Directive>,
}

impl ResponsePayload {
    /// A response with no speech, no reprompt and no directives.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text spoken to the user.
    #[must_use]
    pub fn speech(&self) -> Option<&str> {
        self.speech.as_deref()
    }

    /// Text spoken when the user does not answer.
    #[must_use]
    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    /// Directives for the requesting device.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Whether the payload carries nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speech.is_none() && self.reprompt.is_none() && self.directives.is_empty()
    }

    /// Wire representation of the payload.
    #[must_use]
    pub fn to_envelope(&self) -> ResponseEnvelope<'_> {
        ResponseEnvelope {
            version: RESPONSE_VERSION,
            response: ResponseBody {
                output_speech: self.speech.as_deref().map(OutputSpeech::ssml),
                reprompt: self.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                directives: &self.directives,
                should_end_session: self.reprompt.as_ref().map(|_| false),
            },
        }
    }
}

/// Fluent builder used by the request handlers.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    payload: ResponsePayload,
}

impl ResponseBuilder {
    /// Starts an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spoken text.
    #[must_use]
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.payload.speech = Some(text.into());
        self
    }

    /// Sets the reprompt text, keeping the session open.
    #[must_use]
    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.payload.reprompt = Some(text.into());
        self
    }

    /// Appends a directive.
    #[must_use]
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.payload.directives.push(directive);
        self
    }

    /// Finishes the response.
    #[must_use]
    pub fn build(self) -> ResponsePayload {
        self.payload
    }
}

/// Instruction for the requesting device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Render the visual template bound to a playlist.
    #[serde(rename = "Alexa.Presentation.APL.RenderDocument")]
    RenderDocument {
        /// Screen token.
        token: String,
        /// Static APL document.
        document: VisualTemplate,
        /// Data bound into the document.
        datasources: DataSources,
    },
    /// Run commands on the current screen.
    #[serde(rename = "Alexa.Presentation.APL.ExecuteCommands")]
    ExecuteCommands {
        /// Screen token.
        token: String,
        /// Commands to run, in order.
        commands: Vec<Command>,
    },
}

impl Directive {
    /// Renders `template` with the fields of `record` bound as `payload`.
    #[must_use]
    pub fn render_playlist(template: &VisualTemplate, record: &PlaylistRecord) -> Self {
        Self::RenderDocument {
            token: PLAYLIST_TOKEN.to_owned(),
            document: template.clone(),
            datasources: DataSources {
                payload: PlaylistBinding {
                    tipo: record.kind().to_owned(),
                    nombre: record.name().to_owned(),
                    url: record.url().to_owned(),
                },
            },
        }
    }

    /// Asks the screen to open `source`.
    #[must_use]
    pub fn open_url(source: impl Into<String>) -> Self {
        Self::ExecuteCommands {
            token: PLAYLIST_TOKEN.to_owned(),
            commands: vec![Command::OpenUrl {
                source: source.into(),
            }],
        }
    }
}

/// Data sources attached to a render directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSources {
    /// Playlist fields referenced by the template as `payload`.
    pub payload: PlaylistBinding,
}

/// Playlist fields bound into the visual template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistBinding {
    /// Workout category.
    pub tipo: String,
    /// Playlist name.
    pub nombre: String,
    /// Playlist link.
    pub url: String,
}

/// Screen command carried by [`Directive::ExecuteCommands`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Open a link on the device.
    #[serde(rename = "OpenURL")]
    OpenUrl {
        /// Link to open.
        source: String,
    },
}

/// Response envelope as serialized to the platform.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope<'a> {
    version: &'static str,
    response: ResponseBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "no_directives")]
    directives: &'a [Directive],
    #[serde(skip_serializing_if = "Option::is_none")]
    should_end_session: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Reprompt {
    output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
struct OutputSpeech {
    #[serde(rename = "type")]
    kind: &'static str,
    ssml: String,
}

impl OutputSpeech {
    fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML",
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }
}

fn no_directives(directives: &&[Directive]) -> bool {
    directives.is_empty()
}

fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Writer that serializes response envelopes as JSON lines.
pub struct ResponseWriter<W> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    /// Creates a new response writer wrapping the given output stream.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the payload's envelope as one line and flushes the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, writing or flushing fails.
    pub fn write_payload(&mut self, payload: &ResponsePayload) -> Result<(), DispatchError> {
        serde_json::to_writer(&mut self.writer, &payload.to_envelope())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
