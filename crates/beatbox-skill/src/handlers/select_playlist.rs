//! Playlist selection handler.

use crate::catalog::{self, CatalogSource};
use crate::dispatch::{Directive, ResponseBuilder, ResponsePayload};
use crate::logger::SkillLogger;
use crate::template::VisualTemplate;

pub(crate) const ANOTHER_PLAYLIST_REPROMPT: &str = "¿Quieres otra playlist?";
pub(crate) const CATALOG_FAILURE_SPEECH: &str =
    "Hubo un problema al buscar la playlist. Inténtalo más tarde.";

/// Fetches the catalog and answers with the first active playlist for
/// `requested`.
///
/// Catalog failures are logged and answered with a generic message; the
/// underlying error is never spoken.
pub(crate) fn handle<C>(
    catalog: &C,
    template: &VisualTemplate,
    requested: &str,
    screen: bool,
    logger: &dyn SkillLogger,
) -> ResponsePayload
where
    C: CatalogSource + ?Sized,
{
    let records = match catalog.fetch_all() {
        Ok(records) => records,
        Err(error) => {
            logger.catalog_fetch_failed(&error);
            return ResponseBuilder::new().speak(CATALOG_FAILURE_SPEECH).build();
        }
    };

    let Some(record) = catalog::select(&records, requested) else {
        logger.playlist_not_found(requested);
        return ResponseBuilder::new()
            .speak(format!(
                "Lo siento, no encontré una playlist vigente para {requested}."
            ))
            .build();
    };

    logger.playlist_selected(record);
    let mut builder = ResponseBuilder::new();
    if screen {
        builder = builder.add_directive(Directive::render_playlist(template, record));
    }
    builder
        .speak(format!(
            "Aquí tienes la playlist para {}: {}. Puedes abrirla en tu pantalla.",
            record.kind(),
            record.name()
        ))
        .reprompt(ANOTHER_PLAYLIST_REPROMPT)
        .build()
}
