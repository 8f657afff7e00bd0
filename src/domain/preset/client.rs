//! Presets sub-client — catalog listing, labels, predictions, iteration.

use crate::client::KimolaClient;
use crate::domain::preset::wire::{PredictionResult, Preset, PresetLabel};
use crate::domain::preset::{PresetCategory, PresetType};
use crate::error::SdkError;
use crate::shared::Paged;

use async_stream::try_stream;
use futures_util::Stream;

/// Minimum length of a preset key. Shorter keys are rejected locally,
/// before any request is issued.
const MIN_KEY_LEN: usize = 8;

/// Page size the API applies when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Safety bound for [`Presets::iterate`] against a server that keeps
/// returning full pages.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Sub-client for preset operations.
pub struct Presets<'a> {
    pub(crate) client: &'a KimolaClient,
}

impl<'a> Presets<'a> {
    /// List one page of the preset catalog, optionally filtered by type
    /// and category.
    pub async fn list(
        &self,
        page_size: u32,
        page_index: u32,
        preset_type: Option<PresetType>,
        category: Option<PresetCategory>,
    ) -> Result<Paged<Preset>, SdkError> {
        Ok(self
            .client
            .http
            .get_presets(page_size, page_index, preset_type, category)
            .await?)
    }

    /// Get a preset by its key.
    pub async fn get(&self, key: &str) -> Result<Preset, SdkError> {
        ensure_key(key)?;
        Ok(self.client.http.get_preset(key).await?)
    }

    /// Labels of a preset, or `None` when the preset has none.
    pub async fn labels(&self, key: &str) -> Result<Option<Vec<PresetLabel>>, SdkError> {
        ensure_key(key)?;
        Ok(self.client.http.get_preset_labels(key).await?)
    }

    /// Run the preset against `text`.
    ///
    /// With `aspect_based` false the results carry a dominant label with a
    /// probability; with it true, one sentiment per detected aspect.
    /// `language` is an optional ISO-639-1 hint.
    pub async fn predict(
        &self,
        key: &str,
        text: &str,
        language: Option<&str>,
        aspect_based: bool,
    ) -> Result<Vec<PredictionResult>, SdkError> {
        ensure_key(key)?;
        if text.trim().is_empty() {
            return Err(SdkError::Validation("text is required".into()));
        }
        Ok(self
            .client
            .http
            .predict(key, text, language, aspect_based)
            .await?)
    }

    /// Lazily walk the catalog across pages.
    ///
    /// Requests `pageIndex` 0, 1, 2, … with a fixed `page_size`, yielding
    /// each page's items in order. The stream ends at the first short page
    /// or once `max_pages` pages have been fetched. Nothing is cached:
    /// resuming the stream fetches the next page only, never page 0 again.
    pub fn iterate(
        &self,
        page_size: u32,
        preset_type: Option<PresetType>,
        category: Option<PresetCategory>,
        max_pages: u32,
    ) -> impl Stream<Item = Result<Preset, SdkError>> + 'a {
        let client = self.client;
        try_stream! {
            let mut page_index = 0;
            while page_index < max_pages {
                let page = client
                    .http
                    .get_presets(page_size, page_index, preset_type, category)
                    .await?;
                let short = page.is_short(page_size);
                for preset in page.items {
                    yield preset;
                }
                if short {
                    break;
                }
                page_index += 1;
            }
        }
    }
}

fn ensure_key(key: &str) -> Result<(), SdkError> {
    if key.trim().is_empty() || key.len() < MIN_KEY_LEN {
        return Err(SdkError::Validation(
            "a valid preset key of at least 8 characters is required".into(),
        ));
    }
    Ok(())
}
