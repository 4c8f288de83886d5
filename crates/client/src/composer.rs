//! A composing session: one [`BuilderState`] bound to a backend.
//!
//! The builder itself is purely local. The composer adds the steps that talk
//! to the backend (loading templates, saving, publishing) and the local
//! export.

use std::path::{Path, PathBuf};

use lego_core::brick::Brick;
use lego_core::builder::BuilderState;
use lego_core::channel::PublishOutcome;
use lego_core::composition::{parse_tags, Composition, DEFAULT_CATEGORY};
use lego_core::error::CoreError;
use lego_core::export::{export_file, ExportFormat, ExportedFile};
use lego_core::template::Template;

use crate::api::ContentLegoClient;
use crate::error::ClientError;

/// The save dialog's fields. `tags` is the raw comma-separated input.
#[derive(Debug, Clone, Default)]
pub struct SaveForm {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: String,
}

impl SaveForm {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

pub struct Composer {
    builder: BuilderState,
    client: ContentLegoClient,
}

impl Composer {
    pub fn new(client: ContentLegoClient) -> Self {
        Self {
            builder: BuilderState::new(),
            client,
        }
    }

    pub fn builder(&self) -> &BuilderState {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut BuilderState {
        &mut self.builder
    }

    pub fn client(&self) -> &ContentLegoClient {
        &self.client
    }

    /// Fetch a library brick and append a copy of it.
    pub async fn add_library_brick(&mut self, brick_id: &str) -> Result<Brick, ClientError> {
        let brick = self.client.get_brick(brick_id).await?;
        self.builder.add_brick(&brick);
        Ok(brick)
    }

    /// Seed the builder from a stored template and count the use.
    ///
    /// The builder is only touched once both requests succeeded.
    pub async fn load_template(&mut self, template_id: &str) -> Result<Template, ClientError> {
        let template = self.client.get_template(template_id).await?;
        let used = self.client.use_template(template_id).await?;
        self.builder.load_template(&template);
        tracing::debug!(
            template_id = %template.id,
            usage_count = used.usage_count,
            "Template loaded"
        );
        Ok(template)
    }

    /// Save the current composition.
    ///
    /// The name and the brick list are checked before any request is sent.
    pub async fn save(&self, form: &SaveForm) -> Result<Composition, ClientError> {
        let category = form
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let draft = self.builder.draft_composition(
            &form.name,
            form.description.as_deref(),
            category,
            parse_tags(&form.tags),
        )?;

        let saved = self.client.create_composition(&draft).await?;
        tracing::info!(
            composition_id = %saved.id,
            bricks = saved.bricks.len(),
            "Composition saved"
        );
        Ok(saved)
    }

    /// Store the current composition as a private template.
    pub async fn save_as_template(
        &self,
        name: &str,
        description: &str,
        category: &str,
    ) -> Result<Template, ClientError> {
        let draft = self
            .builder
            .save_as_template(name, description, category)
            .ok_or_else(|| {
                CoreError::Validation("Add at least one brick before saving".to_string())
            })?;
        draft.validate()?;
        self.client.create_template(&draft).await
    }

    /// Export the current composition. Empty compositions export as an
    /// empty document.
    pub fn export(&self, format: ExportFormat) -> ExportedFile {
        export_file(self.builder.selected_bricks(), format)
    }

    /// Export into `dir` under the format's file name and return the path.
    pub async fn write_export(
        &self,
        dir: impl AsRef<Path>,
        format: ExportFormat,
    ) -> Result<PathBuf, ClientError> {
        let file = self.export(format);
        let path = dir.as_ref().join(&file.file_name);
        tokio::fs::write(&path, file.content.as_bytes()).await?;
        tracing::info!(path = %path.display(), format = %format, "Composition exported");
        Ok(path)
    }

    /// Publish a saved composition to each channel. One outcome per channel,
    /// in the given order.
    pub async fn publish(
        &self,
        composition_id: &str,
        channel_ids: &[String],
    ) -> Vec<PublishOutcome> {
        self.client
            .publish_to_channels(composition_id, channel_ids)
            .await
    }
}
