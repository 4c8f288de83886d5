//! Builder state: one live composition plus view flags and drag tracking.
//!
//! The drag gesture is a two-state machine:
//!
//! ```text
//! Idle --begin_drag(X)--> Dragging(X)
//! Dragging(X) --drop on Y (Y != X, both present)--> Idle   + reorder X to Y
//! Dragging(X) --drop on X / outside / cancel / stale id--> Idle
//! ```
//!
//! Preview and mobile-preview flags are independent booleans and never
//! interact with the drag machine.

use crate::brick::{Brick, BrickMetadata};
use crate::composition::{validate_name, CompositionModel, NewComposition};
use crate::error::CoreError;
use crate::template::{NewTemplate, Template, TemplateRef};
use crate::types::EntityId;

/// Drag gesture state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active_id: EntityId,
    },
}

/// Result of ending a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged brick moved from `from` to `to`.
    Moved { from: usize, to: usize },
    /// No mutation: dropped on itself, outside any target, on a stale id,
    /// or no drag was in progress.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    composition: CompositionModel,
    preview_mode: bool,
    mobile_preview: bool,
    drag: DragState,
    current_template: Option<TemplateRef>,
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- composition ------------------------------------------------------

    pub fn composition(&self) -> &CompositionModel {
        &self.composition
    }

    pub fn selected_bricks(&self) -> &[Brick] {
        self.composition.to_document()
    }

    /// Place a copy of `brick` at the end of the composition.
    pub fn add_brick(&mut self, brick: &Brick) -> EntityId {
        self.composition.append(brick).id.clone()
    }

    pub fn remove_brick(&mut self, index: usize) -> Option<Brick> {
        self.composition.remove(index)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        self.composition.reorder(from, to)
    }

    pub fn edit_content(
        &mut self,
        index: usize,
        content: impl Into<String>,
        metadata: Option<BrickMetadata>,
    ) -> bool {
        self.composition.edit_content(index, content, metadata)
    }

    /// Replace the composition with copies of a template's bricks.
    pub fn load_template(&mut self, template: &Template) {
        self.composition = CompositionModel::from_bricks(&template.bricks);
        self.current_template = Some(template.to_ref());
        self.drag = DragState::Idle;
    }

    /// Empty the composition and forget the seeding template.
    pub fn clear(&mut self) {
        self.composition.clear();
        self.current_template = None;
        self.drag = DragState::Idle;
    }

    pub fn current_template(&self) -> Option<&TemplateRef> {
        self.current_template.as_ref()
    }

    /// Draft a template from the current sequence. `None` when empty.
    pub fn save_as_template(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Option<NewTemplate> {
        if self.composition.is_empty() {
            return None;
        }
        Some(NewTemplate {
            name: name.into(),
            description: description.into(),
            bricks: self.selected_bricks().to_vec(),
            category: category.into(),
            is_public: false,
            variables: Vec::new(),
            tags: Vec::new(),
        })
    }

    /// Draft a composition for saving.
    ///
    /// Fails before anything leaves the builder when the name is blank or the
    /// composition has no bricks.
    pub fn draft_composition(
        &self,
        name: &str,
        description: Option<&str>,
        category: &str,
        tags: Vec<String>,
    ) -> Result<NewComposition, CoreError> {
        validate_name(name)?;
        if self.composition.is_empty() {
            return Err(CoreError::Validation(
                "Add at least one brick before saving".to_string(),
            ));
        }
        Ok(NewComposition {
            name: name.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            bricks: self.selected_bricks().to_vec(),
            category: category.to_string(),
            tags,
        })
    }

    // ---- drag machine -----------------------------------------------------

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn active_drag_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { active_id } => Some(active_id),
            DragState::Idle => None,
        }
    }

    /// Start dragging the brick with `id`. A second start replaces the first.
    pub fn begin_drag(&mut self, id: impl Into<EntityId>) {
        self.drag = DragState::Dragging {
            active_id: id.into(),
        };
    }

    /// Drop the dragged brick on `over` (`None` means outside any target).
    pub fn end_drag(&mut self, over: Option<&str>) -> DropOutcome {
        let DragState::Dragging { active_id } = std::mem::take(&mut self.drag) else {
            return DropOutcome::Cancelled;
        };
        let Some(over) = over else {
            return DropOutcome::Cancelled;
        };
        if over == active_id {
            return DropOutcome::Cancelled;
        }
        match self.composition.reorder_by_id(&active_id, over) {
            Some((from, to)) => DropOutcome::Moved { from, to },
            None => DropOutcome::Cancelled,
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    // ---- view flags -------------------------------------------------------

    pub fn is_preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn is_mobile_preview(&self) -> bool {
        self.mobile_preview
    }

    pub fn set_preview_mode(&mut self, on: bool) {
        self.preview_mode = on;
    }

    pub fn set_mobile_preview(&mut self, on: bool) {
        self.mobile_preview = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brick::{BrickType, NewBrick};
    use crate::types::now;
    use assert_matches::assert_matches;

    fn brick(content: &str) -> Brick {
        Brick::create(NewBrick::new(BrickType::Text, content, content), now())
    }

    fn builder(contents: &[&str]) -> (BuilderState, Vec<EntityId>) {
        let mut b = BuilderState::new();
        let ids = contents.iter().map(|c| b.add_brick(&brick(c))).collect();
        (b, ids)
    }

    fn contents(b: &BuilderState) -> Vec<&str> {
        b.selected_bricks().iter().map(|x| x.content.as_str()).collect()
    }

    #[test]
    fn test_drop_on_other_brick_reorders() {
        let (mut b, ids) = builder(&["A", "B", "C"]);
        b.begin_drag(ids[0].clone());
        assert_eq!(b.active_drag_id(), Some(ids[0].as_str()));

        let outcome = b.end_drag(Some(ids[2].as_str()));
        assert_eq!(outcome, DropOutcome::Moved { from: 0, to: 2 });
        assert_eq!(contents(&b), ["B", "C", "A"]);
        assert_eq!(b.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_on_self_is_cancelled() {
        let (mut b, ids) = builder(&["A", "B"]);
        b.begin_drag(ids[1].clone());
        assert_eq!(b.end_drag(Some(ids[1].as_str())), DropOutcome::Cancelled);
        assert_eq!(contents(&b), ["A", "B"]);
        assert!(b.active_drag_id().is_none());
    }

    #[test]
    fn test_drop_outside_is_cancelled() {
        let (mut b, ids) = builder(&["A", "B"]);
        b.begin_drag(ids[0].clone());
        assert_eq!(b.end_drag(None), DropOutcome::Cancelled);
        assert_eq!(contents(&b), ["A", "B"]);
    }

    #[test]
    fn test_drop_on_stale_id_is_cancelled() {
        let (mut b, ids) = builder(&["A", "B"]);
        b.begin_drag(ids[0].clone());
        b.remove_brick(1);
        assert_eq!(b.end_drag(Some(ids[1].as_str())), DropOutcome::Cancelled);
        assert_eq!(contents(&b), ["A"]);
        assert_eq!(b.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_end_drag_while_idle_is_cancelled() {
        let (mut b, ids) = builder(&["A", "B"]);
        assert_eq!(b.end_drag(Some(ids[0].as_str())), DropOutcome::Cancelled);
    }

    #[test]
    fn test_cancel_drag_clears_active_id() {
        let (mut b, ids) = builder(&["A"]);
        b.begin_drag(ids[0].clone());
        b.cancel_drag();
        assert!(b.active_drag_id().is_none());
    }

    #[test]
    fn test_view_flags_are_orthogonal_to_drag() {
        let (mut b, ids) = builder(&["A", "B"]);
        b.begin_drag(ids[0].clone());
        b.set_preview_mode(true);
        b.set_mobile_preview(true);
        assert_eq!(b.active_drag_id(), Some(ids[0].as_str()));
        assert!(b.is_preview_mode());
        assert!(b.is_mobile_preview());
        b.set_preview_mode(false);
        assert!(b.is_mobile_preview());
        assert_eq!(contents(&b), ["A", "B"]);
    }

    #[test]
    fn test_load_template_copies_with_fresh_ids() {
        let template = Template::create(
            NewTemplate {
                name: "Launch".into(),
                description: String::new(),
                bricks: vec![brick("Intro"), brick("Outro")],
                category: "marketing".into(),
                is_public: false,
                variables: Vec::new(),
                tags: Vec::new(),
            },
            "current-user",
            now(),
        );
        let (mut b, _) = builder(&["old"]);
        b.load_template(&template);

        assert_eq!(contents(&b), ["Intro", "Outro"]);
        for (placed, source) in b.selected_bricks().iter().zip(&template.bricks) {
            assert_ne!(placed.id, source.id);
        }
        assert_eq!(b.current_template().unwrap().name, "Launch");

        b.clear();
        assert!(b.selected_bricks().is_empty());
        assert!(b.current_template().is_none());
    }

    #[test]
    fn test_save_as_template_requires_bricks() {
        let empty = BuilderState::new();
        assert!(empty.save_as_template("T", "", "c").is_none());

        let (b, _) = builder(&["A"]);
        let draft = b.save_as_template("T", "d", "c").unwrap();
        assert_eq!(draft.bricks.len(), 1);
        assert!(!draft.is_public);
    }

    #[test]
    fn test_draft_composition_validates_before_saving() {
        let empty = BuilderState::new();
        assert_matches!(
            empty.draft_composition("Post", None, "default", vec![]),
            Err(CoreError::Validation(_))
        );

        let (b, _) = builder(&["A"]);
        assert_matches!(
            b.draft_composition("  ", None, "default", vec![]),
            Err(CoreError::Validation(_))
        );

        let draft = b
            .draft_composition("Post", Some("  "), "default", vec!["launch".into()])
            .unwrap();
        assert_eq!(draft.name, "Post");
        assert!(draft.description.is_none());
        assert_eq!(draft.bricks.len(), 1);
    }
}
