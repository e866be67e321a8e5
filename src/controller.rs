//! Show/hide state of each rendered row's detail panel.

use crate::error::{ViewerError, ViewerResult};
use crate::models::view::{RowId, ToggleLabel, ViewModel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowState {
    #[default]
    Collapsed,
    Expanded,
}

impl RowState {
    pub fn toggled(self) -> Self {
        match self {
            RowState::Collapsed => RowState::Expanded,
            RowState::Expanded => RowState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == RowState::Expanded
    }

    pub fn label(self) -> ToggleLabel {
        match self {
            RowState::Collapsed => ToggleLabel::Show,
            RowState::Expanded => ToggleLabel::Hide,
        }
    }
}

/// Owns one [`RowState`] per row of a rendered [`ViewModel`].
///
/// A controller lives exactly as long as the table it was attached to; a new
/// run replaces it wholesale rather than transitioning it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailToggleController {
    rows: Vec<RowState>,
}

impl DetailToggleController {
    pub fn attach(view: &ViewModel) -> Self {
        DetailToggleController {
            rows: vec![RowState::Collapsed; view.len()],
        }
    }

    /// Flips one row and returns its new state.
    pub fn toggle(&mut self, id: RowId) -> ViewerResult<RowState> {
        let state = self
            .rows
            .get_mut(id.index())
            .ok_or(ViewerError::UnknownRow(id.index()))?;
        *state = state.toggled();
        Ok(*state)
    }

    pub fn state(&self, id: RowId) -> Option<RowState> {
        self.rows.get(id.index()).copied()
    }

    pub fn label(&self, id: RowId) -> Option<ToggleLabel> {
        self.state(id).map(RowState::label)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
