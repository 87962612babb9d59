//! Client payloads as they arrive on the wire.
//!
//! Every field is optional so one shape serves both creation and partial update. The
//! `validate_for_*` methods turn a payload into the typed input the builder or merger expects.

use serde::Deserialize;

use crate::{Error, NewNote, NewTask, NotePatch, Result, TaskPatch};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TaskPayload {
	pub title: Option<String>,
	pub description: Option<String>,
	pub priority: Option<bool>,
	pub completed: Option<bool>,
}
impl TaskPayload {
	pub fn validate_for_create(self) -> Result<NewTask> {
		let (Some(title), Some(description), Some(priority), Some(completed)) =
			(self.title, self.description, self.priority, self.completed)
		else {
			return Err(invalid("Invalid payload, must send all fields to create."));
		};

		require_title(&title)?;

		Ok(NewTask { title, description, priority, completed })
	}

	pub fn validate_for_update(self) -> Result<TaskPatch> {
		let patch = TaskPatch {
			title: self.title,
			description: self.description,
			priority: self.priority,
			completed: self.completed,
		};

		if patch.is_empty() {
			return Err(invalid("Invalid payload, must send minimum of one field to update."));
		}
		if let Some(title) = patch.title.as_deref() {
			require_title(title)?;
		}

		Ok(patch)
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NotePayload {
	pub title: Option<String>,
	pub text: Option<String>,
}
impl NotePayload {
	pub fn validate_for_create(self) -> Result<NewNote> {
		let (Some(title), Some(text)) = (self.title, self.text) else {
			return Err(invalid("Invalid payload, must send all fields to create."));
		};

		require_title(&title)?;

		Ok(NewNote { title, text })
	}

	pub fn validate_for_update(self) -> Result<NotePatch> {
		let patch = NotePatch { title: self.title, text: self.text };

		if patch.is_empty() {
			return Err(invalid("Invalid payload, must send minimum of one field to update."));
		}
		if let Some(title) = patch.title.as_deref() {
			require_title(title)?;
		}

		Ok(patch)
	}
}

fn require_title(title: &str) -> Result<()> {
	if title.trim().is_empty() {
		return Err(invalid("Invalid payload, title must be non-empty."));
	}

	Ok(())
}

fn invalid(message: &str) -> Error {
	Error::Validation { message: message.to_string() }
}
