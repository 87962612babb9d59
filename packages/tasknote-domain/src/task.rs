use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Document, Flag, Kind, Millis};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
	/// Store-internal identifier. Never serialized.
	#[serde(skip)]
	pub id: Option<Uuid>,
	pub uid: String,
	pub user_uid: String,
	#[serde(rename = "type")]
	pub kind: Kind,
	pub title: String,
	pub description: String,
	pub priority: bool,
	pub completed: bool,
	pub created_at: Millis,
	pub updated_at: Millis,
	pub completed_at: Option<Millis>,
}
impl Document for Task {
	const KIND: Kind = Kind::Task;

	fn id(&self) -> Option<Uuid> {
		self.id
	}

	fn set_id(&mut self, id: Uuid) {
		self.id = Some(id);
	}

	fn uid(&self) -> &str {
		&self.uid
	}

	fn user_uid(&self) -> &str {
		&self.user_uid
	}

	fn created_at(&self) -> Millis {
		self.created_at
	}

	fn flag(&self, flag: Flag) -> Option<bool> {
		match flag {
			Flag::Completed => Some(self.completed),
			Flag::Priority => Some(self.priority),
		}
	}
}

/// A validated creation payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
	pub title: String,
	pub description: String,
	pub priority: bool,
	pub completed: bool,
}

/// A validated partial update. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPatch {
	pub title: Option<String>,
	pub description: Option<String>,
	pub priority: Option<bool>,
	pub completed: Option<bool>,
}
impl TaskPatch {
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.description.is_none()
			&& self.priority.is_none()
			&& self.completed.is_none()
	}
}
