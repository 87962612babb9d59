pub mod build;
pub mod merge;
pub mod note;
pub mod payload;
pub mod task;

mod error;

pub use error::{Error, Result};
pub use note::{NewNote, Note, NotePatch};
pub use payload::{NotePayload, TaskPayload};
pub use task::{NewTask, Task, TaskPatch};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	Task,
	Note,
}
impl Kind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Task => "task",
			Self::Note => "note",
		}
	}
}

/// Boolean attributes a store can filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
	Completed,
	Priority,
}
impl Flag {
	/// Field name of the flag in the serialized document.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Completed => "completed",
			Self::Priority => "priority",
		}
	}
}

/// What a store needs to know about an entity to persist and query it.
pub trait Document
where
	Self: Clone + Send + Sync + Serialize + for<'de> Deserialize<'de> + 'static,
{
	const KIND: Kind;

	fn id(&self) -> Option<Uuid>;

	fn set_id(&mut self, id: Uuid);

	fn uid(&self) -> &str;

	fn user_uid(&self) -> &str;

	fn created_at(&self) -> Millis;

	/// `None` when the entity kind has no such flag.
	fn flag(&self, flag: Flag) -> Option<bool>;
}

pub(crate) fn new_uid() -> String {
	Uuid::new_v4().to_string()
}
