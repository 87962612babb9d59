use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Document, Flag, Kind, Millis};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	#[serde(skip)]
	pub id: Option<Uuid>,
	pub uid: String,
	pub user_uid: String,
	#[serde(rename = "type")]
	pub kind: Kind,
	pub title: String,
	pub text: String,
	pub created_at: Millis,
	pub updated_at: Millis,
}
impl Document for Note {
	const KIND: Kind = Kind::Note;

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

	fn flag(&self, _flag: Flag) -> Option<bool> {
		None
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNote {
	pub title: String,
	pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotePatch {
	pub title: Option<String>,
	pub text: Option<String>,
}
impl NotePatch {
	pub fn is_empty(&self) -> bool {
		self.title.is_none() && self.text.is_none()
	}
}
