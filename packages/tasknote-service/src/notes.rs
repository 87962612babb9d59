use tasknote_domain::{NewNote, Note, NotePatch, build::build_note, merge::merge_note};

use crate::{Result, TasknoteService};

impl TasknoteService {
	pub async fn list_notes(&self, user_uid: &str) -> Result<Vec<Note>> {
		tracing::debug!(user_uid, "Fetching all notes for user.");

		let notes = self.stores.notes.find_by_owner(user_uid).await?;

		tracing::debug!(user_uid, count = notes.len(), "Fetched notes.");

		Ok(notes)
	}

	pub async fn create_note(&self, user_uid: &str, new: NewNote) -> Result<Note> {
		let note = build_note(new, user_uid, self.clock.now_millis());
		let note = self.stores.notes.save(&note).await?;

		tracing::info!(uid = %note.uid, user_uid, "Note created.");

		Ok(note)
	}

	pub async fn update_note(&self, item_uid: &str, patch: &NotePatch) -> Result<Note> {
		let existing = crate::load_by_uid(self.stores.notes.as_ref(), item_uid).await?;
		let note = merge_note(existing, patch, self.clock.now_millis());
		let note = self.stores.notes.save(&note).await?;

		tracing::info!(uid = %note.uid, "Note updated.");

		Ok(note)
	}

	pub async fn delete_note(&self, item_uid: &str) -> Result<()> {
		let note = crate::load_by_uid(self.stores.notes.as_ref(), item_uid).await?;

		self.stores.notes.delete(&note).await?;

		tracing::info!(uid = %note.uid, "Note deleted.");

		Ok(())
	}
}
