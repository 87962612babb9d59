//! Applies partial updates onto existing entities.
//!
//! Identity fields (`id`, `uid`, `user_uid`, `kind`, `created_at`) are never written here.

use crate::{Millis, Note, NotePatch, Task, TaskPatch};

pub fn merge_task(mut task: Task, patch: &TaskPatch, now: Millis) -> Task {
	let now = refreshed(task.updated_at, now);

	if let Some(title) = patch.title.as_ref() {
		task.title.clone_from(title);
	}
	if let Some(description) = patch.description.as_ref() {
		task.description.clone_from(description);
	}
	if let Some(priority) = patch.priority {
		task.priority = priority;
	}
	if let Some(completed) = patch.completed {
		task.completed = completed;
		task.completed_at = next_completed_at(task.completed_at, completed, now);
	}

	task.updated_at = now;

	task
}

pub fn merge_note(mut note: Note, patch: &NotePatch, now: Millis) -> Note {
	let now = refreshed(note.updated_at, now);

	if let Some(title) = patch.title.as_ref() {
		note.title.clone_from(title);
	}
	if let Some(text) = patch.text.as_ref() {
		note.text.clone_from(text);
	}

	note.updated_at = now;

	note
}

/// Completing an already completed task keeps the original completion time.
fn next_completed_at(current: Option<Millis>, completed: bool, now: Millis) -> Option<Millis> {
	match (completed, current) {
		(true, Some(at)) => Some(at),
		(true, None) => Some(now),
		(false, _) => None,
	}
}

// `updated_at` must not move backwards even if the wall clock does.
fn refreshed(previous: Millis, now: Millis) -> Millis {
	now.max(previous)
}
