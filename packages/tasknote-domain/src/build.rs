//! Turns validated creation payloads into brand-new entities.

use crate::{Kind, Millis, NewNote, NewTask, Note, Task};

pub fn build_task(new: NewTask, user_uid: &str, now: Millis) -> Task {
	let NewTask { title, description, priority, completed } = new;

	Task {
		id: None,
		uid: crate::new_uid(),
		user_uid: user_uid.to_string(),
		kind: Kind::Task,
		title,
		description,
		priority,
		completed,
		created_at: now,
		updated_at: now,
		completed_at: completed.then_some(now),
	}
}

pub fn build_note(new: NewNote, user_uid: &str, now: Millis) -> Note {
	let NewNote { title, text } = new;

	Note {
		id: None,
		uid: crate::new_uid(),
		user_uid: user_uid.to_string(),
		kind: Kind::Note,
		title,
		text,
		created_at: now,
		updated_at: now,
	}
}
