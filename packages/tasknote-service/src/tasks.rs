use tasknote_domain::{
	Flag, NewTask, Task, TaskPatch,
	build::build_task,
	merge::merge_task,
};

use crate::{Result, TasknoteService};

impl TasknoteService {
	pub async fn list_tasks(&self, user_uid: &str) -> Result<Vec<Task>> {
		tracing::debug!(user_uid, "Fetching all tasks for user.");

		let tasks = self.stores.tasks.find_by_owner(user_uid).await?;

		tracing::debug!(user_uid, count = tasks.len(), "Fetched tasks.");

		Ok(tasks)
	}

	pub async fn list_completed_tasks(&self, user_uid: &str) -> Result<Vec<Task>> {
		self.list_flagged_tasks(user_uid, Flag::Completed).await
	}

	pub async fn list_priority_tasks(&self, user_uid: &str) -> Result<Vec<Task>> {
		self.list_flagged_tasks(user_uid, Flag::Priority).await
	}

	pub async fn create_task(&self, user_uid: &str, new: NewTask) -> Result<Task> {
		let task = build_task(new, user_uid, self.clock.now_millis());
		let task = self.stores.tasks.save(&task).await?;

		tracing::info!(uid = %task.uid, user_uid, completed = task.completed, "Task created.");

		Ok(task)
	}

	pub async fn update_task(&self, item_uid: &str, patch: &TaskPatch) -> Result<Task> {
		let existing = crate::load_by_uid(self.stores.tasks.as_ref(), item_uid).await?;
		let task = merge_task(existing, patch, self.clock.now_millis());
		let task = self.stores.tasks.save(&task).await?;

		tracing::info!(
			uid = %task.uid,
			completed = task.completed,
			completed_at = ?task.completed_at,
			"Task updated."
		);

		Ok(task)
	}

	pub async fn delete_task(&self, item_uid: &str) -> Result<()> {
		let task = crate::load_by_uid(self.stores.tasks.as_ref(), item_uid).await?;

		self.stores.tasks.delete(&task).await?;

		tracing::info!(uid = %task.uid, "Task deleted.");

		Ok(())
	}

	async fn list_flagged_tasks(&self, user_uid: &str, flag: Flag) -> Result<Vec<Task>> {
		tracing::debug!(user_uid, flag = flag.as_str(), "Fetching flagged tasks for user.");

		let tasks = self.stores.tasks.find_by_owner_and_flag(user_uid, flag, true).await?;

		tracing::debug!(user_uid, flag = flag.as_str(), count = tasks.len(), "Fetched tasks.");

		Ok(tasks)
	}
}
