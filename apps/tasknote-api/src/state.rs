use std::sync::Arc;

use color_eyre::eyre;

use tasknote_config::StorageBackend;
use tasknote_service::{Stores, TasknoteService};
use tasknote_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<TasknoteService>,
}
impl AppState {
	pub async fn new(config: tasknote_config::Config) -> color_eyre::Result<Self> {
		let stores = match config.storage.backend {
			StorageBackend::Postgres => {
				let postgres = config
					.storage
					.postgres
					.as_ref()
					.ok_or_else(|| eyre::eyre!("storage.postgres is required."))?;
				let db = Db::connect(postgres).await?;

				db.ensure_schema().await?;

				Stores::postgres(db)
			},
			StorageBackend::Memory => Stores::memory(),
		};

		Ok(Self::from_service(TasknoteService::new(stores)))
	}

	pub fn from_service(service: TasknoteService) -> Self {
		Self { service: Arc::new(service) }
	}
}
