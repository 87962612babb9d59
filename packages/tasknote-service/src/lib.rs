pub mod notes;
pub mod tasks;

mod error;

pub use error::{Error, Result};
pub use tasknote_storage::BoxFuture;

use std::sync::Arc;

use time::OffsetDateTime;

use tasknote_domain::{Document, Millis, Note, Task};
use tasknote_storage::{Store, db::Db, memory::MemoryStore};

pub trait Clock
where
	Self: Send + Sync,
{
	fn now_millis(&self) -> Millis;
}

#[derive(Clone)]
pub struct Stores {
	pub tasks: Arc<dyn Store<Task>>,
	pub notes: Arc<dyn Store<Note>>,
}

pub struct TasknoteService {
	pub stores: Stores,
	pub clock: Arc<dyn Clock>,
}

struct SystemClock;

impl Clock for SystemClock {
	fn now_millis(&self) -> Millis {
		let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

		Millis::try_from(millis).unwrap_or(Millis::MAX)
	}
}

impl Stores {
	pub fn new(tasks: Arc<dyn Store<Task>>, notes: Arc<dyn Store<Note>>) -> Self {
		Self { tasks, notes }
	}

	pub fn postgres(db: Db) -> Self {
		let db = Arc::new(db);

		Self { tasks: db.clone(), notes: db }
	}

	pub fn memory() -> Self {
		Self {
			tasks: Arc::new(MemoryStore::<Task>::new()),
			notes: Arc::new(MemoryStore::<Note>::new()),
		}
	}
}

impl TasknoteService {
	pub fn new(stores: Stores) -> Self {
		Self { stores, clock: Arc::new(SystemClock) }
	}

	pub fn with_clock(stores: Stores, clock: Arc<dyn Clock>) -> Self {
		Self { stores, clock }
	}
}

/// Loads the entity with `uid` or fails with [`Error::NotFound`].
pub(crate) async fn load_by_uid<D>(store: &dyn Store<D>, uid: &str) -> Result<D>
where
	D: Document,
{
	store.find_by_uid(uid).await?.ok_or_else(|| Error::NotFound {
		message: format!("No {} with uid {uid}.", D::KIND.as_str()),
	})
}
