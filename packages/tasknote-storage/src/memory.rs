//! Process-local document store with the same contract as the Postgres one.

use std::{
	collections::HashMap,
	future,
	sync::{Mutex, MutexGuard},
};

use uuid::Uuid;

use crate::{BoxFuture, Error, Result, Store};
use tasknote_domain::{Document, Flag};

pub struct MemoryStore<D> {
	docs: Mutex<HashMap<Uuid, D>>,
}
impl<D> MemoryStore<D>
where
	D: Document,
{
	pub fn new() -> Self {
		Self { docs: Mutex::new(HashMap::new()) }
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, D>> {
		self.docs.lock().unwrap_or_else(|err| err.into_inner())
	}

	fn save_sync(&self, doc: &D) -> Result<D> {
		let mut docs = self.lock();
		let id = doc.id().unwrap_or_else(Uuid::new_v4);

		if docs.values().any(|existing| existing.uid() == doc.uid() && existing.id() != Some(id)) {
			return Err(Error::InvalidArgument(format!(
				"{} uid {} is already taken.",
				D::KIND.as_str(),
				doc.uid()
			)));
		}

		let mut saved = doc.clone();

		saved.set_id(id);
		docs.insert(id, saved.clone());

		Ok(saved)
	}

	fn collect<F>(&self, user_uid: &str, filter: F) -> Vec<D>
	where
		F: Fn(&D) -> bool,
	{
		let mut found = self
			.lock()
			.values()
			.filter(|doc| doc.user_uid() == user_uid && filter(doc))
			.cloned()
			.collect::<Vec<_>>();

		found.sort_by(|a, b| {
			a.created_at().cmp(&b.created_at()).then_with(|| a.uid().cmp(b.uid()))
		});

		found
	}

	fn delete_sync(&self, doc: &D) -> Result<()> {
		let Some(id) = doc.id() else {
			return Err(Error::InvalidArgument(format!(
				"{} {} has no store id.",
				D::KIND.as_str(),
				doc.uid()
			)));
		};

		match self.lock().remove(&id) {
			Some(_) => Ok(()),
			None => Err(Error::NotFound(format!(
				"{} {} does not exist.",
				D::KIND.as_str(),
				doc.uid()
			))),
		}
	}
}
impl<D> Default for MemoryStore<D>
where
	D: Document,
{
	fn default() -> Self {
		Self::new()
	}
}
impl<D> Store<D> for MemoryStore<D>
where
	D: Document,
{
	fn save<'a>(&'a self, doc: &'a D) -> BoxFuture<'a, Result<D>> {
		Box::pin(future::ready(self.save_sync(doc)))
	}

	fn find_by_uid<'a>(&'a self, uid: &'a str) -> BoxFuture<'a, Result<Option<D>>> {
		let found = self.lock().values().find(|doc| doc.uid() == uid).cloned();

		Box::pin(future::ready(Ok(found)))
	}

	fn find_by_owner<'a>(&'a self, user_uid: &'a str) -> BoxFuture<'a, Result<Vec<D>>> {
		Box::pin(future::ready(Ok(self.collect(user_uid, |_| true))))
	}

	fn find_by_owner_and_flag<'a>(
		&'a self,
		user_uid: &'a str,
		flag: Flag,
		value: bool,
	) -> BoxFuture<'a, Result<Vec<D>>> {
		let found = self.collect(user_uid, |doc| doc.flag(flag) == Some(value));

		Box::pin(future::ready(Ok(found)))
	}

	fn delete<'a>(&'a self, doc: &'a D) -> BoxFuture<'a, Result<()>> {
		Box::pin(future::ready(self.delete_sync(doc)))
	}
}
