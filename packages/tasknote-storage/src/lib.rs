pub mod db;
pub mod memory;
pub mod queries;
pub mod schema;

mod error;

pub use error::Error;

use std::{future::Future, pin::Pin};

use tasknote_domain::{Document, Flag};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence contract for one entity kind. The kind is `D::KIND`.
pub trait Store<D>
where
	Self: Send + Sync,
	D: Document,
{
	/// Inserts or replaces `doc`, assigning a store id on first save.
	fn save<'a>(&'a self, doc: &'a D) -> BoxFuture<'a, Result<D>>;

	fn find_by_uid<'a>(&'a self, uid: &'a str) -> BoxFuture<'a, Result<Option<D>>>;

	/// Ordered by creation time, then uid.
	fn find_by_owner<'a>(&'a self, user_uid: &'a str) -> BoxFuture<'a, Result<Vec<D>>>;

	fn find_by_owner_and_flag<'a>(
		&'a self,
		user_uid: &'a str,
		flag: Flag,
		value: bool,
	) -> BoxFuture<'a, Result<Vec<D>>>;

	fn delete<'a>(&'a self, doc: &'a D) -> BoxFuture<'a, Result<()>>;
}
