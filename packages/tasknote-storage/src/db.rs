use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{BoxFuture, Result, Store, queries, schema};
use tasknote_domain::{Document, Flag};

pub struct Db {
	pub pool: PgPool,
}
impl Db {
	pub async fn connect(cfg: &tasknote_config::Postgres) -> Result<Self> {
		let pool =
			PgPoolOptions::new().max_connections(cfg.pool_max_conns).connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let sql = schema::render_schema();
		let lock_id: i64 = 7_120_115;
		// Transaction-scoped lock; concurrent starters apply the schema one at a time.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)").bind(lock_id).execute(&mut *tx).await?;

		for statement in sql.split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}
}
impl<D> Store<D> for Db
where
	D: Document,
{
	fn save<'a>(&'a self, doc: &'a D) -> BoxFuture<'a, Result<D>> {
		Box::pin(queries::upsert_document(&self.pool, doc))
	}

	fn find_by_uid<'a>(&'a self, uid: &'a str) -> BoxFuture<'a, Result<Option<D>>> {
		Box::pin(queries::find_document_by_uid(&self.pool, uid))
	}

	fn find_by_owner<'a>(&'a self, user_uid: &'a str) -> BoxFuture<'a, Result<Vec<D>>> {
		Box::pin(queries::list_documents_by_owner(&self.pool, user_uid, None))
	}

	fn find_by_owner_and_flag<'a>(
		&'a self,
		user_uid: &'a str,
		flag: Flag,
		value: bool,
	) -> BoxFuture<'a, Result<Vec<D>>> {
		Box::pin(queries::list_documents_by_owner(&self.pool, user_uid, Some((flag, value))))
	}

	fn delete<'a>(&'a self, doc: &'a D) -> BoxFuture<'a, Result<()>> {
		Box::pin(queries::delete_document(&self.pool, doc))
	}
}
