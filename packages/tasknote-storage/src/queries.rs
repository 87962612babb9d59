use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{Error, Result};
use tasknote_domain::{Document, Flag};

pub async fn upsert_document<D>(pool: &PgPool, doc: &D) -> Result<D>
where
	D: Document,
{
	let id = doc.id().unwrap_or_else(Uuid::new_v4);
	let body = serde_json::to_value(doc)?;

	sqlx::query(
		"\
INSERT INTO documents (id, kind, uid, user_uid, body)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (id) DO UPDATE
SET body = EXCLUDED.body",
	)
	.bind(id)
	.bind(D::KIND.as_str())
	.bind(doc.uid())
	.bind(doc.user_uid())
	.bind(body)
	.execute(pool)
	.await?;

	let mut saved = doc.clone();

	saved.set_id(id);

	Ok(saved)
}

pub async fn find_document_by_uid<D>(pool: &PgPool, uid: &str) -> Result<Option<D>>
where
	D: Document,
{
	let row: Option<(Uuid, Value)> =
		sqlx::query_as("SELECT id, body FROM documents WHERE kind = $1 AND uid = $2")
			.bind(D::KIND.as_str())
			.bind(uid)
			.fetch_optional(pool)
			.await?;

	row.map(decode).transpose()
}

pub async fn list_documents_by_owner<D>(
	pool: &PgPool,
	user_uid: &str,
	filter: Option<(Flag, bool)>,
) -> Result<Vec<D>>
where
	D: Document,
{
	let rows: Vec<(Uuid, Value)> = match filter {
		None =>
			sqlx::query_as(
				"\
SELECT id, body
FROM documents
WHERE kind = $1 AND user_uid = $2
ORDER BY (body ->> 'createdAt')::bigint, uid",
			)
			.bind(D::KIND.as_str())
			.bind(user_uid)
			.fetch_all(pool)
			.await?,
		Some((flag, value)) => {
			// The flag name is a fixed identifier, so the expression matches the flag indexes.
			let sql = format!(
				"\
SELECT id, body
FROM documents
WHERE kind = $1 AND user_uid = $2 AND (body ->> '{}') = $3
ORDER BY (body ->> 'createdAt')::bigint, uid",
				flag.as_str()
			);

			sqlx::query_as(&sql)
				.bind(D::KIND.as_str())
				.bind(user_uid)
				.bind(value.to_string())
				.fetch_all(pool)
				.await?
		},
	};

	rows.into_iter().map(decode).collect()
}

pub async fn delete_document<D>(pool: &PgPool, doc: &D) -> Result<()>
where
	D: Document,
{
	let Some(id) = doc.id() else {
		return Err(Error::InvalidArgument(format!(
			"{} {} has no store id.",
			D::KIND.as_str(),
			doc.uid()
		)));
	};
	let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND kind = $2")
		.bind(id)
		.bind(D::KIND.as_str())
		.execute(pool)
		.await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound(format!("{} {} does not exist.", D::KIND.as_str(), doc.uid())));
	}

	Ok(())
}

fn decode<D>((id, body): (Uuid, Value)) -> Result<D>
where
	D: Document,
{
	let mut doc: D = serde_json::from_value(body)?;

	doc.set_id(id);

	Ok(doc)
}
