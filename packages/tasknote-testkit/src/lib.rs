//! Throwaway Postgres databases for tests that need a real server.

mod error;

pub use error::{Error, Result};

use std::{env, str::FromStr, thread};

use sqlx::{
	ConnectOptions, Connection, Executor,
	postgres::{PgConnectOptions, PgConnection},
};
use tokio::runtime::Builder;
use uuid::Uuid;

/// Server DSN used to create test databases. Tests skip when it is unset.
pub const DSN_ENV: &str = "TASKNOTE_PG_DSN";

const DATABASE_PREFIX: &str = "tasknote_test_";
const MAINTENANCE_DATABASES: [&str; 2] = ["postgres", "template1"];

/// A database owned by one test. Dropped on [`TestDatabase::drop_database`] or when it goes out of
/// scope.
pub struct TestDatabase {
	name: String,
	options: PgConnectOptions,
	maintenance: PgConnectOptions,
	dropped: bool,
}
impl TestDatabase {
	/// Creates a database on the server named by `TASKNOTE_PG_DSN`, or returns `None` when the
	/// variable is unset.
	pub async fn from_env() -> Result<Option<Self>> {
		match env::var(DSN_ENV) {
			Ok(server_dsn) => Self::create(&server_dsn).await.map(Some),
			Err(_) => Ok(None),
		}
	}

	pub async fn create(server_dsn: &str) -> Result<Self> {
		let server = PgConnectOptions::from_str(server_dsn)
			.map_err(|err| Error::Message(format!("Failed to parse {DSN_ENV}: {err}.")))?;
		let (maintenance, mut conn) = connect_maintenance(&server).await?;
		let name = database_name();

		conn.execute(format!(r#"CREATE DATABASE "{name}""#).as_str())
			.await
			.map_err(|err| Error::Message(format!("Failed to create database {name}: {err}.")))?;
		conn.close().await?;

		Ok(Self { options: server.database(&name), name, maintenance, dropped: false })
	}

	/// Storage settings that point the application at this database.
	pub fn postgres(&self, pool_max_conns: u32) -> tasknote_config::Postgres {
		tasknote_config::Postgres { dsn: self.options.to_url_lossy().to_string(), pool_max_conns }
	}

	/// Drops the database now and reports failures instead of printing them.
	pub async fn drop_database(mut self) -> Result<()> {
		drop_database(&self.name, &self.maintenance).await?;

		self.dropped = true;

		Ok(())
	}
}
impl Drop for TestDatabase {
	fn drop(&mut self) {
		if self.dropped {
			return;
		}

		let name = self.name.clone();
		let maintenance = self.maintenance.clone();
		// The test runtime may already be shutting down, so drop from a private one.
		let worker = thread::spawn(move || {
			let outcome = Builder::new_current_thread()
				.enable_all()
				.build()
				.map_err(Error::from)
				.and_then(|runtime| runtime.block_on(drop_database(&name, &maintenance)));

			if let Err(err) = outcome {
				eprintln!("Failed to drop test database {name}: {err}.");
			}
		});

		let _ = worker.join();
	}
}

fn database_name() -> String {
	format!("{DATABASE_PREFIX}{}", Uuid::new_v4().simple())
}

async fn connect_maintenance(
	server: &PgConnectOptions,
) -> Result<(PgConnectOptions, PgConnection)> {
	let mut failures = Vec::new();

	for database in MAINTENANCE_DATABASES {
		let options = server.clone().database(database);

		match PgConnection::connect_with(&options).await {
			Ok(conn) => return Ok((options, conn)),
			Err(err) => failures.push(format!("{database}: {err}")),
		}
	}

	Err(Error::Message(format!(
		"Failed to connect to a maintenance database ({}).",
		failures.join("; ")
	)))
}

async fn drop_database(name: &str, maintenance: &PgConnectOptions) -> Result<()> {
	let mut conn = PgConnection::connect_with(maintenance).await?;

	// Pools held by the test may still be open.
	sqlx::query(
		"\
SELECT pg_terminate_backend(pid)
FROM pg_stat_activity
WHERE datname = $1 AND pid <> pg_backend_pid()",
	)
	.bind(name)
	.execute(&mut conn)
	.await?;
	conn.execute(format!(r#"DROP DATABASE IF EXISTS "{name}""#).as_str()).await?;

	Ok(())
}
