pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Persistence error: {message}")]
	Persistence { message: String },
}
impl From<tasknote_storage::Error> for Error {
	fn from(err: tasknote_storage::Error) -> Self {
		match err {
			tasknote_storage::Error::NotFound(message) => Self::NotFound { message },
			err => Self::Persistence { message: err.to_string() },
		}
	}
}
