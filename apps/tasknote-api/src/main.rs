use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = tasknote_api::Args::parse();
	tasknote_api::run(args).await
}
