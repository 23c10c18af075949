mod schema;
mod start;
mod version;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use self::start::StartCommandArguments;
use crate::cnf::LOGO;

const INFO: &str = "
A GraphQL server over an in-memory catalog of books and authors.

Run without a subcommand to start the server on the default address.
";

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf")]
#[command(about = INFO, before_help = LOGO)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,
	#[command(flatten)]
	start: StartCommandArguments,
}

#[derive(Debug, Subcommand)]
enum Commands {
	#[command(about = "Start the GraphQL server")]
	Start(StartCommandArguments),
	#[command(about = "Print the GraphQL schema definition")]
	Schema,
	#[command(about = "Output the command-line tool and server version information")]
	Version,
}

pub async fn init() -> ExitCode {
	let args = Cli::parse();
	let output = match args.command {
		None => start::init(args.start).await,
		Some(Commands::Start(args)) => start::init(args).await,
		Some(Commands::Schema) => schema::init(),
		Some(Commands::Version) => version::init(),
	};
	match output {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			// Logging may have failed to start, in which case nothing would be shown
			if tracing::dispatcher::has_been_set() {
				error!("{:#}", e);
			} else {
				eprintln!("{e:#}");
			}
			ExitCode::FAILURE
		}
	}
}
