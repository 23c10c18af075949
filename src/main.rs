use std::process::ExitCode;

fn main() -> ExitCode {
	bookshelf::init()
}
