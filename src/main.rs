use clap::Parser;
use course_registry::application::RecordStore;
use course_registry::cli::{Cli, Session};
use course_registry::error::RegistryError;
use course_registry::infrastructure::Settings;
use course_registry::logging;
use std::io;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RegistryError> {
    let settings = Settings::new(cli.file);
    let (mut store, load_error) = RecordStore::load(settings.repository());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    if let Some(e) = load_error {
        session.report_load_failure(&e)?;
    }

    session.run(&mut store)
}
