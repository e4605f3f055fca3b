//! Interactive menu loop

use crate::application::RecordStore;
use crate::cli::menu::MenuChoice;
use crate::cli::output::{
    format_failure, format_record_list, format_registered, format_saved, CHOICE_PROMPT,
    COURSE_PROMPT, FAREWELL, FIRST_NAME_PROMPT, INVALID_CHOICE, LAST_NAME_PROMPT, MENU,
};
use crate::domain::{validate_name, EnrollmentRecord, NameField};
use crate::error::{RegistryError, Result};
use crate::infrastructure::EnrollmentRepository;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Console session reading choices from `input` and writing to `output`.
///
/// Every store and validation failure is reported on `output` and the menu
/// is shown again. Only a failure of the console streams themselves ends
/// [`Session::run`] with an error.
pub struct Session<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Session { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Tell the user why the session starts with no records
    pub fn report_load_failure(&mut self, err: &RegistryError) -> Result<()> {
        write!(self.output, "{}", format_failure(&err.load_message(), err))?;
        Ok(())
    }

    /// Run the menu until the user exits or input ends
    pub fn run<R: EnrollmentRepository>(&mut self, store: &mut RecordStore<R>) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;

            let line = match self.prompt(CHOICE_PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("input closed at menu");
                    writeln!(self.output)?;
                    self.output.flush()?;
                    return Ok(());
                }
                // Unreadable line; treated like any other invalid choice
                Err(e) if e.kind() == io::ErrorKind::InvalidData => String::new(),
                Err(e) => return Err(e.into()),
            };
            writeln!(self.output)?;

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Register) => self.register(store)?,
                Ok(MenuChoice::Display) => self.display(store)?,
                Ok(MenuChoice::Save) => self.save(store)?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    self.output.flush()?;
                    return Ok(());
                }
                Err(msg) => {
                    debug!(%msg);
                    writeln!(self.output, "{}\n", INVALID_CHOICE)?;
                }
            }
        }
    }

    /// Show `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn register<R: EnrollmentRepository>(&mut self, store: &mut RecordStore<R>) -> Result<()> {
        match self.read_registration() {
            Ok(Some(record)) => {
                writeln!(self.output, "{}", format_registered(&record))?;
                info!(record = %record, "registered student");
                store.add(record);
            }
            Ok(None) => debug!("input closed during registration"),
            Err(e) => {
                debug!(error = %e, "registration rejected");
                write!(self.output, "{}", format_failure(&e.register_message(), &e))?;
            }
        }
        Ok(())
    }

    /// Collect one record; the first rejected field abandons the attempt
    fn read_registration(&mut self) -> Result<Option<EnrollmentRecord>> {
        let Some(first) = self.prompt(FIRST_NAME_PROMPT)? else {
            return Ok(None);
        };
        let first = validate_name(NameField::First, &first)?;

        let Some(last) = self.prompt(LAST_NAME_PROMPT)? else {
            return Ok(None);
        };
        let last = validate_name(NameField::Last, &last)?;

        let Some(course) = self.prompt(COURSE_PROMPT)? else {
            return Ok(None);
        };

        Ok(Some(EnrollmentRecord::new(first, last, course)))
    }

    fn display<R: EnrollmentRepository>(&mut self, store: &RecordStore<R>) -> Result<()> {
        writeln!(self.output, "{}", format_record_list(store.list()))?;
        Ok(())
    }

    fn save<R: EnrollmentRepository>(&mut self, store: &RecordStore<R>) -> Result<()> {
        match store.save() {
            Ok(()) => writeln!(self.output, "{}", format_saved(store.list()))?,
            Err(e) => write!(self.output, "{}", format_failure(&e.save_message(), &e))?,
        }
        Ok(())
    }
}
