//! Interactive shell.
//!
//! Read-eval-print loop over the answer router. Four administrative commands
//! (`exit`, `help`, `update`, `clear`); anything else is treated as a
//! natural-language question. A question error never terminates the loop —
//! the router already converts it to a fixed message.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use crate::answer::AnswerRouter;
use crate::types::Result;

const BANNER: &str = "\n=== Astronomie-Informationssystem ===\nGeben Sie 'help' ein für mehr Informationen.";

const HELP_TEXT: &str = "
Verfügbare Befehle:
- exit: Beendet das Programm
- help: Zeigt diese Hilfe an
- update: Aktualisiert die Liste der verfügbaren Objekte
- clear: Leert den Bildschirm

Beispielfragen:
- Wie weit ist [Objekt] von der Erde entfernt?
- Was ist [Objekt]?
- Was umkreist [Objekt]?
";

/// Interactive question loop.
pub struct Shell {
    router: AnswerRouter,
}

impl Shell {
    /// Create a shell over a configured router.
    pub fn new(router: AnswerRouter) -> Self {
        Self { router }
    }

    /// Run the loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only for unrecoverable terminal I/O failures; question
    /// and command failures are printed and the loop continues.
    pub async fn run(&mut self) -> Result<()> {
        println!("{BANNER}");

        match self.router.catalog_names().await {
            Ok(names) => println!("\nVerfügbare Objekte: {}", names.join(", ")),
            Err(err) => eprintln!("\nObjektliste konnte nicht geladen werden: {err}"),
        }

        let mut editor = DefaultEditor::new()?;
        loop {
            let line = match editor.readline("\nIhre Frage: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            editor.add_history_entry(input).ok();

            match input.to_lowercase().as_str() {
                "exit" => {
                    println!("Auf Wiedersehen!");
                    break;
                }
                "help" => println!("{HELP_TEXT}"),
                "update" => match self.router.refresh_catalog().await {
                    Ok(names) => {
                        println!("Objektliste aktualisiert!");
                        println!("Verfügbare Objekte: {}", names.join(", "));
                    }
                    Err(err) => eprintln!("Aktualisierung fehlgeschlagen: {err}"),
                },
                "clear" => {
                    print!("\x1b[2J\x1b[1;1H");
                    std::io::stdout().flush()?;
                }
                _ => {
                    let started = Instant::now();
                    let answer = self.router.answer(input).await;
                    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "question processed");
                    println!("\nAntwort: {answer}");
                }
            }
        }

        Ok(())
    }
}
