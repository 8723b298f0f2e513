use rustyline::{DefaultEditor, error::ReadlineError};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::eval_program,
    parser::core::Parser,
};

const PROMPT: &str = ">> ";

/// Runs the interactive read-eval-print loop on the current terminal.
///
/// Each line is lexed, parsed and evaluated on its own, but the root
/// environment persists for the whole session: a binding made on one line
/// is visible on every later line. Syntax errors are printed one per line
/// and leave the environment untouched; runtime errors are printed in
/// their canonical `<kind>: <detail>` form. Ctrl-C discards the current
/// line, Ctrl-D ends the session.
pub fn start() {
    let Ok(mut editor) = DefaultEditor::new() else {
        eprintln!("Failed to initialize the terminal line editor.");
        return;
    };

    let env = Environment::root();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                let (program, errors) = Parser::new(&line).parse();
                if !errors.is_empty() {
                    for error in &errors {
                        println!("{error}");
                    }
                    continue;
                }

                match eval_program(&program, &env) {
                    Ok(value) => println!("{value}"),
                    Err(error) => println!("{error}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            },
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("{error}");
                break;
            },
        }
    }
}
