use std::{env, process};

use rustyline::error::ReadlineError;
use rustyline::Editor;

use jlox::Lox;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => {
            let mut lox = Lox::stdio();
            match lox.run_file(&args[1]) {
                Ok(code) => process::exit(code),
                Err(error) => {
                    eprintln!("Could not read file '{}': {error}", args[1]);
                    process::exit(64);
                }
            }
        }
        _ => {
            println!("Usage: jlox [script]");
            process::exit(64);
        }
    }
}

fn history_path() -> Option<std::path::PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".jlox_history");
        path
    })
}

fn run_prompt() {
    let mut lox = Lox::stdio();
    let mut editor: Editor<()> = Editor::new().expect("readline editor to initialize");

    let history = history_path();
    if let Some(path) = &history {
        let _ = editor.load_history(path);
    }

    println!("Welcome to jlox 1.0!");

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if line.is_empty() {
                    break;
                }

                let _ = editor.add_history_entry(line.as_str());
                lox.run(&line);
                lox.reset();
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(error) => {
                eprintln!("Error reading input: {error}");
                break;
            }
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }

    process::exit(0);
}
