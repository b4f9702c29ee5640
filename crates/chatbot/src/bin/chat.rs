use std::io::{self, BufRead, Write};
use std::thread;

use chatbot::{accept_input, logging, session_engine, Message, Sender, Settings, WELCOME_MESSAGE};

fn main() -> io::Result<()> {
    logging::init();
    let settings = Settings::load_or_default();
    let mut engine = session_engine(&settings);

    // If a prompt is provided on the command line, answer it once and exit.
    let args = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if let Some(prompt) = accept_input(&args) {
        engine.record(prompt);
        println!("{}", Message::now(Sender::You, prompt));
        println!("{}", Message::now(Sender::Bot, engine.reply(prompt)));
        return Ok(());
    }

    if settings.show_welcome {
        println!("{}", Message::now(Sender::Bot, WELCOME_MESSAGE));
    }
    println!("Type 'quit' or press Ctrl-D to leave.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(text) = accept_input(&line) else {
            print!("> ");
            stdout.flush()?;
            continue;
        };
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            println!("{}", Message::now(Sender::Bot, "Goodbye!"));
            break;
        }

        println!("{}", Message::now(Sender::You, text));
        engine.record(text);
        thread::sleep(settings.typing_delay());
        println!("{}", Message::now(Sender::Bot, engine.reply(text)));
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}
