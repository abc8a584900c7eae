use std::io::{self, BufRead, IsTerminal};
use std::process;

use log::debug;
use yardcalc::evaluate;

fn main() {
    pretty_env_logger::init();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("Enter a mathematical expression:");
    }

    let mut line = String::new();
    if let Err(e) = stdin.lock().read_line(&mut line) {
        eprintln!("Error: failed to read the input: {}", e);
        process::exit(1);
    }
    debug!("read {:?}", line);

    match evaluate(&line) {
        Ok(value) => {
            println!("Result: {:.7}", value);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
