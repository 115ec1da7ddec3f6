use rdex::eval;
use std::io::{self, Write};

/// Reads one expression per line and prints its value. The `exit` check
/// happens on the raw line before the evaluator sees it, the expression
/// grammar itself knows nothing about exiting.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    println!("Please input the expression you would like solved. Or type 'exit' to close the program.");
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        match eval::<f64>(line) {
            Ok(x) => println!("Answer is: {x}"),
            Err(e) => {
                eprintln!("{e}");
                println!("There seems to be a problem with the expression you put in.");
            }
        }
    }
    Ok(())
}
