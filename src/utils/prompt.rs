use std::io;
use std::io::Write;

/// Ask a yes/no question on stdout and read the answer from stdin.
/// `default` is taken on an empty answer; with `None` the question repeats
/// until something recognizable comes in. The Portuguese answers the sites
/// were administered with ("s"/"sim") work alongside y/yes.
pub fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (S/n): ", prompt),
            Some(false) => print!("{} (s/N): ", prompt),
            None => print!("{} (s/n): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "s" | "sim" | "y" | "yes" => return Ok(true),
            "n" | "nao" | "não" | "no" => return Ok(false),
            "" => match default {
                Some(value) => return Ok(value),
                None => continue,
            },
            _ => continue,
        }
    }
}
