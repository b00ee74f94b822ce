//! About text.

pub fn text() -> String {
    format!(
        "{name} {version}\n\n\
         Generates random passwords from the character classes you choose.\n\
         Every enabled class appears at least once, and character positions\n\
         are shuffled. Passwords are never stored, transmitted, or logged.",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}

pub fn run() {
    println!("{}", text());
}
