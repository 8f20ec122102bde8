//! Test: the secret field is private.
//!
//! The only way to read the secret is `SecretString::reveal`.

use secretstring::SecretString;

fn main() {
    let password = SecretString::new("hunter2");
    let raw: &str = &password.secret;
    println!("{raw}");
}
