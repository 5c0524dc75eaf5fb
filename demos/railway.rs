//! Railway Quick Start Example
//!
//! Validates an email address and a user name, then prints either the first
//! error or the registered user.
//!
//! Run with: `cargo run --example railway`
//! or with your own input: `cargo run --example railway -- "Ada Lovelace" ada@example.com`

use rop_rail::domain::{Email, User};

fn main() {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Mohamed Ehab".to_string());
    let address = args.next().unwrap_or_else(|| "user@email.com".to_string());

    let user = Email::create(address).map(|email| User::create(name, email));

    if user.is_failure() {
        println!("{}", user.error());
    } else {
        println!("{}", user.value());
    }
}
