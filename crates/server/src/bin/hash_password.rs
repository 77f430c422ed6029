//! Print a `[[users]]` entry for `config.toml`.
//!
//! Usage: `hash-password <email> <password> [full name] [role,role,...]`

use server::config::seed_entry;
use shared_types::{Role, SeedUser};

const USAGE: &str = "usage: hash-password <email> <password> [full name] [role,role,...]";

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(2);
}

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        fail(USAGE);
    };
    let full_name = args.next().unwrap_or_else(|| email.clone());
    let roles = match args.next() {
        Some(list) => Role::parse_role_list(&list)
            .unwrap_or_else(|bad| fail(&format!("unknown role {bad:?}\n{USAGE}"))),
        None => vec![Role::Patient],
    };

    let password_hash = match server::password::hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("{}", e.message);
            std::process::exit(1);
        }
    };

    let user = SeedUser {
        email,
        full_name,
        password_hash,
        active_role: roles.first().copied(),
        roles,
    };
    match seed_entry(&user) {
        Ok(entry) => print!("{entry}"),
        Err(e) => {
            eprintln!("failed to render entry: {e}");
            std::process::exit(1);
        }
    }
}
