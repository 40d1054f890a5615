//! `bqurl params` – list the parameter vocabulary.

use bqurl_core::params::PARAMS;
use bqurl_core::translate::{ARRAYSIZE, CREDENTIALS_PATH, LOCATION};

pub fn run_params() {
    println!("{:<40} {}", "PARAMETER", "HANDLING");
    for name in [LOCATION, ARRAYSIZE, CREDENTIALS_PATH] {
        println!("{:<40} connection", name);
    }
    for spec in PARAMS {
        println!("{:<40} {}", spec.name, spec.policy.label());
    }
}
