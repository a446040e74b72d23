//! lifepulse main entrypoint.

use lifepulse::run;
use lifepulse::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
