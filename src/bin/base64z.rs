use std::process::ExitCode;

use basez::Base64z;

fn main() -> ExitCode {
    basez::cli::run::<Base64z>()
}
