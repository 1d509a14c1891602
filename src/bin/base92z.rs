use std::process::ExitCode;

use basez::Base92z;

fn main() -> ExitCode {
    basez::cli::run::<Base92z>()
}
