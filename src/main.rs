use timelog::commands::Cli;
use timelog::msg_error;

fn main() {
    if let Err(error) = Cli::menu() {
        msg_error!(error);
        std::process::exit(1);
    }
}
