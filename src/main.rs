use aiact::{cli::Cli, AiActError, CliHandler};
use std::process;

fn main() {
    env_logger::init();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                AiActError::RootNotFound(_) => 3,
                AiActError::InvalidArguments(_) => 2,
                AiActError::SerializationError(_) => 4,
                AiActError::DraftError(_) => 5,
                _ => 1,
            }
        }
    };

    process::exit(exit_code);
}
