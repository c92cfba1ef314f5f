//! `jz_gpio` binary: parse the command line, map the controller, run.

use std::io;
use std::process::ExitCode;

use jz_gpio::cli::{Invocation, USAGE};
use jz_gpio::{Config, DevMem, Error};

fn report(err: &Error) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err.exit_code() as u8)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = match Invocation::parse(std::env::args().skip(1)) {
        Ok(Invocation::Usage) => {
            print!("{USAGE}");
            return ExitCode::from(1);
        }
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(invocation) => invocation,
        Err(err) => return report(&err),
    };

    let mut regs = match DevMem::open(&Config::from_env()) {
        Ok(regs) => regs,
        Err(err) => return report(&err),
    };

    match invocation.run(&mut regs, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}
