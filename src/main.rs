use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use listdir::fs::list_dir;

fn main() -> ExitCode {
    let path = env::args_os().nth(1).unwrap_or_else(|| OsString::from("."));

    match list_dir(&path) {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("listdir: {error}");
            ExitCode::FAILURE
        }
    }
}
