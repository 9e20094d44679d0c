//! Desktop entrypoint for the playground editor.

use std::fmt::Display;

/// Maps the app's outcome to a process exit code, reporting failures on stderr.
fn exit_code<E: Display>(outcome: Result<(), E>) -> i32 {
    if let Err(err) = outcome {
        eprintln!("playground failed: {}", err);
        return 1;
    }
    0
}

fn main() {
    let code = exit_code(playground::run());
    if code != 0 {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::exit_code;

    #[test]
    fn failed_run_exits_non_zero() {
        assert_eq!(exit_code(Ok::<(), String>(())), 0);
        assert_eq!(exit_code(Err("window creation failed")), 1);
    }
}
