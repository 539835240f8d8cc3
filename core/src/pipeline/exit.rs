/// Collapse an [`std::process::ExitStatus`] into a single exit code.
///
/// On Unix a signal death maps to the conventional `128 + signal`.
pub fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn plain_exit_codes_pass_through() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        // Wait status encodes the exit code in the high byte.
        assert_eq!(normalize_exit(ExitStatus::from_raw(0)), 0);
        assert_eq!(normalize_exit(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(normalize_exit(ExitStatus::from_raw(255 << 8)), 255);
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_maps_to_128_plus_signal() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        // Raw wait status for "killed by signal N" is N itself.
        assert_eq!(normalize_exit(ExitStatus::from_raw(9)), 137);
        assert_eq!(normalize_exit(ExitStatus::from_raw(15)), 143);
    }
}
