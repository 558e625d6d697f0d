//! Exit code constants for the chartwire CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown component, duplicate registration)
//! - 2: Installer config could not be read, parsed or validated
//! - 3: A chart configuration could not be constructed during a render pass

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid registry usage.
pub const USER_ERROR: i32 = 1;

/// Config failure: unreadable file, malformed YAML, or invalid values.
pub const CONFIG_FAILURE: i32 = 2;

/// Render failure: a provider or its value overrides failed to construct.
pub const RENDER_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, RENDER_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
