//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::stderr;

/// Check if stderr is connected to a terminal (status messages go there)
pub fn stderr_is_terminal() -> bool {
    stderr().is_terminal()
}

/// Detect if running in a CI environment
pub fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "TRAVIS",
        "CIRCLECI",
        "BUILDKITE",
        "DRONE",
        "TEAMCITY_VERSION",
        "TF_BUILD", // Azure DevOps
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}

/// Whether the user opted out of colors via `NO_COLOR`
pub fn no_color_requested() -> bool {
    env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Decide whether stderr messages should be colored
pub fn should_colorize(color_enabled: bool) -> bool {
    color_decision(
        color_enabled,
        stderr_is_terminal(),
        is_ci_environment(),
        no_color_requested(),
    )
}

// CI runners may allocate a TTY without anyone watching it
fn color_decision(color_enabled: bool, is_tty: bool, in_ci: bool, no_color: bool) -> bool {
    color_enabled && is_tty && !in_ci && !no_color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_detection() {
        // Values depend on the environment; only check nothing panics
        let _ = stderr_is_terminal();
        let _ = is_ci_environment();
        let _ = no_color_requested();
        let _ = should_colorize(true);
    }

    #[test]
    fn test_color_decision() {
        assert!(color_decision(true, true, false, false));
        assert!(!color_decision(false, true, false, false));
        assert!(!color_decision(true, false, false, false));
        assert!(!color_decision(true, true, true, false));
        assert!(!color_decision(true, true, false, true));
    }

    #[test]
    fn test_color_disabled_in_config_wins() {
        assert!(!should_colorize(false));
    }
}
