//! Machine identifier acquisition.
//!
//! Returns a stable string identifying the host, preferring the platform
//! machine id (survives reboots and usually reinstalls) and falling back
//! to a composite of host attributes. The raw identifier is never stored
//! or transmitted; callers hash it with the keyed digest before it goes
//! anywhere.

use std::env;

/// Returns this host's stable machine identifier, or `None` if no
/// identifying source is available at all.
#[must_use]
pub fn current_machine_id() -> Option<String> {
    if let Some(id) = platform_machine_id() {
        let id = id.trim().to_string();
        if !id.is_empty() {
            return Some(id);
        }
    }

    composite_machine_id()
}

/// Composite fallback: hostname, user, OS, and architecture. Less stable
/// than the platform id (renaming the host changes it) but available
/// everywhere.
fn composite_machine_id() -> Option<String> {
    let host = get_hostname()?;
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_default();
    Some(format!(
        "{host}|{user}|{}|{}",
        env::consts::OS,
        env::consts::ARCH
    ))
}

fn get_hostname() -> Option<String> {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .filter(|h| !h.is_empty())
}

/// Platform-specific unique machine identifier.
fn platform_machine_id() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        // /etc/machine-id first, dbus location as fallback
        std::fs::read_to_string("/etc/machine-id")
            .or_else(|_| std::fs::read_to_string("/var/lib/dbus/machine-id"))
            .ok()
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("ioreg")
            .args(["-rd1", "-c", "IOPlatformExpertDevice"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| {
                output
                    .lines()
                    .find(|l| l.contains("IOPlatformUUID"))
                    .and_then(|l| l.split('"').nth(3))
                    .map(String::from)
            })
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("reg")
            .args([
                "query",
                r"HKLM\SOFTWARE\Microsoft\Cryptography",
                "/v",
                "MachineGuid",
            ])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| {
                output
                    .split_whitespace()
                    .last()
                    .map(str::to_string)
            })
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}
