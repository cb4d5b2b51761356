//! Opening fallback URLs in the user's browser.

use std::io;
use std::process::{Command, Stdio};

pub trait BrowserOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Escapes the characters `cmd.exe` treats as operators.
fn escape_for_cmd(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '^' | '&' | '|' | '<' | '>') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

/// Program and arguments that hand `url` to the platform opener.
fn opener_command(platform: Platform, url: &str) -> (&'static str, Vec<String>) {
    match platform {
        Platform::MacOs => ("open", vec![url.to_string()]),
        // Empty title argument so `start` does not treat the URL as one.
        Platform::Windows => (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                escape_for_cmd(url),
            ],
        ),
        Platform::Unix => ("xdg-open", vec![url.to_string()]),
    }
}

/// Hands the URL to the platform's default opener.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        let (program, args) = opener_command(Platform::current(), url);

        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("browser opener exited with {status}")))
        }
    }
}
