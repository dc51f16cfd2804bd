use std::ffi::OsStr;
use std::process::Command;

use crate::errors::LaunchError;

/// Opens a link with the platform's default handler.
///
/// # Errors
///
/// Returns [`LaunchError`] if the opener process cannot be spawned.
pub fn open_external(target: impl AsRef<OsStr>) -> Result<(), LaunchError> {
    opener_command(target.as_ref()).spawn()?;
    Ok(())
}

fn opener_command(target: &OsStr) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("explorer");
        cmd.arg(target);
        cmd
    }
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    }
    #[cfg(all(not(target_os = "windows"), not(target_os = "macos")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    }
}

pub fn link_label(link: Option<&str>) -> &'static str {
    if link.is_some() {
        "Открыть ссылку"
    } else {
        "Нет ссылки"
    }
}
