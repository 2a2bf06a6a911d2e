//! Write-only clipboard access.

use anyhow::{anyhow, Context, Result};
use std::sync::Mutex;

/// Destination for copied results.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
///
/// On X11 and Wayland the copied text is served only while the handle is
/// alive, so one handle is opened up front and kept for the process lifetime.
pub struct SystemClipboard {
    handle: Mutex<arboard::Clipboard>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    /// Clipboard for a long-running process such as the shell.
    pub fn new() -> Result<Self> {
        Ok(Self {
            handle: Mutex::new(arboard::Clipboard::new().context("Failed to open system clipboard")?),
            hold_until_replaced: false,
        })
    }

    /// Clipboard for a process that exits right after copying.
    ///
    /// On Linux each write blocks until another application takes over the
    /// selection.
    pub fn one_shot() -> Result<Self> {
        Ok(Self {
            hold_until_replaced: true,
            ..Self::new()?
        })
    }

    /// Whether writes block until the selection is replaced.
    pub fn holds_until_replaced(&self) -> bool {
        cfg!(target_os = "linux") && self.hold_until_replaced
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;

        #[cfg(target_os = "linux")]
        if self.hold_until_replaced {
            use arboard::SetExtLinux;
            return handle
                .set()
                .wait()
                .text(text.to_string())
                .context("Failed to write to system clipboard");
        }

        handle
            .set_text(text.to_string())
            .context("Failed to write to system clipboard")
    }
}

/// In-process clipboard holding the last copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    last: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut last = self
            .last
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        *last = Some(text.to_string());
        Ok(())
    }
}
