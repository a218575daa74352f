//! Seams to the collaborators the table talks to: the signed-in session,
//! navigation and the clipboard. The table never reaches for any of these
//! through globals; callers hand them in.

use eframe::egui;
use tracing::debug;
use url::Url;

use crate::error::{ClipboardError, NavigationError};
use crate::links::DeepLink;
use crate::models::ViewerIdentity;

pub trait SessionProvider {
    fn current_viewer_identity(&self) -> Option<ViewerIdentity>;
}

pub trait Navigator {
    fn link_for(&self, query: &[(&str, &str)]) -> DeepLink;
    fn follow(&mut self, link: &DeepLink) -> Result<(), NavigationError>;
}

pub trait ClipboardWriter {
    fn write_text(&mut self, value: &str) -> Result<(), ClipboardError>;
}

/// Session fixed for the lifetime of the window.
#[derive(Clone, Debug, Default)]
pub struct StaticSession {
    viewer: Option<ViewerIdentity>,
}

impl StaticSession {
    pub fn new(viewer: Option<ViewerIdentity>) -> Self {
        StaticSession { viewer }
    }

    pub fn from_email(email: Option<&str>) -> Self {
        let viewer = email
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(|email| ViewerIdentity { email: email.to_string() });
        StaticSession { viewer }
    }
}

impl SessionProvider for StaticSession {
    fn current_viewer_identity(&self) -> Option<ViewerIdentity> {
        self.viewer.clone()
    }
}

/// Opens links through the egui output, which the host turns into a browser visit.
#[derive(Clone)]
pub struct EguiNavigator {
    ctx: egui::Context,
    base: Url,
}

impl EguiNavigator {
    pub fn new(ctx: egui::Context, base: Url) -> Self {
        EguiNavigator { ctx, base }
    }
}

impl Navigator for EguiNavigator {
    fn link_for(&self, query: &[(&str, &str)]) -> DeepLink {
        DeepLink::with_query(&self.base, query)
    }

    fn follow(&mut self, link: &DeepLink) -> Result<(), NavigationError> {
        debug!(link = %link, "following deep link");
        self.ctx.open_url(egui::OpenUrl::same_tab(link.as_str()));
        Ok(())
    }
}

/// Copies through egui's platform output. egui gives no feedback, so writes
/// always report success.
#[derive(Clone)]
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        EguiClipboard { ctx }
    }
}

impl ClipboardWriter for EguiClipboard {
    fn write_text(&mut self, value: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(value.to_owned());
        Ok(())
    }
}

/// The OS clipboard, reporting real failures.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(SystemClipboard {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, value: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(value.to_owned())?;
        Ok(())
    }
}
