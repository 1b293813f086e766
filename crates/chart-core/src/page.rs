// File: crates/chart-core/src/page.rs
// Summary: Dashboard page glue: mount points for charts and the sidebar view state.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ChartError, Result};
use crate::scene::escape_xml;

/// Sidebar visibility. Collapsed means the sidebar is hidden behind the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Open,
    Collapsed,
}

/// UI affordances that drive the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarIntent {
    /// The collapse trigger was clicked.
    Collapse,
    /// The dismiss button was clicked.
    Dismiss,
    /// The overlay itself was clicked.
    OverlayClick,
}

impl SidebarState {
    /// Pure transition; presentation applies the resulting classes.
    pub fn transition(self, intent: SidebarIntent) -> Self {
        match intent {
            SidebarIntent::Collapse => SidebarState::Collapsed,
            SidebarIntent::Dismiss | SidebarIntent::OverlayClick => SidebarState::Open,
        }
    }

    /// Class carried by the sidebar element, if any.
    pub fn sidebar_class(self) -> Option<&'static str> {
        match self {
            SidebarState::Open => None,
            SidebarState::Collapsed => Some("inactive"),
        }
    }

    /// Class carried by the overlay element, if any.
    pub fn overlay_class(self) -> Option<&'static str> {
        match self {
            SidebarState::Open => None,
            SidebarState::Collapsed => Some("active"),
        }
    }
}

/// Opaque handle to a container on the page. Clones share the same slot.
#[derive(Clone, Debug)]
pub struct MountPoint {
    id: String,
    slot: Arc<Mutex<Option<String>>>,
}

impl MountPoint {
    fn new(id: String) -> Self {
        Self { id, slot: Arc::new(Mutex::new(None)) }
    }

    pub fn id(&self) -> &str { &self.id }

    /// Replace the container's document.
    pub fn present(&self, document: String) {
        *self.lock() = Some(document);
    }

    /// Latest document presented to this container.
    pub fn snapshot(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // a panicking presenter cannot leave a half-written String behind
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A page with a fixed set of chart containers and a sidebar.
#[derive(Debug, Default)]
pub struct Page {
    title: String,
    mounts: BTreeMap<String, MountPoint>,
    sidebar: SidebarState,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Register a container id (leading `#` is ignored).
    pub fn with_container(mut self, id: &str) -> Self {
        let id = normalize(id);
        self.mounts.entry(id.clone()).or_insert_with(|| MountPoint::new(id));
        self
    }

    /// Resolve a container; fails fast when the id is not on the page.
    pub fn mount(&self, id: &str) -> Result<MountPoint> {
        let key = normalize(id);
        self.mounts
            .get(&key)
            .cloned()
            .ok_or(ChartError::RenderTargetMissing(key))
    }

    pub fn sidebar(&self) -> SidebarState { self.sidebar }

    pub fn apply(&mut self, intent: SidebarIntent) -> SidebarState {
        self.sidebar = self.sidebar.transition(intent);
        self.sidebar
    }

    /// Render the dashboard document with every container's latest chart.
    pub fn to_html(&self) -> String {
        let class_attr = |c: Option<&str>, base: &str| match c {
            Some(c) => format!(r#" class="{base} {c}""#),
            None => format!(r#" class="{base}""#),
        };
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
        out.push_str(&format!("<title>{}</title></head><body>\n", escape_xml(&self.title)));
        out.push_str(&format!(
            "<nav id=\"sidebar\"{}><button id=\"dismiss\">&times;</button></nav>\n",
            class_attr(self.sidebar.sidebar_class(), "sidebar")
        ));
        out.push_str(&format!("<div{}></div>\n", class_attr(self.sidebar.overlay_class(), "overlay")));
        out.push_str("<main><button id=\"sidebarCollapse\">&#9776;</button>\n");
        for (id, mount) in &self.mounts {
            out.push_str(&format!("<div id=\"{}\">", escape_xml(id)));
            if let Some(doc) = mount.snapshot() {
                out.push_str(&doc);
            }
            out.push_str("</div>\n");
        }
        out.push_str("</main></body></html>\n");
        out
    }
}

fn normalize(id: &str) -> String {
    id.trim().trim_start_matches('#').to_string()
}
