//! Tab strip hosting the canvas and plugin surfaces.

use std::fmt;

/// Label of the canvas tab, always the first one.
pub const CANVAS_TAB_LABEL: &str = "Core (2D)";

/// What a tab shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabId {
    Canvas,
    Plugin(String),
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabId::Canvas => f.write_str("canvas"),
            TabId::Plugin(name) => write!(f, "plugin:{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
}

/// Container the plugin registry attaches surfaces to.
pub trait TabHost {
    /// Append a tab and return its index.
    fn add_tab(&mut self, id: TabId, label: String) -> usize;

    fn index_of(&self, id: &TabId) -> Option<usize>;

    /// Remove the tab at `index`. The canvas tab cannot be removed.
    fn remove_tab(&mut self, index: usize) -> Option<Tab>;

    fn count(&self) -> usize;
}

/// Ordered tabs with a current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    current: usize,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStrip {
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab {
                id: TabId::Canvas,
                label: CANVAS_TAB_LABEL.to_string(),
            }],
            current: 0,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Tab {
        &self.tabs[self.current]
    }

    pub fn is_canvas_current(&self) -> bool {
        self.current().id == TabId::Canvas
    }

    pub fn set_current(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Make the tab with `id` current. Returns `false` if it is not attached.
    pub fn select(&mut self, id: &TabId) -> bool {
        match self.index_of(id) {
            Some(index) => self.set_current(index),
            None => false,
        }
    }
}

impl TabHost for TabStrip {
    fn add_tab(&mut self, id: TabId, label: String) -> usize {
        self.tabs.push(Tab { id, label });
        self.tabs.len() - 1
    }

    fn index_of(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == id)
    }

    fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() || self.tabs[index].id == TabId::Canvas {
            return None;
        }
        let tab = self.tabs.remove(index);
        if self.current > index || self.current >= self.tabs.len() {
            self.current -= 1;
        }
        Some(tab)
    }

    fn count(&self) -> usize {
        self.tabs.len()
    }
}

/// First character upper case, the rest lower case.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
