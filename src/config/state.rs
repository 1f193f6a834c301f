// src/config/state.rs

/// Window-level GUI state that is not part of the widget itself.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Path text fields in the top bar
    pub source_path_text: String,
    pub options_path_text: String,

    /// Container selector; empty means the first element of the document
    pub container_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            source_path_text: s!(),
            options_path_text: s!(),
            container_text: s!(),
        }
    }
}
