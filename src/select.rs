use crate::categories::{CategoryOptions, EMPTY_KEY};

/// A labeled dropdown over a fixed option table
///
/// The component holds no state of its own: the owner passes the current key
/// in and receives the newly chosen key through the change callback.
pub struct Select<'a> {
    label: &'a str,
    options: &'a CategoryOptions,
    value: &'a str,
}

impl<'a> Select<'a> {
    pub fn new(label: &'a str, options: &'a CategoryOptions, value: &'a str) -> Self {
        Self { label, options, value }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn value(&self) -> &str {
        self.value
    }

    /// Label of the current value, empty when it is not in the table
    pub fn selected_label(&self) -> &'static str {
        self.options.label_for(self.value).unwrap_or("")
    }

    /// Report a newly chosen key to the owner
    pub fn change<F>(&self, key: &str, on_change: F)
    where
        F: FnOnce(&str),
    {
        on_change(key);
    }

    /// Render the label line followed by one line per option
    pub fn render(&self) -> String {
        let mut out = format!("{}:\n", self.label);
        for (key, label) in self.options.iter() {
            let marker = if key == self.value { '>' } else { ' ' };
            let shown = if key == EMPTY_KEY { "(none)" } else { label };
            out.push_str(&format!("  {} {:<24} [{}]\n", marker, shown, key));
        }
        out
    }

    /// Single line summary used in the compact form view
    pub fn render_inline(&self) -> String {
        let shown = match self.selected_label() {
            "" => "(none)",
            label => label,
        };
        format!("{}: {}", self.label, shown)
    }
}
