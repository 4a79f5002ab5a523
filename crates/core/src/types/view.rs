use crate::impl_case_insensitive_deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the fixed action surfaces every model exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    List,
    Search,
    Show,
    Form,
    Edit,
    New,
}

impl_case_insensitive_deserialize!(
    View,
    List => "list",
    Search => "search",
    Show => "show",
    Form => "form",
    Edit => "edit",
    New => "new"
);

impl View {
    /// All views, in the order the normalizer visits them
    pub const ALL: [View; 6] = [
        View::List,
        View::Search,
        View::Show,
        View::Form,
        View::Edit,
        View::New,
    ];

    /// Views that render a form and accept design elements
    pub const FORMS: [View; 3] = [View::Form, View::Edit, View::New];

    /// Views that have a global (backend-wide) counterpart
    pub const GLOBAL: [View; 5] = [View::List, View::Search, View::Show, View::Edit, View::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::List => "list",
            View::Search => "search",
            View::Show => "show",
            View::Form => "form",
            View::Edit => "edit",
            View::New => "new",
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, View::Form | View::Edit | View::New)
    }

    /// Views whose fields are displayed rather than edited
    pub fn is_display(&self) -> bool {
        matches!(self, View::List | View::Search | View::Show)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(View::List),
            "search" => Ok(View::Search),
            "show" => Ok(View::Show),
            "form" => Ok(View::Form),
            "edit" => Ok(View::Edit),
            "new" => Ok(View::New),
            other => Err(format!("unknown view '{other}'")),
        }
    }
}
