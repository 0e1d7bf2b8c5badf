use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for a LaTeX-backed (pgf) figure backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgfConfig {
    #[serde(rename = "font.family")]
    pub font_family: String,
    #[serde(rename = "text.usetex")]
    pub text_usetex: bool,
    /// Whether the backend should derive fonts from its own rc settings.
    #[serde(rename = "pgf.rcfonts")]
    pub pgf_rcfonts: bool,
    #[serde(rename = "pgf.preamble")]
    pub pgf_preamble: Vec<String>,
}

/// A single rc parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RcValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
}

/// Serif text, LaTeX math, fonts taken from the preamble.
pub fn default_pgf_configuration() -> PgfConfig {
    PgfConfig {
        font_family: "serif".to_string(),
        text_usetex: true,
        pgf_rcfonts: false,
        pgf_preamble: vec![
            r"\usepackage{amsmath}".to_string(),
            r"\usepackage{siunitx}".to_string(),
            r"\usepackage[charter]{mathdesign}".to_string(),
            r"\usepackage{fontspec}".to_string(),
            r"\setmainfont{Oswald}".to_string(),
        ],
    }
}

impl Default for PgfConfig {
    fn default() -> Self {
        default_pgf_configuration()
    }
}

impl PgfConfig {
    /// Flat `key -> value` map keyed by rc parameter name.
    pub fn to_rc_params(&self) -> BTreeMap<String, RcValue> {
        let mut params = BTreeMap::new();
        params.insert("font.family".to_string(), RcValue::Str(self.font_family.clone()));
        params.insert("text.usetex".to_string(), RcValue::Bool(self.text_usetex));
        params.insert("pgf.rcfonts".to_string(), RcValue::Bool(self.pgf_rcfonts));
        params.insert("pgf.preamble".to_string(), RcValue::List(self.pgf_preamble.clone()));
        params
    }

    /// Preamble lines joined into a single LaTeX snippet.
    pub fn preamble_tex(&self) -> String {
        self.pgf_preamble.join("\n")
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
