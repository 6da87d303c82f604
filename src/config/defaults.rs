use std::path::PathBuf;

use crate::collapse::HeadingLevel;

pub fn default_source() -> PathBuf {
    PathBuf::from("./")
}

pub fn default_destination() -> PathBuf {
    PathBuf::from("./_site")
}

pub fn default_base_url() -> String {
    String::new()
}

pub fn default_include() -> Vec<HeadingLevel> {
    HeadingLevel::all().to_vec()
}

pub fn default_lists() -> bool {
    true
}
