pub(crate) const SETTINGS_VERSION: u32 = 1;
pub(crate) const SESSION_VERSION: u32 = 1;

pub(crate) const SETTINGS_KEY: &str = "sipjamalpuri.settings.v1";
pub(crate) const SESSION_KEY: &str = "sipjamalpuri.session.v1";
pub(crate) const PROGRESS_KEY_PREFIX: &str = "sipjamalpuri.progress.v1";

#[derive(Clone, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub(crate) struct SettingsBlob {
    pub(crate) version: u32,
    pub(crate) dark_mode: bool,
    pub(crate) show_hints: bool,
}

impl Default for SettingsBlob {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            dark_mode: false,
            show_hints: false,
        }
    }
}

#[derive(Clone, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub(crate) struct SessionRecord {
    pub(crate) version: u32,
    pub(crate) user_id: Option<String>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            user_id: None,
        }
    }
}
