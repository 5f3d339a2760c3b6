/// One record of the provisioning manifest.
#[derive(Debug, serde::Deserialize, serde::Serialize, Clone, PartialEq)]
pub struct DownloadEntry {
    pub url: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksums: Option<Vec<String>>,
}

pub type Manifest = Vec<DownloadEntry>;
