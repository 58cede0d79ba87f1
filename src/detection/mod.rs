//! Detection of dependency manifests beside rendered files.

pub mod manifest;

pub use manifest::{manifest_path_for, ManifestDetector, ManifestDiscovery, MANIFEST_FILE_NAME};
