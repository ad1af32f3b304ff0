// SPDX-License-Identifier: PMPL-1.0-or-later

//! CV download action.

use crate::i18n::Lang;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory the CV PDFs are served from.
pub const PUBLIC_ROOT: &str = "public";

pub const ENGLISH_CV: &str = "CV_Jose_Manuel_Ortega_English.pdf";
pub const SPANISH_CV: &str = "CV_Jose_Manuel_Ortega_Spanish.pdf";

/// File name of the CV for a language. Anything but English gets the Spanish CV.
pub fn cv_file_name(lang: Lang) -> &'static str {
    match lang {
        Lang::En => ENGLISH_CV,
        _ => SPANISH_CV,
    }
}

/// Copy the asset at `source` into `download_dir`, keeping its file name.
///
/// Fire-and-forget: the asset is not checked beforehand and a failed copy
/// is only logged. Returns the written path on success.
pub fn perform_download(source: &Path, download_dir: &Path) -> Option<PathBuf> {
    let Some(file_name) = source.file_name() else {
        tracing::warn!(source = %source.display(), "CV source has no file name");
        return None;
    };
    let target = download_dir.join(file_name);

    let result = fs::create_dir_all(download_dir).and_then(|_| fs::copy(source, &target));
    match result {
        Ok(bytes) => {
            tracing::info!(
                source = %source.display(),
                target = %target.display(),
                bytes,
                "CV downloaded"
            );
            Some(target)
        }
        Err(err) => {
            tracing::warn!(source = %source.display(), error = %err, "CV download failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_follows_language() {
        assert_eq!(cv_file_name(Lang::En), "CV_Jose_Manuel_Ortega_English.pdf");
        assert_eq!(cv_file_name(Lang::Es), "CV_Jose_Manuel_Ortega_Spanish.pdf");
    }

    #[test]
    fn copies_asset_into_download_dir() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        fs::write(assets.path().join(SPANISH_CV), b"%PDF-1.4").unwrap();

        let target = downloads.path().join("nested");
        let written =
            perform_download(&assets.path().join(SPANISH_CV), &target).expect("copied");
        assert_eq!(written, target.join(SPANISH_CV));
        assert_eq!(fs::read(written).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn missing_asset_is_silent() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        assert!(perform_download(&assets.path().join(ENGLISH_CV), downloads.path()).is_none());
        assert!(perform_download(Path::new(""), downloads.path()).is_none());
    }
}
