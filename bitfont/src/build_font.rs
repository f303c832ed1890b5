use crate::{
    compile::{compile_font, CompiledFont},
    error::{FontError, FontResult},
};
use log::{debug, info};
use std::{fs, path::Path};

/// Compiles the glyph source at `font_path` and writes the packed data to `output_path`.
///
/// The source is read and compiled in full before the output is created, so a failed build never
/// leaves a partially written file behind.
pub fn build_font(font_path: &Path, output_path: &Path) -> FontResult<CompiledFont> {
    info!("Reading font source '{}'...", font_path.display());
    let src = fs::read_to_string(font_path)
        .map_err(|source| FontError::InputNotFound { path: font_path.to_path_buf(), source })?;
    debug!("Read {} bytes of glyph source", src.len());

    info!("Compiling bitmap rows...");
    let font = compile_font(&src)?;

    info!("Writing {} bytes to '{}'...", font.data().len(), output_path.display());
    fs::write(output_path, font.data()).map_err(|source| FontError::OutputWriteFailure {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_one_byte_per_row() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("hankaku.txt");
        let output_path = dir.path().join("font.out");
        fs::write(&font_path, "0x41 'A'\n.***.....\n*...*...\n").unwrap();

        let font = build_font(&font_path, &output_path).unwrap();
        assert_eq!(font.skipped_rows(), 1);
        assert_eq!(fs::read(&output_path).unwrap(), vec![0xE0, 0x88]);
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("font.txt");
        let output_path = dir.path().join("font.out");
        fs::write(&font_path, "********\n").unwrap();
        fs::write(&output_path, [1, 2, 3, 4]).unwrap();

        build_font(&font_path, &output_path).unwrap();
        assert_eq!(fs::read(&output_path).unwrap(), vec![0xFF]);
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("missing.txt");
        let output_path = dir.path().join("font.out");

        let err = build_font(&font_path, &output_path).unwrap_err();
        assert!(matches!(err, FontError::InputNotFound { ref path, .. } if path == &font_path));
        assert!(!output_path.exists());
    }

    #[test]
    fn compile_errors_leave_output_untouched() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("font.txt");
        let output_path = dir.path().join("font.out");
        fs::write(&font_path, "********\n*********\n").unwrap();

        let err = build_font(&font_path, &output_path).unwrap_err();
        assert!(matches!(err, FontError::OversizedPattern { line: 2, .. }));
        assert!(!output_path.exists());

        fs::write(&output_path, [0xAB]).unwrap();
        build_font(&font_path, &output_path).unwrap_err();
        assert_eq!(fs::read(&output_path).unwrap(), vec![0xAB]);
    }

    #[test]
    fn undecodable_source_is_reported() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("font.txt");
        let output_path = dir.path().join("font.out");
        fs::write(&font_path, [0xFF, 0x2A]).unwrap();

        let err = build_font(&font_path, &output_path).unwrap_err();
        assert!(matches!(err, FontError::InputNotFound { ref path, .. } if path == &font_path));
        assert!(!output_path.exists());
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("font.txt");
        let output_path = dir.path().join("no_such_dir").join("font.out");
        fs::write(&font_path, "*.\n").unwrap();

        let err = build_font(&font_path, &output_path).unwrap_err();
        assert!(matches!(err, FontError::OutputWriteFailure { .. }));
    }
}
