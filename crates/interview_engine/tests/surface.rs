use std::fs;

use interview_engine::{
    ensure_output_dir, AtomicFileWriter, FileSurface, MemorySurface, PreviewSurface, HOST_FILE,
    PREVIEW_FILE,
};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("preview");
    ensure_output_dir(&dir).expect("dir created");
    assert!(dir.is_dir());
}

#[test]
fn output_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain");
    fs::write(&file, "x").unwrap();
    assert!(ensure_output_dir(&file).is_err());
}

#[test]
fn atomic_writer_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    writer.write("a.html", "first").unwrap();
    let path = writer.write("a.html", "second").unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "second");
}

#[test]
fn file_surface_writes_preview_and_sandboxed_host_page() {
    let temp = TempDir::new().unwrap();
    let surface = FileSurface::new(temp.path().join("out")).unwrap();

    surface.load("<p>hello</p>").unwrap();

    let preview = fs::read_to_string(surface.dir().join(PREVIEW_FILE)).unwrap();
    assert_eq!(preview, "<p>hello</p>");
    let host = fs::read_to_string(surface.host_page_path()).unwrap();
    assert!(host.contains("sandbox=\"allow-scripts allow-same-origin\""));
    assert!(host.contains("srcdoc=\"&lt;p&gt;hello&lt;/p&gt;\""));
    assert_eq!(surface.host_page_path(), surface.dir().join(HOST_FILE));
}

#[test]
fn file_surface_clear_replaces_all_content() {
    let temp = TempDir::new().unwrap();
    let surface = FileSurface::new(temp.path().to_path_buf()).unwrap();
    surface.load("<p>old</p>").unwrap();
    surface.clear().unwrap();

    assert_eq!(fs::read_to_string(surface.dir().join(PREVIEW_FILE)).unwrap(), "");
    let host = fs::read_to_string(surface.host_page_path()).unwrap();
    assert!(!host.contains("old"));
    assert!(host.contains("srcdoc=\"\""));
}

#[test]
fn memory_surface_clones_share_content() {
    let surface = MemorySurface::new();
    let observer = surface.clone();
    assert_eq!(observer.content(), None);

    surface.load("doc").unwrap();
    assert_eq!(observer.content().as_deref(), Some("doc"));
    surface.clear().unwrap();
    assert_eq!(observer.content(), None);
}
