use crate::resource::vertex_layout::VertexLayout;
use crate::engine::Engine;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity};
use serial_test::serial;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}

#[test]
fn test_position_normal_uv_stride() {
    let layout = VertexLayout::position_normal_uv();
    assert_eq!(layout.stride_floats(), 8);
    assert_eq!(layout.stride(), 32);
    assert_eq!(layout.len(), 3);
}

#[test]
fn test_attribute_offsets_are_interleaved() {
    let layout = VertexLayout::new(&[3, 3, 2]).unwrap();
    let attributes = layout.attributes();

    let offsets: Vec<u32> = attributes.iter().map(|a| a.offset).collect();
    assert_eq!(offsets, vec![0, 12, 24]);
    assert!(attributes.iter().all(|a| a.stride == 32 && a.divisor == 0));
    assert_eq!(attributes[2].location, 2);
    assert_eq!(attributes[2].components, 2);
}

#[test]
#[serial]
fn test_empty_layout_rejected() {
    assert!(matches!(VertexLayout::new(&[]), Err(Error::InvalidResource(_))));
}

#[test]
#[serial]
fn test_zero_component_entry_rejected() {
    assert!(VertexLayout::new(&[3, 0, 2]).is_err());
}

#[test]
#[serial]
fn test_five_component_entry_rejected() {
    assert!(VertexLayout::new(&[5]).is_err());
}

#[test]
#[serial]
fn test_too_many_attributes_rejected() {
    assert!(VertexLayout::new(&[1; 16]).is_ok());
    assert!(VertexLayout::new(&[1; 17]).is_err());
}

#[test]
#[serial]
fn test_rejected_layouts_log_an_error() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    assert!(VertexLayout::new(&[]).is_err());
    assert!(VertexLayout::new(&[3, 0, 2]).is_err());
    assert!(VertexLayout::new(&[1; 17]).is_err());
    Engine::reset_logger();

    let entries = entries.lock().unwrap();
    let rejections: Vec<&LogEntry> = entries
        .iter()
        .filter(|e| e.source == "prism3d::VertexArray" && e.message.starts_with("Invalid layout"))
        .collect();
    assert_eq!(rejections.len(), 3);
    assert!(rejections.iter().all(|e| e.severity == LogSeverity::Error));
    assert!(rejections[0].message.contains("empty"));
    assert!(rejections[1].message.contains("[3, 0, 2]"));
}
