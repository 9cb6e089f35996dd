#![no_main]

use libfuzzer_sys::fuzz_target;
use trajectory_editor::OsmDocument;

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(document) = OsmDocument::parse(xml) {
        let _ = document.extract_lanelet_boundaries();
    }
});
