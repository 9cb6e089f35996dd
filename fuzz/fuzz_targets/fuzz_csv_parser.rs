#![no_main]

use libfuzzer_sys::fuzz_target;
use trajectory_editor::{parse_csv_str, CsvOptions, TrackBoundaries, Trajectory};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let table = parse_csv_str(content);
    let options = CsvOptions::default();

    if let Ok(trajectory) = Trajectory::from_csv_rows(&table, &options) {
        let _ = trajectory.to_csv_rows();
    }
    let mut boundaries = TrackBoundaries::new();
    let _ = boundaries.load_from_rows(&table, &options);
});
