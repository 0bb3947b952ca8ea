//! Shared fixtures.
use std::path::{Path, PathBuf};

/// Four pages of the Nam Hoa Kinh, as `pdftotext` would extract them.
pub const PAGES: [&str; 4] = [
    "TRANG TỬ - NAM HOA KINH\nLời giới thiệu của dịch giả về bộ sách.\n\n1",
    "TIÊU DIÊU DU\n\n北冥有魚，其名為鯤。\n\nBiển Bắc có loài cá,\ntên là Côn.\n\n鯤之大，不知其幾千里也。\n\nCá Côn lớn không biết mấy nghìn dặm.\n\nTrang 2",
    "化而為鳥，其名為鵬。\n\nHóa thành chim, tên là Bằng.\n\n3",
    "Tề Vật Luận\n\n南郭子綦隱机而坐。\n\nNam Quách Tử Kỳ ngồi tựa ghế.\n\nTrang 4",
];

/// Offline NER predictions for some of the Vietnamese sentences.
pub const PREDICTIONS: &str = r#"{"text": "Biển Bắc có loài cá, tên là Côn.", "entities": [{"start": 0, "end": 8, "word": "Biển Bắc", "entity_group": "LOC"}, {"start": 28, "end": 31, "word": "Côn", "entity_group": "MISC"}]}
{"text": "Nam Quách Tử Kỳ ngồi tựa ghế.", "entities": [{"start": 0, "end": 9, "word": "Nam Quách", "entity": "B-PER"}, {"start": 10, "end": 15, "word": "Tử Kỳ", "entity": "I-PER"}]}
"#;

/// Writes the pages as a form-feed separated file in `dir`.
pub fn book_file(dir: &Path) -> PathBuf {
    let path = dir.join("nam_hoa_kinh.txt");
    let mut content = PAGES.join("\u{c}");
    content.push('\u{c}');
    std::fs::write(&path, content).unwrap();
    path
}

pub fn predictions_file(dir: &Path) -> PathBuf {
    let path = dir.join("entities.jsonl");
    std::fs::write(&path, PREDICTIONS).unwrap();
    path
}
