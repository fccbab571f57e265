use std::fs;
use std::path::Path;

const BANNER: [&str; 5] = [
    r"//  ____  ____     __        __    __  __           _",
    r"// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __",
    r"// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|",
    r"// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |",
    r"// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|",
];

#[test]
fn test_source_banners_match() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut checked = 0;
    for entry in fs::read_dir(&src).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap();
        let head: Vec<&str> = content.lines().take(5).map(str::trim_end).collect();
        assert_eq!(head, BANNER, "banner mismatch in {}", path.display());
        checked += 1;
    }
    assert!(checked >= 9);
}
