/// Thematic break: a line of three or more identical `*`, `-` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MIN_LEN: usize = 3;
    pub const MARKERS: [char; 3] = ['*', '-', '_'];

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }
        t.len() >= Self::MIN_LEN && t.chars().all(|c| c == first)
    }
}
