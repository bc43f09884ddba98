//! Placeholders shown while a section has no data yet

const BAR: &str = "░░░░░░░░";

pub fn points() -> String {
    format!("Available  {}\nExpiring within 7 days  {}", BAR, BAR)
}

pub fn product_cards(count: usize) -> String {
    (0..count)
        .map(|_| format!("{}  {}  {}", BAR, BAR, "░░░"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list(count: usize) -> String {
    vec![BAR; count].join("\n")
}
