use crate::models::Category;
use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red, ICON_ERR, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Style::new().bold().fg(Colour::Blue).paint(format!("=== {msg} ==="))
    );
}

/// Colour used for a category label in the history listing.
pub fn category_colour(category: Category) -> Colour {
    match category {
        Category::Mood => Colour::Purple,
        Category::Event => Colour::Cyan,
        Category::Health => Colour::Red,
        Category::Sleep => Colour::Blue,
        Category::Steps => Colour::Green,
    }
}

/// Category name padded to a fixed width, then coloured (padding outside
/// the escape codes keeps columns aligned).
pub fn category_label(category: Category) -> String {
    let name = category.as_str();
    format!(
        "{}{}",
        category_colour(category).paint(name),
        " ".repeat(6usize.saturating_sub(name.len()))
    )
}
