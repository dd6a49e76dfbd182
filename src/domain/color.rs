use crate::domain::color::Color::{Hex, RGB};

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Color {
    RGB(u8, u8, u8),
    Hex(String),
}

impl Color {
    pub const GREEN: Color = RGB(0, 255, 0);
    pub const RED: Color = RGB(255, 0, 0);
    pub const WHITE: Color = RGB(255, 255, 255);

    pub fn to_hex(&self) -> String {
        match self {
            RGB(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Hex(value) => value.clone(),
        }
    }
}
