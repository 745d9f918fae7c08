pub mod labels;
pub mod widgets;
