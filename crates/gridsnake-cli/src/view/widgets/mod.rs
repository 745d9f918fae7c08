pub use self::{key_binding_display::*, scene_display::*};

mod key_binding_display;
mod scene_display;
