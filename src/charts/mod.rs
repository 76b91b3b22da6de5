//! Charts module - Chart binding core

mod binding;
mod colors;
mod pie;
mod series;


pub use binding::{format_tooltip, ChartBinding, Surface};
pub use colors::{sample_colors, ChannelRange, DEFAULT_ALPHA, DEFAULT_CHANNEL_RANGE};
pub use pie::{BreakdownAction, BreakdownChart};
pub use series::{BindingError, ChartKind, Series};
