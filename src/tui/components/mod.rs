//! Widgets composing the catalog screen.

pub mod detail;
pub mod highlight;
pub mod prompt;
pub mod rows;
pub mod scrollbar;
pub mod select;
pub mod suggestions;
pub mod tables;

pub use detail::render_detail;
pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::build_product_rows;
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use select::{SelectContext, SelectOption, brand_options, category_options, cycle, render_select};
pub use suggestions::{popup_area, render_suggestions};
pub use tables::{TableSpec, product_column_widths, render_message, render_table, visible_rows};
