//! Tab management module
//!
//! - `registry` - tab list, keys, titles and tab -> view mapping
//! - `page` - TabPage wrapper hiding inactive tabs
//! - `tab_bar` - navigation buttons

pub mod page;
pub mod registry;
pub mod tab_bar;

pub use page::TabPage;
pub use registry::AppTab;
pub use tab_bar::TabBar;
