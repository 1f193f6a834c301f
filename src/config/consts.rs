// src/config/consts.rs

// Option defaults
pub const DEFAULT_PAGINATION_ENABLED: bool = true;
pub const DEFAULT_PAGE_LIMIT: usize = 20;
pub const DEFAULT_BUTTON_CLASS: &str = "primary";
pub const DEFAULT_BUTTON_TEXT: &str = "Cerca";
pub const DEFAULT_SELECT_CLASS: &str = "form-select";
pub const DEFAULT_FIRST_ITEM: &str = "Scegli ";

// Card markup
pub const DATA_PREFIX: &str = "data-";

// Pagination window
pub const WINDOW_THRESHOLD: usize = 10; // page counts at or above this get a window
pub const WINDOW_WIDTH: usize = 6;

// Date labels
pub const INVALID_DATE: &str = "Invalid Date";

// Rendered markup classes
pub const PANEL_CLASS: &str = "filter-container";
pub const PANEL_ROW_CLASS: &str = "row";
pub const FILTER_CELL_CLASS: &str = "col-12 col-lg filter";
pub const BUTTON_CELL_CLASS: &str = "col-12 offset-md-6 offset-lg-0 col-lg butt-action";
pub const SELECT_EXTRA_CLASS: &str = "me-3 mb-3";
pub const CONTAINER_OLD_CLASS: &str = "row";
pub const CONTAINER_CLASS: &str = "row-pages";
pub const PAGE_CLASS: &str = "page pagetab";
pub const PAGE_SHOWN_CLASS: &str = "show";
pub const NAV_CLASS: &str = "pagination__wrapper";
pub const NAV_LIST_CLASS: &str = "pagination ms-0 mb-4";
pub const NAV_ITEM_CLASS: &str = "page-item";
pub const NAV_ITEM_ACTIVE_CLASS: &str = "active";
pub const NAV_LINK_CLASS: &str = "page-link";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
